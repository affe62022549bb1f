//! Multi-page builds.
//!
//! Renders share no state, so the catalogs of different pages are laid out
//! in parallel with Rayon. A defect on one page does not affect the others.

use rayon::prelude::*;

use crate::catalog::EntryCatalog;
use crate::error::RenderResult;
use crate::layout::section::Section;

/// A page name paired with the catalog shown on it.
#[derive(Debug, Clone)]
pub struct PageCatalog {
    pub page: String,
    pub catalog: EntryCatalog,
}

impl PageCatalog {
    pub fn new(page: impl Into<String>, catalog: EntryCatalog) -> Self {
        Self {
            page: page.into(),
            catalog,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PageRender {
    pub page: String,
    pub section: RenderResult<Section>,
}

/// Render every page's catalog. Output order matches input order.
pub fn render_pages(pages: &[PageCatalog]) -> Vec<PageRender> {
    let start = std::time::Instant::now();

    let results: Vec<PageRender> = pages
        .par_iter()
        .map(|page| PageRender {
            page: page.page.clone(),
            section: crate::render_feature_section(page.catalog.entries()),
        })
        .collect();

    let failed = results.iter().filter(|r| r.section.is_err()).count();
    tracing::info!(
        "Rendered {} pages in {:?} ({} failed)",
        results.len(),
        start.elapsed(),
        failed
    );

    results
}
