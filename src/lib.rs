//! Homepage Features
//!
//! Lays out a catalog of feature entries (title, screenshot, description) as
//! alternating left/right rows inside one section, for the project's
//! documentation homepage.
//!
//! Module structure:
//! - `catalog/`: feature entries, rich-text descriptions, JSON loading, asset resolution
//! - `layout/`: alternation engine, section wrapper, markup tree, multi-page renders
//! - `formatters/`: host-side HTML, Markdown and JSON output of a section
//!
//! The layout is a pure function of the catalog: rendering the same catalog
//! twice yields identical sections.

pub mod catalog;
pub mod error;
pub mod formatters;
pub mod layout;

// Re-export commonly used types
pub use catalog::{EntryCatalog, FeatureEntry, ImageRef, RichText};
pub use error::{FieldName, RenderError, RenderResult};
pub use layout::{render_pages, wrap, LayoutEngine, Node, Row, Section, Side};

/// Render a catalog into a wrapped, side-tagged section.
///
/// Fails with [`RenderError::MalformedEntry`] on the first entry that is
/// missing a field; no partial section is ever returned.
pub fn render_feature_section(entries: &[FeatureEntry]) -> RenderResult<Section> {
    let rows = LayoutEngine::new().render(entries).map_err(|e| {
        tracing::warn!("Rejected catalog of {} entries: {}", entries.len(), e);
        e
    })?;
    tracing::debug!("Laid out {} feature rows", rows.len());
    Ok(wrap(rows))
}
