//! Authored catalog files.
//!
//! A catalog is authored as JSON:
//!
//! ```json
//! { "entries": [
//!     { "title": "Comprehensive Dashboard",
//!       "image": "@site/static/img/screenshot1.png",
//!       "description": "AURCache provides a **comprehensive** dashboard." }
//! ] }
//! ```
//!
//! Fields are optional at the serde level so that an omitted field is
//! reported as a malformed entry with its index instead of a parse error.

use std::path::Path;

use serde::Deserialize;

use crate::catalog::assets::AssetResolver;
use crate::catalog::rich_text::RichText;
use crate::catalog::types::{EntryCatalog, FeatureEntry};
use crate::error::{FieldName, RenderError};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file")]
    Io(#[from] std::io::Error),

    #[error("catalog is not valid JSON")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Entry(#[from] RenderError),
}

/// One entry as written by the author, before asset resolution.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntrySource {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Unresolved catalog as loaded from disk.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSource {
    #[serde(default)]
    pub entries: Vec<EntrySource>,
}

impl CatalogSource {
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Resolve image references and build the immutable catalog.
    ///
    /// Stops at the first defective entry; nothing is returned for a
    /// catalog with any defect.
    pub fn resolve<R>(&self, resolver: &R) -> Result<EntryCatalog, CatalogError>
    where
        R: AssetResolver + ?Sized,
    {
        let mut entries = Vec::with_capacity(self.entries.len());

        for (index, source) in self.entries.iter().enumerate() {
            let entry = resolve_entry(index, source, resolver).map_err(|e| {
                tracing::warn!("Rejected catalog: {}", e);
                e
            })?;
            entries.push(entry);
        }

        tracing::debug!("Resolved catalog with {} entries", entries.len());
        Ok(EntryCatalog::new(entries))
    }
}

fn resolve_entry<R>(index: usize, source: &EntrySource, resolver: &R) -> Result<FeatureEntry, RenderError>
where
    R: AssetResolver + ?Sized,
{
    let missing = |field| RenderError::MalformedEntry { index, field };

    // Fields are checked title, image, description so that the reported
    // defect matches `FeatureEntry::validate`.
    let title = source
        .title
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| missing(FieldName::Title))?;

    let reference = source
        .image
        .as_deref()
        .filter(|r| !r.trim().is_empty())
        .ok_or_else(|| missing(FieldName::Image))?;
    let image = resolver.resolve(reference).ok_or_else(|| RenderError::AssetUnresolved {
        index,
        reference: reference.to_string(),
    })?;

    let description = source
        .description
        .as_deref()
        .map(RichText::from_markdown)
        .filter(|d| !d.is_blank())
        .ok_or_else(|| missing(FieldName::Description))?;

    Ok(FeatureEntry::new(title, image, description))
}
