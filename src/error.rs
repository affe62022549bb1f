//! Error types for catalog validation and rendering.
//!
//! Both variants are authoring-time defects: they halt the render for the
//! whole catalog and carry enough context (entry index, field) for the
//! author to fix the content.

use std::fmt;

/// A required field of a feature entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Title,
    Image,
    Description,
}

impl FieldName {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Title => "title",
            FieldName::Image => "image",
            FieldName::Description => "description",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("feature entry {index} is missing its {field}")]
    MalformedEntry { index: usize, field: FieldName },

    #[error("feature entry {index} references an unresolved image: {reference:?}")]
    AssetUnresolved { index: usize, reference: String },
}

impl RenderError {
    /// Index of the offending entry in the catalog.
    pub fn index(&self) -> usize {
        match self {
            RenderError::MalformedEntry { index, .. } => *index,
            RenderError::AssetUnresolved { index, .. } => *index,
        }
    }

    /// Field that failed. Unresolved assets always point at the image.
    pub fn field(&self) -> FieldName {
        match self {
            RenderError::MalformedEntry { field, .. } => *field,
            RenderError::AssetUnresolved { .. } => FieldName::Image,
        }
    }
}

pub type RenderResult<T> = Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message_names_index_and_field() {
        let err = RenderError::MalformedEntry { index: 2, field: FieldName::Description };
        assert_eq!(err.to_string(), "feature entry 2 is missing its description");
        assert_eq!(err.index(), 2);
        assert_eq!(err.field(), FieldName::Description);
    }

    #[test]
    fn test_unresolved_asset_reports_image_field() {
        let err = RenderError::AssetUnresolved {
            index: 0,
            reference: "img/missing.png".to_string(),
        };
        assert_eq!(err.field(), FieldName::Image);
        assert!(err.to_string().contains("img/missing.png"));
    }
}
