//! Feature entries and the catalog that holds them.

use serde::Serialize;

use crate::catalog::rich_text::RichText;
use crate::error::FieldName;

/// An already-resolved handle to an image asset.
///
/// The renderer never dereferences it; it is carried through to the image
/// node for the host page to load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(src: impl Into<String>) -> Self {
        Self(src.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

/// One showcased capability: title, illustrative image, description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureEntry {
    title: String,
    image: ImageRef,
    description: RichText,
}

impl FeatureEntry {
    pub fn new(title: impl Into<String>, image: ImageRef, description: impl Into<RichText>) -> Self {
        Self {
            title: title.into(),
            image,
            description: description.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    pub fn description(&self) -> &RichText {
        &self.description
    }

    /// Checks that all three fields carry content.
    ///
    /// Fields are checked in the order title, image, description and the
    /// first empty one is returned.
    pub fn validate(&self) -> Result<(), FieldName> {
        if self.title.trim().is_empty() {
            return Err(FieldName::Title);
        }
        if self.image.is_empty() {
            return Err(FieldName::Image);
        }
        if self.description.is_blank() {
            return Err(FieldName::Description);
        }
        Ok(())
    }
}

/// Ordered, immutable list of feature entries.
///
/// Order is significant: an entry's position decides which side its image
/// is placed on.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct EntryCatalog {
    entries: Vec<FeatureEntry>,
}

impl EntryCatalog {
    pub fn new(entries: Vec<FeatureEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[FeatureEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&FeatureEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FeatureEntry> {
        self.entries.iter()
    }
}

impl FromIterator<FeatureEntry> for EntryCatalog {
    fn from_iter<I: IntoIterator<Item = FeatureEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a EntryCatalog {
    type Item = &'a FeatureEntry;
    type IntoIter = std::slice::Iter<'a, FeatureEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
