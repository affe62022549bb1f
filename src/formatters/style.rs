//! Styling collaborator: maps abstract roles, sides and spacing steps to
//! CSS class names. The layout never sees these strings.

use crate::layout::{Side, Space};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheet {
    pub section: String,
    /// Grid wrappers opened between the section and the rows container.
    pub wrappers: Vec<String>,
    pub rows_container: String,
    pub row: String,
    pub row_left: String,
    pub row_right: String,
    pub text_block: String,
    pub image_block: String,
    pub heading: String,
    pub paragraph: String,
    /// Prefix for section padding, e.g. `padding-vert` -> `padding-vert--lg`.
    pub padding_prefix: String,
    /// Prefix for the gap under each row, e.g. `margin-bottom`.
    pub gap_prefix: String,
}

impl StyleSheet {
    /// Class names of the Docusaurus homepage: Infima grid wrappers plus the
    /// features CSS module.
    pub fn docusaurus() -> Self {
        Self {
            section: "features".to_string(),
            wrappers: vec!["container".to_string(), "row".to_string()],
            rows_container: "container".to_string(),
            row: "row".to_string(),
            row_left: "rowEven".to_string(),
            row_right: "rowOdd".to_string(),
            text_block: "text".to_string(),
            image_block: "image".to_string(),
            heading: "text--center padding-horiz--md".to_string(),
            paragraph: "text--center padding-horiz--md".to_string(),
            padding_prefix: "padding-vert".to_string(),
            gap_prefix: "margin-bottom".to_string(),
        }
    }

    pub fn side_class(&self, side: Side) -> &str {
        match side {
            Side::Left => self.row_left.as_str(),
            Side::Right => self.row_right.as_str(),
        }
    }

    pub fn padding_class(&self, space: Space) -> String {
        format!("{}--{}", self.padding_prefix, space_suffix(space))
    }

    pub fn gap_class(&self, space: Space) -> String {
        format!("{}--{}", self.gap_prefix, space_suffix(space))
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::docusaurus()
    }
}

fn space_suffix(space: Space) -> &'static str {
    match space {
        Space::Small => "sm",
        Space::Medium => "md",
        Space::Large => "lg",
    }
}
