use crate::layout::Section;

/// JSON formatter for the section markup tree
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format the section tree as pretty-printed JSON
    pub fn format(section: &Section) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&section.to_node())
    }

    /// Format the section tree as compact JSON (no whitespace)
    pub fn format_compact(section: &Section) -> Result<String, serde_json::Error> {
        serde_json::to_string(&section.to_node())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FeatureEntry, ImageRef};
    use crate::render_feature_section;

    fn section() -> Section {
        let entries = vec![
            FeatureEntry::new("A", ImageRef::new("/img/a.png"), "descA"),
            FeatureEntry::new("B", ImageRef::new("/img/b.png"), "descB"),
        ];
        render_feature_section(&entries).unwrap()
    }

    #[test]
    fn test_format_json() {
        let json = JsonFormatter::format(&section()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["node"], "container");
        assert_eq!(value["role"], "section");
        assert_eq!(value["spacing"]["row_gap"], "large");

        let rows = value["children"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["side"], "left");
        assert_eq!(rows[1]["side"], "right");
        assert_eq!(rows[1]["children"][0]["role"], "image_block");
        assert_eq!(rows[1]["children"][0]["children"][0]["src"], "/img/b.png");
        assert_eq!(
            rows[0]["children"][0]["children"][1]["content"][0],
            serde_json::json!({ "type": "text", "value": "descA" })
        );
    }

    #[test]
    fn test_format_compact() {
        let json = JsonFormatter::format_compact(&section()).unwrap();

        // Compact format should have no newlines (except potentially in strings)
        assert!(!json.contains("\n  "));
        assert!(json.starts_with("{\"node\":\"container\""));
    }
}
