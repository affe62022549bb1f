pub mod html;
pub mod json;
pub mod markdown;
pub mod style;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use style::StyleSheet;
