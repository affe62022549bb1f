//! Rich text for entry descriptions.
//!
//! A description is a small tree of inline nodes. Authored catalogs write
//! descriptions as inline Markdown, which is parsed with pulldown-cmark.
//! Block structure is flattened since the description always lands inside a
//! single body paragraph: paragraphs, headings, code blocks and list items
//! become line breaks, and ordered-list numbers are kept as text.

use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use serde::Serialize;

/// One inline node of a description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Inline {
    Text(String),
    Strong(Vec<Inline>),
    Emphasis(Vec<Inline>),
    Code(String),
    Link { href: String, children: Vec<Inline> },
    LineBreak,
}

/// Ordered inline content of a description.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct RichText(Vec<Inline>);

impl RichText {
    pub fn new(inlines: Vec<Inline>) -> Self {
        Self(inlines)
    }

    /// Single run of unformatted text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self(vec![Inline::Text(text.into())])
    }

    /// Parse Markdown (`**strong**`, `*em*`, `` `code` ``, links) into
    /// inline nodes. No authored text is dropped.
    pub fn from_markdown(source: &str) -> Self {
        let mut builder = InlineBuilder::default();

        for event in Parser::new(source) {
            match event {
                Event::Start(Tag::Paragraph | Tag::Heading { .. } | Tag::CodeBlock(_)) => {
                    builder.break_line()
                }
                Event::Start(Tag::List(start)) => builder.lists.push(start),
                Event::End(TagEnd::List(_)) => {
                    builder.lists.pop();
                }
                Event::Start(Tag::Item) => builder.start_item(),
                Event::Rule => builder.break_line(),
                Event::Start(Tag::Strong) => builder.open(Frame::Strong),
                Event::Start(Tag::Emphasis) => builder.open(Frame::Emphasis),
                Event::Start(Tag::Link { dest_url, .. }) => {
                    builder.open(Frame::Link(dest_url.to_string()))
                }
                Event::End(TagEnd::Strong | TagEnd::Emphasis | TagEnd::Link) => builder.close(),
                Event::Text(text) => builder.push_text(&text),
                Event::Code(code) => builder.push(Inline::Code(code.to_string())),
                Event::SoftBreak => builder.push_text(" "),
                Event::HardBreak => builder.push(Inline::LineBreak),
                // Raw HTML is kept verbatim as text; formatters escape it.
                Event::Html(html) | Event::InlineHtml(html) => builder.push_text(&html),
                _ => {}
            }
        }

        Self(builder.finish())
    }

    pub fn inlines(&self) -> &[Inline] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the description has no visible text (only whitespace or breaks).
    pub fn is_blank(&self) -> bool {
        self.plain_text().trim().is_empty()
    }

    /// Text content with all formatting stripped.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        collect_text(&self.0, &mut out);
        out
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

impl From<String> for RichText {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}

fn collect_text(inlines: &[Inline], out: &mut String) {
    for inline in inlines {
        match inline {
            Inline::Text(text) | Inline::Code(text) => out.push_str(text),
            Inline::Strong(children) | Inline::Emphasis(children) => collect_text(children, out),
            Inline::Link { children, .. } => collect_text(children, out),
            Inline::LineBreak => out.push('\n'),
        }
    }
}

// ============================================================================
// Markdown event folding
// ============================================================================

enum Frame {
    Strong,
    Emphasis,
    Link(String),
}

#[derive(Default)]
struct InlineBuilder {
    root: Vec<Inline>,
    stack: Vec<(Frame, Vec<Inline>)>,
    /// Open lists; `Some(n)` is the next number of an ordered list.
    lists: Vec<Option<u64>>,
    /// Ordered-list number waiting for the item's first content.
    marker: Option<String>,
}

impl InlineBuilder {
    fn current(&mut self) -> &mut Vec<Inline> {
        match self.stack.last_mut() {
            Some((_, children)) => children,
            None => &mut self.root,
        }
    }

    fn open(&mut self, frame: Frame) {
        self.flush_marker();
        self.stack.push((frame, Vec::new()));
    }

    /// Starts a new line unless already at the start of one.
    fn break_line(&mut self) {
        let current = self.current();
        if !current.is_empty() && !matches!(current.last(), Some(Inline::LineBreak)) {
            current.push(Inline::LineBreak);
        }
    }

    fn start_item(&mut self) {
        self.flush_marker();
        self.break_line();
        if let Some(Some(next)) = self.lists.last_mut() {
            self.marker = Some(format!("{}. ", next));
            *next += 1;
        }
    }

    fn flush_marker(&mut self) {
        if let Some(marker) = self.marker.take() {
            self.current().push(Inline::Text(marker));
        }
    }

    fn close(&mut self) {
        if let Some((frame, children)) = self.stack.pop() {
            let node = match frame {
                Frame::Strong => Inline::Strong(children),
                Frame::Emphasis => Inline::Emphasis(children),
                Frame::Link(href) => Inline::Link { href, children },
            };
            self.push(node);
        }
    }

    fn push(&mut self, inline: Inline) {
        if !matches!(inline, Inline::LineBreak) {
            self.flush_marker();
        }
        self.current().push(inline);
    }

    /// Appends text, merging with a preceding text run.
    fn push_text(&mut self, text: &str) {
        self.flush_marker();
        let current = self.current();
        if let Some(Inline::Text(last)) = current.last_mut() {
            last.push_str(text);
        } else {
            current.push(Inline::Text(text.to_string()));
        }
    }

    fn finish(mut self) -> Vec<Inline> {
        self.flush_marker();
        // Unbalanced frames cannot come out of pulldown-cmark, but fold them anyway.
        while !self.stack.is_empty() {
            self.close();
        }
        self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_markdown_is_single_text_run() {
        let text = RichText::from_markdown("AURCache provides a comprehensive dashboard.");
        assert_eq!(
            text.inlines(),
            &[Inline::Text("AURCache provides a comprehensive dashboard.".to_string())]
        );
    }

    #[test]
    fn test_soft_breaks_fold_into_spaces() {
        let text = RichText::from_markdown("Adding packages is easy.\nUnder the hood, Rust.");
        assert_eq!(text.plain_text(), "Adding packages is easy. Under the hood, Rust.");
        assert_eq!(text.inlines().len(), 1);
    }

    #[test]
    fn test_nested_formatting() {
        let text = RichText::from_markdown("A **robust *Rust* backend** and `pacman`.");
        assert_eq!(
            text.inlines(),
            &[
                Inline::Text("A ".to_string()),
                Inline::Strong(vec![
                    Inline::Text("robust ".to_string()),
                    Inline::Emphasis(vec![Inline::Text("Rust".to_string())]),
                    Inline::Text(" backend".to_string()),
                ]),
                Inline::Text(" and ".to_string()),
                Inline::Code("pacman".to_string()),
                Inline::Text(".".to_string()),
            ]
        );
    }

    #[test]
    fn test_link_keeps_destination() {
        let text = RichText::from_markdown("See [the docs](https://example.org/docs).");
        match &text.inlines()[1] {
            Inline::Link { href, children } => {
                assert_eq!(href, "https://example.org/docs");
                assert_eq!(children, &vec![Inline::Text("the docs".to_string())]);
            }
            other => panic!("expected link, got {:?}", other),
        }
    }

    #[test]
    fn test_paragraphs_become_line_breaks() {
        let text = RichText::from_markdown("First.\n\nSecond.");
        assert_eq!(
            text.inlines(),
            &[
                Inline::Text("First.".to_string()),
                Inline::LineBreak,
                Inline::Text("Second.".to_string()),
            ]
        );
    }

    #[test]
    fn test_bullet_items_become_lines() {
        let text = RichText::from_markdown("- Fast\n- Safe");
        assert_eq!(text.plain_text(), "Fast\nSafe");
    }

    #[test]
    fn test_ordered_items_keep_their_numbers() {
        let text = RichText::from_markdown("2024. A good year for builds.");
        assert_eq!(text.plain_text(), "2024. A good year for builds.");

        let text = RichText::from_markdown("1. One\n2. Two");
        assert_eq!(text.plain_text(), "1. One\n2. Two");

        // Loose list: item paragraphs do not add extra breaks
        let text = RichText::from_markdown("3. Three\n\n4. Four");
        assert_eq!(text.plain_text(), "3. Three\n4. Four");
    }

    #[test]
    fn test_heading_text_is_kept() {
        let text = RichText::from_markdown("## Overview\nBuild status at a glance.");
        assert_eq!(text.plain_text(), "Overview\nBuild status at a glance.");
    }

    #[test]
    fn test_inline_html_is_kept_as_text() {
        let text = RichText::from_markdown("Press <kbd>Enter</kbd> to build.");
        assert_eq!(text.plain_text(), "Press <kbd>Enter</kbd> to build.");
    }

    #[test]
    fn test_blank_detection() {
        assert!(RichText::default().is_blank());
        assert!(RichText::from_markdown("   ").is_blank());
        assert!(RichText::new(vec![Inline::LineBreak]).is_blank());
        assert!(!RichText::plain("x").is_blank());
    }
}
