use crate::catalog::Inline;
use crate::layout::{Block, Section};

/// ASCII punctuation that can start or end Markdown syntax inside a line.
const INLINE_METACHARACTERS: &[char] = &['\\', '`', '*', '_', '[', ']', '<', '>', '#', '&', '!', '|'];

/// Markdown formatter for feature sections
///
/// Text is escaped so that re-parsing the output yields the same text and
/// no formatting the section did not carry.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format a section as markdown, one block pair per row separated by rules
    pub fn format(section: &Section) -> String {
        let mut md = String::with_capacity(512 * section.len().max(1));

        for (i, row) in section.rows().iter().enumerate() {
            if i > 0 {
                md.push_str("---\n\n");
            }
            for block in row.blocks() {
                match block {
                    Block::Text { heading, body } => {
                        md.push_str(&format!("### {}\n\n", escape_text(heading, false)));
                        let mut line_start = true;
                        write_inlines(&mut md, body.inlines(), &mut line_start);
                        md.push_str("\n\n");
                    }
                    Block::Image(image) => {
                        md.push_str(&format!(
                            "![{}](<{}>)\n\n",
                            escape_text(&image.alt, false),
                            escape_destination(image.src.as_str())
                        ));
                    }
                }
            }
        }

        md
    }
}

fn write_inlines(md: &mut String, inlines: &[Inline], line_start: &mut bool) {
    for inline in inlines {
        match inline {
            Inline::Text(text) => {
                md.push_str(&escape_text(text, *line_start));
                *line_start = *line_start && text.is_empty();
            }
            Inline::Strong(children) => {
                md.push_str("**");
                *line_start = false;
                write_inlines(md, children, line_start);
                md.push_str("**");
            }
            Inline::Emphasis(children) => {
                md.push('*');
                *line_start = false;
                write_inlines(md, children, line_start);
                md.push('*');
            }
            Inline::Code(code) => {
                md.push_str(&code_span(code));
                *line_start = false;
            }
            Inline::Link { href, children } => {
                md.push('[');
                *line_start = false;
                write_inlines(md, children, line_start);
                md.push_str(&format!("](<{}>)", escape_destination(href)));
            }
            Inline::LineBreak => {
                md.push_str("  \n");
                *line_start = true;
            }
        }
    }
}

/// Backslash-escape Markdown syntax in plain text.
///
/// At the start of a line, list, setext and ordered-list markers are
/// escaped as well (`- x`, `+ x`, `= x`, `2024. x`, `1) x`).
fn escape_text(text: &str, line_start: bool) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let chars: Vec<char> = text.chars().collect();

    let marker_at = if line_start { line_marker_position(&chars) } else { None };

    for (i, &c) in chars.iter().enumerate() {
        if INLINE_METACHARACTERS.contains(&c) || marker_at == Some(i) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Position of the character that would turn a line into a block marker.
fn line_marker_position(chars: &[char]) -> Option<usize> {
    match chars.first() {
        Some('-') | Some('+') | Some('=') => Some(0),
        Some(c) if c.is_ascii_digit() => {
            let digits = chars.iter().take_while(|c| c.is_ascii_digit()).count();
            match chars.get(digits) {
                Some('.') | Some(')') => Some(digits),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Escape a link or image destination written inside `<...>`.
fn escape_destination(dest: &str) -> String {
    let mut out = String::with_capacity(dest.len());
    for c in dest.chars() {
        if matches!(c, '\\' | '<' | '>') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Code span fenced with more backticks than the longest run in `code`.
fn code_span(code: &str) -> String {
    let mut longest = 0;
    let mut run = 0;
    for c in code.chars() {
        if c == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }

    let fence = "`".repeat(longest + 1);
    let padded = code.starts_with(&['`', ' '][..]) || code.ends_with(&['`', ' '][..]);
    if padded {
        format!("{} {} {}", fence, code, fence)
    } else {
        format!("{}{}{}", fence, code, fence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FeatureEntry, ImageRef, Inline, RichText};
    use crate::render_feature_section;

    fn entries() -> Vec<FeatureEntry> {
        vec![
            FeatureEntry::new("A", ImageRef::new("/img/a.png"), RichText::from_markdown("desc *A*")),
            FeatureEntry::new("B", ImageRef::new("/img/b.png"), "descB"),
        ]
    }

    #[test]
    fn test_format_markdown() {
        let md = MarkdownFormatter::format(&render_feature_section(&entries()).unwrap());

        assert_eq!(
            md,
            "### A\n\ndesc *A*\n\n![A](</img/a.png>)\n\n---\n\n![B](</img/b.png>)\n\n### B\n\ndescB\n\n"
        );
    }

    #[test]
    fn test_metacharacters_survive_reparse() {
        use pulldown_cmark::{Event, Parser, Tag, TagEnd};

        let body = RichText::new(vec![
            Inline::Text("2*3*4 & <b> _x_ [y]".to_string()),
            Inline::LineBreak,
            Inline::Text("2024. A good year".to_string()),
            Inline::LineBreak,
            Inline::Text("- not a list".to_string()),
            Inline::LineBreak,
            Inline::Code("a`b".to_string()),
        ]);
        let entries = vec![FeatureEntry::new("Use *glob* [x] #1", ImageRef::new("/img/a b.png"), body)];
        let md = MarkdownFormatter::format(&render_feature_section(&entries).unwrap());

        let mut heading = String::new();
        let mut alt = String::new();
        let mut paragraph = String::new();
        let mut code = String::new();
        let mut dest = String::new();
        let (mut in_heading, mut in_image) = (false, false);

        for event in Parser::new(&md) {
            match event {
                Event::Start(Tag::Heading { .. }) => in_heading = true,
                Event::End(TagEnd::Heading(_)) => in_heading = false,
                Event::Start(Tag::Image { dest_url, .. }) => {
                    in_image = true;
                    dest = dest_url.to_string();
                }
                Event::End(TagEnd::Image) => in_image = false,
                Event::Start(Tag::Emphasis | Tag::Strong | Tag::Link { .. } | Tag::List(_)) => {
                    panic!("unexpected markup in:\n{}", md)
                }
                Event::Text(text) if in_heading => heading.push_str(&text),
                Event::Text(text) if in_image => alt.push_str(&text),
                Event::Text(text) => paragraph.push_str(&text),
                Event::Code(text) => code.push_str(&text),
                _ => {}
            }
        }

        assert_eq!(heading, "Use *glob* [x] #1");
        assert_eq!(alt, "Use *glob* [x] #1");
        assert_eq!(dest, "/img/a b.png");
        assert_eq!(paragraph, "2*3*4 & <b> _x_ [y]2024. A good year- not a list");
        assert_eq!(code, "a`b");
    }

    #[test]
    fn test_code_span_fences() {
        assert_eq!(code_span("pacman"), "`pacman`");
        assert_eq!(code_span("a`b"), "``a`b``");
        assert_eq!(code_span("`x"), "`` `x ``");
    }

    #[test]
    fn test_line_markers_escaped_only_at_line_start() {
        assert_eq!(escape_text("2024. A good year", true), "2024\\. A good year");
        assert_eq!(escape_text("2024. A good year", false), "2024. A good year");
        assert_eq!(escape_text("- item", true), "\\- item");
        assert_eq!(escape_text("a-b", true), "a-b");
    }

    #[test]
    fn test_empty_section_formats_to_nothing() {
        let md = MarkdownFormatter::format(&render_feature_section(&[]).unwrap());
        assert!(md.is_empty());
    }
}
