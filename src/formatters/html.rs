use pulldown_cmark_escape::{escape_href, escape_html};

use crate::catalog::Inline;
use crate::formatters::style::StyleSheet;
use crate::layout::{Node, Role, Section, Spacing};

/// HTML formatter for feature sections
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Format a section as an HTML fragment for embedding in a page template
    pub fn format(section: &Section, style: &StyleSheet) -> String {
        let mut html = String::with_capacity(1024 + section.len() * 1024);
        Self::write_node(&mut html, &section.to_node(), style, Spacing::default());
        html
    }

    /// Format any markup tree. Spacing is taken from the nearest container
    /// that carries one.
    pub fn format_node(node: &Node, style: &StyleSheet) -> String {
        let mut html = String::with_capacity(1024);
        Self::write_node(&mut html, node, style, Spacing::default());
        html
    }

    fn write_node(html: &mut String, node: &Node, style: &StyleSheet, inherited: Spacing) {
        match node {
            Node::Container { role: Role::Section, spacing, children, .. } => {
                let spacing = spacing.unwrap_or(inherited);
                html.push_str(&format!(
                    "<section class=\"{} {}\">\n",
                    style.section,
                    style.padding_class(spacing.padding)
                ));
                for wrapper in &style.wrappers {
                    html.push_str(&format!("<div class=\"{}\">\n", wrapper));
                }
                html.push_str(&format!("<div class=\"{}\">\n", style.rows_container));
                for child in children {
                    Self::write_node(html, child, style, spacing);
                }
                html.push_str("</div>\n");
                for _ in &style.wrappers {
                    html.push_str("</div>\n");
                }
                html.push_str("</section>\n");
            }
            Node::Container { role: Role::Row, side, spacing, children } => {
                let spacing = spacing.unwrap_or(inherited);
                let side_class = side.map(|s| style.side_class(s)).unwrap_or_default();
                html.push_str(&format!(
                    "<div class=\"{} {} {}\">\n",
                    style.row,
                    side_class,
                    style.gap_class(spacing.row_gap)
                ));
                for child in children {
                    Self::write_node(html, child, style, spacing);
                }
                html.push_str("</div>\n");
            }
            Node::Container { role, spacing, children, .. } => {
                let spacing = spacing.unwrap_or(inherited);
                let class = match role {
                    Role::ImageBlock => &style.image_block,
                    _ => &style.text_block,
                };
                html.push_str(&format!("<div class=\"{}\">\n", class));
                for child in children {
                    Self::write_node(html, child, style, spacing);
                }
                html.push_str("</div>\n");
            }
            Node::Heading { level, text } => {
                html.push_str(&format!(
                    "<h{} class=\"{}\">{}</h{}>\n",
                    level,
                    style.heading,
                    escaped(text),
                    level
                ));
            }
            Node::Paragraph { content } => {
                html.push_str(&format!("<p class=\"{}\">", style.paragraph));
                write_inlines(html, content.inlines());
                html.push_str("</p>\n");
            }
            Node::Image { src, alt } => {
                html.push_str(&format!(
                    "<img src=\"{}\" alt=\"{}\">\n",
                    escaped_href(src.as_str()),
                    escaped(alt)
                ));
            }
        }
    }
}

fn write_inlines(html: &mut String, inlines: &[Inline]) {
    for inline in inlines {
        match inline {
            Inline::Text(text) => html.push_str(&escaped(text)),
            Inline::Strong(children) => {
                html.push_str("<strong>");
                write_inlines(html, children);
                html.push_str("</strong>");
            }
            Inline::Emphasis(children) => {
                html.push_str("<em>");
                write_inlines(html, children);
                html.push_str("</em>");
            }
            Inline::Code(code) => {
                html.push_str(&format!("<code>{}</code>", escaped(code)));
            }
            Inline::Link { href, children } => {
                html.push_str(&format!("<a href=\"{}\">", escaped_href(href)));
                write_inlines(html, children);
                html.push_str("</a>");
            }
            Inline::LineBreak => html.push_str("<br>"),
        }
    }
}

fn escaped(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    // Writing into a String cannot fail
    let _ = escape_html(&mut out, text);
    out
}

fn escaped_href(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    let _ = escape_href(&mut out, url);
    out
}
