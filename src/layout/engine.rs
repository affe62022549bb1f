//! Alternation layout engine.
//!
//! Turns each feature entry into a side-tagged row. The side comes from the
//! entry's position alone, so the same catalog always lays out the same way.

use serde::Serialize;

use crate::catalog::{FeatureEntry, ImageRef, RichText};
use crate::error::{RenderError, RenderResult};
use crate::layout::node::{Node, Role, Side};

/// Heading level used for row titles.
pub const ROW_HEADING_LEVEL: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageNode {
    pub src: ImageRef,
    pub alt: String,
}

/// One of the two visual blocks of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    Text { heading: &'a str, body: &'a RichText },
    Image(&'a ImageNode),
}

/// A laid-out feature entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub index: usize,
    pub side: Side,
    pub heading: String,
    pub body: RichText,
    pub image: ImageNode,
}

impl Row {
    fn compose(index: usize, entry: &FeatureEntry) -> Self {
        Row {
            index,
            side: Side::for_index(index),
            heading: entry.title().to_string(),
            body: entry.description().clone(),
            image: ImageNode {
                src: entry.image().clone(),
                alt: entry.title().to_string(),
            },
        }
    }

    /// Text and image blocks in reading order for this row's side.
    pub fn blocks(&self) -> [Block<'_>; 2] {
        let text = Block::Text {
            heading: &self.heading,
            body: &self.body,
        };
        let image = Block::Image(&self.image);
        match self.side {
            Side::Left => [text, image],
            Side::Right => [image, text],
        }
    }

    pub fn to_node(&self) -> Node {
        let children = self
            .blocks()
            .iter()
            .map(|block| match block {
                Block::Text { heading, body } => Node::container(
                    Role::TextBlock,
                    vec![
                        Node::Heading {
                            level: ROW_HEADING_LEVEL,
                            text: heading.to_string(),
                        },
                        Node::Paragraph {
                            content: (*body).clone(),
                        },
                    ],
                ),
                Block::Image(image) => Node::container(
                    Role::ImageBlock,
                    vec![Node::Image {
                        src: image.src.clone(),
                        alt: image.alt.clone(),
                    }],
                ),
            })
            .collect();

        Node::Container {
            role: Role::Row,
            side: Some(self.side),
            spacing: None,
            children,
        }
    }
}

/// Stateless row composer.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutEngine;

impl LayoutEngine {
    pub fn new() -> Self {
        Self
    }

    /// Lay out every entry as a row, preserving order.
    ///
    /// The whole catalog is validated before any row is built; the first
    /// malformed entry aborts the render.
    pub fn render(&self, entries: &[FeatureEntry]) -> RenderResult<Vec<Row>> {
        for (index, entry) in entries.iter().enumerate() {
            entry
                .validate()
                .map_err(|field| RenderError::MalformedEntry { index, field })?;
        }

        Ok(entries
            .iter()
            .enumerate()
            .map(|(index, entry)| Row::compose(index, entry))
            .collect())
    }
}
