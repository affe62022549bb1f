//! Abstract markup tree.
//!
//! The layout produces typed nodes only; concrete markup and class names are
//! the host's business (see `formatters`).

use serde::Serialize;

use crate::catalog::{ImageRef, RichText};

/// Which block of a row comes first in reading order.
///
/// `Left` puts the text block first, `Right` puts the image block first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Even positions are `Left`, odd positions are `Right`.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Side::Left
        } else {
            Side::Right
        }
    }

    pub fn text_first(&self) -> bool {
        matches!(self, Side::Left)
    }
}

/// Purpose of a container node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Section,
    Row,
    TextBlock,
    ImageBlock,
}

/// Abstract spacing step, mapped to concrete values by the styling layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Space {
    Small,
    Medium,
    Large,
}

/// Outer layout of a section; identical for every row regardless of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Spacing {
    pub padding: Space,
    pub row_gap: Space,
}

impl Spacing {
    pub const UNIFORM: Spacing = Spacing {
        padding: Space::Large,
        row_gap: Space::Large,
    };
}

impl Default for Spacing {
    fn default() -> Self {
        Self::UNIFORM
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Node {
    Container {
        role: Role,
        #[serde(skip_serializing_if = "Option::is_none")]
        side: Option<Side>,
        #[serde(skip_serializing_if = "Option::is_none")]
        spacing: Option<Spacing>,
        children: Vec<Node>,
    },
    Heading {
        level: u8,
        text: String,
    },
    Paragraph {
        content: RichText,
    },
    Image {
        src: ImageRef,
        alt: String,
    },
}

impl Node {
    pub fn container(role: Role, children: Vec<Node>) -> Self {
        Node::Container {
            role,
            side: None,
            spacing: None,
            children,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Container { children, .. } => children.as_slice(),
            _ => &[],
        }
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            Node::Container { role, .. } => Some(*role),
            _ => None,
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn size(&self) -> usize {
        1 + self.children().iter().map(Node::size).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_alternates_from_left() {
        let sides: Vec<Side> = (0..5).map(Side::for_index).collect();
        assert_eq!(
            sides,
            vec![Side::Left, Side::Right, Side::Left, Side::Right, Side::Left]
        );
        assert!(Side::Left.text_first());
        assert!(!Side::Right.text_first());
    }

    #[test]
    fn test_subtree_size() {
        let node = Node::container(
            Role::Section,
            vec![
                Node::Heading { level: 3, text: "A".to_string() },
                Node::container(Role::Row, vec![Node::Paragraph { content: RichText::plain("x") }]),
            ],
        );
        assert_eq!(node.size(), 4);
        assert_eq!(node.role(), Some(Role::Section));
        assert!(node.children()[0].children().is_empty());
    }

    #[test]
    fn test_serializes_with_node_tag() {
        let node = Node::Image {
            src: ImageRef::new("/img/a.png"),
            alt: "A".to_string(),
        };
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["node"], "image");
        assert_eq!(json["src"], "/img/a.png");
    }
}
