//! Section wrapper: the single container that holds all rows.

use serde::Serialize;

use crate::layout::engine::Row;
use crate::layout::node::{Node, Role, Side, Spacing};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    spacing: Spacing,
    rows: Vec<Row>,
}

/// Wrap rows into a section with uniform spacing. Accepts any sequence,
/// including an empty one.
pub fn wrap(rows: Vec<Row>) -> Section {
    Section {
        spacing: Spacing::UNIFORM,
        rows,
    }
}

impl Section {
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn spacing(&self) -> Spacing {
        self.spacing
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn sides(&self) -> Vec<Side> {
        self.rows.iter().map(|row| row.side).collect()
    }

    /// Full markup tree: a section container with one row container per row.
    pub fn to_node(&self) -> Node {
        Node::Container {
            role: Role::Section,
            side: None,
            spacing: Some(self.spacing),
            children: self.rows.iter().map(Row::to_node).collect(),
        }
    }
}
