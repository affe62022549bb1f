//! Layout: alternation engine, section wrapper and the markup tree they produce.
//!
//! ## Pipeline
//! 1. `engine` - one side-tagged row per entry (even index = text first)
//! 2. `section` - rows wrapped in a uniformly spaced container
//! 3. `pages` - independent renders of several catalogs in parallel

pub mod engine;
pub mod node;
pub mod pages;
pub mod section;

pub use engine::{Block, ImageNode, LayoutEngine, Row};
pub use node::{Node, Role, Side, Space, Spacing};
pub use pages::{render_pages, PageCatalog, PageRender};
pub use section::{wrap, Section};
