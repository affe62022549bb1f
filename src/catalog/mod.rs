//! Entry catalog: feature entries, their rich-text descriptions, and the
//! loading path from an authored JSON file through asset resolution.

pub mod assets;
pub mod builtin;
pub mod rich_text;
pub mod source;
pub mod types;

pub use assets::{AssetResolver, StaticAssetResolver};
pub use builtin::{aurcache_catalog, aurcache_source};
pub use rich_text::{Inline, RichText};
pub use source::{CatalogError, CatalogSource, EntrySource};
pub use types::{EntryCatalog, FeatureEntry, ImageRef};
