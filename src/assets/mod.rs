//! Asset source: where face and back image identifiers come from.

pub mod source;

pub use source::{AssetSource, InMemoryAssets, ThemeAssets};
