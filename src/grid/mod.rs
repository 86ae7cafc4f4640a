//! Grid catalog: difficulty tiers and their selectable layouts.

pub mod catalog;

pub use catalog::{GridCatalog, GridDimensions, GridTier};
