//! Configuration errors.
//!
//! Everything here is fatal: an odd grid, a theme without a back image or an
//! empty image pool means the build or its bundled data is broken. Callers
//! should abort startup with the diagnostic rather than retry.
//!
//! Rejected flips are not errors; see [`crate::engine::FlipOutcome`].

use thiserror::Error;

/// A static misconfiguration of grids, assets or settings.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A grid whose cell count cannot be split into pairs.
    #[error("grid {rows}x{cols} has an odd number of cells ({})", .rows * .cols)]
    OddCellCount { rows: usize, cols: usize },

    /// A deck request with an odd number of cards.
    #[error("cannot deal {0} cards as pairs")]
    OddCardCount(usize),

    /// A grid or deck request with no cells at all.
    #[error("grid has no cells")]
    EmptyGrid,

    /// A tier declared without any grid combinations.
    #[error("tier {0} has no grid combinations")]
    EmptyTier(u8),

    /// No back image was found for a theme.
    #[error("no back image found for theme {theme:?}")]
    MissingBackImage { theme: String },

    /// A deck was requested with an empty back image identifier.
    #[error("back image identifier is empty")]
    EmptyBackImage,

    /// Pairs were requested from an empty front image pool.
    #[error("front image pool is empty but {pairs} pairs are required")]
    EmptyImagePool { pairs: usize },

    /// Two tiers declared with the same key.
    #[error("grid tier {0} is declared more than once")]
    DuplicateTier(u8),

    /// Tier not present in the grid catalog.
    #[error("unknown grid tier {0}")]
    UnknownTier(u8),

    /// Grid index past the end of a tier's combinations.
    #[error("grid index {index} out of range for tier {tier} ({len} combinations)")]
    GridIndexOutOfRange { tier: u8, index: usize, len: usize },

    /// Theme not provided by the asset source.
    #[error("unknown card theme {0:?}")]
    UnknownTheme(String),
}
