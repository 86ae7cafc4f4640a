//! Grid catalog.
//!
//! Difficulty tiers map to the (rows, cols) layouts a player can choose on
//! the settings screen. Every layout must hold an even number of cells;
//! the catalog checks that once when it is built, so a bad table fails at
//! startup instead of mid-game.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A grid layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridDimensions {
    pub rows: usize,
    pub cols: usize,
}

impl GridDimensions {
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of cards the grid holds.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.rows * self.cols
    }

    /// Number of pairs the grid holds.
    #[must_use]
    pub const fn pairs(self) -> usize {
        self.cell_count() / 2
    }

    /// Check the layout can be dealt as pairs.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.cell_count() == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.cell_count() % 2 != 0 {
            return Err(ConfigError::OddCellCount {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self)
    }
}

impl std::fmt::Display for GridDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// A named difficulty tier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridTier {
    /// Lookup key (what the settings screen stores).
    pub key: u8,

    /// Human-readable name.
    pub name: String,

    /// Selectable layouts, in display order.
    pub combinations: Vec<GridDimensions>,
}

impl GridTier {
    pub fn new(key: u8, name: impl Into<String>, combinations: Vec<GridDimensions>) -> Self {
        Self {
            key,
            name: name.into(),
            combinations,
        }
    }
}

/// Validated set of grid tiers.
#[derive(Clone, Debug)]
pub struct GridCatalog {
    tiers: Vec<GridTier>,
    by_key: FxHashMap<u8, usize>,
}

impl GridCatalog {
    /// Build a catalog, checking every layout.
    ///
    /// ## Errors
    ///
    /// `EmptyTier` for a tier without layouts, `DuplicateTier` for a key
    /// declared twice, `OddCellCount` / `EmptyGrid` for a layout that cannot
    /// be dealt as pairs.
    pub fn new(tiers: Vec<GridTier>) -> Result<Self, ConfigError> {
        let mut by_key = FxHashMap::default();

        for (i, tier) in tiers.iter().enumerate() {
            if tier.combinations.is_empty() {
                return Err(ConfigError::EmptyTier(tier.key));
            }
            for dims in &tier.combinations {
                dims.validate()?;
            }
            if by_key.insert(tier.key, i).is_some() {
                return Err(ConfigError::DuplicateTier(tier.key));
            }
        }

        Ok(Self { tiers, by_key })
    }

    /// The built-in tiers. Tier `n` lays out `n` rows.
    #[must_use]
    pub fn standard() -> Self {
        let tier = |key: u8, name: &str, cols: &[usize]| {
            let rows = key as usize;
            GridTier::new(
                key,
                name,
                cols.iter().map(|&c| GridDimensions::new(rows, c)).collect(),
            )
        };

        Self::new(vec![
            tier(2, "Tiny", &[2, 3, 4]),
            tier(3, "Small", &[2, 4, 6]),
            tier(4, "Medium", &[3, 4, 5]),
            tier(5, "Large", &[4, 6]),
            tier(6, "Huge", &[5, 6]),
        ])
        .expect("standard grid catalog is valid")
    }

    /// Look up a layout.
    ///
    /// ## Errors
    ///
    /// `UnknownTier` or `GridIndexOutOfRange`.
    pub fn dimensions_for(&self, tier: u8, index: usize) -> Result<GridDimensions, ConfigError> {
        let combinations = &self.tier(tier).ok_or(ConfigError::UnknownTier(tier))?.combinations;

        combinations
            .get(index)
            .copied()
            .ok_or(ConfigError::GridIndexOutOfRange {
                tier,
                index,
                len: combinations.len(),
            })
    }

    /// Get a tier by key.
    #[must_use]
    pub fn tier(&self, key: u8) -> Option<&GridTier> {
        self.by_key.get(&key).map(|&i| &self.tiers[i])
    }

    /// All tiers in declaration order.
    pub fn tiers(&self) -> impl Iterator<Item = &GridTier> {
        self.tiers.iter()
    }
}

impl Default for GridCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let dims = GridDimensions::new(4, 5);
        assert_eq!(dims.cell_count(), 20);
        assert_eq!(dims.pairs(), 10);
        assert_eq!(format!("{}", dims), "4x5");
    }

    #[test]
    fn test_standard_catalog_is_even() {
        let catalog = GridCatalog::standard();
        for tier in catalog.tiers() {
            for dims in &tier.combinations {
                assert_eq!(dims.cell_count() % 2, 0, "tier {} has {}", tier.key, dims);
            }
        }
    }

    #[test]
    fn test_default_selection_is_4x4() {
        let catalog = GridCatalog::default();
        assert_eq!(catalog.dimensions_for(4, 1), Ok(GridDimensions::new(4, 4)));
    }

    #[test]
    fn test_unknown_tier() {
        let catalog = GridCatalog::standard();
        assert_eq!(catalog.dimensions_for(9, 0), Err(ConfigError::UnknownTier(9)));
        assert!(catalog.tier(9).is_none());
    }

    #[test]
    fn test_index_out_of_range() {
        let catalog = GridCatalog::standard();
        assert_eq!(
            catalog.dimensions_for(5, 2),
            Err(ConfigError::GridIndexOutOfRange { tier: 5, index: 2, len: 2 })
        );
    }

    #[test]
    fn test_odd_layout_rejected() {
        let result = GridCatalog::new(vec![GridTier::new(
            3,
            "Odd",
            vec![GridDimensions::new(2, 2), GridDimensions::new(3, 3)],
        )]);

        assert_eq!(result.unwrap_err(), ConfigError::OddCellCount { rows: 3, cols: 3 });
    }

    #[test]
    fn test_empty_tier_rejected() {
        let result = GridCatalog::new(vec![GridTier::new(1, "Empty", vec![])]);
        assert_eq!(result.unwrap_err(), ConfigError::EmptyTier(1));
    }

    #[test]
    fn test_duplicate_tier_rejected() {
        let result = GridCatalog::new(vec![
            GridTier::new(2, "Small", vec![GridDimensions::new(2, 2)]),
            GridTier::new(2, "Also Small", vec![GridDimensions::new(2, 4)]),
        ]);
        assert_eq!(result.unwrap_err(), ConfigError::DuplicateTier(2));
    }

    #[test]
    fn test_zero_layout_rejected() {
        let zero = GridTier::new(1, "Zero", vec![GridDimensions::new(0, 4)]);
        let result = GridCatalog::new(vec![zero]);
        assert_eq!(result.unwrap_err(), ConfigError::EmptyGrid);
    }
}
