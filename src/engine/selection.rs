//! The face-up cards awaiting resolution.
//!
//! Stores positions into the engine's card list, never the cards
//! themselves, so there is exactly one owner of each card's state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Maximum number of cards face-up at once.
pub const SELECTION_CAPACITY: usize = 2;

/// Ordered positions of the currently flipped cards (0 to 2 entries).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlippedSelection {
    positions: SmallVec<[usize; SELECTION_CAPACITY]>,
}

impl FlippedSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a position. Returns false if the selection is already full.
    pub fn push(&mut self, position: usize) -> bool {
        if self.is_full() {
            return false;
        }
        self.positions.push(position);
        true
    }

    /// The pair once two cards are flipped.
    #[must_use]
    pub fn pair(&self) -> Option<(usize, usize)> {
        match self.positions.as_slice() {
            &[first, second] => Some((first, second)),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.positions.len() >= SELECTION_CAPACITY
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn contains(&self, position: usize) -> bool {
        self.positions.contains(&position)
    }

    #[must_use]
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }
}
