//! Deck construction.
//!
//! A deck for `n` cells is `n / 2` face images, each dealt twice and
//! shuffled. The face images come from a pool that rarely has exactly the
//! right size:
//!
//! - **Too many**: random images are removed one at a time until the pool
//!   fits. Removal is random rather than truncation so the pool order does
//!   not bias which faces appear.
//! - **Too few**: random images already in the pool are appended (with
//!   replacement) until it fits. The padded images then appear four or more
//!   times in the deck. This is an accepted degradation for themes that ship
//!   fewer faces than the largest grid needs.

use tracing::debug;

use super::card::Card;
use super::image::ImageId;
use crate::core::GameRng;
use crate::error::ConfigError;

/// Builds shuffled, paired decks.
pub struct DeckBuilder;

impl DeckBuilder {
    /// Build a face-down deck of exactly `cell_count` cards.
    ///
    /// ## Errors
    ///
    /// - `OddCardCount` / `EmptyGrid` if `cell_count` cannot be dealt as pairs
    /// - `EmptyBackImage` if `back` is empty
    /// - `EmptyImagePool` if `pool` is empty
    pub fn build(
        pool: &[ImageId],
        back: &ImageId,
        cell_count: usize,
        rng: &mut GameRng,
    ) -> Result<Vec<Card>, ConfigError> {
        if cell_count == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if cell_count % 2 != 0 {
            return Err(ConfigError::OddCardCount(cell_count));
        }
        if back.is_empty() {
            return Err(ConfigError::EmptyBackImage);
        }

        let pairs = cell_count / 2;
        let mut fronts = Self::select_fronts(pool, pairs, rng)?;

        // Every selected face is dealt twice.
        fronts.extend_from_within(..);
        rng.shuffle(&mut fronts);

        debug!(
            cards = cell_count,
            pool = pool.len(),
            distinct = Self::distinct_count(&fronts),
            "built deck"
        );

        Ok(fronts
            .into_iter()
            .map(|front| Card::new(front, back.clone()))
            .collect())
    }

    /// Resize `pool` to exactly `pairs` face images.
    ///
    /// ## Errors
    ///
    /// `EmptyImagePool` if `pool` is empty and `pairs` is non-zero.
    pub fn select_fronts(
        pool: &[ImageId],
        pairs: usize,
        rng: &mut GameRng,
    ) -> Result<Vec<ImageId>, ConfigError> {
        if pool.is_empty() && pairs > 0 {
            return Err(ConfigError::EmptyImagePool { pairs });
        }

        let mut fronts = pool.to_vec();

        while fronts.len() > pairs {
            let index = rng.index(fronts.len());
            fronts.remove(index);
        }

        while fronts.len() < pairs {
            let index = rng.index(fronts.len());
            let padded = fronts[index].clone();
            fronts.push(padded);
        }

        Ok(fronts)
    }

    fn distinct_count(fronts: &[ImageId]) -> usize {
        let mut sorted: Vec<&ImageId> = fronts.iter().collect();
        sorted.sort();
        sorted.dedup();
        sorted.len()
    }
}
