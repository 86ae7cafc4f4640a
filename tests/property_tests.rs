//! Property tests for dealing and flipping.

use proptest::prelude::*;
use rustc_hash::FxHashMap;

use match_pairs::{DeckBuilder, EngineConfig, FlipOutcome, GameEngine, GameRng, ImageId};

fn image_pool(size: usize) -> Vec<ImageId> {
    (0..size).map(|i| ImageId::new(format!("face{i}"))).collect()
}

proptest! {
    /// Any even cell count and non-empty pool yields an exact, paired deck.
    #[test]
    fn deck_is_exact_and_paired(
        pairs in 1usize..40,
        pool_size in 1usize..60,
        seed in any::<u64>(),
    ) {
        let pool = image_pool(pool_size);
        let mut rng = GameRng::new(seed);

        let cards = DeckBuilder::build(&pool, &ImageId::from("back"), pairs * 2, &mut rng).unwrap();
        prop_assert_eq!(cards.len(), pairs * 2);

        let mut counts: FxHashMap<&ImageId, usize> = FxHashMap::default();
        for card in &cards {
            prop_assert!(pool.contains(&card.front));
            *counts.entry(&card.front).or_insert(0) += 1;
        }
        for &count in counts.values() {
            prop_assert!(count >= 2 && count % 2 == 0);
        }

        if pool_size >= pairs {
            prop_assert_eq!(counts.len(), pairs);
        }
    }

    /// Odd cell counts are always rejected.
    #[test]
    fn odd_counts_rejected(pairs in 0usize..40, seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let back = ImageId::from("back");
        let result = DeckBuilder::build(&image_pool(4), &back, pairs * 2 + 1, &mut rng);
        prop_assert!(result.is_err());
    }

    /// Random flip sequences keep the selection bounded and rejections inert.
    #[test]
    fn random_flips_keep_invariants(
        seed in any::<u64>(),
        flips in prop::collection::vec(0usize..12, 1..80),
        clear_every in 1usize..5,
    ) {
        let mut engine = GameEngine::new(EngineConfig::new().with_seed(seed));
        engine.new_game(10, &image_pool(5), &ImageId::from("back")).unwrap();

        for (i, &position) in flips.iter().enumerate() {
            let before = engine.snapshot();
            let outcome = engine.attempt_flip(position);

            if outcome.is_rejected() {
                prop_assert_eq!(engine.snapshot(), before);
            }
            if outcome == FlipOutcome::Mismatched {
                prop_assert!(engine.is_busy());
            }
            prop_assert!(engine.flipped().len() <= 2);

            if i % clear_every == 0 {
                engine.advance(engine.config().mismatch_delay);
            }
        }

        let matched = engine.cards().iter().filter(|c| c.state().is_resolved()).count();
        prop_assert_eq!(matched % 2, 0);
    }
}
