//! The match-pairs game engine.
//!
//! One `GameEngine` per game session, owned by the UI layer. The engine is
//! single-threaded: every call runs to completion before the next one can
//! observe its state. Deferred operations are driven either by
//! [`GameEngine::advance`] (logical clock) or by an external timer calling
//! [`GameEngine::fire`] with the tokens from [`GameEngine::pending_deferred`].

use std::time::Duration;

use tracing::{debug, info, trace};

use super::deferred::{DeferToken, DeferredKind, DeferredQueue, ScheduledOp};
use super::outcome::{DeferredEvent, EngineSnapshot, FlipOutcome};
use super::selection::FlippedSelection;
use crate::cards::{Card, CardState, DeckBuilder, ImageId};
use crate::core::{EngineConfig, GameRng};
use crate::error::ConfigError;

/// Card list, flipped selection and pending deferred operations.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: EngineConfig,
    rng: GameRng,
    cards: Vec<Card>,
    flipped: FlippedSelection,
    deferred: DeferredQueue,
    clock: Duration,
}

impl GameEngine {
    /// Create an engine with no deck. Call [`new_game`](Self::new_game) to deal.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let rng = config.rng();
        Self {
            config,
            rng,
            cards: Vec::new(),
            flipped: FlippedSelection::new(),
            deferred: DeferredQueue::new(),
            clock: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Seed of the engine's RNG, for replaying a session.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    // === Game lifecycle ===

    /// Replace the deck with a freshly built one.
    ///
    /// Pending deferred operations are cancelled together with the deck
    /// swap, so a stale mismatch clear can never touch the new cards. On
    /// error the current game is left as it was.
    pub fn new_game(
        &mut self,
        cell_count: usize,
        front_pool: &[ImageId],
        back: &ImageId,
    ) -> Result<(), ConfigError> {
        let cards = DeckBuilder::build(front_pool, back, cell_count, &mut self.rng)?;

        self.deferred.cancel_all();
        self.flipped.clear();
        self.cards = cards;

        info!(
            cards = cell_count,
            generation = self.deferred.generation(),
            "new game"
        );
        Ok(())
    }

    /// Turn any pending face-up cards back down and release the selection.
    ///
    /// Cancels a pending mismatch clear.
    pub fn reset_flipped(&mut self) {
        self.deferred.cancel(DeferredKind::MismatchClear);
        for &position in self.flipped.positions() {
            self.cards[position].flip_down();
        }
        self.flipped.clear();
    }

    // === Flipping ===

    /// Try to turn the card at `position` face-up.
    pub fn attempt_flip(&mut self, position: usize) -> FlipOutcome {
        if self.flipped.is_full() {
            trace!(position, "flip rejected: busy");
            return FlipOutcome::RejectedBusy;
        }

        let Some(card) = self.cards.get_mut(position) else {
            trace!(position, "flip rejected: out of bounds");
            return FlipOutcome::RejectedOutOfBounds;
        };

        if !card.flip_up() {
            trace!(position, state = ?card.state(), "flip rejected: not face-down");
            return FlipOutcome::RejectedAlreadyResolved;
        }

        self.flipped.push(position);
        debug!(position, front = %self.cards[position].front, "flipped");

        match self.flipped.pair() {
            None => FlipOutcome::Accepted,
            Some((first, second)) if self.cards[first].pairs_with(&self.cards[second]) => {
                self.resolve_match(first, second)
            }
            Some((first, second)) => self.resolve_mismatch(first, second),
        }
    }

    fn resolve_match(&mut self, first: usize, second: usize) -> FlipOutcome {
        self.cards[first].mark_matched();
        self.cards[second].mark_matched();
        self.flipped.clear();

        debug!(first, second, "matched");

        FlipOutcome::Matched {
            game_complete: self.check_completion(),
        }
    }

    fn resolve_mismatch(&mut self, first: usize, second: usize) -> FlipOutcome {
        let due = self.clock.saturating_add(self.config.mismatch_delay);
        let token = self.deferred.schedule(DeferredKind::MismatchClear, due);

        debug!(first, second, generation = token.generation, "mismatched");
        FlipOutcome::Mismatched
    }

    /// Promote every card to `Complete` once all are matched.
    fn check_completion(&mut self) -> bool {
        if !self.cards.iter().all(|c| c.state().is_resolved()) {
            return false;
        }

        for card in &mut self.cards {
            card.mark_complete();
        }

        let due = self.clock.saturating_add(self.config.completion_delay);
        self.deferred.schedule(DeferredKind::CompletionAnimation, due);

        info!(cards = self.cards.len(), "game complete");
        true
    }

    // === Deferred operations ===

    /// Move the engine clock forward and run everything that became due.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<DeferredEvent> {
        self.clock = self.clock.saturating_add(elapsed);

        self.deferred
            .drain_due(self.clock)
            .into_iter()
            .map(|token| self.run_deferred(token.kind))
            .collect()
    }

    /// Run a deferred operation by token, if it is still current.
    ///
    /// Returns `None` for cancelled or superseded tokens without touching
    /// any state.
    pub fn fire(&mut self, token: DeferToken) -> Option<DeferredEvent> {
        if !self.deferred.take(token) {
            trace!(?token, "dropping stale deferred operation");
            return None;
        }
        Some(self.run_deferred(token.kind))
    }

    /// Outstanding deferred operations with their due times.
    pub fn pending_deferred(&self) -> impl Iterator<Item = ScheduledOp> + '_ {
        self.deferred.pending()
    }

    fn run_deferred(&mut self, kind: DeferredKind) -> DeferredEvent {
        match kind {
            DeferredKind::MismatchClear => {
                let positions: Vec<usize> = self
                    .flipped
                    .positions()
                    .iter()
                    .copied()
                    .filter(|&p| self.cards[p].state() == CardState::Front)
                    .collect();

                for &position in &positions {
                    self.cards[position].flip_down();
                }
                self.flipped.clear();

                debug!(?positions, "mismatch cleared");
                DeferredEvent::MismatchCleared { positions }
            }
            DeferredKind::CompletionAnimation => {
                debug!("completion animation due");
                DeferredEvent::CompletionAnimationDue
            }
        }
    }

    // === Observation ===

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn card(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    #[must_use]
    pub fn flipped(&self) -> &FlippedSelection {
        &self.flipped
    }

    /// Two cards are face-up and further flips are rejected.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.flipped.is_full()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(|c| c.state() == CardState::Complete)
    }

    /// Pairs still to be found.
    #[must_use]
    pub fn remaining_pairs(&self) -> usize {
        self.cards.iter().filter(|c| !c.state().is_resolved()).count() / 2
    }

    /// Current deferred-operation generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.deferred.generation()
    }

    /// Engine clock, as moved by [`advance`](Self::advance).
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock
    }

    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            states: self.cards.iter().map(Card::state).collect(),
            flipped: self.flipped.positions().to_vec(),
            complete: self.is_complete(),
            generation: self.generation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(names: &[&str]) -> Vec<ImageId> {
        names.iter().map(|&n| ImageId::from(n)).collect()
    }

    fn engine_with(cell_count: usize, pool: &[&str]) -> GameEngine {
        let mut engine = GameEngine::new(EngineConfig::new().with_seed(42));
        engine
            .new_game(cell_count, &images(pool), &ImageId::from("back"))
            .unwrap();
        engine
    }

    /// Positions of the two cards showing `front`.
    fn pair_of(engine: &GameEngine, front: &str) -> (usize, usize) {
        let positions: Vec<usize> = engine
            .cards()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.front.as_str() == front)
            .map(|(i, _)| i)
            .collect();
        (positions[0], positions[1])
    }

    #[test]
    fn test_new_engine_is_empty() {
        let engine = GameEngine::new(EngineConfig::new().with_seed(1));
        assert!(engine.cards().is_empty());
        assert!(!engine.is_complete());
        assert_eq!(engine.seed(), 1);
    }

    #[test]
    fn test_first_flip_accepted() {
        let mut engine = engine_with(4, &["A", "B"]);

        assert_eq!(engine.attempt_flip(0), FlipOutcome::Accepted);
        assert_eq!(engine.card(0).unwrap().state(), CardState::Front);
        assert_eq!(engine.flipped().positions(), &[0]);
    }

    #[test]
    fn test_flip_same_card_twice_rejected() {
        let mut engine = engine_with(4, &["A", "B"]);

        engine.attempt_flip(0);
        assert_eq!(engine.attempt_flip(0), FlipOutcome::RejectedAlreadyResolved);
        assert_eq!(engine.flipped().len(), 1);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut engine = engine_with(4, &["A", "B"]);
        assert_eq!(engine.attempt_flip(4), FlipOutcome::RejectedOutOfBounds);
        assert!(engine.flipped().is_empty());
    }

    #[test]
    fn test_match_clears_selection() {
        let mut engine = engine_with(4, &["A", "B"]);
        let (a1, a2) = pair_of(&engine, "A");

        engine.attempt_flip(a1);
        assert_eq!(
            engine.attempt_flip(a2),
            FlipOutcome::Matched { game_complete: false }
        );
        assert_eq!(engine.card(a1).unwrap().state(), CardState::Matched);
        assert_eq!(engine.card(a2).unwrap().state(), CardState::Matched);
        assert!(engine.flipped().is_empty());
        assert_eq!(engine.remaining_pairs(), 1);
    }

    #[test]
    fn test_mismatch_holds_until_cleared() {
        let mut engine = engine_with(4, &["A", "B"]);
        let (a, _) = pair_of(&engine, "A");
        let (b, _) = pair_of(&engine, "B");

        engine.attempt_flip(a);
        assert_eq!(engine.attempt_flip(b), FlipOutcome::Mismatched);
        assert!(engine.is_busy());
        assert_eq!(engine.card(a).unwrap().state(), CardState::Front);

        assert!(engine.advance(Duration::from_millis(999)).is_empty());
        assert_eq!(engine.card(b).unwrap().state(), CardState::Front);

        let events = engine.advance(Duration::from_millis(1));
        assert_eq!(events, vec![DeferredEvent::MismatchCleared { positions: vec![a, b] }]);
        assert_eq!(engine.card(a).unwrap().state(), CardState::Back);
        assert_eq!(engine.card(b).unwrap().state(), CardState::Back);
        assert!(engine.flipped().is_empty());
    }

    #[test]
    fn test_completion_schedules_animation() {
        let mut engine = engine_with(2, &["A"]);

        engine.attempt_flip(0);
        assert_eq!(engine.attempt_flip(1), FlipOutcome::Matched { game_complete: true });
        assert!(engine.is_complete());

        assert!(engine.advance(Duration::from_millis(1499)).is_empty());
        assert_eq!(
            engine.advance(Duration::from_millis(1)),
            vec![DeferredEvent::CompletionAnimationDue]
        );
    }

    #[test]
    fn test_reset_flipped_turns_cards_down() {
        let mut engine = engine_with(4, &["A", "B"]);
        let (a, _) = pair_of(&engine, "A");
        let (b, _) = pair_of(&engine, "B");
        engine.attempt_flip(a);
        engine.attempt_flip(b);

        engine.reset_flipped();

        assert!(engine.flipped().is_empty());
        assert_eq!(engine.card(a).unwrap().state(), CardState::Back);
        assert_eq!(engine.pending_deferred().count(), 0);
    }

    #[test]
    fn test_failed_new_game_keeps_current_deck() {
        let mut engine = engine_with(4, &["A", "B"]);
        engine.attempt_flip(0);
        let before = engine.snapshot();

        let err = engine.new_game(3, &images(&["A"]), &ImageId::from("back"));

        assert_eq!(err, Err(ConfigError::OddCardCount(3)));
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_advance_saturates_clock() {
        let mut engine = engine_with(4, &["A", "B"]);
        let (a, _) = pair_of(&engine, "A");
        let (b, _) = pair_of(&engine, "B");
        engine.attempt_flip(a);
        engine.attempt_flip(b);

        engine.advance(Duration::from_millis(10));
        let events = engine.advance(Duration::MAX);

        assert_eq!(engine.now(), Duration::MAX);
        assert_eq!(events, vec![DeferredEvent::MismatchCleared { positions: vec![a, b] }]);
        assert!(engine.advance(Duration::MAX).is_empty());
    }

    #[test]
    fn test_huge_delays_saturate() {
        let config = EngineConfig::new()
            .with_seed(42)
            .with_mismatch_delay(Duration::MAX)
            .with_completion_delay(Duration::MAX);
        let mut engine = GameEngine::new(config);
        engine
            .new_game(2, &images(&["A"]), &ImageId::from("back"))
            .unwrap();
        engine.advance(Duration::from_secs(1));

        engine.attempt_flip(0);
        assert!(engine.attempt_flip(1).is_game_complete());

        let op = engine.pending_deferred().next().unwrap();
        assert_eq!(op.due, Duration::MAX);
        assert!(engine.advance(Duration::from_secs(3600)).is_empty());
        assert_eq!(
            engine.advance(Duration::MAX),
            vec![DeferredEvent::CompletionAnimationDue]
        );
    }

    #[test]
    fn test_snapshot() {
        let mut engine = engine_with(4, &["A", "B"]);
        engine.attempt_flip(2);

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.states.len(), 4);
        assert_eq!(snapshot.states[2], CardState::Front);
        assert_eq!(snapshot.flipped, vec![2]);
        assert!(!snapshot.complete);

        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: EngineSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, restored);
    }
}
