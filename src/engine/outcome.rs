//! What the engine reports back to the renderer.

use serde::{Deserialize, Serialize};

use crate::cards::CardState;

/// Result of a flip attempt.
///
/// Rejections are ordinary outcomes, not errors: the caller ignores them and
/// waits for the next input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlipOutcome {
    /// First card of a pair turned face-up.
    Accepted,
    /// Two cards are already face-up awaiting resolution.
    RejectedBusy,
    /// The card is not face-down.
    RejectedAlreadyResolved,
    /// No card at that position.
    RejectedOutOfBounds,
    /// Second card matched the first. `game_complete` is set on the final pair.
    Matched { game_complete: bool },
    /// Second card differs from the first; a mismatch clear is pending.
    Mismatched,
}

impl FlipOutcome {
    /// Did the flip leave all state untouched?
    #[must_use]
    pub fn is_rejected(self) -> bool {
        matches!(
            self,
            FlipOutcome::RejectedBusy
                | FlipOutcome::RejectedAlreadyResolved
                | FlipOutcome::RejectedOutOfBounds
        )
    }

    /// Did this flip finish the game?
    #[must_use]
    pub fn is_game_complete(self) -> bool {
        matches!(self, FlipOutcome::Matched { game_complete: true })
    }
}

/// A deferred operation that actually ran.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeferredEvent {
    /// The listed positions were turned face-down and input is accepted again.
    MismatchCleared { positions: Vec<usize> },
    /// Time to play the completion animation.
    CompletionAnimationDue,
}

/// Renderer-facing view of the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Per-position card state.
    pub states: Vec<CardState>,
    /// Face-up positions awaiting resolution.
    pub flipped: Vec<usize>,
    /// Whether every card is complete.
    pub complete: bool,
    /// Deferred-operation generation at snapshot time.
    pub generation: u64,
}
