//! Deferred operations and their cancellation tokens.
//!
//! Two engine operations run after a real-time delay: clearing a
//! mismatched pair and triggering the completion animation. Each scheduled
//! operation gets a [`DeferToken`] carrying a generation number. The
//! generation counter is bumped on every schedule and every cancellation,
//! and an operation only runs if its token still matches the pending slot
//! for its kind. Cancelling is therefore just forgetting the slot: a stale
//! timer that later calls in with an old token finds nothing to do.
//!
//! The queue keeps its own due times so the engine can be driven either by
//! a logical clock ([`DeferredQueue::drain_due`]) or by an external timer
//! that fires tokens directly ([`DeferredQueue::take`]).

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// What a deferred operation does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeferredKind {
    /// Flip a mismatched pair back and release the selection.
    MismatchClear,
    /// Tell the renderer to play the completion animation.
    CompletionAnimation,
}

/// Handle to one scheduled operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeferToken {
    pub kind: DeferredKind,
    pub generation: u64,
}

/// A scheduled operation and when it is due on the engine clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledOp {
    pub token: DeferToken,
    pub due: Duration,
}

/// Pending deferred operations, at most one per kind.
#[derive(Clone, Debug, Default)]
pub struct DeferredQueue {
    generation: u64,
    mismatch_clear: Option<ScheduledOp>,
    completion: Option<ScheduledOp>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Schedule `kind` at `due`, superseding any pending operation of that kind.
    pub fn schedule(&mut self, kind: DeferredKind, due: Duration) -> DeferToken {
        self.generation += 1;
        let token = DeferToken {
            kind,
            generation: self.generation,
        };
        *self.slot_mut(kind) = Some(ScheduledOp { token, due });
        token
    }

    /// Cancel the pending operation of `kind`, if any.
    pub fn cancel(&mut self, kind: DeferredKind) -> bool {
        self.generation += 1;
        self.slot_mut(kind).take().is_some()
    }

    /// Cancel everything.
    pub fn cancel_all(&mut self) {
        self.generation += 1;
        self.mismatch_clear = None;
        self.completion = None;
    }

    /// Claim `token` for execution. Returns false for stale or unknown tokens.
    pub fn take(&mut self, token: DeferToken) -> bool {
        let slot = self.slot_mut(token.kind);
        if slot.as_ref().map(|op| op.token) != Some(token) {
            return false;
        }
        *slot = None;
        true
    }

    /// Remove and return every operation due at or before `now`, earliest first.
    pub fn drain_due(&mut self, now: Duration) -> Vec<DeferToken> {
        let mut due: Vec<ScheduledOp> = self.pending().filter(|op| op.due <= now).collect();
        due.sort_by_key(|op| (op.due, op.token.generation));

        for op in &due {
            self.take(op.token);
        }

        due.into_iter().map(|op| op.token).collect()
    }

    /// Outstanding operations.
    pub fn pending(&self) -> impl Iterator<Item = ScheduledOp> + '_ {
        self.mismatch_clear.iter().chain(self.completion.iter()).copied()
    }

    /// Is an operation of `kind` outstanding?
    #[must_use]
    pub fn is_pending(&self, kind: DeferredKind) -> bool {
        match kind {
            DeferredKind::MismatchClear => self.mismatch_clear.is_some(),
            DeferredKind::CompletionAnimation => self.completion.is_some(),
        }
    }

    fn slot_mut(&mut self, kind: DeferredKind) -> &mut Option<ScheduledOp> {
        match kind {
            DeferredKind::MismatchClear => &mut self.mismatch_clear,
            DeferredKind::CompletionAnimation => &mut self.completion,
        }
    }
}
