//! Game engine: flip handling, match resolution and deferred operations.
//!
//! ## Key Types
//!
//! - `GameEngine`: Owns the deck and drives every state transition
//! - `FlipOutcome`: What a flip attempt did, for the renderer to animate
//! - `FlippedSelection`: Positions of face-up cards awaiting resolution
//! - `DeferredQueue` / `DeferToken`: Cancellable delayed operations
//!
//! ## Turn Flow
//!
//! ```text
//! attempt_flip(a) -> Accepted
//! attempt_flip(b) -> Matched { game_complete }   (selection cleared now)
//!                 -> Mismatched                  (selection cleared by the
//!                                                 deferred mismatch clear)
//! ```

pub mod deferred;
pub mod game;
pub mod outcome;
pub mod selection;

pub use deferred::{DeferToken, DeferredKind, DeferredQueue, ScheduledOp};
pub use game::GameEngine;
pub use outcome::{DeferredEvent, EngineSnapshot, FlipOutcome};
pub use selection::{FlippedSelection, SELECTION_CAPACITY};
