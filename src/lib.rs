//! # match-pairs
//!
//! Game-state engine for a memory / match-pairs card game: a grid of
//! face-down cards, two flips per turn, matches stay up, mismatches flip
//! back, and the game ends when every pair is found.
//!
//! ## Design Principles
//!
//! 1. **UI-Agnostic**: The engine decides whether a flip is legal and what
//!    state results. Rendering and animation timing belong to the caller,
//!    which observes outcomes and card states.
//!
//! 2. **Single Owner**: Cards live in one `Vec` owned by the engine. The
//!    flipped selection holds positions, never references.
//!
//! 3. **Data-Based Cancellation**: Deferred operations carry a generation
//!    token. Dealing a new game bumps the generation, so stale timers are
//!    no-ops whatever scheduler fires them.
//!
//! ## Modules
//!
//! - `core`: Deterministic RNG, engine configuration, settings
//! - `error`: Fatal configuration errors
//! - `cards`: Image ids, card lifecycle, deck builder
//! - `grid`: Difficulty tiers and grid layouts
//! - `engine`: Flip handling, resolution, deferred operations
//! - `assets`: Asset source contract
//! - `session`: Settings-driven game session
//!
//! ## Example
//!
//! ```
//! use match_pairs::{EngineConfig, FlipOutcome, GameEngine, ImageId};
//!
//! let mut engine = GameEngine::new(EngineConfig::new().with_seed(42));
//! let pool = [ImageId::from("A"), ImageId::from("B")];
//! engine.new_game(4, &pool, &ImageId::from("back")).unwrap();
//!
//! assert_eq!(engine.attempt_flip(0), FlipOutcome::Accepted);
//! assert_eq!(engine.attempt_flip(0), FlipOutcome::RejectedAlreadyResolved);
//! ```

pub mod assets;
pub mod cards;
pub mod core;
pub mod engine;
pub mod error;
pub mod grid;
pub mod session;

// Re-export commonly used types
pub use crate::core::{EngineConfig, GameRng, GameRngState, Settings};

pub use crate::error::ConfigError;

pub use crate::cards::{Card, CardState, DeckBuilder, ImageId};

pub use crate::grid::{GridCatalog, GridDimensions, GridTier};

pub use crate::engine::{
    DeferToken, DeferredEvent, DeferredKind, EngineSnapshot, FlipOutcome, FlippedSelection,
    GameEngine, ScheduledOp,
};

pub use crate::assets::{AssetSource, InMemoryAssets, ThemeAssets};

pub use crate::session::GameSession;
