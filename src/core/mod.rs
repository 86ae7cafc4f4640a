//! Core building blocks: deterministic RNG and configuration.

pub mod config;
pub mod rng;

pub use config::{EngineConfig, Settings, DEFAULT_COMPLETION_DELAY, DEFAULT_MISMATCH_DELAY};
pub use rng::{GameRng, GameRngState};
