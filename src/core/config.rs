//! Engine configuration and player settings.
//!
//! - `EngineConfig`: timing of deferred operations and the RNG seed
//! - `Settings`: the theme / tier / grid choice made on the settings screen
//!
//! Both are plain serde structs so a host app can load them from whatever
//! format it already uses.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Default delay before a mismatched pair flips back.
pub const DEFAULT_MISMATCH_DELAY: Duration = Duration::from_millis(1000);

/// Default delay before the completion animation is triggered.
pub const DEFAULT_COMPLETION_DELAY: Duration = Duration::from_millis(1500);

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// How long a mismatched pair stays face-up before the clear fires.
    pub mismatch_delay: Duration,

    /// How long after the last match the completion animation is due.
    pub completion_delay: Duration,

    /// Fixed RNG seed. `None` draws one from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mismatch_delay: DEFAULT_MISMATCH_DELAY,
            completion_delay: DEFAULT_COMPLETION_DELAY,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mismatch-clear delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }

    /// Set the completion animation delay.
    #[must_use]
    pub fn with_completion_delay(mut self, delay: Duration) -> Self {
        self.completion_delay = delay;
        self
    }

    /// Use a fixed seed for reproducible deals.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the RNG this configuration asks for.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}

/// Theme and grid choice.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Settings {
    /// Card theme (asset bundle name).
    pub theme: String,

    /// Difficulty tier key in the grid catalog.
    pub tier: u8,

    /// Index into the tier's grid combinations.
    pub grid_index: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "Characters".to_string(),
            tier: 4,
            grid_index: 1,
        }
    }
}

impl Settings {
    /// Create settings for a theme and grid.
    pub fn new(theme: impl Into<String>, tier: u8, grid_index: usize) -> Self {
        Self {
            theme: theme.into(),
            tier,
            grid_index,
        }
    }
}
