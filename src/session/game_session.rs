//! Game session: settings, grid catalog, asset source and engine together.
//!
//! This is what a screen owns. Every settings change validates first and
//! only then deals a new game, so a bad choice leaves the current game and
//! settings exactly as they were.

use tracing::info;

use crate::assets::AssetSource;
use crate::core::{EngineConfig, Settings};
use crate::engine::GameEngine;
use crate::error::ConfigError;
use crate::grid::{GridCatalog, GridDimensions};

/// One player's game screen state.
pub struct GameSession<A: AssetSource> {
    catalog: GridCatalog,
    assets: A,
    settings: Settings,
    dimensions: GridDimensions,
    engine: GameEngine,
}

impl<A: AssetSource> GameSession<A> {
    /// Validate `settings` and deal the first game.
    ///
    /// ## Errors
    ///
    /// Any grid or asset misconfiguration for `settings`.
    pub fn start(
        config: EngineConfig,
        catalog: GridCatalog,
        assets: A,
        settings: Settings,
    ) -> Result<Self, ConfigError> {
        let dimensions = catalog.dimensions_for(settings.tier, settings.grid_index)?;

        let mut session = Self {
            catalog,
            assets,
            settings: settings.clone(),
            dimensions,
            engine: GameEngine::new(config),
        };
        session.deal(settings, dimensions)?;
        Ok(session)
    }

    /// Start over with the current settings.
    pub fn new_game(&mut self) -> Result<(), ConfigError> {
        self.deal(self.settings.clone(), self.dimensions)
    }

    /// Switch to new settings and start a new game.
    pub fn apply_settings(&mut self, settings: Settings) -> Result<(), ConfigError> {
        let dimensions = self
            .catalog
            .dimensions_for(settings.tier, settings.grid_index)?;
        self.deal(settings, dimensions)
    }

    /// Switch card theme and start a new game.
    pub fn set_theme(&mut self, theme: impl Into<String>) -> Result<(), ConfigError> {
        let settings = Settings {
            theme: theme.into(),
            ..self.settings.clone()
        };
        self.apply_settings(settings)
    }

    /// Switch grid and start a new game.
    pub fn set_grid(&mut self, tier: u8, grid_index: usize) -> Result<(), ConfigError> {
        let settings = Settings {
            tier,
            grid_index,
            ..self.settings.clone()
        };
        self.apply_settings(settings)
    }

    fn deal(&mut self, settings: Settings, dimensions: GridDimensions) -> Result<(), ConfigError> {
        let assets = self.assets.load(settings.tier, &settings.theme)?;

        self.engine
            .new_game(dimensions.cell_count(), &assets.fronts, &assets.back)?;

        info!(
            theme = %settings.theme,
            tier = settings.tier,
            grid = %dimensions,
            "dealt"
        );

        self.settings = settings;
        self.dimensions = dimensions;
        Ok(())
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Current grid layout.
    #[must_use]
    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    #[must_use]
    pub fn catalog(&self) -> &GridCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// The engine, for flips and deferred operations.
    pub fn engine_mut(&mut self) -> &mut GameEngine {
        &mut self.engine
    }
}
