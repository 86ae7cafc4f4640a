//! Asset source contract and the bundled-theme naming convention.
//!
//! A theme is a directory of images. By convention the back image is the
//! one file whose name starts with `1{theme}_back.` (the leading `1` sorts
//! it first); every other file is a front image. The engine only ever sees
//! the resulting identifiers.

use rustc_hash::FxHashMap;

use crate::cards::ImageId;
use crate::error::ConfigError;

/// Images available to one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeAssets {
    /// Candidate face images (unordered).
    pub fronts: Vec<ImageId>,
    /// The shared back image.
    pub back: ImageId,
}

impl ThemeAssets {
    /// Split a theme's file paths into back and front images.
    ///
    /// ## Errors
    ///
    /// `MissingBackImage` if no file follows the back image convention.
    pub fn from_file_names<I, S>(theme: &str, paths: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let back_prefix = format!("1{theme}_back.");
        let mut back = None;
        let mut fronts = Vec::new();

        for path in paths {
            let path = path.as_ref();
            let file_name = path.rsplit('/').next().unwrap_or(path);

            if file_name.starts_with(&back_prefix) {
                back = Some(ImageId::new(path));
            } else {
                fronts.push(ImageId::new(path));
            }
        }

        let back = back.ok_or_else(|| ConfigError::MissingBackImage {
            theme: theme.to_string(),
        })?;

        Ok(Self { fronts, back })
    }
}

/// Supplies images for a tier and theme.
pub trait AssetSource {
    /// Load the images for `theme`.
    ///
    /// `tier` is passed so sources can ship per-difficulty sets; sources
    /// without such sets ignore it.
    fn load(&self, tier: u8, theme: &str) -> Result<ThemeAssets, ConfigError>;
}

/// Asset source backed by in-memory file listings.
#[derive(Clone, Debug, Default)]
pub struct InMemoryAssets {
    themes: FxHashMap<String, Vec<String>>,
}

impl InMemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a theme's file paths.
    #[must_use]
    pub fn with_theme<I, S>(mut self, theme: impl Into<String>, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.themes
            .insert(theme.into(), paths.into_iter().map(Into::into).collect());
        self
    }

    /// Registered theme names, sorted.
    #[must_use]
    pub fn themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl AssetSource for InMemoryAssets {
    fn load(&self, _tier: u8, theme: &str) -> Result<ThemeAssets, ConfigError> {
        let paths = self
            .themes
            .get(theme)
            .ok_or_else(|| ConfigError::UnknownTheme(theme.to_string()))?;

        ThemeAssets::from_file_names(theme, paths)
    }
}
