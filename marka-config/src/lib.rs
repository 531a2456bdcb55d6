//! Shared style-configuration loader for the marka toolchain.
//!
//! `defaults/markers.default.json` is embedded into every binary so a bare
//! install always has a working style set. Applications layer user files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`MarkerConfig`], then turn the raw entries into validated engine styles.
//!
//! The raw shape:
//!
//! ```json
//! {
//!     "parent-classnames": ["marker"],
//!     "styles": [
//!         { "name": "Highlight", "markup": "==", "classnames": ["highlight"] }
//!     ]
//! }
//! ```
//!
//! Parent classnames are prepended to every style's own classnames in
//! declared order, duplicates allowed. Missing keys deserialize to empty
//! values and are rejected by validation, so every malformed entry surfaces
//! as a [`ConfigError`] naming the offending key rather than a panic or a
//! silently skipped style.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat};
use marka_engine::{ConfigError, MarkupEngine, Style};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_JSON: &str = include_str!("../defaults/markers.default.json");

/// Raw style configuration as read from disk. Validation happens in
/// [`MarkerConfig::styles`]; until then this is plain deserialized data.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkerConfig {
    #[serde(rename = "parent-classnames", default)]
    pub parent_classnames: Vec<String>,
    #[serde(default)]
    pub styles: Vec<StyleEntry>,
}

/// One raw `styles` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub markup: String,
    #[serde(default)]
    pub classnames: Vec<String>,
}

impl MarkerConfig {
    /// Validate the raw entries into engine styles.
    ///
    /// A fresh list is built on every call; nothing is cached or mutated in
    /// place, so re-validating after a config reload cannot observe stale
    /// state.
    pub fn styles(&self) -> Result<Vec<Style>, ConfigError> {
        if self.styles.is_empty() {
            return Err(ConfigError::NoStyles);
        }

        self.styles
            .iter()
            .map(|entry| {
                let classnames = self
                    .parent_classnames
                    .iter()
                    .chain(entry.classnames.iter())
                    .cloned()
                    .collect();
                Style::new(entry.name.clone(), entry.markup.clone(), classnames)
            })
            .collect()
    }

    /// Compile the validated styles into a [`MarkupEngine`].
    pub fn engine(&self) -> Result<MarkupEngine, ConfigError> {
        MarkupEngine::new(self.styles()?)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder =
            Config::builder().add_source(File::from_str(DEFAULT_JSON, FileFormat::Json));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Json)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Json)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MarkerConfig, ConfigError> {
        let config = self
            .builder
            .build()
            .map_err(|err| ConfigError::Read(err.to_string()))?;
        config
            .try_deserialize()
            .map_err(|err| ConfigError::Read(err.to_string()))
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MarkerConfig, ConfigError> {
    Loader::new().build()
}
