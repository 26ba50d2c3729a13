//! Shared configuration loader for notion-md.
//!
//! `defaults/notion.default.toml` is embedded into the binary so that the documented defaults
//! and runtime behavior stay in sync. Applications layer user files on top of those defaults via
//! [`Loader`] before deserializing into [`NotionConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use notion_babel::formats::markdown::RenderRules;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/notion.default.toml");

/// File picked up from the working directory when present.
pub const LOCAL_CONFIG_FILE: &str = "notion-md.toml";

/// Top-level configuration consumed by notion-md.
#[derive(Debug, Clone, Deserialize)]
pub struct NotionConfig {
    pub render: RenderConfig,
    pub output: OutputConfig,
}

/// Mirrors the knobs exposed by the Markdown renderer.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub indent_string: String,
    pub image_placeholder: String,
    pub file_placeholder: String,
}

impl From<RenderConfig> for RenderRules {
    fn from(config: RenderConfig) -> Self {
        RenderRules {
            indent_string: config.indent_string,
            image_placeholder: config.image_placeholder,
            file_placeholder: config.file_placeholder,
        }
    }
}

impl From<&RenderConfig> for RenderRules {
    fn from(config: &RenderConfig) -> Self {
        RenderRules {
            indent_string: config.indent_string.clone(),
            image_placeholder: config.image_placeholder.clone(),
            file_placeholder: config.file_placeholder.clone(),
        }
    }
}

/// What `convert` writes around the rendered page.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub frontmatter: bool,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<NotionConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<NotionConfig, ConfigError> {
    Loader::new().build()
}
