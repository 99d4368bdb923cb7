//! Shared configuration loader for the specgen toolchain.
//!
//! `defaults/specgen.default.toml` is embedded into every binary so that
//! docs and runtime behavior stay in sync. Applications layer user-specific
//! files on top of those defaults via [`Loader`] before deserializing into
//! [`SpecgenConfig`]. Cache directory, output path and source URLs all live
//! here: nothing in the pipeline reads process-wide mutable state.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/specgen.default.toml");

/// Top-level configuration consumed by specgen applications.
#[derive(Debug, Clone, Deserialize)]
pub struct SpecgenConfig {
    pub fetch: FetchConfig,
    pub output: OutputConfig,
    pub sources: SourcesConfig,
    pub semantic_expansion: SemanticExpansionConfig,
}

/// Document retrieval knobs: cache location and freshness, HTTP identity.
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    pub cache_dir: String,
    pub ttl_seconds: u64,
    pub timeout_seconds: u64,
    pub user_agent: String,
    pub use_cache: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub spec_path: String,
}

/// The source documents, one per extraction concern.
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    pub scalars: String,
    pub semantics: String,
    pub intrinsics: String,
    pub keywords: String,
    pub reserved_words: String,
}

/// Inclusive numeric range for family placeholder expansion.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SemanticExpansionConfig {
    pub lo: u32,
    pub hi: u32,
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

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<SpecgenConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<SpecgenConfig, ConfigError> {
    Loader::new().build()
}
