//! Shared configuration loader for the zefania toolchain.
//!
//! `defaults/zefania.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`ZefaniaConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use zefania_babel::{ParseOptions, ZefaniaInfo};

const DEFAULT_TOML: &str = include_str!("../defaults/zefania.default.toml");

/// File picked up from the working directory when present.
pub const LOCAL_CONFIG_FILE: &str = "zefania.toml";

/// Top-level configuration consumed by zefania applications.
#[derive(Debug, Clone, Deserialize)]
pub struct ZefaniaConfig {
    pub parse: ParseConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParseConfig {
    pub fuzzy_book_names: bool,
}

impl From<&ParseConfig> for ParseOptions {
    fn from(config: &ParseConfig) -> Self {
        ParseOptions {
            fuzzy_book_names: config.fuzzy_book_names,
        }
    }
}

/// Zefania output metadata. Unset optional fields defer to the source document.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub title: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub date: Option<String>,
    pub subject: String,
    pub format: String,
    pub creator: String,
    pub publisher: String,
    pub version: String,
    pub status: String,
    pub revision: String,
    #[serde(rename = "type")]
    pub bible_type: String,
    pub header_comments: bool,
}

impl OutputConfig {
    /// Flatten into the string options understood by the Zefania serializer.
    pub fn to_options(&self) -> HashMap<String, String> {
        let mut options = HashMap::new();
        let optional = [
            ("title", &self.title),
            ("description", &self.description),
            ("language", &self.language),
            ("date", &self.date),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                options.insert(key.to_string(), value.clone());
            }
        }

        let required = [
            ("subject", &self.subject),
            ("format", &self.format),
            ("creator", &self.creator),
            ("publisher", &self.publisher),
            ("version", &self.version),
            ("status", &self.status),
            ("revision", &self.revision),
            ("type", &self.bible_type),
        ];
        for (key, value) in required {
            options.insert(key.to_string(), value.clone());
        }
        options.insert(
            "header-comments".to_string(),
            self.header_comments.to_string(),
        );
        options
    }
}

impl From<&OutputConfig> for ZefaniaInfo {
    fn from(config: &OutputConfig) -> Self {
        ZefaniaInfo {
            title: config.title.clone(),
            description: config.description.clone(),
            language: config.language.clone(),
            subject: config.subject.clone(),
            format: config.format.clone(),
            creator: config.creator.clone(),
            publisher: config.publisher.clone(),
            version: config.version.clone(),
            status: config.status.clone(),
            revision: config.revision.clone(),
            bible_type: config.bible_type.clone(),
            date: config.date.clone(),
            header_comments: config.header_comments,
        }
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
    pub fn build(self) -> Result<ZefaniaConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ZefaniaConfig, ConfigError> {
    Loader::new().build()
}
