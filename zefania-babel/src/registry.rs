//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats can be registered and retrieved by name, or picked by sniffing the
//! decoded document.

use crate::detect::{detect, XmlDialect};
use crate::error::FormatError;
use crate::format::{Format, ParseOptions};
use crate::ir::BibleDocument;
use crate::xml;
use log::info;
use std::collections::HashMap;

/// Registry of Bible formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::default();
/// let (dialect, doc) = registry.parse_detected(&source, &ParseOptions::default())?;
/// let zefania = registry.serialize(&doc, "zefania")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Parse source text using the specified format
    pub fn parse(&self, source: &str, format: &str) -> Result<BibleDocument, FormatError> {
        self.parse_with_options(source, format, &ParseOptions::default())
    }

    pub fn parse_with_options(
        &self,
        source: &str,
        format: &str,
        options: &ParseOptions,
    ) -> Result<BibleDocument, FormatError> {
        let fmt = self.parser(format)?;
        fmt.parse_with_options(source, options)
    }

    /// Decode the source, detect its dialect and parse it with the matching format.
    ///
    /// An unrecognized root is an error; there is no fallback parser.
    pub fn parse_detected(
        &self,
        source: &str,
        options: &ParseOptions,
    ) -> Result<(XmlDialect, BibleDocument), FormatError> {
        let tree = xml::decode(source)?;
        let dialect = detect(&tree);
        let format = dialect.format_name().ok_or_else(|| {
            FormatError::UnsupportedFormat(format!(
                "root element <{}> matches no known Bible dialect",
                tree.keys().first().copied().unwrap_or_default()
            ))
        })?;
        info!("Detected format: {dialect}");

        let doc = self.parser(format)?.parse_tree(&tree, options)?;
        Ok((dialect, doc))
    }

    /// Serialize a document using the specified format
    pub fn serialize(&self, doc: &BibleDocument, format: &str) -> Result<String, FormatError> {
        self.serialize_with_options(doc, format, &HashMap::new())
    }

    /// Serialize a document using the specified format and options
    pub fn serialize_with_options(
        &self,
        doc: &BibleDocument,
        format: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "Format '{format}' does not support serialization"
            )));
        }
        fmt.serialize_with_options(doc, options)
    }

    fn parser(&self, format: &str) -> Result<&dyn Format, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_parsing() {
            return Err(FormatError::NotSupported(format!(
                "Format '{format}' does not support parsing"
            )));
        }
        Ok(fmt)
    }

    /// Create a registry with default formats registered
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::zefania::ZefaniaFormat::default());
        registry.register(crate::formats::osis::OsisFormat);
        registry.register(crate::formats::simple::SimpleFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
