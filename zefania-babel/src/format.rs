//! Format trait definition
//!
//! This module defines the core Format trait that all Bible dialects implement.
//! The trait provides a uniform interface for parsing into and serializing from a
//! [`BibleDocument`].

use crate::books::MatchMode;
use crate::error::FormatError;
use crate::ir::BibleDocument;
use crate::xml::{self, XmlNode};
use std::collections::HashMap;

/// Knobs shared by every parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Fall back to the substring scan when a book name is not an exact registry key
    pub fuzzy_book_names: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            fuzzy_book_names: true,
        }
    }
}

impl ParseOptions {
    pub fn match_mode(&self) -> MatchMode {
        if self.fuzzy_book_names {
            MatchMode::Fuzzy
        } else {
            MatchMode::Exact
        }
    }
}

/// Trait for Bible XML dialects
///
/// Parsing works on the decoded tree (see [`crate::xml`]) so that detection and parsing
/// share a single decode. Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_parsing(&self) -> bool {
///         true
///     }
///
///     fn parse_tree(
///         &self,
///         tree: &XmlNode,
///         options: &ParseOptions,
///     ) -> Result<BibleDocument, FormatError> {
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "zefania", "osis")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → BibleDocument)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (BibleDocument → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Build a [`BibleDocument`] from an already decoded tree.
    ///
    /// Default implementation returns NotSupported error.
    fn parse_tree(
        &self,
        _tree: &XmlNode,
        _options: &ParseOptions,
    ) -> Result<BibleDocument, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Decode source text and parse it with default options.
    fn parse(&self, source: &str) -> Result<BibleDocument, FormatError> {
        self.parse_with_options(source, &ParseOptions::default())
    }

    fn parse_with_options(
        &self,
        source: &str,
        options: &ParseOptions,
    ) -> Result<BibleDocument, FormatError> {
        let tree = xml::decode(source)?;
        self.parse_tree(&tree, options)
    }

    /// Serialize a BibleDocument into source text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _doc: &BibleDocument) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Serialize a BibleDocument, optionally using extra parameters.
    ///
    /// The default implementation delegates to [`Format::serialize`] and rejects any
    /// options; formats that take parameters override it.
    fn serialize_with_options(
        &self,
        doc: &BibleDocument,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(doc)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
