//! End-to-end conversion
//!
//!     source text → decode → detect → parse → validate → Zefania text → prolog repair
//!
//! Every step either succeeds or aborts the conversion; there is no partial output.

use crate::detect::XmlDialect;
use crate::error::FormatError;
use crate::format::ParseOptions;
use crate::ir::{generate_stats, BibleDocument, BibleStats};
use crate::registry::FormatRegistry;
use crate::sanitize::sanitize_prolog;
use log::info;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static REGISTRY: Lazy<FormatRegistry> = Lazy::new(FormatRegistry::with_defaults);

/// Result of [`convert`].
#[derive(Debug, Clone)]
pub struct Conversion {
    pub dialect: XmlDialect,
    pub document: BibleDocument,
    pub stats: BibleStats,
    /// Zefania XML, starting with its declaration
    pub xml: String,
}

/// Parse any supported dialect into a [`BibleDocument`].
///
/// An empty `books` list is not an error here; see [`convert`].
pub fn parse(source: &str) -> Result<BibleDocument, FormatError> {
    parse_with_options(source, &ParseOptions::default()).map(|(_, doc)| doc)
}

pub fn parse_with_options(
    source: &str,
    options: &ParseOptions,
) -> Result<(XmlDialect, BibleDocument), FormatError> {
    REGISTRY.parse_detected(source, options)
}

/// Validate and serialize a document as Zefania XML with default metadata.
///
/// Books without a number are resolved by name first; anything still invalid is
/// reported as [`FormatError::InvalidDocument`].
pub fn convert_to_zefania(doc: &BibleDocument) -> Result<String, FormatError> {
    convert_to_zefania_with_options(doc, &HashMap::new())
}

/// Like [`convert_to_zefania`], with metadata overrides
/// (see [`crate::formats::ZefaniaInfo::from_options`]).
pub fn convert_to_zefania_with_options(
    doc: &BibleDocument,
    output: &HashMap<String, String>,
) -> Result<String, FormatError> {
    let xml = REGISTRY.serialize_with_options(doc, "zefania", output)?;
    Ok(sanitize_prolog(&xml))
}

/// Run the whole pipeline on source text.
pub fn convert(
    source: &str,
    options: &ParseOptions,
    output: &HashMap<String, String>,
) -> Result<Conversion, FormatError> {
    let (dialect, document) = parse_with_options(source, options)?;
    if document.books.is_empty() {
        return Err(FormatError::NoBooksFound);
    }

    let stats = generate_stats(&document);
    info!(
        "Converting {} books, {} chapters, {} verses ({} words)",
        stats.books, stats.chapters, stats.verses, stats.words
    );

    let xml = convert_to_zefania_with_options(&document, output)?;
    Ok(Conversion {
        dialect,
        document,
        stats,
        xml,
    })
}
