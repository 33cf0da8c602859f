//! Zefania XML Bible Markup
//!
//! Both directions are supported. Output is the only dialect this crate writes:
//!
//!     <XMLBIBLE xmlns="http://www.zefania.de/2009/xmlbible" ... biblename="...">
//!       <INFORMATION> ...metadata... </INFORMATION>
//!       <BIBLEBOOK bnumber="1" bname="Genesis" bsname="Gn">
//!         <CHAPTER cnumber="1">
//!           <VERS vnumber="1">In the beginning...</VERS>
//!
//! # Lossy Conversions
//!
//! - Verse markup other than italics is flattened on output (see [`crate::sanitize::clean`]).
//! - On input, verse text is the full descendant text of `VERS`, so `<i>` and `STYLE`
//!   markup survive as plain text only.
//! - Books whose names the registry recognizes take canonical numbers and short names;
//!   source `bnumber`/`bsname` values are then ignored.

mod parser;
mod serializer;

use crate::error::FormatError;
use crate::format::{Format, ParseOptions};
use crate::ir::BibleDocument;
use crate::validate;
use crate::xml::XmlNode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_TITLE: &str = "Bíblia Sagrada";
pub const DEFAULT_DESCRIPTION: &str = "Convertida para formato Zefania XML";

/// Metadata written to the `XMLBIBLE` attributes and the `INFORMATION` block.
///
/// `title`, `description` and `language` override the document's own values when set.
/// A missing `date` means today (UTC).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZefaniaInfo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub subject: String,
    pub format: String,
    pub creator: String,
    pub publisher: String,
    pub version: String,
    pub status: String,
    pub revision: String,
    #[serde(rename = "type")]
    pub bible_type: String,
    pub date: Option<String>,
    /// Emit the customary pointer comments after the XML declaration
    pub header_comments: bool,
}

impl Default for ZefaniaInfo {
    fn default() -> Self {
        ZefaniaInfo {
            title: None,
            description: None,
            language: None,
            subject: "Holy Bible".to_string(),
            format: "Zefania XML Bible Markup Language".to_string(),
            creator: "Zefania XML Converter".to_string(),
            publisher: "Conversor Automático".to_string(),
            version: "1".to_string(),
            status: "v".to_string(),
            revision: "0".to_string(),
            bible_type: "x-bible".to_string(),
            date: None,
            header_comments: false,
        }
    }
}

impl ZefaniaInfo {
    /// Option keys accepted by [`ZefaniaInfo::from_options`].
    pub const OPTION_KEYS: [&'static str; 13] = [
        "title",
        "description",
        "language",
        "subject",
        "format",
        "creator",
        "publisher",
        "version",
        "status",
        "revision",
        "type",
        "date",
        "header-comments",
    ];

    /// Build from a string map, starting from the defaults. Unknown keys are rejected.
    pub fn from_options(options: &HashMap<String, String>) -> Result<Self, FormatError> {
        let mut info = ZefaniaInfo::default();
        for (key, value) in options {
            let value = value.clone();
            match key.as_str() {
                "title" => info.title = Some(value),
                "description" => info.description = Some(value),
                "language" => info.language = Some(value),
                "subject" => info.subject = value,
                "format" => info.format = value,
                "creator" => info.creator = value,
                "publisher" => info.publisher = value,
                "version" => info.version = value,
                "status" => info.status = value,
                "revision" => info.revision = value,
                "type" => info.bible_type = value,
                "date" => info.date = Some(value),
                "header-comments" => {
                    info.header_comments = match value.as_str() {
                        "true" | "yes" | "1" => true,
                        "false" | "no" | "0" => false,
                        other => {
                            return Err(FormatError::NotSupported(format!(
                                "Invalid value '{other}' for header-comments (expected true or false)"
                            )))
                        }
                    }
                }
                other => {
                    return Err(FormatError::NotSupported(format!(
                        "Unknown Zefania option '{other}' (expected one of: {})",
                        Self::OPTION_KEYS.join(", ")
                    )))
                }
            }
        }
        Ok(info)
    }
}

/// Format implementation for Zefania XML
#[derive(Default)]
pub struct ZefaniaFormat {
    info: ZefaniaInfo,
}

impl ZefaniaFormat {
    pub fn new(info: ZefaniaInfo) -> Self {
        Self { info }
    }
}

impl Format for ZefaniaFormat {
    fn name(&self) -> &str {
        "zefania"
    }

    fn description(&self) -> &str {
        "Zefania XML Bible Markup Language"
    }

    fn file_extensions(&self) -> &[&str] {
        &["xml"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse_tree(
        &self,
        tree: &XmlNode,
        options: &ParseOptions,
    ) -> Result<BibleDocument, FormatError> {
        parser::parse_tree(tree, options)
    }

    fn serialize(&self, doc: &BibleDocument) -> Result<String, FormatError> {
        let doc = validate::prepare(doc)?;
        Ok(serializer::serialize(&doc, &self.info))
    }

    fn serialize_with_options(
        &self,
        doc: &BibleDocument,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            return self.serialize(doc);
        }
        let info = ZefaniaInfo::from_options(options)?;
        let doc = validate::prepare(doc)?;
        Ok(serializer::serialize(&doc, &info))
    }
}
