//! OSIS (Open Scripture Information Standard) input
//!
//! Parsing only. Books are `div` elements with `type="book"`, possibly nested inside
//! grouping divs. Chapters and verses are read in either shape OSIS allows:
//!
//! - containers: `<verse osisID="Gen.1.1">text</verse>`
//! - milestones: `<verse sID="Gen.1.1" osisID="Gen.1.1"/>text<verse eID="Gen.1.1"/>`,
//!   where the text may run across `p`, `lg` and `l` elements
//!
//! Strong's-tagged `w` words are kept as plain words with the punctuation between them.
//! Notes and titles inside the text are dropped.

mod parser;

use crate::error::FormatError;
use crate::format::{Format, ParseOptions};
use crate::ir::BibleDocument;
use crate::xml::XmlNode;

pub const DEFAULT_TITLE: &str = "OSIS Bible";

pub struct OsisFormat;

impl Format for OsisFormat {
    fn name(&self) -> &str {
        "osis"
    }

    fn description(&self) -> &str {
        "Open Scripture Information Standard (OSIS) XML"
    }

    fn file_extensions(&self) -> &[&str] {
        &["osis", "xml"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse_tree(
        &self,
        tree: &XmlNode,
        options: &ParseOptions,
    ) -> Result<BibleDocument, FormatError> {
        parser::parse_tree(tree, options)
    }
}
