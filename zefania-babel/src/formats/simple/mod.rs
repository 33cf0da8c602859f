//! Simple nested Bible XML input
//!
//! Parsing only. Covers the loose family of hand-rolled schemas that spell a Bible as
//! nested books, chapters and verses:
//!
//!     <bible title="...">
//!       <books>                       optional wrapper, or a bare <books> root
//!         <testament name="Old">      optional grouping, flattened away
//!           <book name="Genesis" number="1">
//!             <chapter number="1">    or <chapters><chapter>…
//!               <verse number="1">In the beginning...</verse>
//!
//! Numbers are read from `number`, `n` or `id`; verse text from a `text` child or
//! attribute, the element's own text, or a `content` child.

mod parser;

use crate::error::FormatError;
use crate::format::{Format, ParseOptions};
use crate::ir::BibleDocument;
use crate::xml::XmlNode;

pub struct SimpleFormat;

impl Format for SimpleFormat {
    fn name(&self) -> &str {
        "simple"
    }

    fn description(&self) -> &str {
        "Simple nested bible/book/chapter/verse XML"
    }

    fn file_extensions(&self) -> &[&str] {
        &["xml"]
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
