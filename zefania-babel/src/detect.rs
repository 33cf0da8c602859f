//! Dialect detection from the shape of a decoded tree.
//!
//! Only the root element name matters, compared case-insensitively. OSIS files whose
//! root is `osisText` (no `osis` wrapper) are recognized when it holds at least one `div`.

use crate::xml::XmlNode;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XmlDialect {
    Zefania,
    Osis,
    Simple,
    /// A bare `<books>` root, parsed exactly like [`XmlDialect::Simple`]
    Books,
    Unknown,
}

impl XmlDialect {
    /// Name of the registered format that parses this dialect.
    pub fn format_name(&self) -> Option<&'static str> {
        match self {
            XmlDialect::Zefania => Some("zefania"),
            XmlDialect::Osis => Some("osis"),
            XmlDialect::Simple | XmlDialect::Books => Some("simple"),
            XmlDialect::Unknown => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            XmlDialect::Zefania => "zefania",
            XmlDialect::Osis => "osis",
            XmlDialect::Simple => "simple",
            XmlDialect::Books => "books",
            XmlDialect::Unknown => "unknown",
        }
    }
}

impl fmt::Display for XmlDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a tree produced by [`crate::xml::decode`].
pub fn detect(tree: &XmlNode) -> XmlDialect {
    if tree.has("xmlbible") {
        XmlDialect::Zefania
    } else if tree.has("osis") || tree.get("osisText").is_some_and(|text| text.has("div")) {
        XmlDialect::Osis
    } else if tree.has("bible") {
        XmlDialect::Simple
    } else if tree.has("books") {
        XmlDialect::Books
    } else {
        XmlDialect::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::decode;

    fn detect_str(source: &str) -> XmlDialect {
        detect(&decode(source).unwrap())
    }

    #[test]
    fn detects_each_dialect() {
        assert_eq!(detect_str("<XMLBIBLE/>"), XmlDialect::Zefania);
        assert_eq!(detect_str("<xmlbible/>"), XmlDialect::Zefania);
        assert_eq!(detect_str("<osis><osisText/></osis>"), XmlDialect::Osis);
        assert_eq!(
            detect_str(r#"<osisText><div type="book"/></osisText>"#),
            XmlDialect::Osis
        );
        assert_eq!(detect_str("<bible/>"), XmlDialect::Simple);
        assert_eq!(detect_str("<Bible/>"), XmlDialect::Simple);
        assert_eq!(detect_str("<books/>"), XmlDialect::Books);
    }

    #[test]
    fn anything_else_is_unknown() {
        assert_eq!(detect_str("<html><body/></html>"), XmlDialect::Unknown);
        assert_eq!(detect_str("<osisText/>"), XmlDialect::Unknown);
    }

    #[test]
    fn books_and_simple_share_a_parser() {
        assert_eq!(XmlDialect::Books.format_name(), Some("simple"));
        assert_eq!(XmlDialect::Simple.format_name(), Some("simple"));
        assert_eq!(XmlDialect::Unknown.format_name(), None);
        assert_eq!(XmlDialect::Books.to_string(), "books");
    }
}
