//! XML prolog repair.

/// Declaration prepended when a document has none.
pub const DEFAULT_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Ensure the text starts at offset 0 with an XML declaration.
///
/// A leading byte-order mark and leading whitespace are dropped. Non-markup junk in front
/// of a later declaration is discarded. Text that already starts with markup is never
/// sliced, since a later `<?xml` there sits inside a comment, CDATA or text; it gets
/// [`DEFAULT_DECLARATION`] prepended like any document without a declaration.
pub fn sanitize_prolog(xml: &str) -> String {
    let stripped = xml.strip_prefix('\u{feff}').unwrap_or(xml).trim_start();

    if stripped.starts_with("<?xml") {
        return stripped.to_string();
    }

    match stripped.find("<?xml") {
        Some(start) if !stripped.starts_with('<') => stripped[start..].to_string(),
        _ => format!("{DEFAULT_DECLARATION}{stripped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_bom_and_leading_whitespace() {
        assert_eq!(
            sanitize_prolog("\u{feff}   <?xml version=\"1.0\"?><a/>"),
            "<?xml version=\"1.0\"?><a/>"
        );
    }

    #[test]
    fn prepends_declaration_when_missing() {
        assert_eq!(
            sanitize_prolog("<a/>"),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<a/>"
        );
    }

    #[test]
    fn drops_junk_before_a_late_declaration() {
        assert_eq!(
            sanitize_prolog("garbage\n<?xml version=\"1.0\"?>\n<a/>"),
            "<?xml version=\"1.0\"?>\n<a/>"
        );
    }

    #[test]
    fn declaration_text_inside_markup_is_not_a_cut_point() {
        let commented = "<bible><!-- <?xml --><book/></bible>";
        assert_eq!(
            sanitize_prolog(commented),
            format!("{DEFAULT_DECLARATION}{commented}")
        );

        let cdata = "<a><![CDATA[<?xml version=\"1.0\"?>]]></a>";
        assert!(sanitize_prolog(cdata).ends_with(cdata));
    }

    #[test]
    fn leaves_clean_documents_alone() {
        let xml = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<XMLBIBLE/>";
        assert_eq!(sanitize_prolog(xml), xml);
    }

    #[test]
    fn empty_input_gets_a_declaration() {
        assert_eq!(sanitize_prolog(""), DEFAULT_DECLARATION);
        assert_eq!(sanitize_prolog("\u{feff}\n\n"), DEFAULT_DECLARATION);
    }
}
