use crate::common::fixture;
use std::collections::HashMap;
use zefania_babel::{
    convert, convert_to_zefania, parse, sanitize_prolog, FormatError, InvalidReason,
    ParseOptions, XmlDialect,
};

const GENESIS: &str = r#"<bible>
  <book name="Genesis" number="1">
    <chapter number="1">
      <verse number="1">In the beginning...</verse>
    </chapter>
  </book>
</bible>"#;

#[test]
fn test_simple_document_to_zefania() {
    let doc = parse(GENESIS).expect("Failed to parse");
    let xml = convert_to_zefania(&doc).expect("Failed to convert");

    assert!(xml.starts_with("<?xml"));
    assert!(xml.contains(r#"<BIBLEBOOK bnumber="1" bname="Genesis" bsname="Gn">"#));
    assert!(xml.contains(r#"<CHAPTER cnumber="1">"#));
    assert!(xml.contains(r#"<VERS vnumber="1">In the beginning...</VERS>"#));
    assert_eq!(sanitize_prolog(&xml), xml);
}

#[test]
fn test_convert_reports_dialect_and_stats() {
    let conversion = convert(
        &fixture("osis", "john.xml"),
        &ParseOptions::default(),
        &HashMap::new(),
    )
    .unwrap();

    assert_eq!(conversion.dialect, XmlDialect::Osis);
    assert_eq!(conversion.stats.books, 2);
    assert_eq!(conversion.stats.chapters, 3);
    assert_eq!(conversion.stats.verses, 6);
    assert!(conversion.xml.contains("biblename=\"King James Version (1769)\""));
    assert!(conversion.xml.contains("<language>ENG</language>"));

    let json = serde_json::to_value(conversion.stats).unwrap();
    assert_eq!(json["verses"], 6);
}

#[test]
fn test_metadata_overrides_reach_the_output() {
    let mut output = HashMap::new();
    output.insert("title".to_string(), "Custom".to_string());
    output.insert("publisher".to_string(), "Someone".to_string());

    let conversion = convert(GENESIS, &ParseOptions::default(), &output).unwrap();
    assert!(conversion.xml.contains("biblename=\"Custom\""));
    assert!(conversion.xml.contains("<publisher>Someone</publisher>"));
}

#[test]
fn test_unknown_book_fails_validation() {
    let source = r#"<bible><book name="Enoque"><chapter number="1"><verse number="1">Andou Enoque com Deus</verse></chapter></book></bible>"#;

    let doc = parse(source).unwrap();
    assert_eq!(doc.books[0].number, 0);

    let err = convert(source, &ParseOptions::default(), &HashMap::new()).unwrap_err();
    assert_eq!(
        err,
        FormatError::InvalidDocument(InvalidReason::BookWithoutNumber {
            book: "Enoque".to_string()
        })
    );
}

#[test]
fn test_fatal_errors_are_distinct() {
    let options = ParseOptions::default();
    let none = HashMap::new();

    assert!(matches!(
        convert("<bible><book>", &options, &none),
        Err(FormatError::MalformedXml(_))
    ));
    assert!(matches!(
        convert("<rss><channel/></rss>", &options, &none),
        Err(FormatError::UnsupportedFormat(_))
    ));
    assert_eq!(
        convert("<bible><book name=\"Genesis\"/></bible>", &options, &none).unwrap_err(),
        FormatError::NoBooksFound
    );
}

#[test]
fn test_leading_junk_before_declaration_is_tolerated() {
    let source = format!("\u{feff}\n\n  {GENESIS}");
    let doc = parse(&source).unwrap();
    assert_eq!(doc.books.len(), 1);
}

#[test]
fn test_inline_emphasis_reaches_the_output() {
    let source = r#"<bible><book name="Genesis" number="1"><chapter number="1">
        <verse number="3">And <b>God</b> said</verse>
    </chapter></book></bible>"#;
    let conversion = convert(source, &ParseOptions::default(), &HashMap::new()).unwrap();
    assert!(conversion
        .xml
        .contains(r#"<VERS vnumber="3">And <i>God</i> said</VERS>"#));
}

#[test]
fn test_declaration_text_inside_a_comment_is_left_alone() {
    let source = r#"<bible><!-- <?xml version="1.0"?> --><book name="Genesis" number="1">
        <chapter number="1"><verse number="1">In the beginning</verse></chapter>
    </book></bible>"#;
    let doc = parse(source).unwrap();
    assert_eq!(doc.books[0].chapters[0].verses[0].text, "In the beginning");
}
