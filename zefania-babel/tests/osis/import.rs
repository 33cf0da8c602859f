use crate::common::{fixture, verse_triples};
use std::collections::HashMap;
use zefania_babel::{convert, FormatError, FormatRegistry, ParseOptions, XmlDialect};

#[test]
fn test_osis_import_fixture() {
    let registry = FormatRegistry::with_defaults();
    let doc = registry
        .parse(&fixture("osis", "john.xml"), "osis")
        .expect("Failed to parse");

    assert_eq!(doc.title, "King James Version (1769)");
    assert_eq!(doc.language.as_deref(), Some("ENG"));

    let books: Vec<_> = doc.books.iter().map(|b| (b.number, b.name.as_str())).collect();
    assert_eq!(books, vec![(43, "John"), (62, "1 John")]);

    let john = doc.book(43).unwrap();
    let chapters: Vec<_> = john.chapters.iter().map(|c| c.number).collect();
    assert_eq!(chapters, vec![1, 3]);
    assert_eq!(
        john.chapter(1).unwrap().verse(1).unwrap().text,
        "In the beginning was the Word"
    );
    assert_eq!(john.chapter(3).unwrap().verse(16).unwrap().text, "For God so loved the world");
}

#[test]
fn test_osis_milestone_verses_are_kept() {
    let registry = FormatRegistry::with_defaults();
    let doc = registry.parse(&fixture("osis", "john.xml"), "osis").unwrap();

    let first_john: Vec<_> = verse_triples(&doc)
        .into_iter()
        .filter(|(book, ..)| *book == 62)
        .map(|(_, chapter, verse, text)| (chapter, verse, text))
        .collect();
    assert_eq!(
        first_john,
        vec![
            (4, 8, "He that loveth not knoweth not God; for God is love.".to_string()),
            (4, 9, "In this was manifested the love of God".to_string()),
        ]
    );
}

#[test]
fn test_osis_milestone_layout_converts() {
    let conversion = convert(
        &fixture("osis", "genesis_milestones.xml"),
        &ParseOptions::default(),
        &HashMap::new(),
    )
    .expect("milestone document should convert");
    assert_eq!(conversion.dialect, XmlDialect::Osis);

    let triples = verse_triples(&conversion.document);
    let genesis: Vec<_> = triples
        .iter()
        .map(|(book, chapter, verse, text)| (*book, *chapter, *verse, text.as_str()))
        .collect();
    assert_eq!(
        genesis,
        vec![
            (1, 1, 1, "In the beginning God created the heaven and the earth."),
            (1, 1, 2, "And the earth was without form, and void."),
            (1, 1, 3, "And God said, Let there be light: and there was light."),
            (1, 2, 1, "Thus the heavens and the earth were finished."),
        ]
    );
    assert!(conversion.xml.contains(r#"<VERS vnumber="3">And God said, Let there be light: and there was light.</VERS>"#));
}

#[test]
fn test_osis_is_detected() {
    let registry = FormatRegistry::with_defaults();
    let (dialect, _) = registry
        .parse_detected(&fixture("osis", "john.xml"), &ParseOptions::default())
        .unwrap();
    assert_eq!(dialect, XmlDialect::Osis);
}

#[test]
fn test_osis_cannot_be_written() {
    let registry = FormatRegistry::with_defaults();
    let doc = registry.parse(&fixture("osis", "john.xml"), "osis").unwrap();
    assert!(matches!(
        registry.serialize(&doc, "osis"),
        Err(FormatError::NotSupported(_))
    ));
}
