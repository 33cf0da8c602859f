use crate::common::fixture;
use zefania_babel::{FormatRegistry, ParseOptions, XmlDialect};

#[test]
fn test_simple_import_fixture() {
    let registry = FormatRegistry::with_defaults();
    let doc = registry
        .parse(&fixture("simple", "psalms_matthew.xml"), "simple")
        .expect("Failed to parse");

    assert_eq!(doc.title, "Almeida Corrigida Fiel");
    assert_eq!(doc.language_or_default(), "POR");

    let books: Vec<_> = doc
        .books
        .iter()
        .map(|b| (b.number, b.name.as_str(), b.short_name.as_str()))
        .collect();
    assert_eq!(books, vec![(19, "Psalms", "Sl"), (40, "Matthew", "Mt")]);

    let psalm = doc.book(19).unwrap().chapter(23).unwrap();
    assert_eq!(
        psalm.verse(1).unwrap().text,
        "O SENHOR é o meu pastor, nada me faltará."
    );
    let beatitudes = doc.book(40).unwrap().chapter(5).unwrap();
    assert_eq!(
        beatitudes.verse(4).unwrap().text,
        "Bem-aventurados os que choram"
    );
}

#[test]
fn test_simple_is_detected() {
    let registry = FormatRegistry::with_defaults();
    let (dialect, doc) = registry
        .parse_detected(
            &fixture("simple", "psalms_matthew.xml"),
            &ParseOptions::default(),
        )
        .unwrap();
    assert_eq!(dialect, XmlDialect::Simple);
    assert_eq!(doc.books.len(), 2);
}
