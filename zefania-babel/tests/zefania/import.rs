use crate::common::fixture;
use zefania_babel::{FormatRegistry, XmlDialect};

#[test]
fn test_zefania_import_fixture() {
    let registry = FormatRegistry::with_defaults();
    let doc = registry
        .parse(&fixture("zefania", "ruth_jonah.xml"), "zefania")
        .expect("Failed to parse");

    assert_eq!(doc.title, "Almeida Revista e Corrigida");
    assert_eq!(doc.description.as_deref(), Some("Texto de exemplo"));

    // Source order is kept; sorting happens on output.
    let books: Vec<_> = doc
        .books
        .iter()
        .map(|b| (b.number, b.name.as_str(), b.short_name.as_str()))
        .collect();
    assert_eq!(books, vec![(32, "Jonah", "Jn"), (8, "Ruth", "Rt")]);

    let ruth = doc.book(8).unwrap();
    let chapter_one = ruth.chapter(1).unwrap();
    assert_eq!(chapter_one.verses.len(), 2, "empty verse 17 is dropped");
    assert_eq!(
        chapter_one.verse(16).unwrap().text,
        "Disse, porém, Rute: Não me instes para que te deixe"
    );
}

#[test]
fn test_zefania_is_detected() {
    let registry = FormatRegistry::with_defaults();
    let (dialect, doc) = registry
        .parse_detected(&fixture("zefania", "ruth_jonah.xml"), &Default::default())
        .unwrap();
    assert_eq!(dialect, XmlDialect::Zefania);
    assert_eq!(doc.books.len(), 2);
}
