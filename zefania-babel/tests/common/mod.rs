//! Shared helpers for the integration tests.

use std::fs;
use std::path::Path;
use zefania_babel::BibleDocument;

/// Read `tests/<format>/fixtures/<name>`.
pub fn fixture(format: &str, name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join(format)
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("cannot read fixture {}: {err}", path.display()))
}

/// Every verse as (book, chapter, verse, trimmed text), sorted.
pub fn verse_triples(doc: &BibleDocument) -> Vec<(u32, u32, u32, String)> {
    let mut triples: Vec<_> = doc
        .books
        .iter()
        .flat_map(|book| {
            book.chapters.iter().flat_map(move |chapter| {
                chapter.verses.iter().map(move |verse| {
                    (
                        book.number,
                        chapter.number,
                        verse.number,
                        verse.text.trim().to_string(),
                    )
                })
            })
        })
        .collect();
    triples.sort();
    triples
}
