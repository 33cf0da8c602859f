use crate::common::{fixture, verse_triples};
use std::collections::HashMap;
use zefania_babel::{
    convert_to_zefania, BibleDocument, BookEntry, ChapterEntry, FormatRegistry, VerseEntry,
};

fn sample() -> BibleDocument {
    let mut doc = BibleDocument::new("Round Trip");
    for (number, name) in [(43, "John"), (1, "Genesis")] {
        let mut book = BookEntry::new(name, number);
        for chapter_number in [2, 1] {
            let mut chapter = ChapterEntry::new(chapter_number);
            chapter.verses.push(VerseEntry::new(
                2,
                format!("{name} {chapter_number}:2 says A & B < C > D"),
            ));
            chapter
                .verses
                .push(VerseEntry::new(1, format!("  {name} {chapter_number}:1 \"quoted\"  ")));
            book.chapters.push(chapter);
        }
        doc.books.push(book);
    }
    doc
}

#[test]
fn test_round_trip_keeps_every_verse() {
    let original = sample();
    let xml = convert_to_zefania(&original).expect("Failed to convert");

    let registry = FormatRegistry::with_defaults();
    let reparsed = registry.parse(&xml, "zefania").expect("Failed to re-parse");

    assert_eq!(verse_triples(&reparsed), verse_triples(&original));
    assert_eq!(reparsed.title, "Round Trip");
}

#[test]
fn test_round_trip_drops_blank_verses_only() {
    let mut original = sample();
    original.books[0].chapters[0]
        .verses
        .push(VerseEntry::new(3, "   "));
    let xml = convert_to_zefania(&original).unwrap();
    let reparsed = FormatRegistry::with_defaults()
        .parse(&xml, "zefania")
        .unwrap();

    let expected: Vec<_> = verse_triples(&original)
        .into_iter()
        .filter(|(_, _, _, text)| !text.is_empty())
        .collect();
    assert_eq!(verse_triples(&reparsed), expected);
}

#[test]
fn test_fixture_reexport_is_sorted() {
    let registry = FormatRegistry::with_defaults();
    let doc = registry
        .parse(&fixture("zefania", "ruth_jonah.xml"), "zefania")
        .unwrap();

    let mut options = HashMap::new();
    options.insert("date".to_string(), "2024-05-01".to_string());
    let xml = registry
        .serialize_with_options(&doc, "zefania", &options)
        .unwrap();

    let ruth = xml.find("bname=\"Ruth\"").unwrap();
    let jonah = xml.find("bname=\"Jonah\"").unwrap();
    assert!(ruth < jonah);
    let ch1 = xml.find("<CHAPTER cnumber=\"1\">").unwrap();
    let ch2 = xml.find("<CHAPTER cnumber=\"2\">").unwrap();
    assert!(ch1 < ch2);
    assert!(xml.contains("<date>2024-05-01</date>"));
    assert!(xml.contains("<BIBLEBOOK bnumber=\"8\" bname=\"Ruth\" bsname=\"Rt\">"));
}
