use crate::error::FormatError;
use crate::format::ParseOptions;
use crate::formats::common::{number_field, ordinal, prune_empty, resolve_book};
use crate::ir::{BibleDocument, ChapterEntry, VerseEntry};
use crate::xml::{as_sequence, XmlNode};
use log::debug;

pub(super) fn parse_tree(
    tree: &XmlNode,
    options: &ParseOptions,
) -> Result<BibleDocument, FormatError> {
    let bible = tree
        .get("xmlbible")
        .ok_or_else(|| FormatError::UnsupportedFormat("expected an XMLBIBLE root".to_string()))?;

    let info = bible.get("information");
    let title = info
        .and_then(|info| info.field_text("title"))
        .or_else(|| bible.field_text("biblename"))
        .unwrap_or_default();

    let mut doc = BibleDocument::new(title);
    doc.description = info
        .and_then(|info| info.field_text("description"))
        .map(str::to_string);
    doc.language = info
        .and_then(|info| info.field_text("language"))
        .map(str::to_string);

    let books = bible.get("biblebook").map(as_sequence).unwrap_or_default();
    for book_node in books {
        let mut book = resolve_book(
            book_node.field_text_any(&["bname", "name"]),
            number_field(book_node, &["bnumber"]),
            book_node.field_text("bsname"),
            options,
        );

        let chapters = book_node.get("chapter").map(as_sequence).unwrap_or_default();
        for (chapter_index, chapter_node) in chapters.into_iter().enumerate() {
            let number = number_field(chapter_node, &["cnumber", "number"])
                .unwrap_or_else(|| ordinal(chapter_index));
            let mut chapter = ChapterEntry::new(number);

            let verses = chapter_node.get("vers").map(as_sequence).unwrap_or_default();
            for (verse_index, verse_node) in verses.into_iter().enumerate() {
                let number = number_field(verse_node, &["vnumber", "number"])
                    .unwrap_or_else(|| ordinal(verse_index));
                let text = verse_node.deep_text().unwrap_or_default();
                chapter.verses.push(VerseEntry::new(number, text));
            }
            book.chapters.push(chapter);
        }

        debug!("Parsed {} with {} chapters", book.name, book.chapters.len());
        doc.books.push(book);
    }

    prune_empty(&mut doc);
    Ok(doc)
}
