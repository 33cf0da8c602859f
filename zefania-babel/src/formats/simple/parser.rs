use crate::error::FormatError;
use crate::format::ParseOptions;
use crate::formats::common::{
    collection, inline_markup, number_field, ordinal, prune_empty, resolve_book,
};
use crate::ir::{BibleDocument, ChapterEntry, VerseEntry};
use crate::xml::{as_sequence, XmlNode};
use log::debug;

const NUMBER_FIELDS: [&str; 3] = ["number", "n", "id"];

/// Children of a verse that are never part of its own text.
const VERSE_FIELDS: [&str; 5] = ["number", "n", "id", "text", "content"];

pub(super) fn parse_tree(
    tree: &XmlNode,
    options: &ParseOptions,
) -> Result<BibleDocument, FormatError> {
    let root = tree.get("bible").or_else(|| tree.get("books")).ok_or_else(|| {
        FormatError::UnsupportedFormat("expected a bible or books root".to_string())
    })?;

    let title = root.field_text_any(&["title", "translation", "name"]);
    let mut doc = BibleDocument::new(title.unwrap_or_default());
    doc.description = root.field_text("description").map(str::to_string);
    doc.language = root.field_text("language").map(str::to_string);

    let mut book_nodes = Vec::new();
    collect_books(root, &mut book_nodes);

    for book_node in book_nodes {
        let mut book = resolve_book(
            book_node.field_text("name"),
            number_field(book_node, &NUMBER_FIELDS),
            book_node.field_text_any(&["shortName", "short_name"]),
            options,
        );

        let chapters = collection(book_node, "chapters", "chapter");
        for (chapter_index, chapter_node) in chapters.into_iter().enumerate() {
            let number =
                number_field(chapter_node, &NUMBER_FIELDS).unwrap_or_else(|| ordinal(chapter_index));
            let mut chapter = ChapterEntry::new(number);

            let verses = collection(chapter_node, "verses", "verse");
            for (verse_index, verse_node) in verses.into_iter().enumerate() {
                let number =
                    number_field(verse_node, &NUMBER_FIELDS).unwrap_or_else(|| ordinal(verse_index));
                chapter
                    .verses
                    .push(VerseEntry::new(number, verse_text(verse_node)));
            }
            book.chapters.push(chapter);
        }

        debug!("Parsed {} with {} chapters", book.name, book.chapters.len());
        doc.books.push(book);
    }

    prune_empty(&mut doc);
    Ok(doc)
}

/// Book elements under `container`, through `books` wrappers and `testament` groups.
fn collect_books<'a>(container: &'a XmlNode, out: &mut Vec<&'a XmlNode>) {
    if let Some(wrappers) = container.get("books") {
        for wrapper in as_sequence(wrappers) {
            if wrapper.has("book") || wrapper.has("testament") {
                collect_books(wrapper, out);
            } else {
                out.push(wrapper);
            }
        }
    }
    if let Some(books) = container.get("book") {
        out.extend(as_sequence(books));
    }
    if let Some(testaments) = container.get("testament") {
        for testament in as_sequence(testaments) {
            collect_books(testament, out);
        }
    }
}

/// A `text` field, else the verse's own content, else a `content` field.
/// Inline emphasis is kept as markup for the cleanup pass.
fn verse_text(node: &XmlNode) -> String {
    let field = |name: &str| {
        node.get(name)
            .map(|child| inline_markup(child, &[]))
            .filter(|text| !text.is_empty())
    };
    field("text")
        .or_else(|| Some(inline_markup(node, &VERSE_FIELDS)).filter(|text| !text.is_empty()))
        .or_else(|| field("content"))
        .unwrap_or_default()
}
