//! Extraction helpers shared by the dialect parsers
//!
//!     Every dialect hands its parser the same loose tree, so the same chores come up in
//!     each of them: reading numbers out of attributes, finding a collection that may or
//!     may not be wrapped in a plural element, resolving a book name against the registry,
//!     and dropping content that turned out to be empty.

use crate::books::{self, CanonicalBook};
use crate::format::ParseOptions;
use crate::ir::{BibleDocument, BookEntry};
use crate::xml::{as_sequence, XmlChild, XmlNode};
use log::{debug, warn};

/// Parse the leading run of ASCII digits, the way lenient readers treat `"12a"` or `" 3 "`.
/// Zero and digit-less text give `None`.
pub(crate) fn parse_number(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse::<u32>().ok().filter(|n| *n > 0)
}

/// 1-based position, used when a source omits a chapter or verse number.
pub(crate) fn ordinal(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}

/// The first field among `names` whose text is a positive number.
pub(crate) fn number_field(node: &XmlNode, names: &[&str]) -> Option<u32> {
    names
        .iter()
        .filter_map(|name| node.field_text(name))
        .find_map(parse_number)
}

/// `"Gen.3.16"` → 16. Used for OSIS references.
pub(crate) fn trailing_segment_number(reference: &str) -> Option<u32> {
    reference.rsplit('.').next().and_then(parse_number)
}

/// Items of a collection that may be spelled `<chapters><chapter/>…</chapters>`,
/// `<chapters/>` repeated directly, or bare `<chapter/>` siblings.
pub(crate) fn collection<'a>(node: &'a XmlNode, wrapper: &str, item: &str) -> Vec<&'a XmlNode> {
    let mut items = Vec::new();
    if let Some(wrapped) = node.get(wrapper) {
        for entry in as_sequence(wrapped) {
            match entry.get(item) {
                Some(inner) => items.extend(as_sequence(inner)),
                None => items.push(entry),
            }
        }
    }
    if let Some(direct) = node.get(item) {
        items.extend(as_sequence(direct));
    }
    items
}

/// Inline elements whose markup survives into verse text as emphasis.
const EMPHASIS: [&str; 3] = ["i", "b", "strong"];

/// Text of `node` in document order, with emphasis elements written back as tags so
/// verse cleanup can fold them. Other elements contribute their text only; children
/// named in `skip` contribute nothing. Whitespace is collapsed.
pub(crate) fn inline_markup(node: &XmlNode, skip: &[&str]) -> String {
    let mut out = String::new();
    write_inline(node, skip, &mut out);
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn write_inline(node: &XmlNode, skip: &[&str], out: &mut String) {
    for child in node.children() {
        match child {
            XmlChild::Text(text) => out.push_str(text),
            XmlChild::Element(name, _) if skip.iter().any(|s| name.eq_ignore_ascii_case(s)) => {}
            XmlChild::Element(name, element) => {
                let emphasis = EMPHASIS.iter().any(|tag| name.eq_ignore_ascii_case(tag));
                if emphasis {
                    out.push_str("<i>");
                }
                write_inline(element, &[], out);
                if emphasis {
                    out.push_str("</i>");
                }
            }
        }
    }
}

/// Build a book header from whatever the source said about it.
///
/// A recognized name replaces every source value with the canonical record. Without a
/// usable name, a source number in 1..=66 selects the canonical record instead. Otherwise
/// the raw values are kept and a missing number stays 0 for later resolution.
pub(crate) fn resolve_book(
    name: Option<&str>,
    number: Option<u32>,
    short_name: Option<&str>,
    options: &ParseOptions,
) -> BookEntry {
    let raw_name = name.map(str::trim).unwrap_or_default();
    let canonical = books::lookup(raw_name, options.match_mode())
        .or_else(|| number.and_then(books::get_book_by_number));

    match canonical {
        Some(book) => {
            if !raw_name.is_empty() && raw_name != book.standard_name {
                debug!("Book '{raw_name}' resolved to {}", book.standard_name);
            }
            canonical_entry(book)
        }
        None => {
            warn!("Book '{raw_name}' is not in the registry, keeping source values");
            let mut entry = BookEntry::new(raw_name, number.unwrap_or(0));
            entry.short_name = short_name.map(str::trim).unwrap_or_default().to_string();
            entry
        }
    }
}

pub(crate) fn canonical_entry(book: &CanonicalBook) -> BookEntry {
    let mut entry = BookEntry::new(book.standard_name, book.number);
    entry.short_name = book.short_name.to_string();
    entry
}

/// Drop verses without a number or text, then chapters left without verses, then books
/// left without chapters. Each drop is logged.
pub(crate) fn prune_empty(doc: &mut BibleDocument) {
    for book in &mut doc.books {
        for chapter in &mut book.chapters {
            let book_name = &book.name;
            let chapter_number = chapter.number;
            chapter.verses.retain(|verse| {
                let keep = verse.number > 0 && !verse.text.trim().is_empty();
                if !keep {
                    warn!(
                        "Skipping empty verse {book_name} {chapter_number}:{}",
                        verse.number
                    );
                }
                keep
            });
        }

        let book_name = &book.name;
        book.chapters.retain(|chapter| {
            if chapter.verses.is_empty() {
                warn!("Skipping chapter {book_name} {} with no verses", chapter.number);
            }
            !chapter.verses.is_empty()
        });
    }

    doc.books.retain(|book| {
        if book.chapters.is_empty() {
            warn!("Skipping book '{}' with no chapters", book.name);
        }
        !book.chapters.is_empty()
    });
}
