//! Summary counts over a [`BibleDocument`].

use super::nodes::BibleDocument;
use serde::Serialize;

/// Counts reported alongside a conversion.
///
/// `words` splits each verse on whitespace runs, so it is an approximation rather than a
/// locale-aware token count. `characters` counts Unicode scalar values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BibleStats {
    pub books: usize,
    pub chapters: usize,
    pub verses: usize,
    pub characters: usize,
    pub words: usize,
}

pub fn generate_stats(doc: &BibleDocument) -> BibleStats {
    let mut stats = BibleStats {
        books: doc.books.len(),
        ..BibleStats::default()
    };

    for book in &doc.books {
        stats.chapters += book.chapters.len();
        for chapter in &book.chapters {
            stats.verses += chapter.verses.len();
            for verse in &chapter.verses {
                stats.characters += verse.text.chars().count();
                stats.words += verse.text.split_whitespace().count();
            }
        }
    }

    stats
}
