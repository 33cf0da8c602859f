//! Core data structures for the Intermediate Representation (IR).

use serde::{Deserialize, Serialize};

/// Default language code used when a source does not declare one.
pub const DEFAULT_LANGUAGE: &str = "POR";

/// A parsed Bible, independent of the dialect it was read from.
///
/// Parsers do not have to emit books, chapters or verses in order; serializers sort by
/// number before writing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BibleDocument {
    pub title: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub books: Vec<BookEntry>,
}

/// A book after name normalization.
///
/// `name`, `number` and `short_name` are the canonical values when the source name was
/// recognized; otherwise the raw name is kept and `number` is whatever the source said,
/// or 0 if it said nothing usable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntry {
    pub name: String,
    pub number: u32,
    pub short_name: String,
    pub chapters: Vec<ChapterEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterEntry {
    pub number: u32,
    pub verses: Vec<VerseEntry>,
}

/// A single verse. `text` may contain `<i>` markup once sanitized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerseEntry {
    pub number: u32,
    pub text: String,
}

impl BibleDocument {
    pub fn new(title: impl Into<String>) -> Self {
        BibleDocument {
            title: title.into(),
            description: None,
            language: None,
            books: Vec::new(),
        }
    }

    /// The declared language, or [`DEFAULT_LANGUAGE`].
    pub fn language_or_default(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    pub fn book(&self, number: u32) -> Option<&BookEntry> {
        self.books.iter().find(|b| b.number == number)
    }
}

impl BookEntry {
    pub fn new(name: impl Into<String>, number: u32) -> Self {
        BookEntry {
            name: name.into(),
            number,
            short_name: String::new(),
            chapters: Vec::new(),
        }
    }

    pub fn chapter(&self, number: u32) -> Option<&ChapterEntry> {
        self.chapters.iter().find(|c| c.number == number)
    }
}

impl ChapterEntry {
    pub fn new(number: u32) -> Self {
        ChapterEntry {
            number,
            verses: Vec::new(),
        }
    }

    pub fn verse(&self, number: u32) -> Option<&VerseEntry> {
        self.verses.iter().find(|v| v.number == number)
    }
}

impl VerseEntry {
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        VerseEntry {
            number,
            text: text.into(),
        }
    }
}
