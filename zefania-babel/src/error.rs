//! Error types for format operations

use std::fmt;

/// Errors that can occur while decoding, parsing, validating or serializing a Bible.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// The input could not be decoded as XML at all
    #[error("Malformed XML: {0}")]
    MalformedXml(String),
    /// The root element matches none of the known dialects
    #[error("Unsupported XML format: {0}")]
    UnsupportedFormat(String),
    /// Parsing succeeded structurally but produced no usable books
    #[error("No books found in the document")]
    NoBooksFound,
    /// The document failed validation before serialization
    #[error("Invalid document: {0}")]
    InvalidDocument(InvalidReason),
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Format does not support the requested direction
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}

/// The first structural problem found while validating a [`crate::ir::BibleDocument`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    EmptyBooks,
    /// Book at `index` (0-based, document order) has an empty name
    BookWithoutName { index: usize },
    /// Book could not be mapped to a canonical number
    BookWithoutNumber { book: String },
    ChapterWithoutNumber { book: String },
    VerseWithoutNumber { book: String, chapter: u32 },
    VerseWithoutText { book: String, chapter: u32, verse: u32 },
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::EmptyBooks => write!(f, "book list is empty"),
            InvalidReason::BookWithoutName { index } => {
                write!(f, "book #{} has no name", index + 1)
            }
            InvalidReason::BookWithoutNumber { book } => {
                write!(f, "book '{book}' has no canonical number")
            }
            InvalidReason::ChapterWithoutNumber { book } => {
                write!(f, "a chapter of book '{book}' has no number")
            }
            InvalidReason::VerseWithoutNumber { book, chapter } => {
                write!(f, "a verse in {book} {chapter} has no number")
            }
            InvalidReason::VerseWithoutText {
                book,
                chapter,
                verse,
            } => write!(f, "verse {book} {chapter}:{verse} has no text"),
        }
    }
}

impl From<roxmltree::Error> for FormatError {
    fn from(err: roxmltree::Error) -> Self {
        FormatError::MalformedXml(err.to_string())
    }
}
