//! Structural checks run before a document is serialized.
//!
//! Validation is all-or-nothing: the first problem aborts the conversion and is reported
//! with the offending book, chapter or verse. Blank content that is merely empty after
//! trimming passes here and is skipped later by the serializer.

use crate::books;
use crate::error::{FormatError, InvalidReason};
use crate::ir::BibleDocument;
use log::warn;
use std::borrow::Cow;

/// Give books with number 0 a canonical number (and short name) looked up by name.
///
/// Books that cannot be resolved keep number 0 and are left for [`validate`] to reject.
pub fn resolve_book_numbers(doc: &mut BibleDocument) {
    for book in doc.books.iter_mut().filter(|book| book.number == 0) {
        match books::normalize_book_name(&book.name) {
            Some(canonical) => {
                book.number = canonical.number;
                if book.short_name.trim().is_empty() {
                    book.short_name = canonical.short_name.to_string();
                }
            }
            None => warn!("Cannot resolve a book number for '{}'", book.name),
        }
    }
}

pub fn validate(doc: &BibleDocument) -> Result<(), FormatError> {
    let invalid = |reason| Err(FormatError::InvalidDocument(reason));

    if doc.books.is_empty() {
        return invalid(InvalidReason::EmptyBooks);
    }

    for (index, book) in doc.books.iter().enumerate() {
        if book.name.trim().is_empty() {
            return invalid(InvalidReason::BookWithoutName { index });
        }
        if book.number == 0 {
            return invalid(InvalidReason::BookWithoutNumber {
                book: book.name.clone(),
            });
        }

        for chapter in &book.chapters {
            if chapter.number == 0 {
                return invalid(InvalidReason::ChapterWithoutNumber {
                    book: book.name.clone(),
                });
            }

            for verse in &chapter.verses {
                if verse.number == 0 {
                    return invalid(InvalidReason::VerseWithoutNumber {
                        book: book.name.clone(),
                        chapter: chapter.number,
                    });
                }
                if verse.text.is_empty() {
                    return invalid(InvalidReason::VerseWithoutText {
                        book: book.name.clone(),
                        chapter: chapter.number,
                        verse: verse.number,
                    });
                }
            }
        }
    }

    Ok(())
}

/// Resolve missing book numbers (copying only when needed), then validate.
pub(crate) fn prepare(doc: &BibleDocument) -> Result<Cow<'_, BibleDocument>, FormatError> {
    let doc = if doc.books.iter().any(|book| book.number == 0) {
        let mut owned = doc.clone();
        resolve_book_numbers(&mut owned);
        Cow::Owned(owned)
    } else {
        Cow::Borrowed(doc)
    };
    validate(&doc)?;
    Ok(doc)
}
