//! Canonical book registry
//!
//!     The 66 books of the Protestant canon, each with its canonical number, standard
//!     (English) name, short name, OSIS identifier and the localized spellings and
//!     abbreviations seen in the wild. A reverse index maps every normalized spelling to
//!     its book; it is built once on first use and only read afterwards, so it can be
//!     shared freely between concurrent conversions.
//!
//! Lookup
//!
//!     Names are normalized before lookup: trimmed, inner whitespace collapsed to a single
//!     space, everything that is not a word character or a space removed, lowercased.
//!     An exact hit in the index wins. Otherwise, when fuzzy matching is enabled, the index
//!     is scanned in insertion order (Genesis to Revelation, standard name, then variants,
//!     then OSIS id) and the first key that contains the input, or is contained by it, wins.
//!     That scan is a heuristic: short inputs can hit an unrelated book
//!     (e.g. "1º Samuel" resolves to Amos through the key "am").

mod table;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::Serialize;

/// One book of the canon. All instances live in a static table.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct CanonicalBook {
    /// Position in the canon, 1..=66
    pub number: u32,
    pub standard_name: &'static str,
    pub short_name: &'static str,
    pub osis_id: &'static str,
    /// Every known spelling of the book, matched case-insensitively
    pub variants: &'static [&'static str],
}

/// How much effort to spend resolving a name that is not an exact index key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Only exact (normalized) matches
    Exact,
    /// Exact match first, then the insertion-ordered substring scan
    #[default]
    Fuzzy,
}

static REVERSE_INDEX: Lazy<IndexMap<String, &'static CanonicalBook>> = Lazy::new(|| {
    let mut index = IndexMap::new();
    for book in table::BOOKS.iter() {
        let keys = std::iter::once(book.standard_name)
            .chain(book.variants.iter().copied())
            .chain(std::iter::once(book.osis_id));
        for key in keys {
            let key = normalize_key(key);
            if !key.is_empty() {
                index.entry(key).or_insert(book);
            }
        }
    }
    index
});

/// Normalize a raw name into a reverse-index key.
pub fn normalize_key(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == ' ')
        .collect::<String>()
        .to_lowercase()
}

/// Resolve a raw book name to its canonical record, using fuzzy matching as a fallback.
pub fn normalize_book_name(raw: &str) -> Option<&'static CanonicalBook> {
    lookup(raw, MatchMode::Fuzzy)
}

/// Resolve a raw book name with an explicit matching policy.
pub fn lookup(raw: &str, mode: MatchMode) -> Option<&'static CanonicalBook> {
    let key = normalize_key(raw);
    // An empty key is a substring of everything; never let it through to the scan.
    if key.is_empty() {
        return None;
    }

    if let Some(book) = REVERSE_INDEX.get(&key) {
        return Some(*book);
    }

    match mode {
        MatchMode::Exact => None,
        MatchMode::Fuzzy => REVERSE_INDEX
            .iter()
            .find(|(candidate, _)| candidate.contains(&key) || key.contains(candidate.as_str()))
            .map(|(_, book)| *book),
    }
}

pub fn get_book_by_number(number: u32) -> Option<&'static CanonicalBook> {
    table::BOOKS.iter().find(|book| book.number == number)
}

/// All books in canonical order.
pub fn get_all_books() -> &'static [CanonicalBook] {
    &table::BOOKS
}

pub fn is_valid_book(raw: &str) -> bool {
    normalize_book_name(raw).is_some()
}
