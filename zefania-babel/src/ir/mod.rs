//! Intermediate Representation (IR) for parsed Bibles.
//!
//! Every dialect parser produces a [`BibleDocument`]; every serializer consumes one.

pub mod nodes;
pub mod stats;

pub use nodes::{BibleDocument, BookEntry, ChapterEntry, VerseEntry, DEFAULT_LANGUAGE};
pub use stats::{generate_stats, BibleStats};
