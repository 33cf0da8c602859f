//! Bible XML interoperability, converging on Zefania
//!
//!     This crate reads Bible texts written in several XML dialects (Zefania, OSIS and a
//!     loose "simple" nested schema), maps them onto one intermediate representation and
//!     writes that representation out as Zefania XML Bible Markup.
//!
//!     This is a pure lib, that is, it powers the zefania cli but is shell agnostic: no code
//!     here should suppose a shell environment, be it printing to std streams or reading env
//!     vars. Diagnostics go through the `log` facade and the host decides where they land.
//!
//! Architecture
//!
//!     Dialects disagree on element names, nesting, where numbers live and whether a
//!     collection is wrapped. Rather than walking each DOM differently, the source is first
//!     decoded into a loose name-keyed tree (./xml/mod.rs), the root shape picks the dialect
//!     (./detect.rs), and a per-dialect parser reads the tree into the IR (./ir/mod.rs).
//!     Book names from every dialect go through the canonical registry (./books/mod.rs),
//!     so the IR always speaks in the 66-book canonical numbering.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery, selection and detection
//!     ├── detect.rs               # Dialect detection from the decoded tree
//!     ├── pipeline.rs             # parse / convert_to_zefania / convert
//!     ├── validate.rs             # Checks run before serialization
//!     ├── books                   # Canonical book registry and name normalization
//!     ├── sanitize                # Verse text and XML prolog cleanup
//!     ├── xml                     # Generic XML-to-tree decoder
//!     ├── formats
//!     │   ├── <format>
//!     │   │   ├── parser.rs
//!     │   │   ├── serializer.rs   # zefania only
//!     │   │   └── mod.rs
//!     │   └── common              # Extraction helpers shared by parsers
//!     └── ir                      # Intermediate Representation and statistics
//!
//! Testing
//!     tests
//!     └── <format>
//!         ├── <testname>.rs
//!         └── fixtures/<docname>.xml
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Formats
//!
//!     Format specific capabilities are implemented with the Format trait (./format.rs).
//!     Parsers work on the decoded tree so detection and parsing share a single decode.
//!     Zefania is the only output dialect; OSIS and simple are input only.
//!
//! Lossiness
//!
//!     Conversion is intentionally lossy: the IR keeps book, chapter, verse and text only.
//!     Notes, headings, cross references and Strong's numbers are dropped, and inline markup
//!     is reduced to italics on output.

pub mod books;
pub mod detect;
pub mod error;
pub mod format;
pub mod formats;
pub mod ir;
pub mod pipeline;
pub mod registry;
pub mod sanitize;
pub mod validate;
pub mod xml;

pub use books::{
    get_all_books, get_book_by_number, is_valid_book, lookup, normalize_book_name,
    CanonicalBook, MatchMode,
};
pub use detect::{detect, XmlDialect};
pub use error::{FormatError, InvalidReason};
pub use format::{Format, ParseOptions};
pub use formats::ZefaniaInfo;
pub use ir::{generate_stats, BibleDocument, BibleStats, BookEntry, ChapterEntry, VerseEntry};
pub use pipeline::{convert, convert_to_zefania, parse, Conversion};
pub use registry::FormatRegistry;
pub use sanitize::{clean, sanitize_prolog};
