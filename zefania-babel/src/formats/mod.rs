//! Format implementations
//!
//! One module per Bible XML dialect. Every parser produces a
//! [`crate::ir::BibleDocument`]; only Zefania is written back out.

pub(crate) mod common;
pub mod osis;
pub mod simple;
pub mod zefania;

pub use osis::OsisFormat;
pub use simple::SimpleFormat;
pub use zefania::{ZefaniaFormat, ZefaniaInfo};
