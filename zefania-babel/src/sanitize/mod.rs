//! Text-level cleanup applied on the way out.
//!
//! - [`clean`] turns raw verse text into safe Zefania element content.
//! - [`sanitize_prolog`] makes sure a serialized document starts with its XML declaration.

mod prolog;
mod text;

pub use prolog::{sanitize_prolog, DEFAULT_DECLARATION};
pub use text::clean;
