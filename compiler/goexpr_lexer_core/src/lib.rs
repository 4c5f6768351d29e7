//! Low-level tokenizer for Go fragments embedded in templates.
//!
//! Standalone crate with no dependency on the extractors. It recognizes
//! host-language tokens well enough to tell when a scan position is inside a
//! string, rune, raw string, comment, identifier, number, or operator.
//!
//! The entry point is [`RawScanner`], which yields [`RawToken`] values
//! (`tag` + byte length) one at a time. Keyword resolution and bracket
//! tracking live in the `goexpr` crate.

mod cursor;
mod raw_scanner;
mod span;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::{tokenize, RawScanner};
pub use span::{Span, SpanError};
pub use tag::{RawTag, RawToken};
