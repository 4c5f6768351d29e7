//! Boundary extractors for Go fragments embedded in templates.
//!
//! A template parser hands each extractor the source from the start of a
//! construct to the end of the file. The extractor tokenizes only as far as
//! needed and returns the span of the embedded Go fragment: the header of an
//! `if`/`for`/`switch`, a `case`/`default` label, a bare expression (with an
//! optional `...` spread), or a slice argument list.
//!
//! Extraction never evaluates or validates the fragment beyond bracket
//! balance and the small grammar needed to find where it ends.
//!
//! # Debug Environment Variables
//!
//! - `RUST_LOG=goexpr=debug`: log rejected fragments with their errors.
//! - `RUST_LOG=goexpr=trace`: also log every extracted span.

mod brackets;
mod case;
mod construct;
mod error;
mod expression;
pub mod guards;
mod header;
pub mod keywords;
mod slice_args;
mod token_stream;

pub use brackets::{Bracket, BracketStack};
pub use case::case_label;
pub use construct::Construct;
pub use error::{BracketErrorKind, Expectation, ExtractError, LexErrorKind};
pub use expression::expression;
pub use goexpr_lexer_core::{RawTag, Span};
pub use header::{for_header, if_header, switch_header};
pub use slice_args::{slice_args, slice_args_span};
pub use token_stream::{Token, TokenStream};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=goexpr=debug` or `RUST_LOG=goexpr=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A test harness may already have installed a subscriber.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
