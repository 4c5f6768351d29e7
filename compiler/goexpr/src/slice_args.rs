//! Argument lists of `{ children... }`-style slice interpolations.

use goexpr_lexer_core::{RawTag, Span};
use tracing::{debug, trace};

use crate::brackets::BracketStack;
use crate::error::ExtractError;
use crate::token_stream::TokenStream;

/// Text up to the first top-level `}` (or end of input), trimmed.
///
/// `"a, b, \"c\"}</a>"` gives `a, b, "c"`; an empty list gives `""`. The
/// arguments are not validated as expressions, only balanced.
///
/// # Errors
///
/// Fails on a malformed token or unbalanced brackets.
pub fn slice_args(src: &str) -> Result<&str, ExtractError> {
    slice_args_span(src).map(|span| span.slice(src))
}

/// Span form of [`slice_args`]. An empty list is an empty span at the
/// terminator.
///
/// # Errors
///
/// Fails on a malformed token or unbalanced brackets.
pub fn slice_args_span(src: &str) -> Result<Span, ExtractError> {
    scan_slice_args(src).inspect_err(|err| debug!(%err, "slice args rejected"))
}

fn scan_slice_args(src: &str) -> Result<Span, ExtractError> {
    let mut tokens = TokenStream::new(src)?;
    let mut brackets = BracketStack::new();
    let mut fragment: Option<Span> = None;

    let terminator = loop {
        let tok = tokens.next_significant()?;
        match tok.tag {
            RawTag::Eof => {
                brackets.ensure_closed()?;
                break tok;
            }
            RawTag::RightBrace if brackets.is_top_level() => break tok,
            _ => {
                brackets.track(tok)?;
                fragment = Some(fragment.map_or(tok.span, |span| span.merge(tok.span)));
            }
        }
    };

    let span = fragment.unwrap_or(Span::point(terminator.span.start));
    trace!(%span, terminator = terminator.tag.name(), "slice args extracted");
    Ok(span)
}
