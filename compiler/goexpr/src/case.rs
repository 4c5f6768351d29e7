//! `case` and `default` labels.

use goexpr_lexer_core::{RawTag, Span};
use tracing::{debug, trace};

use crate::brackets::BracketStack;
use crate::error::{Expectation, ExtractError};
use crate::keywords::Keyword;
use crate::token_stream::TokenStream;

/// A switch label, from the keyword through its terminating `:`.
///
/// `"case x > 3, x < 4:\n<div>"` gives `case x > 3, x < 4:`. For `default`
/// only trivia may sit between the keyword and the colon. Colons nested in
/// brackets (slice expressions, composite keys) do not end the label. A
/// top-level `:=` or `=` is rejected: assignments in a case clause are only
/// valid under `select`.
///
/// # Errors
///
/// Fails if `src` does not start with `case` or `default`, a `case` has no
/// expression or contains an assignment, no top-level `:` follows, or
/// brackets are unbalanced.
pub fn case_label(src: &str) -> Result<Span, ExtractError> {
    scan_case_label(src).inspect_err(|err| debug!(%err, "case label rejected"))
}

fn scan_case_label(src: &str) -> Result<Span, ExtractError> {
    let mut tokens = TokenStream::new(src)?;
    let first = tokens.next_significant()?;

    let span = match first.keyword(src) {
        Some(Keyword::Default) => {
            let colon = tokens.next_significant()?;
            if colon.tag != RawTag::Colon {
                return Err(ExtractError::expected(
                    Expectation::Colon,
                    colon.tag,
                    colon.span.start,
                ));
            }
            first.span.merge(colon.span)
        }
        Some(Keyword::Case) => {
            let mut brackets = BracketStack::new();
            let mut has_expression = false;
            loop {
                let tok = tokens.next_significant()?;
                match tok.tag {
                    RawTag::Eof => {
                        brackets.ensure_closed()?;
                        return Err(ExtractError::expected(
                            Expectation::Colon,
                            tok.tag,
                            tok.span.start,
                        ));
                    }
                    RawTag::Colon if brackets.is_top_level() => {
                        if !has_expression {
                            return Err(ExtractError::expected(
                                Expectation::Expression,
                                tok.tag,
                                tok.span.start,
                            ));
                        }
                        break first.span.merge(tok.span);
                    }
                    RawTag::ColonEqual | RawTag::Equal if brackets.is_top_level() => {
                        return Err(ExtractError::expected(
                            Expectation::Colon,
                            tok.tag,
                            tok.span.start,
                        ));
                    }
                    _ => {
                        brackets.track(tok)?;
                        has_expression = true;
                    }
                }
            }
        }
        _ => {
            return Err(ExtractError::expected(
                Expectation::CaseLabel,
                first.tag,
                first.span.start,
            ));
        }
    };

    trace!(%span, "case label extracted");
    Ok(span)
}
