//! `if`, `for` and `switch` headers.
//!
//! A header runs from after the keyword to the `{` that opens the block.
//! Braces that belong to the header itself are skipped: function literal
//! bodies and composite literals of explicit type literals
//! (`[]T{..}`, `map[K]V{..}`, `struct{ a int }{..}`). A composite literal of a bare
//! type name is not recognized, matching the host language, which requires
//! it to be parenthesized in this position.

use goexpr_lexer_core::{RawTag, Span};
use tracing::{debug, trace};

use crate::brackets::BracketStack;
use crate::error::{Expectation, ExtractError};
use crate::keywords::Keyword;
use crate::token_stream::{Token, TokenStream};

/// Condition of an `if` statement, e.g. `"if x := f(); x > 3 {"` gives
/// `x := f(); x > 3`.
///
/// # Errors
///
/// Fails if `src` does not start with `if`, the condition is empty, no
/// top-level `{` follows, or brackets are unbalanced.
pub fn if_header(src: &str) -> Result<Span, ExtractError> {
    header(src, Keyword::If)
}

/// Clause of a `for` statement. The clause may be empty (`for {`).
///
/// # Errors
///
/// Fails if `src` does not start with `for`, no top-level `{` follows, or
/// brackets are unbalanced.
pub fn for_header(src: &str) -> Result<Span, ExtractError> {
    header(src, Keyword::For)
}

/// Header of a `switch` statement. The header may be empty (`switch {`).
///
/// # Errors
///
/// Fails if `src` does not start with `switch`, no top-level `{` follows,
/// or brackets are unbalanced.
pub fn switch_header(src: &str) -> Result<Span, ExtractError> {
    header(src, Keyword::Switch)
}

fn header(src: &str, keyword: Keyword) -> Result<Span, ExtractError> {
    scan_header(src, keyword)
        .inspect_err(|err| debug!(keyword = keyword.as_str(), %err, "header rejected"))
}

fn scan_header(src: &str, keyword: Keyword) -> Result<Span, ExtractError> {
    let mut tokens = TokenStream::new(src)?;
    tokens.expect_keyword(keyword)?;

    let mut brackets = BracketStack::new();
    let mut literal = LiteralBody::default();
    let mut fragment: Option<Span> = None;
    let mut prev: Option<Token> = None;

    loop {
        let tok = tokens.next_significant()?;
        if brackets.is_top_level() {
            match tok.tag {
                RawTag::Eof => {
                    return Err(ExtractError::expected(
                        Expectation::OpenBrace,
                        tok.tag,
                        tok.span.start,
                    ));
                }
                RawTag::LeftBrace => {
                    if !literal.take_body() {
                        return finish(keyword, fragment, tok);
                    }
                }
                _ => {
                    let after_operand = prev.is_some_and(|p| ends_operand(p, src));
                    literal.observe(tok, src, after_operand);
                }
            }
        } else if tok.tag == RawTag::Eof {
            brackets.ensure_closed()?;
        }

        brackets.track(tok)?;
        fragment = Some(fragment.map_or(tok.span, |span| span.merge(tok.span)));
        prev = Some(tok);
    }
}

fn finish(keyword: Keyword, fragment: Option<Span>, brace: Token) -> Result<Span, ExtractError> {
    let span = match fragment {
        Some(span) => span,
        None if keyword == Keyword::If => {
            return Err(ExtractError::expected(
                Expectation::Condition,
                brace.tag,
                brace.span.start,
            ));
        }
        None => Span::point(brace.span.start),
    };
    trace!(keyword = keyword.as_str(), %span, "header extracted");
    Ok(span)
}

/// Tokens after which `[` indexes rather than starting an array type.
fn ends_operand(tok: Token, src: &str) -> bool {
    tok.tag.is_literal()
        || matches!(
            tok.tag,
            RawTag::RightParen | RawTag::RightBracket | RawTag::RightBrace
        )
        || tok.is_name(src)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pending {
    /// `func` signature; the next top-level `{` is its body.
    Func,
    /// Array, slice, map or channel type; the next top-level `{` is its
    /// literal.
    Type,
    /// `struct` or `interface`; the next top-level `{` is the field or
    /// method list, after which the enclosing literal is still pending.
    TypeBody { func: bool },
}

/// Tracks whether the next top-level `{` belongs to a literal in the header.
#[derive(Clone, Copy, Debug, Default)]
struct LiteralBody {
    pending: Option<Pending>,
}

impl LiteralBody {
    /// Feed a significant token seen at depth zero.
    fn observe(&mut self, tok: Token, src: &str, after_operand: bool) {
        self.pending = match tok.tag {
            RawTag::Ident => match tok.keyword(src) {
                Some(Keyword::Func) => Some(Pending::Func),
                Some(kw) if kw.has_type_body() => Some(Pending::TypeBody {
                    func: self.pending == Some(Pending::Func),
                }),
                Some(kw) if kw.starts_type_literal() => Some(self.literal()),
                Some(_) => None,
                None => self.pending,
            },
            RawTag::LeftBracket if self.pending.is_none() && !after_operand => Some(Pending::Type),
            RawTag::LeftBracket | RawTag::Dot | RawTag::Star | RawTag::Arrow => self.pending,
            // Parameters and results of a signature; a conversion otherwise.
            RawTag::LeftParen if self.pending == Some(Pending::Func) => self.pending,
            _ => None,
        };
    }

    /// Consume a pending literal for a top-level `{`. Returns `false` when
    /// the brace opens the statement block instead.
    fn take_body(&mut self) -> bool {
        match self.pending.take() {
            Some(Pending::TypeBody { func }) => {
                self.pending = Some(if func { Pending::Func } else { Pending::Type });
                true
            }
            Some(_) => true,
            None => false,
        }
    }

    /// A type keyword inside a `func` result keeps the signature pending.
    fn literal(self) -> Pending {
        if self.pending == Some(Pending::Func) {
            Pending::Func
        } else {
            Pending::Type
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
