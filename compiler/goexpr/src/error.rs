//! Extraction error types.
//!
//! Every error carries the byte offset of the offending token so the
//! templating parser can point at it. Offsets never exceed the source length.

use goexpr_lexer_core::RawTag;
use std::fmt;
use thiserror::Error;

use crate::brackets::Bracket;

/// A malformed token reported by the scanner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum LexErrorKind {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated raw string literal")]
    UnterminatedRawString,
    #[error("unterminated rune literal")]
    UnterminatedRune,
    #[error("rune literal must hold exactly one character")]
    InvalidRune,
    #[error("unterminated block comment")]
    UnterminatedBlockComment,
    #[error("invalid character")]
    InvalidByte,
}

impl LexErrorKind {
    /// Map a scanner error tag to its error kind. `None` for non-error tags.
    pub const fn from_tag(tag: RawTag) -> Option<Self> {
        match tag {
            RawTag::UnterminatedString => Some(Self::UnterminatedString),
            RawTag::UnterminatedRawString => Some(Self::UnterminatedRawString),
            RawTag::UnterminatedRune => Some(Self::UnterminatedRune),
            RawTag::InvalidRune => Some(Self::InvalidRune),
            RawTag::UnterminatedBlockComment => Some(Self::UnterminatedBlockComment),
            RawTag::InvalidByte => Some(Self::InvalidByte),
            _ => None,
        }
    }
}

/// Bracket nesting went wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum BracketErrorKind {
    /// A closer with nothing open.
    #[error("unexpected `{}` with nothing open", .0.close_char())]
    Unmatched(Bracket),
    /// A closer that does not match the innermost opener.
    #[error(
        "`{}` does not close `{}` opened at offset {opened_at}",
        .found.close_char(),
        .open.open_char()
    )]
    Mismatched {
        open: Bracket,
        opened_at: u32,
        found: Bracket,
    },
    /// An opener still open where the fragment had to end.
    #[error("`{}` is never closed", .0.open_char())]
    Unclosed(Bracket),
}

/// What the extractor was looking for when it gave up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Expectation {
    /// A specific leading keyword (`if`, `for`, `switch`).
    Keyword(&'static str),
    /// `case` or `default`.
    CaseLabel,
    /// The `{` that opens a block body.
    OpenBrace,
    /// The `:` that ends a case label.
    Colon,
    /// A non-empty `if` condition.
    Condition,
    /// An operand.
    Expression,
    /// An identifier or `(` after `.`.
    Selector,
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::Keyword(kw) => write!(f, "keyword `{kw}`"),
            Expectation::CaseLabel => f.write_str("`case` or `default`"),
            Expectation::OpenBrace => f.write_str("`{`"),
            Expectation::Colon => f.write_str("`:`"),
            Expectation::Condition => f.write_str("condition"),
            Expectation::Expression => f.write_str("expression"),
            Expectation::Selector => f.write_str("identifier or `(` after `.`"),
        }
    }
}

/// Failure to extract a fragment.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum ExtractError {
    /// The scanner found a malformed token.
    #[error("{kind} at offset {offset}")]
    Lex { kind: LexErrorKind, offset: u32 },
    /// Brackets are unbalanced.
    #[error("{kind} (at offset {offset})")]
    Bracket { kind: BracketErrorKind, offset: u32 },
    /// A required keyword, terminator, or operand is missing.
    #[error("expected {expected}, found {found} at offset {offset}")]
    Expected {
        expected: Expectation,
        found: &'static str,
        offset: u32,
    },
    /// Spans are 32-bit; larger sources cannot be addressed.
    #[error("source is {len} bytes, larger than the supported {} bytes", u32::MAX)]
    SourceTooLarge { len: usize },
}

impl ExtractError {
    /// Byte offset of the offending token.
    pub fn offset(&self) -> u32 {
        match self {
            ExtractError::Lex { offset, .. }
            | ExtractError::Bracket { offset, .. }
            | ExtractError::Expected { offset, .. } => *offset,
            ExtractError::SourceTooLarge { .. } => 0,
        }
    }

    pub(crate) fn expected(expected: Expectation, found: RawTag, offset: u32) -> Self {
        ExtractError::Expected {
            expected,
            found: found.name(),
            offset,
        }
    }
}
