//! Bracket balancing.
//!
//! Every extractor tracks `()`, `[]` and `{}` nesting over significant
//! tokens. A fragment boundary can only be recognized at depth zero, and a
//! closer must match the innermost opener.

use goexpr_lexer_core::RawTag;
use smallvec::SmallVec;

use crate::error::{BracketErrorKind, ExtractError};
use crate::token_stream::Token;

/// The three bracket families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bracket {
    Paren,
    Square,
    Brace,
}

impl Bracket {
    pub const fn open_char(self) -> char {
        match self {
            Bracket::Paren => '(',
            Bracket::Square => '[',
            Bracket::Brace => '{',
        }
    }

    pub const fn close_char(self) -> char {
        match self {
            Bracket::Paren => ')',
            Bracket::Square => ']',
            Bracket::Brace => '}',
        }
    }

    /// The bracket a tag opens, if any.
    pub const fn opened_by(tag: RawTag) -> Option<Self> {
        match tag {
            RawTag::LeftParen => Some(Bracket::Paren),
            RawTag::LeftBracket => Some(Bracket::Square),
            RawTag::LeftBrace => Some(Bracket::Brace),
            _ => None,
        }
    }

    /// The bracket a tag closes, if any.
    pub const fn closed_by(tag: RawTag) -> Option<Self> {
        match tag {
            RawTag::RightParen => Some(Bracket::Paren),
            RawTag::RightBracket => Some(Bracket::Square),
            RawTag::RightBrace => Some(Bracket::Brace),
            _ => None,
        }
    }

    const fn index(self) -> usize {
        match self {
            Bracket::Paren => 0,
            Bracket::Square => 1,
            Bracket::Brace => 2,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Open {
    kind: Bracket,
    offset: u32,
}

/// Stack of open brackets with per-family depth counters.
///
/// Fragments rarely nest deeply, so the stack lives inline.
#[derive(Clone, Debug, Default)]
pub struct BracketStack {
    open: SmallVec<[Open; 16]>,
    depths: [u32; 3],
}

impl BracketStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// No bracket is open.
    #[inline]
    pub fn is_top_level(&self) -> bool {
        self.open.is_empty()
    }

    /// Total nesting depth across all families.
    #[inline]
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Nesting depth of one family.
    #[inline]
    pub fn depth_of(&self, kind: Bracket) -> u32 {
        self.depths[kind.index()]
    }

    /// The innermost open bracket and the offset of its opener.
    pub fn innermost(&self) -> Option<(Bracket, u32)> {
        self.open.last().map(|open| (open.kind, open.offset))
    }

    pub fn open(&mut self, kind: Bracket, offset: u32) {
        self.open.push(Open { kind, offset });
        self.depths[kind.index()] += 1;
    }

    /// Pop the innermost opener, which must be `kind`.
    pub fn close(&mut self, kind: Bracket, offset: u32) -> Result<(), ExtractError> {
        let Some(&innermost) = self.open.last() else {
            return Err(ExtractError::Bracket {
                kind: BracketErrorKind::Unmatched(kind),
                offset,
            });
        };
        if innermost.kind != kind {
            return Err(ExtractError::Bracket {
                kind: BracketErrorKind::Mismatched {
                    open: innermost.kind,
                    opened_at: innermost.offset,
                    found: kind,
                },
                offset,
            });
        }
        self.open.pop();
        self.depths[kind.index()] -= 1;
        Ok(())
    }

    /// Open or close for a bracket token. Returns whether `tok` was a bracket.
    pub fn track(&mut self, tok: Token) -> Result<bool, ExtractError> {
        if let Some(kind) = Bracket::opened_by(tok.tag) {
            self.open(kind, tok.span.start);
            Ok(true)
        } else if let Some(kind) = Bracket::closed_by(tok.tag) {
            self.close(kind, tok.span.start)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Fail if anything is still open, reporting the innermost opener.
    pub fn ensure_closed(&self) -> Result<(), ExtractError> {
        match self.innermost() {
            None => Ok(()),
            Some((kind, offset)) => Err(ExtractError::Bracket {
                kind: BracketErrorKind::Unclosed(kind),
                offset,
            }),
        }
    }
}
