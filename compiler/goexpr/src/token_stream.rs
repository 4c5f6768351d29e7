//! Positioned tokens over a fragment.
//!
//! Wraps the raw scanner, attaching absolute spans and turning error tags
//! into [`ExtractError::Lex`]. Extractors pull tokens one at a time and stop
//! as soon as the boundary is found, so nothing past it is scanned.

use goexpr_lexer_core::{RawScanner, RawTag, Span};
use tracing::trace;

use crate::error::{Expectation, ExtractError, LexErrorKind};
use crate::keywords::{self, Keyword};

/// A scanned token with its position in the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub tag: RawTag,
    pub span: Span,
}

impl Token {
    /// The token's text.
    #[inline]
    pub fn text<'a>(&self, src: &'a str) -> &'a str {
        self.span.slice(src)
    }

    /// The keyword this token spells, if it is one.
    #[inline]
    pub fn keyword(&self, src: &str) -> Option<Keyword> {
        if self.tag == RawTag::Ident {
            keywords::lookup(self.text(src))
        } else {
            None
        }
    }

    /// Identifiers that are not keywords.
    #[inline]
    pub fn is_name(&self, src: &str) -> bool {
        self.tag == RawTag::Ident && self.keyword(src).is_none()
    }

    #[inline]
    pub fn is_trivia(&self) -> bool {
        self.tag.is_trivia()
    }

    /// Trivia that ends a line: newlines, and block comments spanning one.
    pub fn breaks_line(&self, src: &str) -> bool {
        match self.tag {
            RawTag::Newline => true,
            RawTag::BlockComment => memchr::memchr(b'\n', self.text(src).as_bytes()).is_some(),
            _ => false,
        }
    }
}

/// Lazy token stream over one fragment source.
#[derive(Clone, Debug)]
pub struct TokenStream<'a> {
    src: &'a str,
    scanner: RawScanner<'a>,
    finished: bool,
}

impl<'a> TokenStream<'a> {
    /// Start streaming `src`.
    ///
    /// # Errors
    ///
    /// [`ExtractError::SourceTooLarge`] if `src` cannot be addressed with
    /// 32-bit offsets.
    pub fn new(src: &'a str) -> Result<Self, ExtractError> {
        if u32::try_from(src.len()).is_err() {
            return Err(ExtractError::SourceTooLarge { len: src.len() });
        }
        Ok(TokenStream {
            src,
            scanner: RawScanner::from_source(src),
            finished: false,
        })
    }

    pub fn source(&self) -> &'a str {
        self.src
    }

    /// Offset of the next unscanned byte.
    pub fn pos(&self) -> u32 {
        self.scanner.pos()
    }

    /// Next token, trivia included. Returns `Eof` forever once exhausted.
    ///
    /// # Errors
    ///
    /// [`ExtractError::Lex`] for a malformed token.
    pub fn next_token(&mut self) -> Result<Token, ExtractError> {
        let start = self.scanner.pos();
        let raw = self.scanner.next_token();
        let tok = Token {
            tag: raw.tag,
            span: Span::new(start, start + raw.len),
        };
        if let Some(kind) = LexErrorKind::from_tag(raw.tag) {
            trace!(offset = start, ?kind, "malformed token");
            return Err(ExtractError::Lex {
                kind,
                offset: start,
            });
        }
        Ok(tok)
    }

    /// Next token that is not whitespace, a newline, or a comment.
    pub fn next_significant(&mut self) -> Result<Token, ExtractError> {
        loop {
            let tok = self.next_token()?;
            if !tok.is_trivia() {
                return Ok(tok);
            }
        }
    }

    /// Skip leading trivia and require `keyword`.
    pub fn expect_keyword(&mut self, keyword: Keyword) -> Result<Token, ExtractError> {
        let tok = self.next_significant()?;
        if tok.keyword(self.src) == Some(keyword) {
            Ok(tok)
        } else {
            Err(ExtractError::expected(
                Expectation::Keyword(keyword.as_str()),
                tok.tag,
                tok.span.start,
            ))
        }
    }
}

/// Yields every token up to, but not including, `Eof`. Stops after the
/// first error.
impl Iterator for TokenStream<'_> {
    type Item = Result<Token, ExtractError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(tok) if tok.tag == RawTag::Eof => {
                self.finished = true;
                None
            }
            Ok(tok) => Some(Ok(tok)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

impl std::iter::FusedIterator for TokenStream<'_> {}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
