//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a [`Cursor`] and produces [`RawToken`] values with
//! zero heap allocation. It does not resolve keywords, validate escapes, or
//! parse numeric values. Malformed literals are reported as error tags, not
//! as `Result::Err`, so the consumer decides how to surface them.
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. Each arm calls a focused method
//! that advances the cursor and returns `RawToken { tag, len }`. A `0x00` at
//! EOF dispatches to `eof()`. Operators follow maximal munch, so `...` is one
//! token and `..` is two.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Pure, allocation-free scanner.
///
/// Produces one token at a time as a `(tag, length)` pair.
#[derive(Clone, Debug)]
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Create a scanner positioned at the start of `source`.
    pub fn from_source(source: &'a str) -> Self {
        Self::new(Cursor::new(source))
    }

    /// Byte offset of the next token.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(start),
            b' ' | b'\t' => self.whitespace(start),
            b'\r' => self.carriage_return(start),
            b'\n' => self.newline(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'"' => self.string(start),
            b'\'' => self.rune(start),
            b'`' => self.raw_string(start),
            b'/' => self.slash_or_comment(start),
            b'+' => self.plus(start),
            b'-' => self.minus(start),
            b'*' => self.with_assign(start, RawTag::Star),
            b'%' => self.with_assign(start, RawTag::Percent),
            b'^' => self.with_assign(start, RawTag::Caret),
            b'&' => self.ampersand(start),
            b'|' => self.pipe(start),
            b'<' => self.less(start),
            b'>' => self.greater(start),
            b'=' => self.equal(start),
            b'!' => self.bang(start),
            b':' => self.colon(start),
            b'.' => self.dot(start),
            b'~' => self.single(start, RawTag::Tilde),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'[' => self.single(start, RawTag::LeftBracket),
            b']' => self.single(start, RawTag::RightBracket),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b',' => self.single(start, RawTag::Comma),
            b';' => self.single(start, RawTag::Semicolon),
            0x80..=0xFF => self.non_ascii(start),
            // Control characters, DEL, and ASCII punctuation the host
            // language does not use: # $ ? @ \
            _ => self.invalid_byte(start),
        }
    }

    #[inline]
    fn token(&self, start: u32, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    // ─── EOF ──────────────────────────────────────────────────────

    fn eof(&mut self, start: u32) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            // Interior null byte: illegal in host source.
            self.cursor.advance();
            self.token(start, RawTag::InvalidByte)
        }
    }

    // ─── Whitespace & Newlines ────────────────────────────────────

    #[inline]
    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        self.token(start, RawTag::Whitespace)
    }

    fn carriage_return(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '\r'
        if self.cursor.current() == b'\n' {
            // CRLF: \r\n -> single Newline with len=2
            self.cursor.advance();
            self.token(start, RawTag::Newline)
        } else {
            self.token(start, RawTag::Whitespace)
        }
    }

    fn newline(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.token(start, RawTag::Newline)
    }

    // ─── Comments ─────────────────────────────────────────────────

    fn slash_or_comment(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '/'
        match self.cursor.current() {
            b'/' => {
                self.cursor.eat_until_newline_or_eof();
                self.token(start, RawTag::LineComment)
            }
            b'*' => {
                self.cursor.advance(); // consume '*'
                if self.cursor.eat_block_comment_body() {
                    self.token(start, RawTag::BlockComment)
                } else {
                    self.token(start, RawTag::UnterminatedBlockComment)
                }
            }
            b'=' => {
                self.cursor.advance();
                self.token(start, RawTag::OpAssign)
            }
            _ => self.token(start, RawTag::Slash),
        }
    }

    // ─── Identifiers ──────────────────────────────────────────────

    #[inline]
    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance_char(); // first char already validated
        self.eat_ident_continue();
        self.token(start, RawTag::Ident)
    }

    fn eat_ident_continue(&mut self) {
        loop {
            let b = self.cursor.current();
            if is_ident_continue(b) {
                self.cursor.advance();
            } else if b >= 0x80 && self.cursor.current_char().is_some_and(is_unicode_ident_continue) {
                self.cursor.advance_char();
            } else {
                break;
            }
        }
    }

    /// Non-ASCII lead byte: a Unicode letter starts an identifier, anything
    /// else is an invalid character consumed whole.
    fn non_ascii(&mut self, start: u32) -> RawToken {
        if self.cursor.current_char().is_some_and(char::is_alphabetic) {
            return self.identifier(start);
        }
        self.cursor.advance_char();
        self.token(start, RawTag::InvalidByte)
    }

    // ─── Operators ────────────────────────────────────────────────

    /// Single-byte token: advance one byte and emit the given tag.
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token(start, tag)
    }

    /// `op` or `op=`.
    fn with_assign(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            return self.token(start, RawTag::OpAssign);
        }
        self.token(start, tag)
    }

    fn plus(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'+' {
            self.cursor.advance_n(2);
            return self.token(start, RawTag::PlusPlus);
        }
        self.with_assign(start, RawTag::Plus)
    }

    fn minus(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'-' {
            self.cursor.advance_n(2);
            return self.token(start, RawTag::MinusMinus);
        }
        self.with_assign(start, RawTag::Minus)
    }

    fn ampersand(&mut self, start: u32) -> RawToken {
        match self.cursor.peek() {
            b'&' => {
                self.cursor.advance_n(2);
                self.token(start, RawTag::AmpersandAmpersand)
            }
            b'^' => {
                self.cursor.advance(); // consume '&'
                self.with_assign(start, RawTag::AndNot)
            }
            _ => self.with_assign(start, RawTag::Ampersand),
        }
    }

    fn pipe(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'|' {
            self.cursor.advance_n(2);
            return self.token(start, RawTag::PipePipe);
        }
        self.with_assign(start, RawTag::Pipe)
    }

    fn less(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '<'
        match self.cursor.current() {
            b'<' => self.with_assign(start, RawTag::Shl),
            b'=' => self.single(start, RawTag::LessEqual),
            b'-' => self.single(start, RawTag::Arrow),
            _ => self.token(start, RawTag::Less),
        }
    }

    fn greater(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '>'
        match self.cursor.current() {
            b'>' => self.with_assign(start, RawTag::Shr),
            b'=' => self.single(start, RawTag::GreaterEqual),
            _ => self.token(start, RawTag::Greater),
        }
    }

    fn equal(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '='
        if self.cursor.current() == b'=' {
            return self.single(start, RawTag::EqualEqual);
        }
        self.token(start, RawTag::Equal)
    }

    fn bang(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '!'
        if self.cursor.current() == b'=' {
            return self.single(start, RawTag::BangEqual);
        }
        self.token(start, RawTag::Bang)
    }

    fn colon(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume ':'
        if self.cursor.current() == b'=' {
            return self.single(start, RawTag::ColonEqual);
        }
        self.token(start, RawTag::Colon)
    }

    fn dot(&mut self, start: u32) -> RawToken {
        if self.cursor.peek().is_ascii_digit() {
            // `.5` is a float, not a selector.
            return self.fraction(start, 10);
        }
        if self.cursor.peek() == b'.' && self.cursor.peek2() == b'.' {
            self.cursor.advance_n(3);
            return self.token(start, RawTag::Ellipsis);
        }
        self.single(start, RawTag::Dot)
    }

    // ─── Numeric Literals ─────────────────────────────────────────

    #[inline]
    fn number(&mut self, start: u32) -> RawToken {
        let first = self.cursor.current();
        self.cursor.advance();

        let mut radix = 10;
        if first == b'0' {
            match self.cursor.current() {
                b'x' | b'X' => radix = 16,
                b'o' | b'O' => radix = 8,
                b'b' | b'B' => radix = 2,
                _ => {}
            }
            if radix != 10 {
                self.cursor.advance(); // consume prefix letter
            }
        }
        self.eat_digits(radix);

        if self.cursor.current() == b'.' && matches!(radix, 10 | 16) {
            return self.fraction(start, radix);
        }
        self.exponent_and_suffix(start, radix, false)
    }

    /// Scan `.digits` plus any exponent and imaginary suffix.
    /// The cursor is on the `.`.
    fn fraction(&mut self, start: u32, radix: u32) -> RawToken {
        self.cursor.advance(); // consume '.'
        self.eat_digits(radix);
        self.exponent_and_suffix(start, radix, true)
    }

    fn exponent_and_suffix(&mut self, start: u32, radix: u32, mut is_float: bool) -> RawToken {
        let exponent = match radix {
            10 => matches!(self.cursor.current(), b'e' | b'E'),
            16 => matches!(self.cursor.current(), b'p' | b'P'),
            _ => false,
        };
        if exponent {
            is_float = true;
            self.cursor.advance();
            if matches!(self.cursor.current(), b'+' | b'-') {
                self.cursor.advance();
            }
            self.eat_digits(10);
        }

        if self.cursor.current() == b'i' {
            self.cursor.advance();
            return self.token(start, RawTag::Imaginary);
        }
        self.token(start, if is_float { RawTag::Float } else { RawTag::Int })
    }

    fn eat_digits(&mut self, radix: u32) {
        if radix == 16 {
            self.cursor.eat_while(|b| b.is_ascii_hexdigit() || b == b'_');
        } else {
            // Out-of-range digits for octal/binary are consumed too; the
            // literal is still a single token.
            self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
        }
    }

    // ─── String, Raw String & Rune Literals ───────────────────────

    fn string(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume opening '"'
        loop {
            match self.cursor.skip_to_literal_delim(b'"') {
                b'"' => {
                    self.cursor.advance(); // consume closing '"'
                    return self.token(start, RawTag::String);
                }
                b'\\' => {
                    self.cursor.advance(); // consume '\'
                    self.eat_escape();
                }
                // Newline (not consumed) or EOF.
                _ => return self.token(start, RawTag::UnterminatedString),
            }
        }
    }

    fn rune(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume opening '\''
        let mut chars: usize = 0;
        loop {
            let before = self.cursor.pos();
            let b = self.cursor.skip_to_literal_delim(b'\'');
            chars += self.cursor.slice_from(before).chars().count();
            match b {
                b'\'' => {
                    self.cursor.advance(); // consume closing '\''
                    let tag = if chars == 1 {
                        RawTag::Rune
                    } else {
                        RawTag::InvalidRune
                    };
                    return self.token(start, tag);
                }
                b'\\' => {
                    self.cursor.advance(); // consume '\'
                    self.eat_escape();
                    chars += 1;
                }
                _ => return self.token(start, RawTag::UnterminatedRune),
            }
        }
    }

    /// Consume an escape sequence body. The cursor is just past the `\`.
    ///
    /// Numeric escapes consume at most their fixed width of digits. A
    /// newline is left in place so the enclosing literal reports itself as
    /// unterminated.
    fn eat_escape(&mut self) {
        match self.cursor.current() {
            b'x' => {
                self.cursor.advance();
                self.cursor.eat_up_to(2, |b| b.is_ascii_hexdigit());
            }
            b'u' => {
                self.cursor.advance();
                self.cursor.eat_up_to(4, |b| b.is_ascii_hexdigit());
            }
            b'U' => {
                self.cursor.advance();
                self.cursor.eat_up_to(8, |b| b.is_ascii_hexdigit());
            }
            b'0'..=b'7' => {
                self.cursor.eat_up_to(3, |b| (b'0'..=b'7').contains(&b));
            }
            b'\n' => {}
            _ if self.cursor.is_eof() => {}
            _ => self.cursor.advance_char(),
        }
    }

    fn raw_string(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume opening '`'
        self.cursor.eat_until(b'`');
        if self.cursor.is_eof() {
            return self.token(start, RawTag::UnterminatedRawString);
        }
        self.cursor.advance(); // consume closing '`'
        self.token(start, RawTag::RawString)
    }

    // ─── Error tokens ─────────────────────────────────────────────

    fn invalid_byte(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.token(start, RawTag::InvalidByte)
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// 256-byte lookup table for ASCII identifier continuation bytes.
/// `true` for a-z, A-Z, 0-9, and underscore.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` is an ASCII identifier continuation byte.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// Unicode letters and digits continue an identifier.
fn is_unicode_ident_continue(c: char) -> bool {
    c.is_alphabetic() || c.is_numeric()
}

/// Convenience function: tokenize a source string and collect all raw tokens.
///
/// Returns a `Vec<RawToken>` containing all tokens except the final `Eof`.
/// For streaming access, construct a [`RawScanner`] directly.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    RawScanner::from_source(source).collect()
}
