//! Bounds-checked byte cursor over a borrowed source string.
//!
//! The cursor advances through the source byte-by-byte. Reads at or past the
//! end of the source return `0x00`, so scanning loops can treat `0` as the
//! end-of-input marker and confirm with [`Cursor::is_eof`].
//!
//! # Interior Null Bytes
//!
//! Host source may contain interior null bytes (U+0000). The cursor
//! distinguishes them from EOF by comparing `pos` against `source_len`:
//! a null at `pos < source_len` is an interior null (error token), a null at
//! `pos >= source_len` is EOF.

/// Cursor over a source string.
///
/// The cursor is [`Copy`], enabling cheap state snapshots for lookahead.
///
/// # Invariant
///
/// `pos` only ever lands on a `char` boundary of `src` (or at
/// `source_len`) as long as multi-byte characters are consumed with
/// [`advance_char`](Self::advance_char) and the memchr-based skips, which
/// only stop at ASCII bytes.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    /// Current read position (byte index into `src`).
    pos: u32,
    /// Length of the source content, saturated at `u32::MAX`.
    source_len: u32,
}

/// Size assertion: Cursor should be <= 24 bytes on 64-bit platforms.
/// &str = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    ///
    /// Sources longer than `u32::MAX` bytes are truncated to their first
    /// `u32::MAX` bytes for scanning purposes. The extractor layer rejects
    /// such sources before scanning.
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            source_len: u32::try_from(src.len()).unwrap_or(u32::MAX),
        }
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        if pos >= self.source_len {
            return 0;
        }
        self.src.as_bytes().get(pos as usize).copied().unwrap_or(0)
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    ///
    /// Interior null bytes also return `0x00`; use [`is_eof()`](Self::is_eof)
    /// to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos.saturating_add(1))
    }

    /// Returns the byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos.saturating_add(2))
    }

    /// Returns the full character starting at the current position.
    ///
    /// `None` at EOF, or if the position is not a character boundary.
    pub fn current_char(&self) -> Option<char> {
        if self.is_eof() {
            return None;
        }
        self.src.get(self.pos as usize..)?.chars().next()
    }

    /// Advance the cursor by one byte, never past the end of the source.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.source_len {
            self.pos += 1;
        }
    }

    /// Advance the cursor by `n` bytes, clamped to the end of the source.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos = self.pos.saturating_add(n).min(self.source_len);
    }

    /// Advance the cursor past one full UTF-8 character.
    ///
    /// Advances a single byte when no character starts here, so the
    /// cursor always makes progress before EOF.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = self
            .current_char()
            .map_or(1, |c| u32::try_from(c.len_utf8()).unwrap_or(1));
        self.advance_n(width);
    }

    /// Returns `true` if the cursor has reached EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the scannable source content.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Extract a source substring as `&str`.
    ///
    /// Returns the empty string when `start..end` is out of range or does not
    /// fall on character boundaries.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        self.src.get(start as usize..end as usize).unwrap_or("")
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// The unread remainder of the source as bytes.
    fn remaining(&self) -> &'a [u8] {
        self.src
            .as_bytes()
            .get(self.pos as usize..self.source_len as usize)
            .unwrap_or(&[])
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// Stops at EOF regardless of `pred`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance over at most `max` bytes matching `pred`.
    ///
    /// Returns the number of bytes consumed.
    pub fn eat_up_to(&mut self, max: u32, pred: impl Fn(u8) -> bool) -> u32 {
        let mut n = 0;
        while n < max && !self.is_eof() && pred(self.current()) {
            self.pos += 1;
            n += 1;
        }
        n
    }

    /// Advance to the next `\n` byte or EOF using SIMD-accelerated search.
    ///
    /// Used by the comment scanner to skip comment bodies.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        if let Some(offset) = memchr::memchr(b'\n', self.remaining()) {
            self.pos += offset as u32;
        } else {
            self.pos = self.source_len;
        }
    }

    /// Advance past ordinary literal content to the next interesting byte.
    /// Returns the byte found, or 0 for EOF.
    ///
    /// "Interesting" bytes are the closing `quote`, `\` and `\n`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_to_literal_delim(&mut self, quote: u8) -> u8 {
        if let Some(off) = memchr::memchr3(quote, b'\\', b'\n', self.remaining()) {
            self.pos += off as u32;
            self.current()
        } else {
            self.pos = self.source_len;
            0
        }
    }

    /// Advance until `byte` is found or EOF is reached.
    ///
    /// Returns the number of bytes consumed. The cursor is positioned at the
    /// found byte, or at EOF if the byte was not found.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until(&mut self, byte: u8) -> u32 {
        let start = self.pos;
        if let Some(off) = memchr::memchr(byte, self.remaining()) {
            self.pos += off as u32;
        } else {
            self.pos = self.source_len;
        }
        self.pos - start
    }

    /// Advance past the closing `*/` of a block comment.
    ///
    /// Returns `false` (with the cursor at EOF) if the comment is never
    /// closed.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_block_comment_body(&mut self) -> bool {
        if let Some(off) = memchr::memmem::find(self.remaining(), b"*/") {
            self.pos += off as u32 + 2;
            true
        } else {
            self.pos = self.source_len;
            false
        }
    }

    /// Advance past horizontal whitespace (spaces and tabs).
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(|b| b == b' ' || b == b'\t');
    }
}
