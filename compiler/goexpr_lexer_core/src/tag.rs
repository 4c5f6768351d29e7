//! Raw token tags produced by the scanner.
//!
//! Discriminants are grouped into semantic ranges so range checks stay cheap:
//!
//! | Range   | Group                   |
//! |---------|-------------------------|
//! | 0-15    | identifiers & literals  |
//! | 32-79   | operators               |
//! | 80-95   | delimiters              |
//! | 112-127 | trivia                  |
//! | 240-254 | errors                  |
//! | 255     | end of input            |

/// Kind of a raw token. Keywords are not resolved here; they arrive as
/// [`RawTag::Ident`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // === Identifiers & Literals ===
    /// Identifier or keyword.
    Ident = 0,
    /// Integer literal (`42`, `0x2A`, `0o52`, `0b101010`, `1_000`).
    Int = 1,
    /// Floating-point literal (`1.5`, `.5`, `1e9`, `0x1p-2`).
    Float = 2,
    /// Imaginary literal (`2i`, `1.5i`).
    Imaginary = 3,
    /// Interpreted string literal (`"..."`).
    String = 4,
    /// Raw string literal (`` `...` ``).
    RawString = 5,
    /// Rune literal (`'a'`, `'\n'`).
    Rune = 6,

    // === Operators ===
    /// `+`
    Plus = 32,
    /// `-`
    Minus = 33,
    /// `*`
    Star = 34,
    /// `/`
    Slash = 35,
    /// `%`
    Percent = 36,
    /// `&`
    Ampersand = 37,
    /// `|`
    Pipe = 38,
    /// `^`
    Caret = 39,
    /// `<<`
    Shl = 40,
    /// `>>`
    Shr = 41,
    /// `&^`
    AndNot = 42,
    /// `&&`
    AmpersandAmpersand = 43,
    /// `||`
    PipePipe = 44,
    /// `<-`
    Arrow = 45,
    /// `++`
    PlusPlus = 46,
    /// `--`
    MinusMinus = 47,
    /// `==`
    EqualEqual = 48,
    /// `!=`
    BangEqual = 49,
    /// `<`
    Less = 50,
    /// `<=`
    LessEqual = 51,
    /// `>`
    Greater = 52,
    /// `>=`
    GreaterEqual = 53,
    /// `=`
    Equal = 54,
    /// `:=`
    ColonEqual = 55,
    /// Compound assignment: `+=`, `-=`, `*=`, `/=`, `%=`, `&=`, `|=`, `^=`,
    /// `<<=`, `>>=`, `&^=`.
    OpAssign = 56,
    /// `!`
    Bang = 57,
    /// `~`
    Tilde = 58,

    // === Delimiters ===
    /// `(`
    LeftParen = 80,
    /// `)`
    RightParen = 81,
    /// `[`
    LeftBracket = 82,
    /// `]`
    RightBracket = 83,
    /// `{`
    LeftBrace = 84,
    /// `}`
    RightBrace = 85,
    /// `,`
    Comma = 86,
    /// `;`
    Semicolon = 87,
    /// `:`
    Colon = 88,
    /// `.`
    Dot = 89,
    /// `...`
    Ellipsis = 90,

    // === Trivia ===
    /// Spaces, tabs, and lone carriage returns.
    Whitespace = 112,
    /// `\n` or `\r\n`.
    Newline = 113,
    /// `// ...` up to (not including) the newline.
    LineComment = 114,
    /// `/* ... */`
    BlockComment = 115,

    // === Errors ===
    /// A byte or character that cannot start any token.
    InvalidByte = 240,
    /// Interpreted string cut off by a newline or end of input.
    UnterminatedString = 241,
    /// Raw string with no closing backtick.
    UnterminatedRawString = 242,
    /// Rune literal cut off by a newline or end of input.
    UnterminatedRune = 243,
    /// Terminated rune literal holding zero or several characters.
    InvalidRune = 244,
    /// Block comment with no closing `*/`.
    UnterminatedBlockComment = 245,

    /// End of input.
    Eof = 255,
}

impl RawTag {
    /// The fixed source text of this tag, if it has exactly one spelling.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            Self::Plus => Some("+"),
            Self::Minus => Some("-"),
            Self::Star => Some("*"),
            Self::Slash => Some("/"),
            Self::Percent => Some("%"),
            Self::Ampersand => Some("&"),
            Self::Pipe => Some("|"),
            Self::Caret => Some("^"),
            Self::Shl => Some("<<"),
            Self::Shr => Some(">>"),
            Self::AndNot => Some("&^"),
            Self::AmpersandAmpersand => Some("&&"),
            Self::PipePipe => Some("||"),
            Self::Arrow => Some("<-"),
            Self::PlusPlus => Some("++"),
            Self::MinusMinus => Some("--"),
            Self::EqualEqual => Some("=="),
            Self::BangEqual => Some("!="),
            Self::Less => Some("<"),
            Self::LessEqual => Some("<="),
            Self::Greater => Some(">"),
            Self::GreaterEqual => Some(">="),
            Self::Equal => Some("="),
            Self::ColonEqual => Some(":="),
            Self::Bang => Some("!"),
            Self::Tilde => Some("~"),
            Self::LeftParen => Some("("),
            Self::RightParen => Some(")"),
            Self::LeftBracket => Some("["),
            Self::RightBracket => Some("]"),
            Self::LeftBrace => Some("{"),
            Self::RightBrace => Some("}"),
            Self::Comma => Some(","),
            Self::Semicolon => Some(";"),
            Self::Colon => Some(":"),
            Self::Dot => Some("."),
            Self::Ellipsis => Some("..."),
            _ => None,
        }
    }

    /// Human-readable name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ident => "identifier",
            Self::Int => "integer literal",
            Self::Float => "float literal",
            Self::Imaginary => "imaginary literal",
            Self::String => "string literal",
            Self::RawString => "raw string literal",
            Self::Rune => "rune literal",
            Self::OpAssign => "assignment operator",
            Self::Whitespace => "whitespace",
            Self::Newline => "newline",
            Self::LineComment => "line comment",
            Self::BlockComment => "block comment",
            Self::InvalidByte => "invalid character",
            Self::UnterminatedString => "unterminated string literal",
            Self::UnterminatedRawString => "unterminated raw string literal",
            Self::UnterminatedRune => "unterminated rune literal",
            Self::InvalidRune => "invalid rune literal",
            Self::UnterminatedBlockComment => "unterminated block comment",
            Self::Eof => "end of input",
            other => match other.lexeme() {
                Some(text) => text,
                None => "token",
            },
        }
    }

    /// Literal tags: numbers, strings, runes.
    #[inline]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            Self::Int
                | Self::Float
                | Self::Imaginary
                | Self::String
                | Self::RawString
                | Self::Rune
        )
    }

    /// Whitespace, newlines, and comments.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        (self as u8) >= 112 && (self as u8) < 128
    }

    /// Error tags emitted for malformed input.
    #[inline]
    pub const fn is_error(self) -> bool {
        (self as u8) >= 240 && (self as u8) < 255
    }

    /// Operators that join two operands in an expression.
    #[inline]
    pub const fn is_binary_operator(self) -> bool {
        matches!(
            self,
            Self::Plus
                | Self::Minus
                | Self::Star
                | Self::Slash
                | Self::Percent
                | Self::Ampersand
                | Self::Pipe
                | Self::Caret
                | Self::Shl
                | Self::Shr
                | Self::AndNot
                | Self::AmpersandAmpersand
                | Self::PipePipe
                | Self::EqualEqual
                | Self::BangEqual
                | Self::Less
                | Self::LessEqual
                | Self::Greater
                | Self::GreaterEqual
        )
    }

    /// Operators that may prefix an operand.
    #[inline]
    pub const fn is_unary_operator(self) -> bool {
        matches!(
            self,
            Self::Plus
                | Self::Minus
                | Self::Bang
                | Self::Caret
                | Self::Star
                | Self::Ampersand
                | Self::Arrow
                | Self::Tilde
        )
    }
}

/// A scanned token: its tag and byte length.
///
/// Positions are not stored; the consumer tracks the running offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}
