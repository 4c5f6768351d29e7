//! Host-language keyword classification.
//!
//! The raw scanner emits keywords as identifiers; this module resolves them.
//! Predeclared names (`true`, `false`, `nil`, `iota`, builtin types) are
//! ordinary identifiers, not keywords.

/// A reserved keyword of the host language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    Break,
    Case,
    Chan,
    Const,
    Continue,
    Default,
    Defer,
    Else,
    Fallthrough,
    For,
    Func,
    Go,
    Goto,
    If,
    Import,
    Interface,
    Map,
    Package,
    Range,
    Return,
    Select,
    Struct,
    Switch,
    Type,
    Var,
}

impl Keyword {
    /// Source spelling of the keyword.
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Break => "break",
            Keyword::Case => "case",
            Keyword::Chan => "chan",
            Keyword::Const => "const",
            Keyword::Continue => "continue",
            Keyword::Default => "default",
            Keyword::Defer => "defer",
            Keyword::Else => "else",
            Keyword::Fallthrough => "fallthrough",
            Keyword::For => "for",
            Keyword::Func => "func",
            Keyword::Go => "go",
            Keyword::Goto => "goto",
            Keyword::If => "if",
            Keyword::Import => "import",
            Keyword::Interface => "interface",
            Keyword::Map => "map",
            Keyword::Package => "package",
            Keyword::Range => "range",
            Keyword::Return => "return",
            Keyword::Select => "select",
            Keyword::Struct => "struct",
            Keyword::Switch => "switch",
            Keyword::Type => "type",
            Keyword::Var => "var",
        }
    }

    /// Keywords that begin a type literal and can therefore appear inside an
    /// expression (`func() {}`, `map[K]V{}`, `struct{}{}`, `chan T`,
    /// `interface{}`).
    pub const fn starts_type_literal(self) -> bool {
        matches!(
            self,
            Keyword::Chan | Keyword::Func | Keyword::Interface | Keyword::Map | Keyword::Struct
        )
    }

    /// Type literals whose own `{..}` lists fields or methods, so a
    /// composite literal of them needs a second brace group.
    pub const fn has_type_body(self) -> bool {
        matches!(self, Keyword::Interface | Keyword::Struct)
    }
}

/// Look up a reserved keyword by text.
///
/// Uses length-bucketing for fast rejection: keywords are 2-11 ASCII
/// lowercase bytes, so anything else is rejected without comparisons.
#[inline]
pub fn lookup(text: &str) -> Option<Keyword> {
    let bytes = text.as_bytes();
    if !(2..=11).contains(&bytes.len()) || !bytes[0].is_ascii_lowercase() {
        return None;
    }

    match bytes.len() {
        2 => match text {
            "go" => Some(Keyword::Go),
            "if" => Some(Keyword::If),
            _ => None,
        },
        3 => match text {
            "for" => Some(Keyword::For),
            "map" => Some(Keyword::Map),
            "var" => Some(Keyword::Var),
            _ => None,
        },
        4 => match text {
            "case" => Some(Keyword::Case),
            "chan" => Some(Keyword::Chan),
            "else" => Some(Keyword::Else),
            "func" => Some(Keyword::Func),
            "goto" => Some(Keyword::Goto),
            "type" => Some(Keyword::Type),
            _ => None,
        },
        5 => match text {
            "break" => Some(Keyword::Break),
            "const" => Some(Keyword::Const),
            "defer" => Some(Keyword::Defer),
            "range" => Some(Keyword::Range),
            _ => None,
        },
        6 => match text {
            "import" => Some(Keyword::Import),
            "return" => Some(Keyword::Return),
            "select" => Some(Keyword::Select),
            "struct" => Some(Keyword::Struct),
            "switch" => Some(Keyword::Switch),
            _ => None,
        },
        7 => match text {
            "default" => Some(Keyword::Default),
            "package" => Some(Keyword::Package),
            _ => None,
        },
        8 => match text {
            "continue" => Some(Keyword::Continue),
            _ => None,
        },
        9 => match text {
            "interface" => Some(Keyword::Interface),
            _ => None,
        },
        11 => match text {
            "fallthrough" => Some(Keyword::Fallthrough),
            _ => None,
        },
        _ => None,
    }
}

/// Returns `true` if `text` is a valid identifier that is not a keyword.
///
/// An identifier is a letter (Unicode letter or `_`) followed by letters and
/// digits.
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first == '_' || first.is_alphabetic())
        && chars.all(|c| c == '_' || c.is_alphanumeric())
        && lookup(text).is_none()
}
