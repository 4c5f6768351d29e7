//! Token-level checks on extracted fragments.

use goexpr_lexer_core::RawTag;

use crate::brackets::BracketStack;
use crate::error::ExtractError;
use crate::keywords::Keyword;
use crate::token_stream::TokenStream;

/// Whether `fragment` ends with the `...` spread marker, ignoring trailing
/// trivia. Malformed input never ends with a spread.
pub fn ends_with_spread(fragment: &str) -> bool {
    let Ok(tokens) = TokenStream::new(fragment) else {
        return false;
    };
    let mut last = None;
    for tok in tokens {
        match tok {
            Ok(tok) if !tok.is_trivia() => last = Some(tok.tag),
            Ok(_) => {}
            Err(_) => return false,
        }
    }
    last == Some(RawTag::Ellipsis)
}

/// Whether a switch header is a type switch, i.e. contains a top-level
/// `.(type)` guard as in `v := x.(type)`.
///
/// # Errors
///
/// Fails on a malformed token or unbalanced brackets.
pub fn is_type_switch_guard(header: &str) -> Result<bool, ExtractError> {
    let tokens = TokenStream::new(header)?;
    let mut brackets = BracketStack::new();
    // How much of `.`, `(`, `type`, `)` has been matched in order.
    let mut matched = 0u8;

    for tok in tokens {
        let tok = tok?;
        if tok.is_trivia() {
            continue;
        }
        let top_level = brackets.is_top_level();
        brackets.track(tok)?;

        matched = match (matched, tok.tag) {
            (1, RawTag::LeftParen) => 2,
            (2, RawTag::Ident) if tok.keyword(header) == Some(Keyword::Type) => 3,
            (3, RawTag::RightParen) => return Ok(true),
            (_, RawTag::Dot) if top_level => 1,
            _ => 0,
        };
    }
    brackets.ensure_closed()?;
    Ok(false)
}
