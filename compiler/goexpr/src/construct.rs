//! Dispatch from a template construct to its extractor.

use goexpr_lexer_core::Span;

use crate::error::ExtractError;
use crate::keywords::Keyword;
use crate::token_stream::TokenStream;
use crate::{case, expression, header, slice_args};

/// The template constructs that embed a host-language fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Construct {
    If,
    For,
    Switch,
    /// `case` and `default` labels.
    Case,
    Expression,
    SliceArgs,
}

impl Construct {
    pub const ALL: [Construct; 6] = [
        Construct::If,
        Construct::For,
        Construct::Switch,
        Construct::Case,
        Construct::Expression,
        Construct::SliceArgs,
    ];

    /// The construct a leading keyword introduces.
    pub const fn from_keyword(keyword: Keyword) -> Option<Self> {
        match keyword {
            Keyword::If => Some(Construct::If),
            Keyword::For => Some(Construct::For),
            Keyword::Switch => Some(Construct::Switch),
            Keyword::Case | Keyword::Default => Some(Construct::Case),
            _ => None,
        }
    }

    /// Choose the construct from the first significant token of `src`.
    ///
    /// Anything that does not start with a statement keyword is an
    /// expression; malformed input is left for the extractor to report.
    pub fn detect(src: &str) -> Self {
        TokenStream::new(src)
            .and_then(|mut tokens| tokens.next_significant())
            .ok()
            .and_then(|tok| tok.keyword(src))
            .and_then(Self::from_keyword)
            .unwrap_or(Construct::Expression)
    }

    /// Run this construct's extractor over `src`.
    pub fn extract(self, src: &str) -> Result<Span, ExtractError> {
        match self {
            Construct::If => header::if_header(src),
            Construct::For => header::for_header(src),
            Construct::Switch => header::switch_header(src),
            Construct::Case => case::case_label(src),
            Construct::Expression => expression::expression(src),
            Construct::SliceArgs => slice_args::slice_args_span(src),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Construct::If => "if",
            Construct::For => "for",
            Construct::Switch => "switch",
            Construct::Case => "case",
            Construct::Expression => "expression",
            Construct::SliceArgs => "slice arguments",
        }
    }
}
