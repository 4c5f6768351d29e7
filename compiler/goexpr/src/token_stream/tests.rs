use super::*;
use pretty_assertions::assert_eq;

fn texts(src: &str) -> Vec<(RawTag, &str)> {
    TokenStream::new(src)
        .unwrap()
        .map(|tok| {
            let tok = tok.unwrap();
            (tok.tag, tok.text(src))
        })
        .collect()
}

#[test]
fn spans_are_absolute() {
    assert_eq!(
        texts("a := b"),
        vec![
            (RawTag::Ident, "a"),
            (RawTag::Whitespace, " "),
            (RawTag::ColonEqual, ":="),
            (RawTag::Whitespace, " "),
            (RawTag::Ident, "b"),
        ]
    );
}

#[test]
fn significant_skips_trivia() {
    let src = "  // note\n /* x */ if";
    let mut tokens = TokenStream::new(src).unwrap();
    let tok = tokens.next_significant().unwrap();
    assert_eq!(tok.tag, RawTag::Ident);
    assert_eq!(tok.span, Span::new(19, 21));
    assert_eq!(tok.keyword(src), Some(Keyword::If));
}

#[test]
fn eof_repeats() {
    let mut tokens = TokenStream::new("x").unwrap();
    assert_eq!(tokens.next_token().unwrap().tag, RawTag::Ident);
    for _ in 0..3 {
        let tok = tokens.next_token().unwrap();
        assert_eq!(tok.tag, RawTag::Eof);
        assert_eq!(tok.span, Span::point(1));
    }
}

#[test]
fn malformed_token_is_an_error() {
    let mut tokens = TokenStream::new("x \"open").unwrap();
    assert_eq!(tokens.next_token().unwrap().tag, RawTag::Ident);
    assert_eq!(
        tokens.next_significant(),
        Err(ExtractError::Lex {
            kind: LexErrorKind::UnterminatedString,
            offset: 2,
        })
    );
}

#[test]
fn iterator_stops_after_error() {
    let items: Vec<_> = TokenStream::new("a # b").unwrap().collect();
    assert_eq!(items.len(), 3);
    assert!(items[2].is_err());
}

#[test]
fn expect_keyword_mismatch() {
    let mut tokens = TokenStream::new("iff x {").unwrap();
    assert_eq!(
        tokens.expect_keyword(Keyword::If),
        Err(ExtractError::Expected {
            expected: Expectation::Keyword("if"),
            found: "identifier",
            offset: 0,
        })
    );
}

#[test]
fn names_exclude_keywords() {
    let src = "range x";
    let mut tokens = TokenStream::new(src).unwrap();
    assert!(!tokens.next_significant().unwrap().is_name(src));
    assert!(tokens.next_significant().unwrap().is_name(src));
}

#[test]
fn line_breaking_trivia() {
    let src = "/* a */ /* b\n */\n";
    let toks: Vec<_> = TokenStream::new(src).unwrap().map(Result::unwrap).collect();
    let breaks: Vec<_> = toks.iter().map(|t| t.breaks_line(src)).collect();
    assert_eq!(breaks, vec![false, false, true, true]);
}
