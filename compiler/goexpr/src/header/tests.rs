use super::*;
use crate::brackets::Bracket;
use crate::error::{BracketErrorKind, LexErrorKind};
use pretty_assertions::assert_eq;

fn text(src: &str, span: Result<Span, ExtractError>) -> &str {
    span.unwrap().slice(src)
}

// ─── if ───────────────────────────────────────────────────────

#[test]
fn if_without_space_before_brace() {
    let src = "if true{\n<div>\nif true content\n\t</div>}";
    assert_eq!(if_header(src), Ok(Span::new(3, 7)));
}

#[test]
fn if_trims_trailing_space() {
    let src = "if x && y && (!z) {";
    assert_eq!(text(src, if_header(src)), "x && y && (!z)");
}

#[test]
fn if_with_init_statement() {
    let src = "if x := val(); x > 3 {";
    assert_eq!(text(src, if_header(src)), "x := val(); x > 3");
}

#[test]
fn if_skips_function_literal_body() {
    let src = "if f := func() bool { return true }; f() {\n}";
    assert_eq!(
        text(src, if_header(src)),
        "f := func() bool { return true }; f()"
    );
}

#[test]
fn if_skips_composite_of_type_literal() {
    let src = "if _, ok := map[string]int{\"a\": 1}[k]; ok {";
    assert_eq!(
        text(src, if_header(src)),
        "_, ok := map[string]int{\"a\": 1}[k]; ok"
    );
}

#[test]
fn if_skips_struct_literal() {
    let src = "if v := struct{ a int }{1}; v.a > 0 {\n}";
    assert_eq!(text(src, if_header(src)), "v := struct{ a int }{1}; v.a > 0");
}

#[test]
fn if_skips_empty_struct_literal() {
    let src = "if v := struct{}{}; v == struct{}{} {";
    assert_eq!(text(src, if_header(src)), "v := struct{}{}; v == struct{}{}");
}

#[test]
fn if_func_literal_with_struct_result() {
    let src = "if f := func() struct{} { return struct{}{} }; f() == struct{}{} {\n}";
    assert_eq!(
        text(src, if_header(src)),
        "f := func() struct{} { return struct{}{} }; f() == struct{}{}"
    );
}

#[test]
fn if_interface_conversion_is_not_a_literal() {
    let src = "if x := interface{}(v); x != nil {";
    assert_eq!(text(src, if_header(src)), "x := interface{}(v); x != nil");
}

#[test]
fn if_braces_inside_strings_are_ignored() {
    let src = "if s == \"{\" || r == '}' {";
    assert_eq!(text(src, if_header(src)), "s == \"{\" || r == '}'");
}

#[test]
fn if_trailing_comment_is_trimmed() {
    let src = "if ok /* checked */ {";
    assert_eq!(text(src, if_header(src)), "ok");
}

#[test]
fn if_conversion_brace_is_the_block() {
    let src = "if v == []byte(s)[0] {";
    assert_eq!(text(src, if_header(src)), "v == []byte(s)[0]");
}

#[test]
fn if_index_is_not_a_type() {
    let src = "if xs[0] {";
    assert_eq!(text(src, if_header(src)), "xs[0]");
}

#[test]
fn empty_if_is_an_error() {
    assert_eq!(
        if_header("if {"),
        Err(ExtractError::Expected {
            expected: Expectation::Condition,
            found: "{",
            offset: 3,
        })
    );
}

#[test]
fn if_without_block() {
    assert_eq!(
        if_header("if x > 3"),
        Err(ExtractError::Expected {
            expected: Expectation::OpenBrace,
            found: "end of input",
            offset: 8,
        })
    );
}

#[test]
fn if_requires_keyword() {
    assert_eq!(
        if_header("for x {"),
        Err(ExtractError::Expected {
            expected: Expectation::Keyword("if"),
            found: "identifier",
            offset: 0,
        })
    );
    assert_eq!(
        if_header("ifx {"),
        Err(ExtractError::Expected {
            expected: Expectation::Keyword("if"),
            found: "identifier",
            offset: 0,
        })
    );
}

#[test]
fn if_unmatched_brace() {
    assert_eq!(
        if_header("if x } {"),
        Err(ExtractError::Bracket {
            kind: BracketErrorKind::Unmatched(Bracket::Brace),
            offset: 5,
        })
    );
}

#[test]
fn if_unclosed_paren() {
    assert_eq!(
        if_header("if (x {"),
        Err(ExtractError::Bracket {
            kind: BracketErrorKind::Unclosed(Bracket::Brace),
            offset: 6,
        })
    );
}

#[test]
fn if_mismatched() {
    assert_eq!(
        if_header("if f(x] {"),
        Err(ExtractError::Bracket {
            kind: BracketErrorKind::Mismatched {
                open: Bracket::Paren,
                opened_at: 4,
                found: Bracket::Square,
            },
            offset: 6,
        })
    );
}

#[test]
fn if_unterminated_string() {
    assert_eq!(
        if_header("if s == \"abc {"),
        Err(ExtractError::Lex {
            kind: LexErrorKind::UnterminatedString,
            offset: 8,
        })
    );
}

// ─── for ──────────────────────────────────────────────────────

#[test]
fn infinite_for_is_empty_at_brace() {
    let src = "for  {\n<div>\nloop content\n\t</div>}";
    assert_eq!(for_header(src), Ok(Span::point(5)));
}

#[test]
fn for_three_clause() {
    let src = "for ; ; i++ {";
    assert_eq!(text(src, for_header(src)), "; ; i++");
}

#[test]
fn for_range_over_slice_literal() {
    let src = "for _, v := range []string{\"a\", \"b\"} {\n}";
    assert_eq!(
        text(src, for_header(src)),
        "_, v := range []string{\"a\", \"b\"}"
    );
}

#[test]
fn for_range_over_array_literal() {
    let src = "for i := range [3]int{1, 2, 3} {";
    assert_eq!(text(src, for_header(src)), "i := range [3]int{1, 2, 3}");
}

#[test]
fn for_range_over_interface_slice() {
    let src = "for _, v := range []interface{}{1, 2} {\n}";
    assert_eq!(
        text(src, for_header(src)),
        "_, v := range []interface{}{1, 2}"
    );
}

#[test]
fn for_range_over_struct_slice() {
    let src = "for _, s := range []struct{ a int }{{1}, {2}} {\n}";
    assert_eq!(
        text(src, for_header(src)),
        "_, s := range []struct{ a int }{{1}, {2}}"
    );
}

#[test]
fn for_range_over_map_of_structs() {
    let src = "for k := range map[string]struct{}{\"a\": {}} {";
    assert_eq!(
        text(src, for_header(src)),
        "k := range map[string]struct{}{\"a\": {}}"
    );
}

#[test]
fn for_multiline_header() {
    let src = "for i := 0;\n\ti < 3;\n\ti++ {";
    assert_eq!(text(src, for_header(src)), "i := 0;\n\ti < 3;\n\ti++");
}

#[test]
fn for_without_block() {
    assert_eq!(
        for_header("for "),
        Err(ExtractError::Expected {
            expected: Expectation::OpenBrace,
            found: "end of input",
            offset: 4,
        })
    );
}

// ─── switch ───────────────────────────────────────────────────

#[test]
fn empty_switch() {
    let src = "switch  {\n}";
    assert_eq!(switch_header(src), Ok(Span::point(8)));
}

#[test]
fn type_switch_header() {
    let src = "switch x := x.(type) {\ndefault:\n}";
    assert_eq!(text(src, switch_header(src)), "x := x.(type)");
}

#[test]
fn switch_on_call() {
    let src = "switch pkg.Func() {\n}";
    assert_eq!(text(src, switch_header(src)), "pkg.Func()");
}

#[test]
fn switch_on_func_result() {
    let src = "switch v := func() []struct{} { return nil }(); len(v) {\n}";
    assert_eq!(
        text(src, switch_header(src)),
        "v := func() []struct{} { return nil }(); len(v)"
    );
}

#[test]
fn switch_is_not_for() {
    assert!(for_header("switch x {").is_err());
}

// ─── Literal tracking ─────────────────────────────────────────

#[test]
fn literal_body_tracking() {
    let src = "func(a int) (b, c int) x";
    let mut tokens = TokenStream::new(src).unwrap();
    let mut literal = LiteralBody::default();
    let mut brackets = BracketStack::new();
    while let Ok(tok) = tokens.next_significant() {
        if tok.tag == RawTag::Eof {
            break;
        }
        if brackets.is_top_level() {
            literal.observe(tok, src, false);
        }
        brackets.track(tok).unwrap();
    }
    assert_eq!(literal.pending, Some(Pending::Func));
    assert!(literal.take_body());
    assert!(!literal.take_body());
}

#[test]
fn type_body_then_literal() {
    let src = "[]struct{ a int }";
    let mut tokens = TokenStream::new(src).unwrap();
    let mut literal = LiteralBody::default();
    let mut brackets = BracketStack::new();
    loop {
        let tok = tokens.next_significant().unwrap();
        if tok.tag == RawTag::Eof {
            break;
        }
        if brackets.is_top_level() {
            if tok.tag == RawTag::LeftBrace {
                assert_eq!(literal.pending, Some(Pending::TypeBody { func: false }));
                assert!(literal.take_body());
            } else {
                literal.observe(tok, src, false);
            }
        }
        brackets.track(tok).unwrap();
    }
    assert_eq!(literal.pending, Some(Pending::Type));
    assert!(literal.take_body());
    assert!(!literal.take_body());
}

#[test]
fn type_body_in_func_result() {
    let src = "func() struct{}";
    let mut tokens = TokenStream::new(src).unwrap();
    let mut literal = LiteralBody::default();
    let mut brackets = BracketStack::new();
    loop {
        let tok = tokens.next_significant().unwrap();
        if tok.tag == RawTag::Eof {
            break;
        }
        if brackets.is_top_level() {
            if tok.tag == RawTag::LeftBrace {
                assert!(literal.take_body());
            } else {
                literal.observe(tok, src, false);
            }
        }
        brackets.track(tok).unwrap();
    }
    assert_eq!(literal.pending, Some(Pending::Func));
}
