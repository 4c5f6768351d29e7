//! Bare expressions, as in `{ expr }` interpolations and `@component` calls.
//!
//! The scanner walks operands and operators at depth zero and stops at the
//! first token that cannot continue the expression: a `}` closing the
//! template interpolation, a `{` opening a template body, a newline after a
//! complete operand, or anything else out of place. A trailing `...` spread
//! is consumed and ends the expression.

use goexpr_lexer_core::{RawTag, Span};
use tracing::{debug, trace};

use crate::brackets::{Bracket, BracketStack};
use crate::error::{Expectation, ExtractError};
use crate::keywords::Keyword;
use crate::token_stream::{Token, TokenStream};

/// The longest expression at the start of `src`.
///
/// `"components[0].Other() }"` gives `components[0].Other()`, and
/// `"children... }"` gives `children...`.
///
/// # Errors
///
/// Fails if `src` does not start with an operand, a selector is
/// incomplete, or brackets are unbalanced before the expression ends.
pub fn expression(src: &str) -> Result<Span, ExtractError> {
    let span = TokenStream::new(src)
        .and_then(|mut tokens| ExpressionScanner::new(src).run(&mut tokens))
        .inspect_err(|err| debug!(%err, "expression rejected"))?;
    trace!(%span, "expression extracted");
    Ok(span)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// An operand must come next: start of input, or after an operator.
    Operand,
    /// A complete operand; a selector, call, index, operator, or spread may
    /// follow.
    AfterOperand,
    /// After `.`: a field name or a type assertion.
    Selector,
    /// Inside a type literal. `func` signatures take parameter lists;
    /// other types treat `(` as a conversion.
    TypeLiteral { func: bool },
    /// After `struct` or `interface`: the field or method list comes next.
    TypeBody { func: bool },
}

enum Step {
    /// Consume the token and keep going.
    Continue,
    /// Consume the token, then stop.
    Finish,
    /// Stop before the token.
    Stop,
    /// Look at the same token again in the new state.
    Reprocess,
}

struct ExpressionScanner<'a> {
    src: &'a str,
    state: State,
    /// State to return to when the bracket opened at depth zero closes.
    resume: State,
    brackets: BracketStack,
    fragment: Option<Span>,
    prev: RawTag,
    saw_space: bool,
    saw_newline: bool,
}

impl<'a> ExpressionScanner<'a> {
    fn new(src: &'a str) -> Self {
        ExpressionScanner {
            src,
            state: State::Operand,
            resume: State::AfterOperand,
            brackets: BracketStack::new(),
            fragment: None,
            prev: RawTag::Eof,
            saw_space: false,
            saw_newline: false,
        }
    }

    fn run(mut self, tokens: &mut TokenStream<'a>) -> Result<Span, ExtractError> {
        loop {
            let tok = tokens.next_token()?;
            if tok.is_trivia() {
                if self.brackets.is_top_level() {
                    self.saw_space = true;
                    self.saw_newline |= tok.breaks_line(self.src);
                }
                continue;
            }

            if !self.brackets.is_top_level() {
                if tok.tag == RawTag::Eof {
                    self.brackets.ensure_closed()?;
                }
                self.brackets.track(tok)?;
                self.consume(tok);
                if self.brackets.is_top_level() {
                    self.state = self.resume;
                }
                continue;
            }

            let step = loop {
                match self.step(tok)? {
                    Step::Reprocess => {}
                    step => break step,
                }
            };
            match step {
                Step::Continue => self.consume(tok),
                Step::Finish => {
                    self.consume(tok);
                    return Ok(self.span_before(tok));
                }
                Step::Stop | Step::Reprocess => return Ok(self.span_before(tok)),
            }
        }
    }

    /// Decide what a significant token at depth zero does.
    fn step(&mut self, tok: Token) -> Result<Step, ExtractError> {
        match self.state {
            State::Operand => self.operand(tok),
            State::AfterOperand => self.after_operand(tok),
            State::Selector => self.selector(tok),
            State::TypeLiteral { func } => Ok(self.type_literal(tok, func)),
            State::TypeBody { func } => self.type_body(tok, func),
        }
    }

    fn operand(&mut self, tok: Token) -> Result<Step, ExtractError> {
        match tok.tag {
            RawTag::Ident => match tok.keyword(self.src) {
                None => self.state = State::AfterOperand,
                Some(kw) if kw.has_type_body() => self.state = State::TypeBody { func: false },
                Some(kw) if kw.starts_type_literal() => {
                    self.state = State::TypeLiteral {
                        func: kw == Keyword::Func,
                    };
                }
                Some(_) => return Err(self.expected(Expectation::Expression, tok)),
            },
            tag if tag.is_literal() => self.state = State::AfterOperand,
            RawTag::LeftParen => self.push(tok, State::AfterOperand),
            RawTag::LeftBracket => self.push(tok, State::TypeLiteral { func: false }),
            tag if tag.is_unary_operator() => {}
            _ => return Err(self.expected(Expectation::Expression, tok)),
        }
        Ok(Step::Continue)
    }

    fn after_operand(&mut self, tok: Token) -> Result<Step, ExtractError> {
        // A line break after a complete operand ends the statement.
        if self.saw_newline {
            return Ok(Step::Stop);
        }
        match tok.tag {
            RawTag::Dot => self.state = State::Selector,
            RawTag::LeftParen | RawTag::LeftBracket => self.push(tok, State::AfterOperand),
            // `T{..}` only when the brace touches the type; `x {` is a
            // template body.
            RawTag::LeftBrace
                if !self.saw_space
                    && matches!(
                        self.prev,
                        RawTag::Ident | RawTag::RightBracket | RawTag::RightBrace
                    ) =>
            {
                self.push(tok, State::AfterOperand);
            }
            RawTag::Ellipsis => return Ok(Step::Finish),
            RawTag::RightParen | RawTag::RightBracket => {
                // Unmatched closer; report it through the bracket stack.
                self.brackets.track(tok)?;
                return Ok(Step::Stop);
            }
            tag if tag.is_binary_operator() => self.state = State::Operand,
            _ => return Ok(Step::Stop),
        }
        Ok(Step::Continue)
    }

    fn selector(&mut self, tok: Token) -> Result<Step, ExtractError> {
        if tok.is_name(self.src) {
            self.state = State::AfterOperand;
        } else if tok.tag == RawTag::LeftParen {
            self.push(tok, State::AfterOperand);
        } else {
            return Err(self.expected(Expectation::Selector, tok));
        }
        Ok(Step::Continue)
    }

    fn type_literal(&mut self, tok: Token, func: bool) -> Step {
        let in_type = match tok.tag {
            RawTag::Ident => match tok.keyword(self.src) {
                None => true,
                Some(kw) if kw.has_type_body() => {
                    self.state = State::TypeBody { func };
                    return Step::Continue;
                }
                Some(kw) => kw.starts_type_literal(),
            },
            RawTag::Dot | RawTag::Star | RawTag::Arrow => true,
            _ => false,
        };
        if in_type {
            return Step::Continue;
        }
        match tok.tag {
            RawTag::LeftBracket => self.push(tok, State::TypeLiteral { func }),
            RawTag::LeftParen if func => self.push(tok, State::TypeLiteral { func }),
            // Conversion: `[]byte(s)`.
            RawTag::LeftParen => self.push(tok, State::AfterOperand),
            // Function body or composite literal.
            RawTag::LeftBrace => self.push(tok, State::AfterOperand),
            _ => {
                self.state = State::AfterOperand;
                return Step::Reprocess;
            }
        }
        Step::Continue
    }

    fn type_body(&mut self, tok: Token, func: bool) -> Result<Step, ExtractError> {
        if tok.tag != RawTag::LeftBrace {
            return Err(self.expected(Expectation::OpenBrace, tok));
        }
        self.push(tok, State::TypeLiteral { func });
        Ok(Step::Continue)
    }

    /// Open a bracket at depth zero, returning to `resume` once it closes.
    fn push(&mut self, tok: Token, resume: State) {
        if let Some(kind) = Bracket::opened_by(tok.tag) {
            self.brackets.open(kind, tok.span.start);
        }
        self.resume = resume;
    }

    fn consume(&mut self, tok: Token) {
        self.fragment = Some(self.fragment.map_or(tok.span, |span| span.merge(tok.span)));
        self.prev = tok.tag;
        self.saw_space = false;
        self.saw_newline = false;
    }

    /// Called when stopping at `tok`; only reachable once an operand has
    /// been consumed, or at end of input in a state that allows it.
    fn span_before(&self, tok: Token) -> Span {
        self.fragment.unwrap_or(Span::point(tok.span.start))
    }

    fn expected(&self, expected: Expectation, tok: Token) -> ExtractError {
        ExtractError::expected(expected, tok.tag, tok.span.start)
    }
}
