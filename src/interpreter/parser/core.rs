use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::binary::parse_additive,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Bookkeeping for parsing one expression.
///
/// The parser never stops at an error. The first error is kept here, the
/// offending factor becomes the literal `0` and parsing continues from the
/// token that caused it, so a partially valid expression still yields a
/// tree.
#[derive(Debug)]
pub struct ParseState {
    line:        usize,
    depth:       usize,
    max_nesting: usize,
    error:       Option<ParseError>,
}

impl ParseState {
    /// Creates the state for an expression on `line`.
    #[must_use]
    pub const fn new(line: usize, max_nesting: usize) -> Self {
        Self { line,
               depth: 0,
               max_nesting,
               error: None }
    }

    /// The source line of the expression.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Records `error` unless an earlier one is already recorded.
    pub(crate) fn record(&mut self, error: ParseError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    /// Records `error` and returns the literal that replaces the failed factor.
    pub(crate) fn fail(&mut self, error: ParseError) -> Expr {
        self.record(error);
        Expr::Number { value: 0.0,
                       line:  self.line, }
    }

    /// Runs `parse` one nesting level deeper.
    ///
    /// Past the limit nothing is parsed and a `NestingTooDeep` error is
    /// recorded instead.
    pub(crate) fn descend(&mut self, parse: impl FnOnce(&mut Self) -> Expr) -> Expr {
        if self.depth >= self.max_nesting {
            return self.fail(self.too_deep());
        }
        self.depth += 1;
        let expr = parse(self);
        self.depth -= 1;
        expr
    }

    /// Keeps `expr` if its tree stays within the nesting limit.
    pub(crate) fn bounded(&mut self, expr: Expr) -> Expr {
        if expr.height() > self.max_nesting {
            return self.fail(self.too_deep());
        }
        expr
    }

    const fn too_deep(&self) -> ParseError {
        ParseError::NestingTooDeep { limit: self.max_nesting,
                                     line:  self.line, }
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition, and recursively
/// descends through the precedence hierarchy. Every call counts as one
/// nesting level.
///
/// Grammar: `expression := term { ('+'|'-') term }`
///
/// # Parameters
/// - `tokens`: Token iterator; lexing errors appear in place of tokens.
/// - `state`: Line, nesting and error bookkeeping.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<I>(tokens: &mut Peekable<I>, state: &mut ParseState) -> Expr
    where I: Iterator<Item = ParseResult<Token>>
{
    state.descend(|state| parse_additive(tokens, state))
}

/// Parses `source` as one expression.
///
/// Parsing ends with the expression; whatever follows it is never looked
/// at, so `1.2.3` reads as `1.2` and `4 4` as `4`.
///
/// # Example
/// ```
/// use linecalc::{ast::Expr, error::ParseError, interpreter::parser::core::parse_source};
///
/// let expr = parse_source("2 * (x + 1)", 3, 16).unwrap();
/// assert_eq!(expr.line_number(), 3);
///
/// let err = parse_source("1 + * 2", 1, 16).unwrap_err();
/// assert_eq!(err, ParseError::UnexpectedToken { token: "*".to_string(),
///                                               line:  1, });
///
/// assert_eq!(parse_source("4 4", 1, 16).unwrap(), Expr::Number { value: 4.0, line: 1 });
/// ```
pub fn parse_source(source: &str, line: usize, max_nesting: usize) -> ParseResult<Expr> {
    let (expr, error) = parse_partial(source, line, max_nesting);
    error.map_or(Ok(expr), Err)
}

/// Parses `source` as far as possible.
///
/// Returns the tree together with the first error, if any. Failed factors
/// are replaced by `0`.
///
/// # Example
/// ```
/// use linecalc::interpreter::parser::core::parse_partial;
///
/// let (expr, error) = parse_partial("x +", 2, 16);
///
/// assert_eq!(expr.height(), 2);
/// assert_eq!(error.unwrap().to_string(), "Error on line 2: Unexpected token: end of input.");
/// ```
#[must_use]
pub fn parse_partial(source: &str, line: usize, max_nesting: usize) -> (Expr, Option<ParseError>) {
    let mut tokens = tokenize(source, line).peekable();
    let mut state = ParseState::new(line, max_nesting);
    let expr = parse_expression(&mut tokens, &mut state);

    (expr, state.error)
}
