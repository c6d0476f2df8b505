use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, ParseState, parse_expression},
            utils::parse_comma_separated,
        },
    },
};

/// Parses a unary expression.
///
/// A leading `-` negates the following unary expression; anything else is
/// parsed as a primary expression. Each `-` is one nesting level.
///
/// Grammar: `unary := "-" unary | primary`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `state`: Parse bookkeeping.
///
/// # Returns
/// An [`Expr::Unary`] node or the primary expression.
pub(crate) fn parse_unary<I>(tokens: &mut Peekable<I>, state: &mut ParseState) -> Expr
    where I: Iterator<Item = ParseResult<Token>>
{
    if tokens.next_if(|token| matches!(token, Ok(Token::Minus))).is_some() {
        let expr = state.descend(|state| parse_unary(tokens, state));
        return state.bounded(Expr::Unary { op:   UnaryOperator::Negate,
                                           expr: Box::new(expr),
                                           line: state.line(), });
    }
    parse_primary(tokens, state)
}

/// Parses a primary expression (a factor of the grammar).
///
/// Grammar:
/// ```text
/// primary := number
///          | identifier [ "(" [ expression { "," expression } ] ")" ]
///          | "(" expression ")"
/// ```
///
/// A token that cannot start a factor is left in the stream; the factor
/// becomes `0` and one of these errors is recorded:
/// - `UnexpectedToken` for an operator, `)` or `,`.
/// - `UnexpectedEndOfInput` if the input ends where a value is expected.
/// - The lexing error found at this position.
pub(crate) fn parse_primary<I>(tokens: &mut Peekable<I>, state: &mut ParseState) -> Expr
    where I: Iterator<Item = ParseResult<Token>>
{
    let line = state.line();
    let starts_factor = |token: &ParseResult<Token>| {
        matches!(token, Ok(Token::Number(_) | Token::Identifier(_) | Token::LParen))
    };

    match tokens.next_if(starts_factor) {
        Some(Ok(Token::Number(value))) => Expr::Number { value, line },
        Some(Ok(Token::Identifier(name))) => parse_identifier_or_function(tokens, name, state),
        Some(Ok(Token::LParen)) => parse_grouping(tokens, state),
        _ => {
            let error = match tokens.peek() {
                Some(Ok(token)) => ParseError::UnexpectedToken { token: token.to_string(),
                                                                 line },
                Some(Err(error)) => error.clone(),
                None => ParseError::UnexpectedEndOfInput { line },
            };
            state.fail(error)
        },
    }
}

/// Parses a parenthesized expression.
///
/// The opening `(` has already been consumed. Without a closing `)` the
/// inner expression is kept and `ExpectedClosingParen` is recorded.
fn parse_grouping<I>(tokens: &mut Peekable<I>, state: &mut ParseState) -> Expr
    where I: Iterator<Item = ParseResult<Token>>
{
    let expr = parse_expression(tokens, state);

    if tokens.next_if(|token| matches!(token, Ok(Token::RParen))).is_none() {
        state.record(ParseError::ExpectedClosingParen { line: state.line() });
    }
    expr
}

/// Parses a variable reference or a function call.
///
/// The identifier has already been consumed. If the next token is `(`, the
/// argument list is parsed and an [`Expr::Call`] is returned; otherwise the
/// identifier is an [`Expr::Variable`]. A call without its closing `)` is
/// replaced by `0`.
fn parse_identifier_or_function<I>(tokens: &mut Peekable<I>,
                                   name: String,
                                   state: &mut ParseState)
                                   -> Expr
    where I: Iterator<Item = ParseResult<Token>>
{
    let line = state.line();

    if tokens.next_if(|token| matches!(token, Ok(Token::LParen))).is_none() {
        return Expr::Variable { name, line };
    }

    match parse_comma_separated(tokens, parse_expression, &Token::RParen, state) {
        Some(arguments) => state.bounded(Expr::Call { name,
                                                      arguments,
                                                      line }),
        None => state.fail(ParseError::ExpectedClosingParen { line }),
    }
}
