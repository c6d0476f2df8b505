use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, ParseState},
            unary::parse_unary,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `state`: Parse bookkeeping.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_additive<I>(tokens: &mut Peekable<I>, state: &mut ParseState) -> Expr
    where I: Iterator<Item = ParseResult<Token>>
{
    let mut left = parse_multiplicative(tokens, state);
    loop {
        if let Some(Ok(token)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens, state);
            left = state.bounded(Expr::Binary { left: Box::new(left),
                                                op,
                                                right: Box::new(right),
                                                line: state.line() });
            continue;
        }
        break;
    }
    left
}

/// Parses multiplication and division expressions.
///
/// Handles left-associative operators: `*` and `/`.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `state`: Parse bookkeeping.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative<I>(tokens: &mut Peekable<I>, state: &mut ParseState) -> Expr
    where I: Iterator<Item = ParseResult<Token>>
{
    let mut left = parse_unary(tokens, state);
    loop {
        if let Some(Ok(token)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            tokens.next();
            let right = parse_unary(tokens, state);
            left = state.bounded(Expr::Binary { left: Box::new(left),
                                                op,
                                                right: Box::new(right),
                                                line: state.line() });
            continue;
        }
        break;
    }
    left
}

/// Maps an operator token to its binary operator, if it is one.
const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
