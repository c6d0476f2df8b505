use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, ParseState},
    },
};

/// Parses a comma-separated list of items until a closing token.
///
/// Used for function-call argument lists. It repeatedly calls `parse_item`
/// to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := [ item ("," item)* ]`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the opening token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list.
/// - `state`: Parse bookkeeping.
///
/// # Returns
/// The items, or `None` with `ExpectedClosingParen` recorded when the last
/// item is followed by anything other than the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>, &mut ParseState) -> T,
    closing: &Token,
    state: &mut ParseState)
    -> Option<Vec<T>>
    where I: Iterator<Item = ParseResult<Token>>
{
    let is_closing = |token: &ParseResult<Token>| matches!(token, Ok(tok) if tok == closing);

    let mut items = Vec::new();
    if tokens.next_if(is_closing).is_some() {
        return Some(items);
    }
    loop {
        items.push(parse_item(tokens, state));
        if tokens.next_if(|token| matches!(token, Ok(Token::Comma))).is_none() {
            break;
        }
    }

    if tokens.next_if(is_closing).is_some() {
        Some(items)
    } else {
        state.record(ParseError::ExpectedClosingParen { line: state.line() });
        None
    }
}
