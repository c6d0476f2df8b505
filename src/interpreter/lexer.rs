use std::fmt;

use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token of an expression.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Whitespace between tokens is skipped.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"\s+")]
#[logos(error = LexErrorKind)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `2.`.
    ///
    /// A second `.` ends the literal; it is then lexed as an unrecognized
    /// character.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    Number(f64),
    /// Identifier tokens; variable or function names such as `x` or `square`.
    #[regex(r"[\p{L}_][\p{L}\p{Nd}_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) => f.write_str(name),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::Comma => f.write_str(","),
        }
    }
}

/// Why the lexer rejected a piece of input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LexErrorKind {
    /// No token starts with this character.
    #[default]
    UnrecognizedCharacter,
    /// The literal matched the number pattern but did not convert to `f64`.
    MalformedNumber,
}

/// Parses a number literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(f64)`: The parsed value.
/// - `Err(LexErrorKind::MalformedNumber)`: If the slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<f64, LexErrorKind> {
    lex.slice()
       .parse()
       .map_err(|_| LexErrorKind::MalformedNumber)
}

/// Tokenizes one expression lazily.
///
/// Errors are yielded in place of the offending token, so the parser only
/// reports them when it actually reaches that position.
///
/// # Parameters
/// - `source`: The expression text.
/// - `line`: Source line used in error messages.
///
/// # Example
/// ```
/// use linecalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens: Vec<_> = tokenize("sq(1.5) $", 1).collect();
///
/// assert_eq!(tokens[0], Ok(Token::Identifier("sq".to_string())));
/// assert_eq!(tokens[2], Ok(Token::Number(1.5)));
/// assert!(tokens[4].is_err());
/// ```
pub fn tokenize(source: &str, line: usize) -> impl Iterator<Item = ParseResult<Token>> + '_ {
    Token::lexer(source).spanned().map(move |(token, span)| {
                                      token.map_err(|kind| match kind {
                                               LexErrorKind::MalformedNumber => {
                                                   ParseError::MalformedNumber { literal: source[span].to_string(),
                                                                                 line }
                                               },
                                               LexErrorKind::UnrecognizedCharacter => {
                                                   let character = source[span.start..].chars()
                                                                                       .next()
                                                                                       .map(String::from)
                                                                                       .unwrap_or_default();
                                                   ParseError::UnexpectedCharacter { character,
                                                                                     line }
                                               },
                                           })
                                  })
}

/// Returns `true` if `name` is exactly one identifier token.
///
/// Statement names (variables, functions, parameters) are checked with the
/// same rules the expression lexer uses, so every accepted name can later be
/// referenced from an expression.
///
/// # Example
/// ```
/// use linecalc::interpreter::lexer::is_identifier;
///
/// assert!(is_identifier("rate_2"));
/// assert!(!is_identifier("2rate"));
/// assert!(!is_identifier("a b"));
/// assert!(!is_identifier(""));
/// ```
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut lexer = Token::lexer(name);
    matches!(lexer.next(), Some(Ok(Token::Identifier(ref id))) if id == name) && lexer.next().is_none()
}
