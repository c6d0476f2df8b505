use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character that cannot start any token.
    #[error("Error on line {line}: Unrecognized character '{character}'.")]
    UnexpectedCharacter {
        /// The offending character.
        character: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A number literal that could not be converted to a floating value.
    #[error("Error on line {line}: Cannot convert number '{literal}'.")]
    MalformedNumber {
        /// The literal text of the number.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Found a token that cannot appear at this position.
    #[error("Error on line {line}: Unexpected token '{token}'.")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input where a value was expected.
    #[error("Error on line {line}: Unexpected token: end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error on line {line}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The expression nests parentheses, negations, calls or operators
    /// deeper than the configured limit.
    #[error("Error on line {line}: Expression is nested deeper than {limit} levels.")]
    NestingTooDeep {
        /// The configured maximum nesting.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}
