use thiserror::Error;

use crate::error::ParseError;

/// Represents all errors that can occur while evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The expression, or the body of a called function, failed to parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Tried to use a variable that is not in the store or the call frame.
    #[error("Error on line {line}: Use of undeclared variable '{name}'.")]
    UndeclaredVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function that was never defined.
    #[error("Error on line {line}: Use of undeclared function '{name}'.")]
    UndeclaredFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Error on line {line}: Function '{name}' expects {expected} arguments, found {found}.")]
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of supplied arguments.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Nested function calls went deeper than the configured limit.
    #[error("Error on line {line}: Call depth limit of {limit} exceeded while calling '{name}'.")]
    CallDepthExceeded {
        /// The function whose call crossed the limit.
        name:  String,
        /// The configured maximum depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}
