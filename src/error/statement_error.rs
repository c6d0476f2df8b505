use thiserror::Error;

use crate::error::{ParseError, RuntimeError};

/// Errors reported by the statement dispatcher for a single line.
///
/// None of these stop a run; the offending line is discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatementError {
    /// A line containing `:` whose header is not `name(param, ...)`.
    #[error("Error on line {line}: Invalid function definition: {text}")]
    InvalidFunctionDefinition {
        /// The full statement text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A line containing `)=` without a `(` before it.
    #[error("Error on line {line}: Invalid typed initialization: {text}")]
    InvalidTypedInitialization {
        /// The full statement text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A typed initialization whose tag is neither `i` nor `f`.
    #[error("Error on line {line}: Unknown variable type '{tag}'. Expected 'i' or 'f'.")]
    UnknownTypeTag {
        /// The tag found between the parentheses.
        tag:  String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A variable, function or parameter name that is not an identifier.
    #[error("Error on line {line}: Invalid name '{name}'.")]
    InvalidName {
        /// The rejected name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// `print name` for a name that is not in the store.
    #[error("Error on line {line}: Variable '{name}' is not declared.")]
    VariableNotDeclared {
        /// The requested name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The line matches no statement form.
    #[error("Error on line {line}: Cannot parse statement: {text}")]
    Unrecognized {
        /// The full statement text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The right-hand expression failed to parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The right-hand expression failed to evaluate.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
