/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and parsing a
/// single expression: unrecognized characters, malformed number literals,
/// unexpected tokens and missing parentheses.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating a parsed expression, such as
/// references to undeclared names, wrong argument counts and runaway
/// recursion. Parse errors found inside function bodies are wrapped here.
pub mod runtime_error;
/// Statement errors.
///
/// Errors raised by the statement dispatcher when a line has the coarse shape
/// of a statement but fails detailed validation, or matches no statement form
/// at all.
pub mod statement_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use statement_error::StatementError;
