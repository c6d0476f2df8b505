/// Core parsing entry points.
///
/// Defines the result type shared by the parser and the functions that parse
/// a complete expression from source text.
pub mod core;

/// Unary and primary expression parsing.
///
/// Handles negation and the factors of the grammar: numbers, variables,
/// function calls and parenthesized expressions.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the left-associative additive and multiplicative levels of the
/// expression grammar.
pub mod binary;

/// Utility functions for the parser.
pub mod utils;

/// Statement classification.
///
/// Routes a single input line to one of the statement forms: `print`,
/// function definition, typed initialization or plain assignment.
pub mod statement;
