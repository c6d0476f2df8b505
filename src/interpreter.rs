/// The evaluator module executes AST nodes and statements.
///
/// The evaluator walks parsed expressions, resolves identifiers against the
/// call frame and the store, calls user-defined functions and applies
/// statements to the store.
///
/// # Responsibilities
/// - Evaluates expressions to floating values.
/// - Binds function parameters in call-local frames.
/// - Executes `print`, function definitions and assignments.
pub mod evaluator;
/// The lexer module tokenizes expression text for the parser.
///
/// The lexer (tokenizer) reads one expression and produces a lazy stream of
/// tokens: numbers, identifiers, the four arithmetic operators, parentheses
/// and commas.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Reports unrecognized characters and malformed numbers in place.
/// - Validates statement-level names with the same identifier rules.
pub mod lexer;
/// The output module defines where user-visible lines go.
///
/// `print` output and diagnostics share one ordered channel. The standard
/// sink writes to stdout; the captured sink keeps lines in memory.
pub mod output;
/// The parser module turns text into expressions and statements.
///
/// # Responsibilities
/// - Builds expression trees by recursive descent with standard precedence.
/// - Classifies input lines into statement forms.
/// - Reports syntax errors.
pub mod parser;
/// The store module holds variables and functions for a whole run.
pub mod store;
/// The value module defines the typed numbers kept in variables.
///
/// # Responsibilities
/// - Defines `Number` (integer or float) and `NumberKind`.
/// - Converts computed values into a slot's kind, truncating for integers.
/// - Formats numbers for `print`.
pub mod value;
