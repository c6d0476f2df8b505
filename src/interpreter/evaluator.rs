/// Core evaluation logic and context management.
///
/// Contains the runtime context that owns the store, the configuration and
/// the output sink, and dispatches expression evaluation.
pub mod core;

/// Binary operator evaluation logic.
///
/// Handles `+`, `-`, `*` and `/` on floating values, including the
/// division-by-zero rule.
pub mod binary;

/// Unary operator evaluation logic.
pub mod unary;

/// Function evaluation.
///
/// Handles user-defined function calls: argument evaluation, arity checking,
/// parameter binding in a call-local frame, and evaluation of the re-parsed
/// body.
pub mod function;

/// Statement execution.
///
/// Applies classified statements to the store and emits `print` output and
/// diagnostics.
pub mod statement;
