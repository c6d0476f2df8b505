//! # linecalc
//!
//! linecalc is a line-oriented interpreter for a small numeric notation
//! written in Rust. Each line is one statement: a typed or untyped variable
//! assignment, a single-expression function definition, or `print`.
//!
//! ```text
//! x = 5;
//! y(f)=3;
//! sq(n): n*n
//! r = sq(x) / 2;
//! print;
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    config::Config,
    interpreter::{
        evaluator::core::Context,
        output::{Captured, Output},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` tree built for each expression and the
/// `Statement` forms a line can take.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source line numbers to expression nodes for error reporting.
pub mod ast;
/// Interpreter settings.
///
/// Holds the policy for undeclared references and the call depth limit.
pub mod config;
/// Provides unified error types for parsing, evaluation and statements.
///
/// Every error carries the line it came from and renders as a single
/// diagnostic line.
pub mod error;
/// Orchestrates the execution of statements.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, the store and output.
pub mod interpreter;
/// The interactive line session.
pub mod repl;
/// General utilities for numeric conversion and formatting.
pub mod util;

/// Runs every line of `source` through `context`.
///
/// Lines are numbered from 1. Each line is executed to completion before the
/// next one is read; errors are reported and never stop the run.
pub fn run_source<O: Output>(source: &str, context: &mut Context<O>) {
    for (index, line) in source.lines().enumerate() {
        context.execute_line(line, index + 1);
    }
}

/// Runs `source` in a fresh interpreter and returns every emitted line.
///
/// # Examples
/// ```
/// use linecalc::get_output;
///
/// let output = get_output("sq(n): n*n\nr = sq(4);\nprint r;");
/// assert_eq!(output, ["r = 16 (int)"]);
///
/// let output = get_output("a = 1 + * 2;\nprint a;");
/// assert_eq!(output.len(), 2);
/// assert!(output[0].contains("Unexpected token"));
/// assert!(output[1].contains("not declared"));
/// ```
#[must_use]
pub fn get_output(source: &str) -> Vec<String> {
    get_output_with(source, Config::default())
}

/// Like [`get_output`], with an explicit configuration.
#[must_use]
pub fn get_output_with(source: &str, config: Config) -> Vec<String> {
    let mut context = Context::with_output(Captured::default(), config);
    run_source(source, &mut context);
    context.into_output().into_lines()
}
