use std::collections::HashMap;

use crate::{
    ast::Expr,
    config::{Config, UndeclaredPolicy},
    error::RuntimeError,
    interpreter::{
        output::{Output, Stdout},
        parser::core::parse_source,
        store::Store,
        value::Number,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Parameter bindings of one function call.
///
/// Frames are consulted innermost first, before the store, and never leak
/// into it.
pub type Frame = HashMap<String, Number>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the store of variables and
/// functions, the configuration, the sink that receives `print` output and
/// diagnostics, and the frames of the calls currently being evaluated.
///
/// ## Usage
///
/// `Context` is created once per run and fed one line at a time through
/// [`Context::execute_line`]. Expressions can also be evaluated directly with
/// [`Context::evaluate`].
pub struct Context<O = Stdout> {
    /// Variables and functions of this run.
    pub store:         Store,
    /// Interpreter settings.
    pub config:        Config,
    pub(crate) out:    O,
    /// One frame per active user-defined call, innermost last.
    pub(crate) frames: Vec<Frame>,
}

impl Context {
    /// Creates a context that prints to standard output with the default
    /// configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(Stdout, Config::default())
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Output> Context<O> {
    /// Creates a context with an empty store.
    pub fn with_output(out: O, config: Config) -> Self {
        Self { store: Store::new(),
               config,
               out,
               frames: Vec::new() }
    }

    /// The output sink.
    pub const fn output(&self) -> &O {
        &self.out
    }

    /// Consumes the context and returns its output sink.
    pub fn into_output(self) -> O {
        self.out
    }

    /// Clears all variables and functions.
    pub fn reset(&mut self) {
        self.store.reset();
        self.frames.clear();
    }

    /// Tokenizes, parses and evaluates one expression against the store.
    ///
    /// # Example
    /// ```
    /// use linecalc::{
    ///     config::Config,
    ///     interpreter::{evaluator::core::Context, output::Captured},
    /// };
    ///
    /// let mut context = Context::with_output(Captured::default(), Config::default());
    /// context.store.assign("x", 4.0);
    ///
    /// assert_eq!(context.evaluate("x * 2.5 - 1", 1).unwrap(), 9.0);
    /// assert!(context.evaluate("1 +", 1).is_err());
    /// ```
    pub fn evaluate(&mut self, source: &str, line: usize) -> EvalResult<f64> {
        let expr = parse_source(source, line, self.config.max_nesting)?;
        self.eval(&expr)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant: literals, variables, function
    /// calls, unary and binary operations.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Number { value, .. } => Ok(*value),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::Call { name,
                         arguments,
                         line, } => self.eval_function_call(name, arguments, *line),
            Expr::Unary { op, expr, .. } => self.eval_unary_op(*op, expr),
            Expr::Binary { left, op, right, .. } => self.eval_binary_op(left, *op, right),
        }
    }

    /// Looks up a variable by name.
    ///
    /// Variable lookup checks, in order:
    /// 1. The frames of the active calls, innermost first. A function body
    ///    therefore also sees the parameters of the calls that led to it.
    /// 2. The store.
    ///
    /// A missing variable is handled according to
    /// [`Config::undeclared`](crate::config::Config).
    ///
    /// # Example
    /// ```
    /// use linecalc::{
    ///     config::Config,
    ///     interpreter::{evaluator::core::Context, output::Captured},
    /// };
    ///
    /// let mut context = Context::with_output(Captured::default(), Config::default());
    /// context.store.assign("x", 10.0);
    ///
    /// assert_eq!(context.eval_variable("x", 1).unwrap(), 10.0);
    /// assert_eq!(context.eval_variable("y", 1).unwrap(), 0.0);
    /// assert_eq!(context.output().diagnostics().count(), 1);
    /// ```
    pub fn eval_variable(&mut self, name: &str, line: usize) -> EvalResult<f64> {
        if let Some(number) = self.frames.iter().rev().find_map(|frame| frame.get(name)) {
            return Ok(number.as_f64());
        }
        if let Some(number) = self.store.variable(name) {
            return Ok(number.as_f64());
        }
        self.undeclared(RuntimeError::UndeclaredVariable { name: name.to_string(),
                                                           line })
    }

    /// Applies the undeclared-reference policy to `error`.
    ///
    /// Under [`UndeclaredPolicy::Substitute`] the error is reported and the
    /// reference evaluates to `0`; under [`UndeclaredPolicy::Abort`] it is
    /// returned.
    pub(crate) fn undeclared(&mut self, error: RuntimeError) -> EvalResult<f64> {
        match self.config.undeclared {
            UndeclaredPolicy::Substitute => {
                self.out.diagnostic(&error.to_string());
                Ok(0.0)
            },
            UndeclaredPolicy::Abort => Err(error),
        }
    }
}
