use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, Frame},
        output::Output,
        parser::core::parse_partial,
        value::Number,
    },
};

impl<O: Output> Context<O> {
    /// Evaluates a function call.
    ///
    /// Arguments are evaluated left to right by the caller before the
    /// function is looked up, so their diagnostics are reported even when the
    /// function does not exist.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Argument expressions.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// - Wrong number of arguments in a top-level expression.
    /// - Call depth limit reached.
    /// - Unknown names, under the aborting undeclared policy.
    ///
    /// # Example
    /// ```
    /// use linecalc::{
    ///     config::Config,
    ///     interpreter::{evaluator::core::Context, output::Captured},
    /// };
    ///
    /// let mut context = Context::with_output(Captured::default(), Config::default());
    /// context.execute_line("sq(n): n*n", 1);
    ///
    /// assert_eq!(context.evaluate("sq(4) + 1", 2).unwrap(), 17.0);
    /// assert!(context.evaluate("sq(1, 2)", 3).is_err());
    /// ```
    pub fn eval_function_call(&mut self,
                              name: &str,
                              arguments: &[Expr],
                              line: usize)
                              -> EvalResult<f64> {
        let mut args = Vec::with_capacity(arguments.len());

        for expr in arguments {
            args.push(self.eval(expr)?);
        }

        self.call_user_defined_function(name, args, line)
    }

    /// Executes a user-defined function.
    ///
    /// Each parameter is bound in a new frame to its argument, with the kind
    /// inferred from the argument value. When a parameter name repeats, the
    /// last argument bound to it wins. The frame is pushed for the duration of
    /// the call, so the store itself is never touched.
    ///
    /// The body is parsed again and evaluated as an expression of its own:
    /// a syntax error in it is reported and the partially parsed body still
    /// yields the call's value. Inside a body, a call with the wrong number of
    /// arguments is reported and evaluates to `0`; only at the top level does
    /// it abort the statement.
    fn call_user_defined_function(&mut self,
                                  name: &str,
                                  args: Vec<f64>,
                                  line: usize)
                                  -> EvalResult<f64> {
        let Some(function) = self.store.function(name).cloned() else {
            return self.undeclared(RuntimeError::UndeclaredFunction { name: name.to_string(),
                                                                      line });
        };

        if args.len() != function.params.len() {
            let error = RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                              expected: function.params.len(),
                                                              found: args.len(),
                                                              line };
            if self.frames.is_empty() {
                return Err(error);
            }
            self.out.diagnostic(&error.to_string());
            return Ok(0.0);
        }

        if self.frames.len() >= self.config.max_call_depth {
            return Err(RuntimeError::CallDepthExceeded { name: name.to_string(),
                                                         limit: self.config.max_call_depth,
                                                         line });
        }

        let bindings = function.params
                               .into_iter()
                               .zip(args)
                               .map(|(param, value)| (param, Number::inferred(value)))
                               .collect::<Frame>();

        let (body, parse_error) = parse_partial(&function.body, line, self.config.max_nesting);

        self.frames.push(bindings);
        let result = self.eval(&body);
        self.frames.pop();

        if let Some(error) = parse_error {
            self.out.diagnostic(&error.to_string());
        }

        result
    }
}
