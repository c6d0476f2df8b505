use crate::{
    ast::Statement,
    error::StatementError,
    interpreter::{
        evaluator::core::Context,
        output::Output,
        parser::statement::parse_statement,
        store::Function,
        value::{Number, NumberKind},
    },
};

/// Header emitted before the variable list of a bare `print`.
pub const PRINT_ALL_HEADER: &str = "== All variables ==";

impl<O: Output> Context<O> {
    /// Runs one input line.
    ///
    /// Errors never escape: they are reported as diagnostics and the line is
    /// discarded without changing the store.
    ///
    /// # Example
    /// ```
    /// use linecalc::{
    ///     config::Config,
    ///     interpreter::{evaluator::core::Context, output::Captured},
    /// };
    ///
    /// let mut context = Context::with_output(Captured::default(), Config::default());
    /// context.execute_line("x = 5;", 1);
    /// context.execute_line("print x;", 2);
    ///
    /// assert_eq!(context.output().lines(), ["x = 5 (int)"]);
    /// ```
    pub fn execute_line(&mut self, text: &str, line: usize) {
        if let Err(error) = self.try_execute_line(text, line) {
            self.out.diagnostic(&error.to_string());
        }
    }

    /// Runs one input line and returns its error instead of reporting it.
    ///
    /// Diagnostics for undeclared references under the substituting policy
    /// are still reported, since they do not stop the statement.
    pub fn try_execute_line(&mut self, text: &str, line: usize) -> Result<(), StatementError> {
        let statement = parse_statement(text, line, self.config.max_nesting)?;
        self.eval_statement(&statement, line)
    }

    /// Applies a classified statement.
    ///
    /// # Parameters
    /// - `statement`: Statement to apply.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// - `VariableNotDeclared` when printing a missing variable.
    /// - `UnknownTypeTag` for a typed initialization whose tag is not `i` or
    ///   `f`, checked after its expression has been evaluated.
    /// - Evaluation errors of the right-hand expression; the variable is then
    ///   left untouched.
    pub fn eval_statement(&mut self, statement: &Statement, line: usize) -> Result<(), StatementError> {
        match statement {
            Statement::Empty => Ok(()),
            Statement::Print { name: None } => {
                self.print_all();
                Ok(())
            },
            Statement::Print { name: Some(name) } => {
                let number =
                    self.store
                        .variable(name)
                        .ok_or_else(|| StatementError::VariableNotDeclared { name: name.clone(),
                                                                              line })?;
                self.out.print(&format_variable(name, number));
                Ok(())
            },
            Statement::FunctionDefinition(def) => {
                self.store.define_function(&def.name,
                                           Function { params: def.params.clone(),
                                                      body:   def.body.clone(), });
                Ok(())
            },
            Statement::TypedInitialization { name, tag, value } => {
                let value = self.eval(value)?;
                let kind =
                    NumberKind::from_tag(tag).ok_or_else(|| StatementError::UnknownTypeTag { tag: tag.clone(),
                                                                                             line })?;
                self.store.define(name, kind, value);
                Ok(())
            },
            Statement::Assignment { name, value } => {
                let value = self.eval(value)?;
                self.store.assign(name, value);
                Ok(())
            },
        }
    }

    /// Prints the header and every variable, sorted by name.
    fn print_all(&mut self) {
        let lines = self.store
                        .variables()
                        .map(|(name, number)| format_variable(name, number))
                        .collect::<Vec<_>>();

        self.out.print(PRINT_ALL_HEADER);
        for line in &lines {
            self.out.print(line);
        }
    }
}

/// Formats a variable the way `print` shows it: `name = value (kind)`.
///
/// # Example
/// ```
/// use linecalc::interpreter::{evaluator::statement::format_variable, value::Number};
///
/// assert_eq!(format_variable("r", Number::Integer(16)), "r = 16 (int)");
/// assert_eq!(format_variable("y", Number::Float(7.0)), "y = 7 (float)");
/// ```
#[must_use]
pub fn format_variable(name: &str, number: Number) -> String {
    format!("{name} = {number} ({})", number.kind())
}
