/// Default limit for nested user-defined function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 256;
/// Default limit for the nesting of a single expression.
pub const DEFAULT_MAX_NESTING: usize = 256;

/// How a reference to an undeclared variable or function is handled.
///
/// Parse errors always abort the statement. Undeclared references are
/// different: by default they are reported and evaluate to `0`, so a line like
/// `x = y + 1` still assigns `1` to `x` when `y` does not exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UndeclaredPolicy {
    /// Report a diagnostic and substitute `0` for the reference.
    #[default]
    Substitute,
    /// Treat the reference as an evaluation error and discard the statement.
    Abort,
}

/// Interpreter settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Handling of undeclared variables and functions.
    pub undeclared:     UndeclaredPolicy,
    /// Maximum nesting of user-defined function calls.
    pub max_call_depth: usize,
    /// Maximum nesting of one expression: parentheses, negations, call
    /// arguments and the depth of the resulting tree all count.
    pub max_nesting:    usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { undeclared:     UndeclaredPolicy::default(),
               max_call_depth: DEFAULT_MAX_CALL_DEPTH,
               max_nesting:    DEFAULT_MAX_NESTING, }
    }
}

impl Config {
    /// Returns the configuration with undeclared references turned into
    /// errors.
    ///
    /// # Example
    /// ```
    /// use linecalc::config::{Config, UndeclaredPolicy};
    ///
    /// let config = Config::default().strict();
    /// assert_eq!(config.undeclared, UndeclaredPolicy::Abort);
    /// ```
    #[must_use]
    pub const fn strict(mut self) -> Self {
        self.undeclared = UndeclaredPolicy::Abort;
        self
    }

    /// Returns the configuration with a different call depth limit.
    #[must_use]
    pub const fn with_max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Returns the configuration with a different expression nesting limit.
    ///
    /// # Example
    /// ```
    /// use linecalc::{config::Config, get_output_with};
    ///
    /// let config = Config::default().with_max_nesting(3);
    /// assert_eq!(get_output_with("x = ((1))\nprint x", config), ["x = 1 (int)"]);
    /// assert_eq!(get_output_with("x = (((1)))", config),
    ///            ["Error on line 1: Expression is nested deeper than 3 levels."]);
    /// ```
    #[must_use]
    pub const fn with_max_nesting(mut self, nesting: usize) -> Self {
        self.max_nesting = nesting;
        self
    }
}
