use std::collections::{BTreeMap, HashMap};

use crate::interpreter::value::{Number, NumberKind};

/// A user-defined function.
///
/// The body is kept as source text and parsed again on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    /// Parameter names in declaration order. Duplicates are kept; the last
    /// argument bound to a repeated name wins.
    pub params: Vec<String>,
    /// The unparsed body expression.
    pub body:   String,
}

/// The variables and functions of one interpreter run.
///
/// Variables and functions live in separate namespaces: a bare identifier is
/// always a variable and an identifier followed by `(` is always a call, so
/// the same name may exist in both maps.
#[derive(Debug, Clone, Default)]
pub struct Store {
    variables: BTreeMap<String, Number>,
    functions: HashMap<String, Function>,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a variable.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<Number> {
        self.variables.get(name).copied()
    }

    /// Assigns `value` to a variable.
    ///
    /// An existing variable keeps its kind and the value is converted into it.
    /// A new variable gets the kind inferred from the value.
    ///
    /// # Example
    /// ```
    /// use linecalc::interpreter::{store::Store, value::Number};
    ///
    /// let mut store = Store::new();
    /// assert_eq!(store.assign("x", 5.0), Number::Integer(5));
    /// assert_eq!(store.assign("x", 2.75), Number::Integer(2));
    /// assert_eq!(store.assign("y", 2.75), Number::Float(2.75));
    /// ```
    pub fn assign(&mut self, name: &str, value: f64) -> Number {
        let number = match self.variables.get(name) {
            Some(existing) => Number::coerce(existing.kind(), value),
            None => Number::inferred(value),
        };
        self.variables.insert(name.to_string(), number);
        number
    }

    /// Creates or overwrites a variable with a forced kind.
    ///
    /// This is the only operation that changes the kind of an existing
    /// variable.
    ///
    /// # Example
    /// ```
    /// use linecalc::interpreter::{
    ///     store::Store,
    ///     value::{Number, NumberKind},
    /// };
    ///
    /// let mut store = Store::new();
    /// store.assign("x", 5.0);
    /// store.define("x", NumberKind::Float, 3.0);
    /// assert_eq!(store.assign("x", 7.0), Number::Float(7.0));
    /// ```
    pub fn define(&mut self, name: &str, kind: NumberKind, value: f64) -> Number {
        let number = Number::coerce(kind, value);
        self.variables.insert(name.to_string(), number);
        number
    }

    /// Iterates over all variables sorted by name.
    pub fn variables(&self) -> impl Iterator<Item = (&str, Number)> {
        self.variables
            .iter()
            .map(|(name, number)| (name.as_str(), *number))
    }

    /// Registers a function, replacing any previous definition of that name.
    pub fn define_function(&mut self, name: &str, function: Function) {
        self.functions.insert(name.to_string(), function);
    }

    /// Looks up a function.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }

    /// Removes every variable and function.
    pub fn reset(&mut self) {
        self.variables.clear();
        self.functions.clear();
    }
}
