use std::fmt;

use crate::util::num::{format_general, i64_to_f64, is_exact_integer, truncate_to_i64};

/// The kind of a numeric variable.
///
/// A variable's kind is fixed when it is created. Plain assignments convert
/// new values into the existing kind; only a typed initialization
/// (`name(i)=...` or `name(f)=...`) can replace it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    /// Values are truncated toward zero on assignment.
    Integer,
    /// Values are stored as computed.
    Float,
}

impl NumberKind {
    /// Parses the tag used by typed initializations.
    ///
    /// # Example
    /// ```
    /// use linecalc::interpreter::value::NumberKind;
    ///
    /// assert_eq!(NumberKind::from_tag("i"), Some(NumberKind::Integer));
    /// assert_eq!(NumberKind::from_tag("f"), Some(NumberKind::Float));
    /// assert_eq!(NumberKind::from_tag("x"), None);
    /// ```
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "i" => Some(Self::Integer),
            "f" => Some(Self::Float),
            _ => None,
        }
    }

    /// The kind a new variable gets when nothing forces it: integer for exact
    /// integers, float otherwise.
    #[must_use]
    pub fn infer(value: f64) -> Self {
        if is_exact_integer(value) {
            Self::Integer
        } else {
            Self::Float
        }
    }

    /// The label shown by `print`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Integer => "int",
            Self::Float => "float",
        }
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A stored numeric value.
///
/// Arithmetic always happens on `f64`; a `Number` only exists in variable
/// slots and call frames, where the kind decides how values are converted
/// into it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// An integer variable.
    Integer(i64),
    /// A floating variable.
    Float(f64),
}

impl Number {
    /// Converts `value` into a slot of the given kind, truncating toward zero
    /// for integers.
    ///
    /// # Example
    /// ```
    /// use linecalc::interpreter::value::{Number, NumberKind};
    ///
    /// assert_eq!(Number::coerce(NumberKind::Integer, -7.9), Number::Integer(-7));
    /// assert_eq!(Number::coerce(NumberKind::Float, -7.9), Number::Float(-7.9));
    /// ```
    #[must_use]
    pub fn coerce(kind: NumberKind, value: f64) -> Self {
        match kind {
            NumberKind::Integer => Self::Integer(truncate_to_i64(value)),
            NumberKind::Float => Self::Float(value),
        }
    }

    /// Creates a value whose kind is inferred from `value` itself.
    #[must_use]
    pub fn inferred(value: f64) -> Self {
        Self::coerce(NumberKind::infer(value), value)
    }

    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(self) -> NumberKind {
        match self {
            Self::Integer(_) => NumberKind::Integer,
            Self::Float(_) => NumberKind::Float,
        }
    }

    /// Widens the value to the floating domain for arithmetic.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(n) => i64_to_f64(n),
            Self::Float(r) => r,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(r) => f.write_str(&format_general(*r)),
        }
    }
}
