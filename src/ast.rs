/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

/// A unary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `-x`
    Negate,
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Each variant carries the source line so that evaluation errors can point
/// at the statement they came from.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A number literal.
    Number {
        /// The literal value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Function call expression (e.g. `sq(4)`).
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A unary operation.
    Unary {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use linecalc::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Number { line, .. }
            | Self::Variable { line, .. }
            | Self::Call { line, .. }
            | Self::Unary { line, .. }
            | Self::Binary { line, .. } => *line,
        }
    }
}

impl Expr {
    /// Number of nodes on the longest path from this node down to a leaf.
    ///
    /// ## Example
    /// ```
    /// use linecalc::interpreter::parser::core::parse_source;
    ///
    /// assert_eq!(parse_source("x", 1, 16).unwrap().height(), 1);
    /// assert_eq!(parse_source("1 + 2 * -x", 1, 16).unwrap().height(), 4);
    /// assert_eq!(parse_source("f(1, (2 + 3))", 1, 16).unwrap().height(), 3);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        match self {
            Self::Number { .. } | Self::Variable { .. } => 1,
            Self::Call { arguments, .. } => 1 + arguments.iter().map(Self::height).max().unwrap_or(0),
            Self::Unary { expr, .. } => 1 + expr.height(),
            Self::Binary { left, right, .. } => 1 + left.height().max(right.height()),
        }
    }
}

/// A function definition statement: `name(param, ...): body`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in order.
    pub params: Vec<String>,
    /// The body text, kept unparsed.
    pub body:   String,
}

/// One classified input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A blank line.
    Empty,
    /// `print` on its own lists all variables; `print name` shows one.
    Print {
        /// The variable to show, if any.
        name: Option<String>,
    },
    /// `name(param, ...): body`
    FunctionDefinition(FunctionDef),
    /// `name(i)=expr` or `name(f)=expr`
    TypedInitialization {
        /// The name of the variable.
        name:  String,
        /// The text between the parentheses. Only `i` and `f` are valid; the
        /// tag is checked after the expression has been evaluated.
        tag:   String,
        /// The right-hand expression.
        value: Expr,
    },
    /// `name=expr`
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The right-hand expression.
        value: Expr,
    },
}
