/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// Every node owns its children exclusively, so a parsed tree has no shared
/// or dangling subtrees. Each variant records the byte offset of the token
/// that produced it, which the evaluator attaches to runtime errors.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `42` or `3.5`.
    Literal {
        /// The constant value.
        value:    f64,
        /// Byte offset in the source text.
        position: usize,
    },
    /// A binary arithmetic operation: `left op right`.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator token.
        position: usize,
    },
    /// Arithmetic negation of a single operand (`-x`).
    UnaryMinus {
        /// The negated operand.
        expr:     Box<Self>,
        /// Byte offset of the `-` token.
        position: usize,
    },
}

impl Expr {
    /// Gets the source position from `self`.
    /// ## Example
    /// ```
    /// use keypad_calc::ast::Expr;
    ///
    /// let expr = Expr::Literal { value:    1.0,
    ///                            position: 4, };
    ///
    /// assert_eq!(expr.position(), 4);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::UnaryMinus { position, .. } => *position,
        }
    }
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`, or `x` on the keypad)
    Mul,
    /// Division (`/`)
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
