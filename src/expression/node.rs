use std::fmt;

/// One of the four arithmetic operators an expression node can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`, truncating toward zero.
    Divide,
}

impl Operator {
    /// The symbol used for this operator in source text.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Either side of an [`ExpressionNode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// An integer literal.
    Literal(i64),
    /// A parenthesized sub-expression owned by its parent.
    Node(Box<ExpressionNode>),
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Self::Literal(value)
    }
}

impl From<ExpressionNode> for Operand {
    fn from(node: ExpressionNode) -> Self {
        Self::Node(Box::new(node))
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "{value}"),
            Self::Node(node) => write!(f, "{node}"),
        }
    }
}

/// A single binary operation in a parsed expression tree.
///
/// The parser only hands out complete nodes, so a node always has an
/// operator and both operands by the time it can be evaluated. A tree is
/// built for one evaluation and dropped afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionNode {
    /// The operation applied to the two operands.
    pub operator: Operator,
    /// The operand before the operator.
    pub left:     Operand,
    /// The operand after the operator.
    pub right:    Operand,
}

impl ExpressionNode {
    /// Creates a node from its operator and operands.
    ///
    /// # Example
    /// ```
    /// use infix_stairs::expression::{ExpressionNode, Operator};
    ///
    /// let inner = ExpressionNode::new(1, Operator::Add, 2);
    /// let node = ExpressionNode::new(2, Operator::Multiply, inner);
    ///
    /// assert_eq!(node.to_string(), "(2 * (1 + 2))");
    /// assert_eq!(node.evaluate(), Ok(6));
    /// ```
    pub fn new(left: impl Into<Operand>, operator: Operator, right: impl Into<Operand>) -> Self {
        Self { operator,
               left: left.into(),
               right: right.into() }
    }
}

impl fmt::Display for ExpressionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}
