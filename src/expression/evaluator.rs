use crate::{
    error::ArithmeticError,
    expression::node::{ExpressionNode, Operand, Operator},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `ArithmeticError` describing the failure.
pub type EvalResult<T> = Result<T, ArithmeticError>;

impl Operator {
    /// Applies the operator to two integers with checked arithmetic.
    ///
    /// Division truncates toward zero, like Rust's `/` on `i64`.
    ///
    /// # Errors
    /// - `DivisionByZero` if dividing by zero.
    /// - `Overflow` if the result does not fit in an `i64`.
    ///
    /// # Example
    /// ```
    /// use infix_stairs::{error::ArithmeticError, expression::Operator};
    ///
    /// assert_eq!(Operator::Divide.apply(7, 2), Ok(3));
    /// assert_eq!(Operator::Divide.apply(-7, 2), Ok(-3));
    /// assert_eq!(Operator::Divide.apply(1, 0),
    ///            Err(ArithmeticError::DivisionByZero { dividend: 1 }));
    /// ```
    pub fn apply(self, left: i64, right: i64) -> EvalResult<i64> {
        let result = match self {
            Self::Add => left.checked_add(right),
            Self::Subtract => left.checked_sub(right),
            Self::Multiply => left.checked_mul(right),
            Self::Divide => {
                if right == 0 {
                    return Err(ArithmeticError::DivisionByZero { dividend: left });
                }
                left.checked_div(right)
            },
        };

        result.ok_or(ArithmeticError::Overflow { left,
                                                 operator: self,
                                                 right })
    }
}

impl Operand {
    /// Returns the literal, or evaluates the sub-expression.
    pub fn evaluate(&self) -> EvalResult<i64> {
        match self {
            Self::Literal(value) => Ok(*value),
            Self::Node(node) => node.evaluate(),
        }
    }
}

impl ExpressionNode {
    /// Evaluates the tree rooted at this node.
    ///
    /// Operands are evaluated depth-first, left before right, and the
    /// node's operator is then applied to the two results. The first error
    /// stops evaluation.
    pub fn evaluate(&self) -> EvalResult<i64> {
        let left = self.left.evaluate()?;
        let right = self.right.evaluate()?;

        self.operator.apply(left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_each_operator() {
        assert_eq!(Operator::Add.apply(2, 3), Ok(5));
        assert_eq!(Operator::Subtract.apply(2, 3), Ok(-1));
        assert_eq!(Operator::Multiply.apply(-4, 3), Ok(-12));
        assert_eq!(Operator::Divide.apply(9, 3), Ok(3));
    }

    #[test]
    fn overflow_is_an_error() {
        assert_eq!(Operator::Add.apply(i64::MAX, 1),
                   Err(ArithmeticError::Overflow { left:     i64::MAX,
                                                   operator: Operator::Add,
                                                   right:    1, }));
        assert!(Operator::Divide.apply(i64::MIN, -1).is_err());
    }

    #[test]
    fn left_error_wins() {
        let node = ExpressionNode::new(ExpressionNode::new(1, Operator::Divide, 0),
                                       Operator::Add,
                                       ExpressionNode::new(i64::MAX, Operator::Add, 1));

        assert_eq!(node.evaluate(), Err(ArithmeticError::DivisionByZero { dividend: 1 }));
    }
}
