use thiserror::Error;

use crate::expression::Operator;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors raised by checked integer arithmetic.
pub enum ArithmeticError {
    /// Attempted division by zero.
    #[error("Division by zero: {dividend} / 0.")]
    DivisionByZero {
        /// The left-hand side of the division.
        dividend: i64,
    },
    /// An expression operation overflowed `i64`.
    #[error("Integer overflow while computing {left} {operator} {right}.")]
    Overflow {
        /// Left operand.
        left:     i64,
        /// The operator that overflowed.
        operator: Operator,
        /// Right operand.
        right:    i64,
    },
    /// The number of staircase compositions does not fit in a `u128`.
    #[error("The number of ways to climb {steps} steps does not fit in 128 bits.")]
    CountOverflow {
        /// The requested number of steps.
        steps: u64,
    },
}
