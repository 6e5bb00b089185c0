/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and parsing an
/// infix expression. Every variant cites the zero-based index of the
/// whitespace-separated token where the problem was detected.
pub mod parse_error;
/// Arithmetic errors.
///
/// Raised while evaluating an expression tree or summing staircase
/// compositions: division by zero and integer overflow.
pub mod arithmetic_error;
/// Domain errors.
///
/// Raised when an input lies outside the mathematical domain of an operation,
/// such as a negative number of steps.
pub mod domain_error;

pub use arithmetic_error::ArithmeticError;
pub use domain_error::DomainError;
pub use parse_error::ParseError;

/// Any failure reported by the public entry points of this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The expression could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation or counting failed on the arithmetic itself.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
    /// The input was outside the domain of the operation.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Result type returned by [`crate::evaluate`] and [`crate::count_ways`].
pub type Result<T> = std::result::Result<T, Error>;
