use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents inputs that lie outside the domain of an operation.
pub enum DomainError {
    /// A staircase cannot have a negative number of steps.
    #[error("Cannot count the ways to climb {n} steps: the number of steps must not be negative.")]
    NegativeSteps {
        /// The rejected input.
        n: i64,
    },
}
