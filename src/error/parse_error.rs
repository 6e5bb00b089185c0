use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during tokenizing or parsing.
///
/// `index` is the zero-based position of the offending token among the
/// whitespace-separated words of the input. Errors detected at the end of the
/// input use the number of tokens as their index.
pub enum ParseError {
    /// The input contained no tokens at all.
    #[error("Expression is empty.")]
    EmptyExpression,
    /// A word was not exactly one recognised token.
    #[error("Error at token {index}: Unexpected token '{token}'.")]
    UnexpectedToken {
        /// The offending word.
        token: String,
        /// Position of the word.
        index: usize,
    },
    /// An integer literal does not fit in an `i64`.
    #[error("Error at token {index}: Literal '{token}' is too large.")]
    LiteralTooLarge {
        /// The literal as written.
        token: String,
        /// Position of the literal.
        index: usize,
    },
    /// An operand appeared where its slot was already occupied.
    #[error("Error at token {index}: Unexpected operand, expected an operator or ')'.")]
    UnexpectedOperand {
        /// Position of the operand.
        index: usize,
    },
    /// An operator had nothing on one of its sides.
    #[error("Error at token {index}: Missing operand.")]
    MissingOperand {
        /// Position where the operand was expected.
        index: usize,
    },
    /// A sub-expression was closed without an operator.
    #[error("Error at token {index}: Missing operator.")]
    MissingOperator {
        /// Position where the sub-expression ended.
        index: usize,
    },
    /// A second operator appeared in the same parenthesized scope.
    #[error("Error at token {index}: Operator '{token}' follows a complete operation. Add parentheses.")]
    DuplicateOperator {
        /// The operator symbol.
        token: String,
        /// Position of the operator.
        index: usize,
    },
    /// A `)` had no matching `(`.
    #[error("Error at token {index}: Closing parenthesis ')' has no matching '('.")]
    UnbalancedParenthesis {
        /// Position of the `)`.
        index: usize,
    },
    /// Parentheses were nested deeper than the parser allows.
    #[error("Error at token {index}: Parentheses are nested more than {limit} levels deep.")]
    NestingTooDeep {
        /// Position of the `(` that exceeded the limit.
        index: usize,
        /// The maximum nesting depth.
        limit: usize,
    },
    /// The input ended while a `(` was still open.
    #[error("Error at token {index}: Opening parenthesis '(' is never closed.")]
    UnclosedParenthesis {
        /// Position of the innermost unclosed `(`.
        index: usize,
    },
}
