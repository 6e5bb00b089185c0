use log::debug;

/// Evaluation of parsed expression trees.
///
/// Applies operators with checked `i64` arithmetic and walks the tree
/// depth-first, left operand before right.
pub mod evaluator;
/// The lexer turns whitespace-separated words into tokens.
///
/// # Responsibilities
/// - Recognises parentheses, the four operators and integer literals.
/// - Records the index of every token for error reporting.
/// - Rejects words that are not exactly one token.
pub mod lexer;
/// Expression tree types: operators, operands and nodes.
pub mod node;
/// The parser builds an expression tree from tokens.
///
/// Tokens are scanned left to right while tracking the current node and which
/// operand each open parenthesis still expects. Structural mistakes are
/// reported with the index of the offending token.
pub mod parser;

pub use evaluator::EvalResult;
pub use node::{ExpressionNode, Operand, Operator};
pub use parser::{MAX_NESTING_DEPTH, ParseResult, parse};

use crate::error::Result;

/// Parses and evaluates a whitespace-tokenized infix expression.
///
/// Operators have no precedence; use parentheses to group every operation
/// beyond the outermost one. Division truncates toward zero.
///
/// # Errors
/// - [`crate::error::ParseError`] if the expression is malformed.
/// - [`crate::error::ArithmeticError`] on division by zero or overflow.
///
/// # Example
/// ```
/// use infix_stairs::expression::evaluate;
///
/// assert_eq!(evaluate("2 * ( 1 + 2 )").unwrap(), 6);
/// assert!(evaluate("1 / 0").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<i64> {
    let tree = parse(expression)?;
    let value = tree.evaluate()?;

    debug!("{tree} = {value}");
    Ok(value)
}
