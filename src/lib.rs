//! # infix-stairs
//!
//! Two small, independent calculators:
//!
//! - an evaluator for whitespace-tokenized infix expressions such as
//!   `( 1 + 2 ) * 3`, built on an explicit expression tree, and
//! - a counter for the number of ways to climb a staircase taking 1, 2 or 3
//!   steps at a time, computed as a sum of multinomial coefficients.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for parsing, evaluation and counting.
///
/// # Responsibilities
/// - Defines one error enum per failure family (parse, arithmetic, domain).
/// - Attaches token indices and operands for context.
/// - Wraps all families in a single [`error::Error`] for the entry points.
pub mod error;
/// Parses and evaluates infix expressions.
///
/// This module ties together the lexer, the tree-building parser and the
/// evaluator, and exposes [`expression::evaluate`] as its entry point.
///
/// # Responsibilities
/// - Tokenizes whitespace-separated input.
/// - Builds an expression tree following parenthesis nesting, with no
///   operator precedence.
/// - Evaluates the tree with checked integer arithmetic.
pub mod expression;
/// Counts the ways to climb a staircase in moves of 1, 2 or 3 steps.
///
/// # Responsibilities
/// - Enumerates partitions of the staircase without collecting them.
/// - Sums the multinomial coefficient of every partition.
/// - Rejects negative inputs and counts that do not fit in a `u128`.
pub mod steps;

pub use error::{Error, Result};
pub use expression::{evaluate, parse};
pub use steps::{count_table, count_ways};
