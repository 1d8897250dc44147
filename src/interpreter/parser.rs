/// The parser state and token-consumption discipline.
///
/// Defines [`core::Parser`], the program entry point, and the `advance` /
/// `eat` steps that detect invalid tokens as soon as they become current.
pub mod core;

/// Unary-level parsing.
///
/// Handles factors: literals, grouping, logical NOT, variables and calls.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the precedence levels for logic, comparison, additive and
/// multiplicative operators, including the boolean-operand check for `+`/`-`.
pub mod binary;

/// Statement parsing.
///
/// Parses function definitions, applied lambdas and conditionals, and falls
/// back to boolean expressions.
pub mod statement;

/// Utility functions for the parser.
///
/// Argument lists, parameter lists and identifiers.
pub mod utils;
