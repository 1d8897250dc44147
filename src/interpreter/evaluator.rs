/// Binary operator evaluation logic.
///
/// Handles arithmetic, comparisons and the short-circuiting logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements logical NOT.
pub mod unary;

/// Core evaluation logic and interpreter state.
///
/// Contains the main evaluation engine, the interpreter configuration, and
/// error propagation.
pub mod core;

/// Function and lambda application.
///
/// Handles argument checking, environment copying for calls, and call depth
/// tracking.
pub mod function;
