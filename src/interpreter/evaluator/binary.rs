/// Operator dispatch for binary expressions.
pub mod core;

/// Integer arithmetic: `+ - * / %`.
///
/// All operations are checked; division and modulo round toward negative
/// infinity.
pub mod scalar;

/// Equality and ordering comparisons.
pub mod comparison;

/// Short-circuiting `&&` and `||`.
pub mod logic;
