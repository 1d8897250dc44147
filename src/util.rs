/// Integer arithmetic helpers.
///
/// Floor division and floor remainder for `i64`. Unlike Rust's `/` and `%`,
/// which truncate toward zero, these round toward negative infinity, so the
/// remainder takes the sign of the divisor. Both return `None` instead of
/// panicking on a zero divisor.
pub mod num;
