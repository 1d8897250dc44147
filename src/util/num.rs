//! Integer helpers with floor semantics.

/// Integer division rounding toward negative infinity.
///
/// Returns `None` when `divisor` is zero or the quotient overflows
/// (`i64::MIN / -1`).
///
/// ## Example
/// ```
/// use lambd::util::num::floor_div;
///
/// assert_eq!(floor_div(7, 2), Some(3));
/// assert_eq!(floor_div(-7, 2), Some(-4));
/// assert_eq!(floor_div(7, -2), Some(-4));
/// assert_eq!(floor_div(1, 0), None);
/// ```
#[must_use]
pub const fn floor_div(dividend: i64, divisor: i64) -> Option<i64> {
    let Some(quotient) = dividend.checked_div(divisor) else {
        return None;
    };
    let Some(remainder) = dividend.checked_rem(divisor) else {
        return None;
    };

    if remainder != 0 && ((remainder < 0) != (divisor < 0)) {
        quotient.checked_sub(1)
    } else {
        Some(quotient)
    }
}

/// Remainder of [`floor_div`]; the result takes the sign of the divisor.
///
/// Returns `None` when `divisor` is zero.
///
/// ## Example
/// ```
/// use lambd::util::num::floor_mod;
///
/// assert_eq!(floor_mod(7, 3), Some(1));
/// assert_eq!(floor_mod(-7, 2), Some(1));
/// assert_eq!(floor_mod(7, -2), Some(-1));
/// assert_eq!(floor_mod(i64::MIN, -1), Some(0));
/// assert_eq!(floor_mod(1, 0), None);
/// ```
#[must_use]
pub const fn floor_mod(dividend: i64, divisor: i64) -> Option<i64> {
    if divisor == 0 {
        return None;
    }
    // `i64::MIN % -1` overflows in hardware but is mathematically zero.
    let remainder = match dividend.checked_rem(divisor) {
        Some(remainder) => remainder,
        None => 0,
    };

    if remainder != 0 && ((remainder < 0) != (divisor < 0)) {
        Some(remainder + divisor)
    } else {
        Some(remainder)
    }
}
