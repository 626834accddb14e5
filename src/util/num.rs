/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Converts an `f64` to `i64` if and only if the conversion is exact.
///
/// The value must be finite, have no fractional part and lie within
/// `±MAX_SAFE_I64_INT`. Negative zero converts to `0`.
///
/// ## Example
/// ```
/// use stackcalc::util::num::{MAX_SAFE_I64_INT, f64_to_i64_exact};
///
/// assert_eq!(f64_to_i64_exact(10.0), Some(10));
/// assert_eq!(f64_to_i64_exact(-0.0), Some(0));
/// assert_eq!(f64_to_i64_exact(2.5), None);
/// assert_eq!(f64_to_i64_exact(f64::INFINITY), None);
/// assert_eq!(f64_to_i64_exact(1e300), None);
/// assert_eq!(f64_to_i64_exact(9_007_199_254_740_991.0), Some(MAX_SAFE_I64_INT));
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
#[must_use]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 || value.abs() > MAX_SAFE_I64_INT as f64 {
        return None;
    }
    Some(value as i64)
}

/// Parses a run of decimal digits as an `f64`.
///
/// Runs longer than `f64` precision are rounded to the nearest representable
/// value. Runs too long for the exponent range are rejected rather than
/// read as infinity.
///
/// ## Example
/// ```
/// use stackcalc::util::num::parse_digits;
///
/// assert_eq!(parse_digits("0042"), Some(42.0));
/// assert_eq!(parse_digits("4.2"), None);
/// assert_eq!(parse_digits(""), None);
/// assert_eq!(parse_digits(&"9".repeat(400)), None);
/// ```
#[must_use]
pub fn parse_digits(digits: &str) -> Option<f64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().filter(|value: &f64| value.is_finite())
}

/// Whether `value` can be displayed as an integer without losing
/// information.
#[must_use]
pub fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}
