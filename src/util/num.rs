/// Truncates an `f64` towards zero into an `i64`.
///
/// Out-of-range values saturate at `i64::MIN` / `i64::MAX`, and NaN maps to
/// `0`, so the conversion is total.
///
/// ## Example
/// ```
/// use exprcalc::util::num::f64_to_i64;
///
/// assert_eq!(f64_to_i64(9.9), 9);
/// assert_eq!(f64_to_i64(-9.9), -9);
/// assert_eq!(f64_to_i64(1e300), i64::MAX);
/// assert_eq!(f64_to_i64(f64::NAN), 0);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn f64_to_i64(value: f64) -> i64 {
    value as i64
}

/// Widens an `i64` back to `f64`, rounding to the nearest representable value
/// beyond `2^53`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Encodes a boolean as `1` or `0`.
#[must_use]
pub const fn bool_to_f64(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

/// IEEE 754 remainder: `a - b * n` where `n` is `a / b` rounded to the nearest
/// integer, ties to even.
///
/// The result lies in `[-|b| / 2, |b| / 2]`, so it may be negative for positive
/// operands. Callers handle `b == 0` themselves.
///
/// ## Example
/// ```
/// use exprcalc::util::num::ieee_remainder;
///
/// assert_eq!(ieee_remainder(9.0, 4.0), 1.0);
/// assert_eq!(ieee_remainder(7.0, 4.0), -1.0);
/// assert_eq!(ieee_remainder(-9.0, 8.0), -1.0);
/// assert_eq!(ieee_remainder(5.0, 2.0), 1.0);
/// assert_eq!(ieee_remainder(3.0, 2.0), -1.0);
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn ieee_remainder(a: f64, b: f64) -> f64 {
    // `%` is the exact truncated remainder, with the sign of `a`.
    let r = a % b;
    let divisor = b.abs();
    let half = divisor / 2.0;

    if r.abs() > half {
        r - divisor.copysign(r)
    } else if r.abs() == half {
        let quotient = (a - r) / b;
        if quotient % 2.0 == 0.0 {
            r
        } else {
            r - divisor.copysign(r)
        }
    } else {
        r
    }
}

/// Shifts `value` left by `amount` bits.
///
/// Amounts outside `0..64` shift every bit out and yield `0`.
///
/// ## Example
/// ```
/// use exprcalc::util::num::shift_left;
///
/// assert_eq!(shift_left(5, 1), 10);
/// assert_eq!(shift_left(5, 64), 0);
/// assert_eq!(shift_left(5, -1), 0);
/// ```
#[must_use]
pub fn shift_left(value: i64, amount: i64) -> i64 {
    u32::try_from(amount).ok()
                         .and_then(|amount| value.checked_shl(amount))
                         .unwrap_or(0)
}

/// Arithmetic right shift of `value` by `amount` bits.
///
/// Amounts outside `0..64` shift every bit out and yield the sign fill: `0` for
/// non-negative values and `-1` for negative ones.
///
/// ## Example
/// ```
/// use exprcalc::util::num::shift_right;
///
/// assert_eq!(shift_right(9, 1), 4);
/// assert_eq!(shift_right(-9, 1), -5);
/// assert_eq!(shift_right(-9, 100), -1);
/// ```
#[must_use]
pub fn shift_right(value: i64, amount: i64) -> i64 {
    u32::try_from(amount).ok()
                         .and_then(|amount| value.checked_shr(amount))
                         .unwrap_or(if value < 0 { -1 } else { 0 })
}
