//! Checked `f64` helpers for the reserve-accounting math.
//!
//! Pool reserves are IEEE 754 doubles.  Every helper here returns [`Err`]
//! instead of silently producing `NaN` or `±∞`, so a corrupted
//! intermediate can never be committed to pool state.
//!
//! | Aspect | Value |
//! |--------|-------|
//! | Significant digits | ~15–17 |
//! | Determinism | Subject to IEEE 754 rounding, evaluation order pinned by callers |

use crate::error::AmmError;

/// Relative closeness test.
///
/// `true` when `|a − b| ≤ rel_tol × max(|a|, |b|)`.  There is no absolute
/// floor: two values are only close to zero when both are exactly zero.
/// Non-finite inputs are never close to anything.
///
/// # Examples
///
/// ```
/// use pool_math::math::is_close;
///
/// assert!(is_close(400.0, 400.000_000_01, 1e-7));
/// assert!(!is_close(400.0, 401.0, 1e-7));
/// ```
#[must_use]
pub fn is_close(a: f64, b: f64, rel_tol: f64) -> bool {
    if !a.is_finite() || !b.is_finite() {
        return false;
    }
    if a == b {
        return true;
    }
    let diff = (a - b).abs();
    diff <= rel_tol * a.abs().max(b.abs())
}

fn finite(value: f64, context: &'static str) -> Result<f64, AmmError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AmmError::Overflow(context))
    }
}

/// `a × b`, failing on a non-finite result.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] with `context` if the product is not finite.
pub fn checked_mul(a: f64, b: f64, context: &'static str) -> Result<f64, AmmError> {
    finite(a * b, context)
}

/// `a + b`, failing on a non-finite result.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] with `context` if the sum is not finite.
pub fn checked_add(a: f64, b: f64, context: &'static str) -> Result<f64, AmmError> {
    finite(a + b, context)
}

/// `a / b`, failing on a zero divisor or a non-finite result.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `b == 0`.
/// - [`AmmError::Overflow`] with `context` if the quotient is not finite.
pub fn checked_div(a: f64, b: f64, context: &'static str) -> Result<f64, AmmError> {
    if b == 0.0 {
        return Err(AmmError::DivisionByZero);
    }
    finite(a / b, context)
}
