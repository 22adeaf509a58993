//! The guarded path: every division is preceded by a check on the denominator.

use crate::DivisionError;

/// Magnitude at or below which a float denominator is treated as zero.
pub const FLOAT_EPSILON: f64 = 0.000001;

/// Divides `numerator` by `denominator`, truncating toward zero.
///
/// Never divides when `denominator == 0`; returns
/// [`DivisionError::DivisionByZero`] instead. The single overflowing input,
/// `i32::MIN / -1`, is reported as [`DivisionError::Overflow`].
pub fn safe_divide(numerator: i32, denominator: i32) -> Result<i32, DivisionError> {
    if denominator == 0 {
        return Err(DivisionError::DivisionByZero);
    }
    numerator
        .checked_div(denominator)
        .ok_or(DivisionError::Overflow {
            numerator,
            operator: '/',
            denominator,
        })
}

/// Remainder counterpart of [`safe_divide`]. The result takes the sign of
/// `numerator`.
pub fn safe_remainder(numerator: i32, denominator: i32) -> Result<i32, DivisionError> {
    if denominator == 0 {
        return Err(DivisionError::DivisionByZero);
    }
    numerator
        .checked_rem(denominator)
        .ok_or(DivisionError::Overflow {
            numerator,
            operator: '%',
            denominator,
        })
}

/// Divides by a float denominator and truncates the quotient to an `i32`.
///
/// Denominators within [`FLOAT_EPSILON`] of zero are rejected, and so is NaN.
/// A quotient outside the `i32` range saturates to `i32::MIN` or `i32::MAX`
/// rather than failing; only the denominator is guarded.
pub fn safe_divide_float(numerator: f64, denominator: f64) -> Result<i32, DivisionError> {
    if denominator.abs() > FLOAT_EPSILON {
        Ok((numerator / denominator) as i32)
    } else {
        Err(DivisionError::DivisionByZero)
    }
}
