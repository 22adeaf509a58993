//! The unguarded path. These functions divide without looking at the
//! denominator, so a zero denominator faults at runtime.

#[inline(never)]
pub fn divide_unchecked(numerator: i32, denominator: i32) -> i32 {
    numerator / denominator
}

#[inline(never)]
pub fn remainder_unchecked(numerator: i32, denominator: i32) -> i32 {
    numerator % denominator
}

/// Float division has no fault in Rust: a zero denominator yields an
/// infinite quotient, which the cast saturates to `i32::MAX` or `i32::MIN`.
#[inline(never)]
pub fn divide_float_unchecked(numerator: f64, denominator: f64) -> i32 {
    (numerator / denominator) as i32
}
