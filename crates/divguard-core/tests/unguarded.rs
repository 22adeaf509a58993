use divguard_core::{divide_unchecked, remainder_unchecked, safe_divide};

#[test]
fn test_unguarded_divide_success() {
    assert_eq!(divide_unchecked(100, 5), 20);
    assert_eq!(divide_unchecked(100, 5), safe_divide(100, 5).unwrap());
}

#[test]
#[should_panic(expected = "attempt to divide by zero")]
fn test_unguarded_divide_by_zero_panics() {
    divide_unchecked(100, 0);
}

#[test]
#[should_panic(expected = "attempt to calculate the remainder with a divisor of zero")]
fn test_unguarded_remainder_by_zero_panics() {
    remainder_unchecked(100, 0);
}

#[test]
#[should_panic(expected = "attempt to divide with overflow")]
fn test_unguarded_divide_overflow_panics() {
    divide_unchecked(i32::MIN, -1);
}
