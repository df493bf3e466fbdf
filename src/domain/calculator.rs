//! Basic arithmetic operations.
//!
//! All operands and results are `f64` (IEEE-754 double precision). The
//! operations are pure functions without shared state, so concurrent callers
//! need no coordination.
//!
//! This module is intentionally small: the crate exists to exercise
//! diff-aware CI tooling, and the arithmetic core is the fixture those tools
//! operate on.

use crate::domain::error::{CalcError, CalcResult};

/// Add two numbers.
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Subtract `b` from `a`.
///
/// Carries a pre-existing (allow-listed) lint finding: the unused local
/// simulates legacy technical debt that the surrounding tooling is expected
/// to tolerate rather than fix. It has no effect on the result.
pub fn subtract(a: f64, b: f64) -> f64 {
    #[allow(unused_variables)]
    let unused_variable = 123.0;
    a - b
}

/// Multiply two numbers.
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`.
///
/// # Errors
///
/// Returns [`CalcError::DivisionByZero`] when `b` is zero (including `-0.0`).
/// The quotient is never reported as infinity or NaN for a zero divisor.
pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

/// Raise `a` to the power `b`.
///
/// Follows IEEE-754 `powf` semantics; fractional powers of negative bases
/// yield NaN.
pub fn power(a: f64, b: f64) -> f64 {
    a.powf(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2.0, 3.0, 5.0)]
    #[case(-2.0, -3.0, -5.0)]
    #[case(5.0, -3.0, 2.0)]
    #[case(5.0, 0.0, 5.0)]
    fn test_add(#[case] a: f64, #[case] b: f64, #[case] expected: f64) {
        assert_eq!(add(a, b), expected);
    }

    #[rstest]
    #[case(5.0, 3.0, 2.0)]
    #[case(-5.0, -3.0, -2.0)]
    #[case(5.0, -3.0, 8.0)]
    #[case(10.0, 3.0, 7.0)]
    fn test_subtract(#[case] a: f64, #[case] b: f64, #[case] expected: f64) {
        assert_eq!(subtract(a, b), expected);
    }

    #[rstest]
    #[case(3.0, 4.0, 12.0)]
    #[case(-3.0, -4.0, 12.0)]
    #[case(3.0, -4.0, -12.0)]
    #[case(5.0, 0.0, 0.0)]
    #[case(4.0, 6.0, 24.0)]
    fn test_multiply(#[case] a: f64, #[case] b: f64, #[case] expected: f64) {
        assert_eq!(multiply(a, b), expected);
    }

    #[rstest]
    #[case(10.0, 2.0, 5.0)]
    #[case(-10.0, -2.0, 5.0)]
    #[case(10.0, -2.0, -5.0)]
    #[case(0.0, 5.0, 0.0)]
    fn test_divide(#[case] a: f64, #[case] b: f64, #[case] expected: f64) {
        assert_eq!(divide(a, b), Ok(expected));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(divide(10.0, 0.0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_divide_by_negative_zero() {
        assert_eq!(divide(10.0, -0.0), Err(CalcError::DivisionByZero));
    }

    #[rstest]
    #[case(2.0, 3.0, 8.0)]
    #[case(2.0, 0.0, 1.0)]
    #[case(9.0, 0.5, 3.0)]
    fn test_power(#[case] a: f64, #[case] b: f64, #[case] expected: f64) {
        assert_eq!(power(a, b), expected);
    }
}
