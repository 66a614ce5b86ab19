//! Stateless arithmetic.

use crate::error::CalcError;

/// Pure arithmetic operations over `f64`. Holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    pub fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        a - b
    }

    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        a * b
    }

    /// Divides `a` by `b`.
    ///
    /// # Errors
    /// [`CalcError::DivisionByZero`] when `b` is exactly zero (`-0.0` included).
    pub fn divide(&self, a: f64, b: f64) -> Result<f64, CalcError> {
        if b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(a / b)
    }

    /// `base` raised to an integer exponent. Zero and negative exponents follow
    /// real exponentiation, so `power(2.0, -2) == 0.25`.
    pub fn power(&self, base: f64, exponent: i32) -> f64 {
        base.powi(exponent)
    }

    pub fn sqrt(&self, x: f64) -> Result<f64, CalcError> {
        if x < 0.0 {
            return Err(CalcError::InvalidArgument(
                "cannot take the square root of a negative number".to_string(),
            ));
        }
        Ok(x.sqrt())
    }

    pub fn is_even(&self, n: i64) -> bool {
        n % 2 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 0.001;

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < EPS
    }

    #[test]
    fn test_add() {
        let calc = Calculator::new();
        assert!(close(calc.add(5.0, 3.0), 8.0));
        assert!(close(calc.add(-5.0, -3.0), -8.0));
        assert!(close(calc.add(5.0, 0.0), 5.0));
        for v in [1.0, 2.0, 3.0, 4.0, 5.0] {
            assert!(close(calc.add(v, v), v * 2.0));
        }
    }

    #[test]
    fn test_add_rounds_small_addend_at_max() {
        let calc = Calculator::new();
        assert_eq!(calc.add(f64::MAX, 1.0), f64::MAX);
        assert_eq!(calc.add(f64::MAX, f64::MAX), f64::INFINITY);
    }

    #[test]
    fn test_subtract() {
        let calc = Calculator::new();
        assert!(close(calc.subtract(10.0, 4.0), 6.0));
        assert!(close(calc.subtract(3.0, 8.0), -5.0));
    }

    #[test]
    fn test_multiply() {
        let calc = Calculator::new();
        assert!(close(calc.multiply(4.0, 5.0), 20.0));
        assert!(close(calc.multiply(7.0, 0.0), 0.0));
        assert!(close(calc.multiply(-3.0, 4.0), -12.0));
        assert!((calc.multiply(0.0001, 0.0001) - 0.00000001).abs() < 1e-9);
    }

    #[test]
    fn test_divide() {
        let calc = Calculator::new();
        assert_eq!(calc.divide(10.0, 2.0), Ok(5.0));
        assert_eq!(calc.divide(7.0, 2.0), Ok(3.5));
    }

    #[test]
    fn test_divide_by_zero() {
        let calc = Calculator::new();
        let err = calc.divide(10.0, 0.0).unwrap_err();
        assert_eq!(err, CalcError::DivisionByZero);
        assert_eq!(err.to_string(), "cannot divide by zero");
        assert_eq!(calc.divide(1.0, -0.0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_divide_by_tiny_divisor_is_allowed() {
        let calc = Calculator::new();
        assert!(calc.divide(1.0, 1e-300).is_ok());
    }

    #[test]
    fn test_power() {
        let calc = Calculator::new();
        assert!(close(calc.power(2.0, 3), 8.0));
        assert!(close(calc.power(5.0, 0), 1.0));
        assert!(close(calc.power(2.0, -2), 0.25));
    }

    #[test]
    fn test_sqrt() {
        let calc = Calculator::new();
        assert_eq!(calc.sqrt(9.0), Ok(3.0));
        assert_eq!(calc.sqrt(0.0), Ok(0.0));
    }

    #[test]
    fn test_sqrt_of_negative() {
        let calc = Calculator::new();
        match calc.sqrt(-4.0) {
            Err(CalcError::InvalidArgument(msg)) => assert!(msg.contains("negative")),
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_is_even() {
        let calc = Calculator::new();
        assert!(calc.is_even(4));
        assert!(calc.is_even(0));
        assert!(calc.is_even(-2));
        assert!(!calc.is_even(5));
        assert!(!calc.is_even(-3));
        assert!(!calc.is_even(1));
    }
}
