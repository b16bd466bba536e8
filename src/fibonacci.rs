//! Closed-form (Binet) Fibonacci numbers.

use crate::constants::MAX_FIBONACCI_INDEX;
use crate::error::DrillError;

/// The `n`th Fibonacci number, F(0) = 0, F(1) = 1.
///
/// Computed as `round((φⁿ − ψⁿ) / √5)` in f64. Beyond
/// [`MAX_FIBONACCI_INDEX`] the rounding is no longer guaranteed to land on the
/// exact integer, so larger indices are rejected.
pub fn fibonacci(n: u32) -> Result<u64, DrillError> {
    match n {
        0 => Ok(0),
        1 => Ok(1),
        n if n > MAX_FIBONACCI_INDEX => Err(DrillError::FibonacciOutOfRange {
            n,
            max: MAX_FIBONACCI_INDEX,
        }),
        n => {
            let sqrt_5 = 5.0_f64.sqrt();
            let phi = (1.0 + sqrt_5) / 2.0;
            let psi = (1.0 - sqrt_5) / 2.0;
            let exponent = n as i32;
            let fib = (phi.powi(exponent) - psi.powi(exponent)) / sqrt_5;
            Ok(fib.round() as u64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fibonacci_iterative(n: u32) -> u64 {
        let (mut a, mut b) = (0u64, 1u64);
        for _ in 0..n {
            (a, b) = (b, a + b);
        }
        a
    }

    #[test]
    fn test_known_values() {
        assert_eq!(fibonacci(0).unwrap(), 0);
        assert_eq!(fibonacci(1).unwrap(), 1);
        assert_eq!(fibonacci(2).unwrap(), 1);
        assert_eq!(fibonacci(5).unwrap(), 5);
        assert_eq!(fibonacci(9).unwrap(), 34);
        assert_eq!(fibonacci(35).unwrap(), 9_227_465);
    }

    #[test]
    fn test_matches_iteration() {
        for n in 0..=60 {
            assert_eq!(fibonacci(n).unwrap(), fibonacci_iterative(n), "n = {n}");
        }
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            fibonacci(MAX_FIBONACCI_INDEX + 1),
            Err(DrillError::FibonacciOutOfRange { n: 71, max: 70 })
        ));
    }
}
