//! Typed errors for the fallible parts of the crate.
//!
//! The baseline free functions (`integrate_range`, `find_launch_angle`) never
//! return errors; invalid physics propagates as inf/NaN. Everything configurable
//! or touching the filesystem reports through [`DrillError`].

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by guarded integration, the peer utilities and file output.
#[derive(Debug, Error)]
pub enum DrillError {
    /// A guarded integration ran out of steps before the projectile landed.
    #[error("projectile still airborne after {steps} steps (x = {x:.3} m, y = {y:.3} m)")]
    StepLimitExceeded { steps: usize, x: f64, y: f64 },

    /// The configured time step is zero, negative or not finite.
    #[error("time step must be finite and positive, got {0}")]
    InvalidTimeStep(f64),

    /// Fibonacci index too large for the f64 closed form to stay exact.
    #[error("fibonacci index {n} exceeds the exact closed-form limit of {max}")]
    FibonacciOutOfRange { n: u32, max: u32 },

    /// A deck instruction could not be parsed.
    #[error("invalid deck instruction: {0:?}")]
    InvalidInstruction(String),

    /// A faro out-shuffle was requested on a deck with an odd card count.
    #[error("faro shuffle needs an even number of cards, deck has {0}")]
    OddDeckFaro(usize),

    /// Writing an output file failed.
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_step_limit() {
        let err = DrillError::StepLimitExceeded { steps: 10, x: 1.5, y: 0.25 };
        assert_eq!(
            err.to_string(),
            "projectile still airborne after 10 steps (x = 1.500 m, y = 0.250 m)"
        );
    }

    #[test]
    fn display_fibonacci_out_of_range() {
        let err = DrillError::FibonacciOutOfRange { n: 90, max: 70 };
        assert_eq!(
            err.to_string(),
            "fibonacci index 90 exceeds the exact closed-form limit of 70"
        );
    }

    #[test]
    fn io_error_keeps_source() {
        use std::error::Error as _;

        let err = DrillError::Io {
            path: PathBuf::from("/nonexistent/primes.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/nonexistent/primes.txt"));
        assert!(err.source().is_some());
    }
}
