//! Sieve of Eratosthenes and newline-delimited prime output.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::DrillError;

/// All primes strictly below `n`, ascending.
pub fn sieve_of_eratosthenes(n: usize) -> Vec<usize> {
    if n < 3 {
        return Vec::new();
    }

    let mut is_prime = vec![true; n];
    is_prime[0] = false;
    is_prime[1] = false;

    let mut i = 2;
    while i * i < n {
        if is_prime[i] {
            for multiple in (i * i..n).step_by(i) {
                is_prime[multiple] = false;
            }
        }
        i += 1;
    }

    is_prime
        .iter()
        .enumerate()
        .filter_map(|(value, &prime)| prime.then_some(value))
        .collect()
}

/// Write every prime below `n` to `path`, one per line.
///
/// The file is created or truncated and written in one call. Every prime is
/// followed by `\n`; with no primes the file holds a single newline.
pub fn write_primes(n: usize, path: impl AsRef<Path>) -> Result<(), DrillError> {
    let path = path.as_ref();
    let primes = sieve_of_eratosthenes(n);

    let mut contents = primes
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    contents.push('\n');

    fs::write(path, contents).map_err(|source| DrillError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(count = primes.len(), path = %path.display(), "wrote primes");
    Ok(())
}
