//! Trial-division primality and prime-neighbor scans.

use crate::gen::error::GenError;

/// Check whether `num` is prime. Returns false for 0 and 1.
///
/// Trial division up to `sqrt(num)`; fine for the magnitudes testcase
/// constraints use, not for cryptographic sizes.
pub fn is_prime(num: u64) -> bool {
    if num <= 1 {
        return false;
    }
    let mut i = 2u64;
    // `i <= num / i` avoids overflowing `i * i` near the top of the domain.
    while i <= num / i {
        if num % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Largest prime strictly less than `n`. Requires `n > 2`.
pub fn prev_prime(n: u64) -> Result<u64, GenError> {
    if n <= 2 {
        return Err(GenError::PrimeBoundTooSmall { n });
    }
    let mut candidate = n - 1;
    while !is_prime(candidate) {
        candidate -= 1;
    }
    Ok(candidate)
}

/// Smallest prime strictly greater than `n`.
///
/// The scan is unbounded; callers keep `n` small enough that a nearby prime
/// is reachable in reasonable time.
pub fn next_prime(n: u64) -> u64 {
    let mut candidate = n + 1;
    while !is_prime(candidate) {
        candidate += 1;
    }
    candidate
}
