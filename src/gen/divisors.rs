//! Enumeration of integers with the maximum divisor count under a limit.
//!
//! Any integer up to 10^12 has at most 11 distinct prime factors, so every
//! integer achieving the maximum divisor count for its limit is a product of
//! primes up to 37 (a larger prime factor could be swapped for an unused
//! smaller one, giving a smaller integer with the same count). The search
//! therefore walks exponent vectors over a fixed 12-prime list, allowing a
//! zero exponent so primes may be skipped (10 = 2 * 5 must be reachable).
//!
//! Recursion depth is bounded by the prime list, so plain recursion is fine.

use crate::gen::error::GenError;

/// Primes 2..=37. Numbers to be found have no larger prime factor.
const SMALL_PRIMES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Largest supported search limit.
pub const MAX_DIVISOR_LIMIT: u64 = 1_000_000_000_000;

/// All integers `<= limit` sharing the maximum divisor count found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaxDivisorSet {
    /// The maximum divisor count.
    pub divisor_count: u64,
    /// Every integer `<= limit` achieving it, ascending.
    pub values: Vec<u64>,
}

/// Running maximum and result set, threaded through the search explicitly.
struct SearchAcc {
    limit: u64,
    best_count: u64,
    values: Vec<u64>,
}

impl SearchAcc {
    fn record(&mut self, num: u64, count: u64) {
        if count > self.best_count {
            self.best_count = count;
            self.values.clear();
            self.values.push(num);
        } else if count == self.best_count {
            self.values.push(num);
        }
    }

    /// Extend `num` with powers of the primes from `prime_idx` onward.
    ///
    /// `count` is the divisor count of `num` so far. Each candidate is
    /// recorded exactly once, when the prime list is exhausted.
    fn search(&mut self, num: u64, prime_idx: usize, count: u64) {
        if prime_idx == SMALL_PRIMES.len() {
            self.record(num, count);
            return;
        }
        let prime = SMALL_PRIMES[prime_idx];
        let mut value = num;
        let mut exponent = 0u64;
        loop {
            self.search(value, prime_idx + 1, count * (exponent + 1));
            match value.checked_mul(prime) {
                Some(next) if next <= self.limit => {
                    value = next;
                    exponent += 1;
                }
                _ => break,
            }
        }
    }
}

/// Find every positive integer `<= limit` with the maximum number of
/// divisors. `limit` must be within `[1, 10^12]`.
pub fn max_divisor_integers(limit: u64) -> Result<MaxDivisorSet, GenError> {
    if limit < 1 || limit > MAX_DIVISOR_LIMIT {
        return Err(GenError::LimitOutOfRange { limit });
    }
    let mut acc = SearchAcc {
        limit,
        best_count: 0,
        values: Vec::new(),
    };
    acc.search(1, 0, 1);
    acc.values.sort_unstable();
    Ok(MaxDivisorSet {
        divisor_count: acc.best_count,
        values: acc.values,
    })
}
