//! Divisor-maximizing enumeration against a brute-force oracle.

use casegen_rs::gen::max_divisor_integers;
use proptest::prelude::*;

fn brute_divisor_count(n: u64) -> u64 {
    let mut count = 0;
    let mut d = 1;
    while d * d <= n {
        if n % d == 0 {
            count += if d * d == n { 1 } else { 2 };
        }
        d += 1;
    }
    count
}

/// Exhaustive agreement with brute force over a small dense domain.
#[test]
fn exhaustive_small_limits() {
    const MAX: usize = 2_000;
    // Divisor-count sieve: counts[n] = number of divisors of n.
    let mut counts = vec![0u64; MAX + 1];
    for d in 1..=MAX {
        for multiple in (d..=MAX).step_by(d) {
            counts[multiple] += 1;
        }
    }

    for limit in 1..=MAX {
        let set = max_divisor_integers(limit as u64).unwrap();
        let best = *counts[1..=limit].iter().max().unwrap();
        let expected: Vec<u64> = (1..=limit)
            .filter(|&n| counts[n] == best)
            .map(|n| n as u64)
            .collect();
        assert_eq!(set.divisor_count, best, "limit {limit}");
        assert_eq!(set.values, expected, "limit {limit}");
    }
}

proptest! {
    /// Structural properties hold at arbitrary limits: non-empty, in range,
    /// sorted, every member's true divisor count equals the reported max.
    #[test]
    fn members_share_the_maximum(limit in 1u64..10_000_000) {
        let set = max_divisor_integers(limit).unwrap();
        prop_assert!(!set.values.is_empty());
        prop_assert!(set.values.windows(2).all(|w| w[0] < w[1]));
        for &v in &set.values {
            prop_assert!(v <= limit);
            prop_assert_eq!(brute_divisor_count(v), set.divisor_count);
        }
    }
}
