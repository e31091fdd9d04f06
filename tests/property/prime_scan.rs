//! Primality and prime-neighbor scans against brute force.

use casegen_rs::gen::{is_prime, next_prime, prev_prime};
use proptest::prelude::*;

fn brute_is_prime(n: u64) -> bool {
    n >= 2 && (2..n).all(|d| n % d != 0)
}

/// Exhaustive agreement over `[0, 10000]`, including the 0/1 edge cases.
#[test]
fn exhaustive_to_ten_thousand() {
    assert!(!is_prime(0));
    assert!(!is_prime(1));
    assert!(is_prime(2));
    for n in 0..=10_000u64 {
        assert_eq!(is_prime(n), brute_is_prime(n), "n = {n}");
    }
}

#[test]
fn documented_neighbors() {
    assert_eq!(prev_prime(10).unwrap(), 7);
    assert_eq!(next_prime(10), 11);
}

proptest! {
    /// `prev_prime` returns the largest prime strictly below `n`.
    #[test]
    fn prev_prime_is_adjacent(n in 3u64..50_000) {
        let p = prev_prime(n).unwrap();
        prop_assert!(p < n);
        prop_assert!(is_prime(p));
        prop_assert!((p + 1..n).all(|m| !is_prime(m)));
    }

    /// `next_prime` returns the smallest prime strictly above `n`.
    #[test]
    fn next_prime_is_adjacent(n in 0u64..50_000) {
        let q = next_prime(n);
        prop_assert!(q > n);
        prop_assert!(is_prime(q));
        prop_assert!((n + 1..q).all(|m| !is_prime(m)));
    }
}
