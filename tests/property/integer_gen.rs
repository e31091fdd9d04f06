//! Bound and sum properties of the integer generators.

use casegen_rs::gen::{ints_with_target_sum, random_ints, GenRng};
use proptest::prelude::*;

proptest! {
    /// `random_ints` returns exactly `n` values, each within bounds.
    #[test]
    fn random_ints_respects_bounds(
        seed in any::<u64>(),
        n in 0usize..512,
        lower in -1_000_000i64..1_000_000,
        width in 0i64..1_000_000,
    ) {
        let upper = lower + width;
        let mut rng = GenRng::new(seed);
        let vals = random_ints(&mut rng, n, lower, upper).unwrap();
        prop_assert_eq!(vals.len(), n);
        prop_assert!(vals.iter().all(|&v| lower <= v && v <= upper));
    }

    /// `ints_with_target_sum` returns `n` values >= the lower bound that
    /// sum exactly to the target.
    #[test]
    fn composition_sums_exactly(
        seed in any::<u64>(),
        n in 1usize..256,
        lower_bound in -1_000i64..1_000,
        extra in 0i64..1_000_000,
    ) {
        let target_sum = (n as i64) * lower_bound + extra;
        let mut rng = GenRng::new(seed);
        let vals = ints_with_target_sum(&mut rng, n, target_sum, lower_bound).unwrap();
        prop_assert_eq!(vals.len(), n);
        prop_assert!(vals.iter().all(|&v| v >= lower_bound));
        prop_assert_eq!(vals.iter().sum::<i64>(), target_sum);
    }

    /// Infeasible targets are always rejected, never mangled.
    #[test]
    fn composition_rejects_infeasible(
        seed in any::<u64>(),
        n in 1usize..256,
        lower_bound in -1_000i64..1_000,
        deficit in 1i64..1_000,
    ) {
        let target_sum = (n as i64) * lower_bound - deficit;
        let mut rng = GenRng::new(seed);
        prop_assert!(ints_with_target_sum(&mut rng, n, target_sum, lower_bound).is_err());
    }
}
