//! Bounded random integers and fixed-sum compositions.

use crate::gen::error::GenError;
use crate::gen::rng::GenRng;

/// Generate `n` integers drawn independently and uniformly (with
/// replacement) from the inclusive range `[lower, upper]`.
pub fn random_ints(
    rng: &mut GenRng,
    n: usize,
    lower: i64,
    upper: i64,
) -> Result<Vec<i64>, GenError> {
    if lower > upper {
        return Err(GenError::InvertedBounds { lower, upper });
    }
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        out.push(rng.gen_i64(lower, upper));
    }
    Ok(out)
}

/// Generate one integer uniformly from `[lower, upper]`.
pub fn random_int(rng: &mut GenRng, lower: i64, upper: i64) -> Result<i64, GenError> {
    if lower > upper {
        return Err(GenError::InvertedBounds { lower, upper });
    }
    Ok(rng.gen_i64(lower, upper))
}

/// Generate `n` integers, each at least `lower_bound`, summing exactly to
/// `target_sum`.
///
/// Construction: subtract `n * lower_bound` from the target to get a
/// non-negative slack, draw `n - 1` uniform cut points in `[0, slack]`, sort
/// them, and take adjacent gaps as the shifted values. The resulting
/// distribution is an order-statistics construction, not uniform over all
/// valid compositions; callers may rely on the bounds and the exact sum,
/// nothing more.
pub fn ints_with_target_sum(
    rng: &mut GenRng,
    n: usize,
    target_sum: i64,
    lower_bound: i64,
) -> Result<Vec<i64>, GenError> {
    if n == 0 {
        return Err(GenError::EmptyComposition);
    }
    // Feasibility and slack are computed in 128-bit to dodge overflow on
    // extreme bound combinations.
    let slack = i128::from(target_sum) - (n as i128) * i128::from(lower_bound);
    if slack < 0 {
        return Err(GenError::InfeasibleSum {
            n,
            target_sum,
            lower_bound,
        });
    }
    let Ok(slack) = i64::try_from(slack) else {
        return Err(GenError::SlackOverflow {
            n,
            target_sum,
            lower_bound,
        });
    };

    let mut cuts = Vec::with_capacity(n + 1);
    cuts.push(0);
    for _ in 0..n - 1 {
        cuts.push(rng.gen_i64(0, slack));
    }
    cuts.push(slack);
    cuts.sort_unstable();

    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        out.push(cuts[i + 1] - cuts[i] + lower_bound);
    }
    debug_assert_eq!(
        out.iter().map(|&v| i128::from(v)).sum::<i128>(),
        i128::from(target_sum)
    );
    Ok(out)
}
