//! Strategy-driven testcase suite generation.
//!
//! Each strategy targets a different failure mode of candidate solutions:
//! uniform noise, tiny values with heavy duplication, maximum length,
//! all-distinct elements, and a single repeated element. Every produced
//! case is validated against its strategy constraints and the general
//! constraints before it is accepted, so a miswritten strategy fails the
//! suite instead of shipping an out-of-contract input.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::gen::{random_int, random_ints, GenRng};
use crate::harness::case::{ArrayCase, CaseInput};
use crate::harness::constraints::{Bounds, Constraints};

const DEFAULT_SCHEMA_VERSION: u32 = 1;

/// Configuration for generating a testcase suite.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SuiteGenConfig {
    /// Manifest schema version to stamp on outputs.
    pub schema_version: u32,
    /// Constraints every case must satisfy.
    pub general: Constraints,
    /// Tighter constraints for the small-random strategy.
    pub small: Constraints,
}

impl Default for SuiteGenConfig {
    fn default() -> Self {
        Self {
            schema_version: DEFAULT_SCHEMA_VERSION,
            general: Constraints::new(
                Bounds::new(1, 200_000),
                Bounds::new(-1_000_000_000, 1_000_000_000),
            ),
            small: Constraints::new(Bounds::new(1, 100), Bounds::new(0, 100)),
        }
    }
}

impl SuiteGenConfig {
    /// Validate configuration invariants, returning a human-readable error.
    fn validate(&self) -> Result<(), String> {
        if self.general.len.lower < 1 {
            return Err("general length lower bound must be >= 1".to_string());
        }
        if self.small.len.lower < self.general.len.lower
            || self.small.len.upper > self.general.len.upper
        {
            return Err("small length bounds must sit within general bounds".to_string());
        }
        if self.small.value.lower < self.general.value.lower
            || self.small.value.upper > self.general.value.upper
        {
            return Err("small value bounds must sit within general bounds".to_string());
        }
        // all_distinct needs enough distinct values to fill a maximum-length case.
        if self.general.value.span() < self.general.len.upper as u64 {
            return Err("value range too narrow for an all-distinct maximum-length case".to_string());
        }
        Ok(())
    }
}

/// One generated case together with the strategy that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedCase {
    pub name: String,
    pub input: CaseInput,
}

/// Generate the deterministic suite for a seed.
///
/// Case order is fixed (strategy declaration order), so a seed fully
/// determines the archive contents.
pub fn generate_suite(seed: u64, cfg: &SuiteGenConfig) -> Result<Vec<NamedCase>, String> {
    cfg.validate()?;
    let mut rng = GenRng::new(seed);

    let strategies: [(&str, fn(&mut GenRng, &SuiteGenConfig) -> Result<CaseInput, String>); 5] = [
        ("all_random", all_random),
        ("small_random", small_random),
        ("len_max", len_max),
        ("all_distinct", all_distinct),
        ("all_equal", all_equal),
    ];

    let mut cases = Vec::with_capacity(strategies.len());
    for (name, strategy) in strategies {
        let input = strategy(&mut rng, cfg).map_err(|e| format!("{name}: {e}"))?;
        cfg.general
            .validate(&input)
            .map_err(|e| format!("{name}: general constraint violated: {e}"))?;
        cases.push(NamedCase {
            name: name.to_string(),
            input,
        });
    }
    Ok(cases)
}

fn all_random(rng: &mut GenRng, cfg: &SuiteGenConfig) -> Result<CaseInput, String> {
    let c = &cfg.general;
    random_case(rng, c).map(CaseInput::Single)
}

fn small_random(rng: &mut GenRng, cfg: &SuiteGenConfig) -> Result<CaseInput, String> {
    let c = &cfg.small;
    let case = random_case(rng, c)?;
    cfg.small
        .validate(&CaseInput::Single(case.clone()))
        .map_err(|e| format!("small constraint violated: {e}"))?;
    Ok(CaseInput::Single(case))
}

fn len_max(rng: &mut GenRng, cfg: &SuiteGenConfig) -> Result<CaseInput, String> {
    let c = &cfg.general;
    let n = c.len.upper as usize;
    let values = random_ints(rng, n, c.value.lower, c.value.upper).map_err(|e| e.to_string())?;
    Ok(CaseInput::Single(ArrayCase::new(values)))
}

fn all_distinct(rng: &mut GenRng, cfg: &SuiteGenConfig) -> Result<CaseInput, String> {
    let c = &cfg.general;
    let n = c.len.upper as usize;
    // Rejection sampling; cfg.validate() guarantees the range is wide enough,
    // and in practice it is orders of magnitude wider than n.
    let mut seen = HashSet::with_capacity(n);
    let mut values = Vec::with_capacity(n);
    while values.len() < n {
        let v = rng.gen_i64(c.value.lower, c.value.upper);
        if seen.insert(v) {
            values.push(v);
        }
    }
    Ok(CaseInput::Single(ArrayCase::new(values)))
}

fn all_equal(rng: &mut GenRng, cfg: &SuiteGenConfig) -> Result<CaseInput, String> {
    let c = &cfg.general;
    let n = c.len.upper as usize;
    let v = random_int(rng, c.value.lower, c.value.upper).map_err(|e| e.to_string())?;
    Ok(CaseInput::Single(ArrayCase::new(vec![v; n])))
}

fn random_case(rng: &mut GenRng, c: &Constraints) -> Result<ArrayCase, String> {
    let n = random_int(rng, c.len.lower, c.len.upper).map_err(|e| e.to_string())? as usize;
    let values = random_ints(rng, n, c.value.lower, c.value.upper).map_err(|e| e.to_string())?;
    Ok(ArrayCase::new(values))
}

#[cfg(test)]
mod tests {
    use super::{generate_suite, SuiteGenConfig};
    use crate::harness::case::CaseInput;
    use crate::harness::constraints::{Bounds, Constraints};

    fn small_cfg() -> SuiteGenConfig {
        SuiteGenConfig {
            schema_version: 1,
            general: Constraints::new(Bounds::new(1, 50), Bounds::new(-100, 100)),
            small: Constraints::new(Bounds::new(1, 10), Bounds::new(0, 50)),
        }
    }

    #[test]
    fn suite_has_all_strategies_in_order() {
        let cases = generate_suite(1, &small_cfg()).unwrap();
        let names: Vec<&str> = cases.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            ["all_random", "small_random", "len_max", "all_distinct", "all_equal"]
        );
    }

    #[test]
    fn strategies_have_their_shapes() {
        let cfg = small_cfg();
        let cases = generate_suite(9, &cfg).unwrap();

        let CaseInput::Single(len_max) = &cases[2].input else {
            panic!("len_max should be a single case");
        };
        assert_eq!(len_max.len(), 50);

        let CaseInput::Single(distinct) = &cases[3].input else {
            panic!("all_distinct should be a single case");
        };
        let mut values = distinct.values().to_vec();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), 50);

        let CaseInput::Single(equal) = &cases[4].input else {
            panic!("all_equal should be a single case");
        };
        assert!(equal.values().windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn same_seed_reproduces_suite() {
        let cfg = small_cfg();
        assert_eq!(generate_suite(7, &cfg).unwrap(), generate_suite(7, &cfg).unwrap());
    }

    #[test]
    fn different_seeds_differ() {
        let cfg = small_cfg();
        assert_ne!(generate_suite(1, &cfg).unwrap(), generate_suite(2, &cfg).unwrap());
    }

    #[test]
    fn rejects_narrow_value_range_for_distinct() {
        let cfg = SuiteGenConfig {
            schema_version: 1,
            general: Constraints::new(Bounds::new(1, 50), Bounds::new(0, 10)),
            small: Constraints::new(Bounds::new(1, 10), Bounds::new(0, 10)),
        };
        assert!(generate_suite(1, &cfg).is_err());
    }

    #[test]
    fn rejects_small_outside_general() {
        let cfg = SuiteGenConfig {
            schema_version: 1,
            general: Constraints::new(Bounds::new(1, 50), Bounds::new(-100, 100)),
            small: Constraints::new(Bounds::new(1, 60), Bounds::new(0, 50)),
        };
        assert!(generate_suite(1, &cfg).is_err());
    }
}
