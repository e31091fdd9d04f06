//! Problem constraint schema.
//!
//! Mirrors how constraints are stated in problem statements: an inclusive
//! bound on the input length and an inclusive bound on element values. The
//! schema is serde-derived so it can be embedded in suite manifests.

use serde::{Deserialize, Serialize};

use crate::harness::case::{ArrayCase, CaseInput};

/// Inclusive integer range `[lower, upper]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub lower: i64,
    pub upper: i64,
}

impl Bounds {
    pub fn new(lower: i64, upper: i64) -> Self {
        debug_assert!(lower <= upper);
        Self { lower, upper }
    }

    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Number of integers in the range, saturating at `u64::MAX`.
    pub fn span(&self) -> u64 {
        let diff = self.upper.wrapping_sub(self.lower) as u64;
        diff.checked_add(1).unwrap_or(u64::MAX)
    }
}

/// Constraints for one array problem: length bounds and per-element bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraints {
    pub len: Bounds,
    pub value: Bounds,
}

impl Constraints {
    pub fn new(len: Bounds, value: Bounds) -> Self {
        Self { len, value }
    }

    /// Validate a produced input, with a dedicated branch per variant.
    pub fn validate(&self, input: &CaseInput) -> Result<(), String> {
        match input {
            CaseInput::Single(case) => self.validate_case(case),
            CaseInput::Batch(cases) => {
                if cases.is_empty() {
                    return Err("batch input contains no cases".to_string());
                }
                for (idx, case) in cases.iter().enumerate() {
                    self.validate_case(case)
                        .map_err(|e| format!("batch case {idx}: {e}"))?;
                }
                Ok(())
            }
        }
    }

    fn validate_case(&self, case: &ArrayCase) -> Result<(), String> {
        let n = case.len() as i64;
        if !self.len.contains(n) {
            return Err(format!(
                "length {n} outside [{}, {}]",
                self.len.lower, self.len.upper
            ));
        }
        for (idx, &value) in case.values().iter().enumerate() {
            if !self.value.contains(value) {
                return Err(format!(
                    "element {value} at index {idx} outside [{}, {}]",
                    self.value.lower, self.value.upper
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Bounds, Constraints};
    use crate::harness::case::{ArrayCase, CaseInput};

    fn constraints() -> Constraints {
        Constraints::new(Bounds::new(1, 4), Bounds::new(-10, 10))
    }

    #[test]
    fn accepts_valid_single() {
        let input = CaseInput::Single(ArrayCase::new(vec![1, -10, 10]));
        assert!(constraints().validate(&input).is_ok());
    }

    #[test]
    fn rejects_length_violations() {
        let too_long = CaseInput::Single(ArrayCase::new(vec![0; 5]));
        assert!(constraints().validate(&too_long).is_err());
        let empty = CaseInput::Single(ArrayCase::new(Vec::new()));
        assert!(constraints().validate(&empty).is_err());
    }

    #[test]
    fn rejects_out_of_range_element() {
        let input = CaseInput::Single(ArrayCase::new(vec![1, 11]));
        let err = constraints().validate(&input).unwrap_err();
        assert!(err.contains("index 1"), "{err}");
    }

    #[test]
    fn batch_validates_each_case() {
        let good = CaseInput::Batch(vec![
            ArrayCase::new(vec![1]),
            ArrayCase::new(vec![2, 3]),
        ]);
        assert!(constraints().validate(&good).is_ok());

        let bad = CaseInput::Batch(vec![
            ArrayCase::new(vec![1]),
            ArrayCase::new(vec![99]),
        ]);
        let err = constraints().validate(&bad).unwrap_err();
        assert!(err.starts_with("batch case 1"), "{err}");

        let empty = CaseInput::Batch(Vec::new());
        assert!(constraints().validate(&empty).is_err());
    }

    #[test]
    fn span_counts_inclusive_range() {
        assert_eq!(Bounds::new(0, 0).span(), 1);
        assert_eq!(Bounds::new(-2, 2).span(), 5);
        assert_eq!(Bounds::new(i64::MIN, i64::MAX).span(), u64::MAX);
    }
}
