//! Input case model and flat-text rendering.
//!
//! A single case renders as the solver input format: `n` on the first line,
//! then `n` space-separated integers. A batch renders its case count first,
//! then each case block, matching multi-test problem statements. Single
//! versus batch is a tagged variant so each shape gets its own validation
//! branch instead of a runtime type inspection.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

/// One array input: the values, with `n` implied by the length.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayCase {
    values: Vec<i64>,
}

impl ArrayCase {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    fn render_into(&self, out: &mut String) {
        // Infallible: fmt::Write on String never errors.
        let _ = writeln!(out, "{}", self.values.len());
        let mut first = true;
        for value in &self.values {
            if !first {
                out.push(' ');
            }
            let _ = write!(out, "{value}");
            first = false;
        }
        out.push('\n');
    }
}

/// A generated input: one case, or a batch of cases in one file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseInput {
    Single(ArrayCase),
    Batch(Vec<ArrayCase>),
}

impl CaseInput {
    /// Render the flat-text form consumed by the solver.
    pub fn render(&self) -> String {
        let mut out = String::new();
        match self {
            Self::Single(case) => case.render_into(&mut out),
            Self::Batch(cases) => {
                let _ = writeln!(out, "{}", cases.len());
                for case in cases {
                    case.render_into(&mut out);
                }
            }
        }
        out
    }

    /// Total number of values across the input.
    pub fn value_count(&self) -> usize {
        match self {
            Self::Single(case) => case.len(),
            Self::Batch(cases) => cases.iter().map(ArrayCase::len).sum(),
        }
    }
}
