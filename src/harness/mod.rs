//! Testcase pipeline: constraints, suite generation, solver, packaging.
//!
//! The harness wraps the core generators with the problem-facing glue: a
//! constraint schema, strategy-driven suite generation, input/output file
//! materialization, reference-solver invocation, and deterministic archive
//! packaging.

pub mod case;
pub mod constraints;
pub mod generator;
pub mod package;
pub mod runner;
pub mod solver;

pub use case::{ArrayCase, CaseInput};
pub use constraints::{Bounds, Constraints};
pub use generator::{generate_suite, NamedCase, SuiteGenConfig};
pub use package::{build_zip_bytes, write_archive, ArchiveEntry};
pub use runner::{
    CaseMeta, HarnessConfig, HarnessError, HarnessReport, SuiteManifest, TestcaseHarness,
};
pub use solver::{SolverError, SolverSpec};
