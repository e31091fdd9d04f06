//! Deterministic testcase generation harness for competitive-programming
//! problems.
//!
//! ## Scope
//! This crate generates randomized and edge-case inputs for an algorithmic
//! problem, optionally runs a reference solver over them, and packages the
//! input/output pairs into a distributable `testcases.zip`.
//!
//! ## Key invariants
//! - All randomness flows through an explicit seeded [`gen::GenRng`]; a
//!   fixed seed reproduces the exact same suite and archive contents.
//! - Generators validate their contracts up front and fail the whole call;
//!   there are no partial results.
//! - Every produced case is validated against the problem constraints
//!   before it is written or packaged.
//!
//! ## Pipeline flow
//! `Seed -> SuiteGenConfig -> generate_suite -> input files -> solver ->
//! output files -> manifest.json -> testcases.zip`
//!
//! ## Notable entry points
//! - [`gen`]: bounded integers, fixed-sum compositions, divisor-count
//!   extremes, primality scans, and random trees.
//! - [`harness::TestcaseHarness`] / [`harness::HarnessConfig`]: the
//!   end-to-end pipeline.
//! - [`harness::SuiteGenConfig`] / [`harness::Constraints`]: per-problem
//!   tuning.

pub mod gen;
pub mod harness;

pub use gen::{GenError, GenRng};
pub use harness::{HarnessConfig, SuiteGenConfig, TestcaseHarness};
