//! Randomized structure generators used by the testcase harness.
//!
//! Purpose:
//! - Provide bounded random integers, fixed-sum compositions, divisor-count
//!   extremes, primality scans, and random trees as independent pure
//!   functions over an explicit RNG handle.
//!
//! Invariants:
//! - Every function validates its contract up front and fails the whole
//!   call via [`GenError`]; there are no partial results.
//! - Identical seeds reproduce identical outputs across platforms.
//! - No function holds state beyond its call scope.

pub mod divisors;
pub mod error;
pub mod integers;
pub mod primes;
pub mod rng;
pub mod tree;

pub use divisors::{max_divisor_integers, MaxDivisorSet, MAX_DIVISOR_LIMIT};
pub use error::GenError;
pub use integers::{ints_with_target_sum, random_int, random_ints};
pub use primes::{is_prime, next_prime, prev_prime};
pub use rng::GenRng;
pub use tree::{chain_tree, random_tree, random_tree_variant, star_tree, Tree};
