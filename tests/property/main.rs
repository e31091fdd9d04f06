//! Property-based and exhaustive soundness tests.
//!
//! Run with: `cargo test --test property`

mod divisor_search;
mod integer_gen;
mod prime_scan;
mod tree_shape;
