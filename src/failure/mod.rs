//! Failure module for the error-kind test
//!
//! Decides which stored values count as errors:
//! - `Failure` trait, the capability checked by error-shaped operators
//! - `failure_kind!` / `plain_kind!` registration macros
//! - Predicates for the `*_matching` operators

mod kinds;
pub mod matchers;

pub use kinds::Failure;
