//! Container module for the single-value holder
//!
//! Containers are either present or empty and provide:
//! - Construction, including the `Option` null-collapse boundary
//! - Transformation, filtering and fallback combinators
//! - Error-shaped operators over stored failures
//! - Terminal extraction into plain values, `Option` and iterators

mod combinators;
mod iter;
mod recovery;
#[cfg(feature = "serde")]
mod serialize;
mod types;

pub use iter::{IntoIter, Iter};
pub use types::Container;
