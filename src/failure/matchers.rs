//! Ready-made predicates for the `*_matching` error operators

use std::error::Error as StdError;
use std::fmt::Display;

#[cfg(feature = "regex")]
use regex::Regex;

use super::kinds::Failure;

/// Matches failures whose message contains `needle`
pub fn message_contains<E>(needle: impl Into<String>) -> impl Fn(&E) -> bool
where
    E: Display,
{
    let needle = needle.into();
    move |err| err.to_string().contains(&needle)
}

/// Matches failures whose message matches `pattern`
#[cfg(feature = "regex")]
pub fn message_matches<E>(pattern: Regex) -> impl Fn(&E) -> bool
where
    E: Display,
{
    move |err| pattern.is_match(&err.to_string())
}

/// Matches failures that are of kind `K`, directly or as a wrapped source
pub fn is_kind<K, E>() -> impl Fn(&E) -> bool
where
    K: StdError + 'static,
    E: Failure,
{
    |err| err.kind_of::<K>().is_some()
}
