//! Transformation, filtering, observation and fallback operators
//!
//! None of these call their function argument on an empty container.

use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};

use super::types::Container;
use crate::error::{CartonError, Result};

impl<T> Container<T> {
    /// Transform the stored value
    pub fn map<U, F>(self, f: F) -> Container<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Container::Present(value) => Container::of(f(value)),
            Container::Empty => Container::Empty,
        }
    }

    /// Transform the stored value, collapsing a `None` result to empty
    pub fn filter_map<U, F>(self, f: F) -> Container<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Container::Present(value) => Container::of_nullable(f(value)),
            Container::Empty => Container::Empty,
        }
    }

    /// Replace this container with the one produced by `f`
    pub fn flat_map<U, F>(self, f: F) -> Container<U>
    where
        F: FnOnce(T) -> Container<U>,
    {
        match self {
            Container::Present(value) => f(value),
            Container::Empty => Container::Empty,
        }
    }

    /// Keep the value only if `pred` holds for it
    pub fn filter<P>(self, pred: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        let keep = match &self {
            Container::Present(value) => pred(value),
            Container::Empty => false,
        };

        if keep {
            self
        } else {
            Container::Empty
        }
    }

    /// Keep the value only if `f` yields a container holding `true`
    pub fn filter_when<F>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> Container<bool>,
    {
        self.filter(|value| f(value).get_or_default(false))
    }

    /// Fail with [`CartonError::Rejected`] when a present value breaks `check`
    pub fn ensure<P>(self, check: P, what: &str) -> Result<Self>
    where
        P: FnOnce(&T) -> bool,
    {
        let rejected = match &self {
            Container::Present(value) => !check(value),
            Container::Empty => false,
        };

        if rejected {
            return Err(CartonError::Rejected(what.to_string()));
        }

        Ok(self)
    }

    /// Run `f` for effect when empty
    pub fn do_if_empty<F>(self, f: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_empty() {
            f();
        }

        self
    }

    /// Run `f` on the stored value for effect
    pub fn do_if_present<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Container::Present(value) = &self {
            f(value);
        }

        self
    }

    /// Emit one log record describing the container
    pub fn log_state(self, level: log::Level, label: &str) -> Self
    where
        T: Debug,
    {
        log::log!(level, "{}: {:?}", label, self);
        self
    }

    /// Best-effort transform
    ///
    /// If `f` returns an error or panics, the failure is discarded and the
    /// original value is kept, converted into the result type. Panics are
    /// only caught when built with `panic = "unwind"`. An absorbed panic
    /// still runs the process panic hook, so the default hook prints its
    /// message to stderr. Return an `Err` instead of panicking for a silent
    /// fallback.
    ///
    /// ```
    /// use carton::Container;
    ///
    /// let parsed = Container::of(String::from("x"))
    ///     .try_map(|s| s.parse::<u8>().map(|n| n.to_string()));
    /// assert_eq!(parsed, Container::of(String::from("x")));
    /// ```
    pub fn try_map<U, E, F>(self, f: F) -> Container<U>
    where
        T: Into<U>,
        F: FnOnce(&T) -> std::result::Result<U, E>,
    {
        let value = match self {
            Container::Present(value) => value,
            Container::Empty => return Container::Empty,
        };

        match panic::catch_unwind(AssertUnwindSafe(|| f(&value))) {
            Ok(Ok(mapped)) => Container::of(mapped),
            Ok(Err(_)) | Err(_) => Container::of(value.into()),
        }
    }

    /// Use `alternative` when empty, otherwise keep the stored value
    pub fn switch_if_empty<U>(self, alternative: Container<U>) -> Container<U>
    where
        T: Into<U>,
    {
        match self {
            Container::Present(value) => Container::of(value.into()),
            Container::Empty => alternative,
        }
    }

    /// Wrap `value` when empty, otherwise keep the stored value
    pub fn default_if_empty<U>(self, value: U) -> Container<U>
    where
        T: Into<U>,
    {
        self.switch_if_empty(Container::of(value))
    }
}
