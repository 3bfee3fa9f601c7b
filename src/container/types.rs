//! Container type definition
//!
//! A Container holds at most one value. Construction and the terminal
//! operations that take the value back out live here; the chaining
//! operators are in `combinators` and `recovery`.

use std::fmt;

use super::iter::{IntoIter, Iter};
use crate::error::{CartonError, Result};
use crate::foreign::OptionLike;

/// A single-value holder that is either present or empty
///
/// There is no "present absence": every constructor that accepts an
/// `Option` collapses `None` to [`Container::Empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Container<T> {
    /// No value
    #[default]
    Empty,
    /// A stored value
    Present(T),
}

impl<T> Container<T> {
    /// Wrap a value
    pub const fn of(value: T) -> Self {
        Container::Present(value)
    }

    /// Wrap a value if there is one, otherwise create an empty container
    pub fn of_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Container::Present(value),
            None => Container::Empty,
        }
    }

    /// Create an empty container
    pub const fn empty() -> Self {
        Container::Empty
    }

    /// Wrap the value produced by `f`, which is called immediately
    pub fn from_supplier<F>(f: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Self::of(f())
    }

    /// Like [`Container::from_supplier`] for suppliers that may produce nothing
    pub fn from_nullable_supplier<F>(f: F) -> Self
    where
        F: FnOnce() -> Option<T>,
    {
        Self::of_nullable(f())
    }

    /// Unwrap one level of a foreign optional-like value
    ///
    /// An absent foreign value gives an empty container, a present one
    /// gives a container holding its item. Use [`Container::of`] for values
    /// that are not optional-like. A `Result` is not accepted: call `.ok()`
    /// to drop its error, or store it with [`Container::of`] to keep it.
    ///
    /// ```
    /// use carton::Container;
    ///
    /// assert_eq!(Container::or_empty(Some(3)), Container::of(3));
    /// assert_eq!(Container::<i32>::or_empty(None), Container::empty());
    /// assert_eq!(Container::or_empty("x".parse::<i32>().ok()), Container::empty());
    /// assert!(Container::of("x".parse::<i32>()).is_error());
    /// ```
    pub fn or_empty<O>(value: O) -> Self
    where
        O: OptionLike<Item = T>,
    {
        if value.is_absent() {
            return Container::Empty;
        }

        Self::of_nullable(value.into_item())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Container::Empty)
    }

    pub fn is_present(&self) -> bool {
        !self.is_empty()
    }

    /// Borrow the stored value, `None` when empty
    pub fn get_or_null(&self) -> Option<&T> {
        match self {
            Container::Present(value) => Some(value),
            Container::Empty => None,
        }
    }

    /// Convert into a standard `Option`
    pub fn to_optional(self) -> Option<T> {
        match self {
            Container::Present(value) => Some(value),
            Container::Empty => None,
        }
    }

    pub fn as_ref(&self) -> Container<&T> {
        match self {
            Container::Present(value) => Container::Present(value),
            Container::Empty => Container::Empty,
        }
    }

    /// Iterate over the zero or one stored values
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.get_or_null())
    }

    /// Consume the container into an iterator of zero or one values
    pub fn stream(self) -> IntoIter<T> {
        IntoIter::new(self.to_optional())
    }

    /// Return the stored value, or `default` when empty
    pub fn get_or_default(self, default: T) -> T {
        match self {
            Container::Present(value) => value,
            Container::Empty => default,
        }
    }

    /// Return the stored value, or the result of `f` when empty
    pub fn or_else_get<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Container::Present(value) => value,
            Container::Empty => f(),
        }
    }

    /// Return the stored value, or the error built by `f` when empty
    pub fn or_else_throw<E, F>(self, f: F) -> std::result::Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Container::Present(value) => Ok(value),
            Container::Empty => Err(f()),
        }
    }

    /// Return the stored value or a [`CartonError::Empty`] naming `what`
    pub fn require(self, what: &str) -> Result<T> {
        self.or_else_throw(|| CartonError::Empty(what.to_string()))
    }
}

impl<T> Container<Container<T>> {
    /// Remove one level of nesting
    pub fn flatten(self) -> Container<T> {
        match self {
            Container::Present(inner) => inner,
            Container::Empty => Container::Empty,
        }
    }
}

impl<T> Container<Option<T>> {
    /// Collapse a stored `None` to an empty container
    pub fn flatten(self) -> Container<T> {
        match self {
            Container::Present(inner) => Container::of_nullable(inner),
            Container::Empty => Container::Empty,
        }
    }
}

impl<T> From<Option<T>> for Container<T> {
    fn from(value: Option<T>) -> Self {
        Container::of_nullable(value)
    }
}

impl<T> From<Container<T>> for Option<T> {
    fn from(container: Container<T>) -> Self {
        container.to_optional()
    }
}

impl<T: fmt::Display> fmt::Display for Container<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Container::Present(value) => write!(f, "Present({})", value),
            Container::Empty => write!(f, "Empty"),
        }
    }
}
