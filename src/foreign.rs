//! Foreign zero-or-one value types accepted by `Container::or_empty`

use crate::container::Container;

/// A value that either holds one item or nothing
pub trait OptionLike {
    type Item;

    fn is_absent(&self) -> bool;

    /// Unwrap the item, `None` when absent
    fn into_item(self) -> Option<Self::Item>;
}

impl<T> OptionLike for Option<T> {
    type Item = T;

    fn is_absent(&self) -> bool {
        self.is_none()
    }

    fn into_item(self) -> Option<T> {
        self
    }
}

impl<'a, T> OptionLike for &'a Option<T> {
    type Item = &'a T;

    fn is_absent(&self) -> bool {
        self.is_none()
    }

    fn into_item(self) -> Option<&'a T> {
        self.as_ref()
    }
}

impl<T> OptionLike for Container<T> {
    type Item = T;

    fn is_absent(&self) -> bool {
        self.is_empty()
    }

    fn into_item(self) -> Option<T> {
        self.to_optional()
    }
}
