//! The polymorphic capability contract behind `Container`

use crate::container::Container;

pub trait Monad: Sized {
    type Item;
    type Wrapped<U>;

    fn unit(value: Self::Item) -> Self;
    fn fmap<U>(self, f: impl FnOnce(Self::Item) -> U) -> Self::Wrapped<U>;
    fn bind<U>(self, f: impl FnOnce(Self::Item) -> Self::Wrapped<U>) -> Self::Wrapped<U>;
}

impl<T> Monad for Container<T> {
    type Item = T;
    type Wrapped<U> = Container<U>;

    fn unit(value: T) -> Self {
        Container::of(value)
    }

    fn fmap<U>(self, f: impl FnOnce(T) -> U) -> Container<U> {
        self.map(f)
    }

    fn bind<U>(self, f: impl FnOnce(T) -> Container<U>) -> Container<U> {
        self.flat_map(f)
    }
}
