//! Error-shaped operators
//!
//! A container is in error when it is present and its value passes the
//! [`Failure`] test. These operators never fire on an empty container.

use std::error::Error as StdError;

use super::types::Container;
use crate::failure::Failure;

impl<T: Failure> Container<T> {
    /// Borrow the stored failure, if the container is in error
    pub fn failure(&self) -> Option<&T::Error> {
        self.get_or_null().and_then(Failure::as_failure)
    }

    pub fn is_error(&self) -> bool {
        self.failure().is_some()
    }

    fn failure_matches<P>(&self, pred: P) -> bool
    where
        P: FnOnce(&T::Error) -> bool,
    {
        self.failure().map_or(false, pred)
    }

    /// Run `f` on the stored failure for effect
    pub fn do_on_error<F>(self, f: F) -> Self
    where
        F: FnOnce(&T::Error),
    {
        if let Some(err) = self.failure() {
            f(err);
        }

        self
    }

    /// Run `f` for effect when the stored failure is of kind `K`
    ///
    /// ```
    /// use std::io;
    /// use carton::Container;
    ///
    /// let mut seen = None;
    /// Container::of(io::Error::new(io::ErrorKind::NotFound, "gone"))
    ///     .do_on_error_of::<io::Error, _>(|e| seen = Some(e.kind()));
    /// assert_eq!(seen, Some(io::ErrorKind::NotFound));
    /// ```
    pub fn do_on_error_of<K, F>(self, f: F) -> Self
    where
        K: StdError + 'static,
        F: FnOnce(&K),
    {
        if let Some(value) = self.get_or_null().filter(|value| value.as_failure().is_some()) {
            match value.kind_of::<K>() {
                Some(kind) => f(kind),
                None => log::trace!(
                    "failure in {} is not a {}",
                    std::any::type_name::<T>(),
                    std::any::type_name::<K>()
                ),
            }
        }

        self
    }

    /// Run `f` for effect when the stored failure satisfies `pred`
    pub fn do_on_error_matching<P, F>(self, pred: P, f: F) -> Self
    where
        P: FnOnce(&T::Error) -> bool,
        F: FnOnce(&T::Error),
    {
        if self.failure_matches(pred) {
            return self.do_on_error(f);
        }

        self
    }

    /// Replace a stored failure with the value built from it
    ///
    /// The replacement has the stored type, so recovering to a different
    /// type means storing a `Result` and returning its `Ok` side:
    ///
    /// ```
    /// use carton::Container;
    ///
    /// let port = Container::of("http".parse::<u16>()).on_error_map(|_| Ok(80));
    /// assert_eq!(port.map(|r| r.ok()), Container::of(Some(80)));
    /// ```
    ///
    /// A bare error value has nothing to recover into. Re-type it first with
    /// [`Container::map`] (for example `.map(Err::<u16, _>)`).
    pub fn on_error_map<F>(self, f: F) -> Self
    where
        F: FnOnce(T::Error) -> T,
    {
        self.on_error_flat_map(|err| Container::of(f(err)))
    }

    /// Like [`Container::on_error_map`], only for failures satisfying `pred`
    pub fn on_error_map_matching<P, F>(self, pred: P, f: F) -> Self
    where
        P: FnOnce(&T::Error) -> bool,
        F: FnOnce(T::Error) -> T,
    {
        if self.failure_matches(pred) {
            return self.on_error_map(f);
        }

        self
    }

    /// Replace a stored failure with the container built from it
    ///
    /// Like [`Container::on_error_map`], the stored type is kept.
    pub fn on_error_flat_map<F>(self, f: F) -> Self
    where
        F: FnOnce(T::Error) -> Container<T>,
    {
        match self {
            Container::Present(value) => match value.into_failure() {
                Ok(err) => f(err),
                Err(value) => Container::Present(value),
            },
            Container::Empty => Container::Empty,
        }
    }

    /// Like [`Container::on_error_flat_map`], only for failures satisfying `pred`
    pub fn on_error_flat_map_matching<P, F>(self, pred: P, f: F) -> Self
    where
        P: FnOnce(&T::Error) -> bool,
        F: FnOnce(T::Error) -> Container<T>,
    {
        if self.failure_matches(pred) {
            return self.on_error_flat_map(f);
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::io;

    const S_VAL_1: &str = "1";
    const S_VAL_2: &str = "2";

    #[derive(Debug, Clone, PartialEq, thiserror::Error)]
    enum LookupError {
        #[error("not found: {0}")]
        NotFound(String),
        #[error("timed out")]
        Timeout,
    }

    crate::failure_kind!(LookupError);

    type Lookup = Result<&'static str, LookupError>;

    fn not_found() -> LookupError {
        LookupError::NotFound("key".to_string())
    }

    fn fail_if_called<R>() -> R {
        panic!("Called function")
    }

    #[test]
    fn test_is_error() {
        assert!(Container::of(not_found()).is_error());
        assert!(Container::<Lookup>::of(Err(LookupError::Timeout)).is_error());
        assert!(!Container::<Lookup>::of(Ok(S_VAL_1)).is_error());
        assert!(!Container::<LookupError>::empty().is_error());
        assert!(!Container::of(S_VAL_1).is_error());
    }

    #[test]
    fn test_do_on_error() {
        let called = Cell::new(false);
        let container = Container::of(not_found()).do_on_error(|_| called.set(true));
        assert_eq!(container, Container::of(not_found()));
        assert!(called.get());
    }

    #[test]
    fn test_do_on_error_skips_values_and_empty() {
        assert_eq!(
            Container::of(S_VAL_1).do_on_error(|_| fail_if_called::<()>()),
            Container::of(S_VAL_1)
        );
        assert_eq!(
            Container::<LookupError>::empty().do_on_error(|_| fail_if_called::<()>()),
            Container::empty()
        );
    }

    #[test]
    fn test_do_on_error_of_kind() {
        let called = Cell::new(false);
        Container::of(not_found()).do_on_error_of::<LookupError, _>(|e| {
            assert_eq!(*e, not_found());
            called.set(true);
        });
        assert!(called.get());
    }

    #[test]
    fn test_do_on_error_of_other_kind() {
        let container = Container::of(not_found())
            .do_on_error_of::<io::Error, _>(|_| fail_if_called::<()>());
        assert_eq!(container, Container::of(not_found()));
    }

    #[test]
    fn test_do_on_error_of_inside_result() {
        let called = Cell::new(false);
        Container::<Lookup>::of(Err(LookupError::Timeout))
            .do_on_error_of::<LookupError, _>(|_| called.set(true));
        assert!(called.get());
    }

    #[test]
    fn test_foreign_error_payload_in_result() {
        type Narrowed = Result<i32, std::num::TryFromIntError>;

        let stored: Narrowed = u8::try_from(300i32).map(i32::from);
        assert!(Container::of(stored.clone()).is_error());

        let seen = Cell::new(false);
        let recovered = Container::of(stored)
            .do_on_error_of::<std::num::TryFromIntError, _>(|_| seen.set(true))
            .do_on_error_of::<io::Error, _>(|_| fail_if_called::<()>())
            .on_error_map(|_| Ok(0));
        assert!(seen.get());
        assert_eq!(recovered, Container::of(Ok(0)));
        assert!(!recovered.is_error());
    }

    #[test]
    fn test_unregistered_error_payload_in_result() {
        #[derive(Debug, Clone, PartialEq)]
        struct Refused(u16);

        let recovered = Container::of(Err::<&str, _>(Refused(7)))
            .do_on_error_matching(|e| e.0 == 7, |_| ())
            .on_error_map(|e| Ok(if e.0 == 7 { "fallback" } else { "other" }));
        assert_eq!(recovered, Container::of(Ok("fallback")));
    }

    #[test]
    fn test_recover_bare_error_into_other_type() {
        let recovered = Container::of(not_found())
            .map(Err::<&str, _>)
            .on_error_map(|_| Ok(S_VAL_2));
        assert_eq!(recovered, Container::of(Ok(S_VAL_2)));
    }

    #[test]
    fn test_do_on_error_matching() {
        let called = Cell::new(false);
        Container::of(not_found())
            .do_on_error_matching(|e| matches!(e, LookupError::NotFound(_)), |_| called.set(true));
        assert!(called.get());

        let container = Container::of(LookupError::Timeout).do_on_error_matching(
            |e| matches!(e, LookupError::NotFound(_)),
            |_| fail_if_called::<()>(),
        );
        assert_eq!(container, Container::of(LookupError::Timeout));
    }

    #[test]
    fn test_on_error_map() {
        assert_eq!(
            Container::<Lookup>::of(Err(not_found())).on_error_map(|_| Ok(S_VAL_2)),
            Container::of(Ok(S_VAL_2))
        );
    }

    #[test]
    fn test_on_error_map_ignores_values() {
        assert_eq!(
            Container::<Lookup>::of(Ok(S_VAL_1)).on_error_map(|_| fail_if_called::<Lookup>()),
            Container::of(Ok(S_VAL_1))
        );
        assert_eq!(
            Container::of(S_VAL_1).on_error_map(|_| fail_if_called::<&str>()),
            Container::of(S_VAL_1)
        );
        assert_eq!(
            Container::<Lookup>::empty().on_error_map(|_| fail_if_called::<Lookup>()),
            Container::empty()
        );
    }

    #[test]
    fn test_on_error_map_matching() {
        let recovered = Container::<Lookup>::of(Err(LookupError::Timeout))
            .on_error_map_matching(|e| *e == LookupError::Timeout, |_| Ok("retry"));
        assert_eq!(recovered, Container::of(Ok("retry")));

        let untouched = Container::<Lookup>::of(Err(not_found()))
            .on_error_map_matching(|e| *e == LookupError::Timeout, |_| fail_if_called::<Lookup>());
        assert_eq!(untouched, Container::of(Err(not_found())));
    }

    #[test]
    fn test_on_error_flat_map() {
        assert_eq!(
            Container::<Lookup>::of(Err(not_found())).on_error_flat_map(|_| Container::of(Ok(S_VAL_2))),
            Container::of(Ok(S_VAL_2))
        );
        assert_eq!(
            Container::<Lookup>::of(Err(not_found())).on_error_flat_map(|_| Container::empty()),
            Container::empty()
        );
        assert_eq!(
            Container::<Lookup>::of(Ok(S_VAL_1))
                .on_error_flat_map(|_| fail_if_called::<Container<Lookup>>()),
            Container::of(Ok(S_VAL_1))
        );
    }

    #[test]
    fn test_on_error_flat_map_matching() {
        let recovered = Container::<Lookup>::of(Err(not_found())).on_error_flat_map_matching(
            |e| matches!(e, LookupError::NotFound(_)),
            |_| Container::empty(),
        );
        assert_eq!(recovered, Container::empty());

        let untouched = Container::<Lookup>::of(Err(LookupError::Timeout))
            .on_error_flat_map_matching(
                |e| matches!(e, LookupError::NotFound(_)),
                |_| fail_if_called::<Container<Lookup>>(),
            );
        assert_eq!(untouched, Container::of(Err(LookupError::Timeout)));
    }

    #[test]
    fn test_error_operators_skip_empty() {
        let container = Container::<LookupError>::empty()
            .do_on_error(|_| fail_if_called::<()>())
            .do_on_error_of::<LookupError, _>(|_| fail_if_called::<()>())
            .do_on_error_matching(|_| fail_if_called::<bool>(), |_| fail_if_called::<()>())
            .on_error_map_matching(|_| fail_if_called::<bool>(), |_| fail_if_called::<LookupError>())
            .on_error_flat_map_matching(
                |_| fail_if_called::<bool>(),
                |_| fail_if_called::<Container<LookupError>>(),
            );
        assert_eq!(container, Container::empty());
    }
}
