//! The error-kind test and its built-in registrations

use std::any::Any;
use std::borrow::Cow;
use std::convert::Infallible;
use std::error::Error as StdError;

use crate::error::CartonError;

/// A value that may be a failure
///
/// Error-shaped container operators only act on values for which
/// [`Failure::as_failure`] returns `Some`. Implement it directly, or use
/// [`failure_kind!`](crate::failure_kind) for error types and
/// [`plain_kind!`](crate::plain_kind) for types that never fail.
///
/// Error types from other crates cannot be registered here. Store them as
/// the `Err` of a `Result`, in a `Box<dyn Error + Send + Sync>`, or in an
/// `anyhow::Error`; all three are failures for any payload.
pub trait Failure: Sized {
    /// What error-shaped operators hand to their callbacks
    type Error;

    fn as_failure(&self) -> Option<&Self::Error>;

    /// `Ok` with the failure, or `Err` giving the value back untouched
    fn into_failure(self) -> Result<Self::Error, Self>;

    /// The failure as a standard error, used for narrowing by kind
    fn as_dyn_error(&self) -> Option<&(dyn StdError + 'static)> {
        None
    }

    /// The failure as `Any`, tried before `as_dyn_error` when narrowing
    fn as_any(&self) -> Option<&dyn Any> {
        None
    }

    /// Borrow the failure as kind `K`, if it is one
    ///
    /// The failure itself is tried first, then the error it wraps (the
    /// source held by an `anyhow::Error` or a boxed error).
    fn kind_of<K>(&self) -> Option<&K>
    where
        K: StdError + 'static,
    {
        self.as_any()
            .and_then(|any| any.downcast_ref::<K>())
            .or_else(|| self.as_dyn_error().and_then(|err| err.downcast_ref::<K>()))
    }
}

/// Register error types: every value of these types is a failure
#[macro_export]
macro_rules! failure_kind {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::failure::Failure for $ty {
                type Error = $ty;

                fn as_failure(&self) -> ::core::option::Option<&Self::Error> {
                    ::core::option::Option::Some(self)
                }

                fn into_failure(self) -> ::core::result::Result<Self::Error, Self> {
                    ::core::result::Result::Ok(self)
                }

                fn as_dyn_error(
                    &self,
                ) -> ::core::option::Option<&(dyn ::std::error::Error + 'static)> {
                    let err: &(dyn ::std::error::Error + 'static) = self;
                    ::core::option::Option::Some(err)
                }

                fn as_any(&self) -> ::core::option::Option<&dyn ::std::any::Any> {
                    ::core::option::Option::Some(self)
                }
            }
        )+
    };
}

/// Register plain value types: no value of these types is a failure
#[macro_export]
macro_rules! plain_kind {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::failure::Failure for $ty {
                type Error = ::core::convert::Infallible;

                fn as_failure(&self) -> ::core::option::Option<&Self::Error> {
                    ::core::option::Option::None
                }

                fn into_failure(self) -> ::core::result::Result<Self::Error, Self> {
                    ::core::result::Result::Err(self)
                }
            }
        )+
    };
}

failure_kind!(
    CartonError,
    std::io::Error,
    std::fmt::Error,
    std::num::ParseIntError,
    std::num::ParseFloatError,
    std::num::TryFromIntError,
    std::char::ParseCharError,
    std::char::TryFromCharError,
    std::net::AddrParseError,
    std::array::TryFromSliceError,
    std::str::ParseBoolError,
    std::str::Utf8Error,
    std::string::FromUtf8Error,
);

plain_kind!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    Box<str>,
);

impl Failure for &str {
    type Error = Infallible;

    fn as_failure(&self) -> Option<&Infallible> {
        None
    }

    fn into_failure(self) -> Result<Infallible, Self> {
        Err(self)
    }
}

impl Failure for Cow<'_, str> {
    type Error = Infallible;

    fn as_failure(&self) -> Option<&Infallible> {
        None
    }

    fn into_failure(self) -> Result<Infallible, Self> {
        Err(self)
    }
}

impl<T> Failure for Vec<T> {
    type Error = Infallible;

    fn as_failure(&self) -> Option<&Infallible> {
        None
    }

    fn into_failure(self) -> Result<Infallible, Self> {
        Err(self)
    }
}

impl<T> Failure for Option<T> {
    type Error = Infallible;

    fn as_failure(&self) -> Option<&Infallible> {
        None
    }

    fn into_failure(self) -> Result<Infallible, Self> {
        Err(self)
    }
}

/// An `Err` is a failure for any payload type, including error types
/// defined in other crates
impl<V, E: 'static> Failure for Result<V, E> {
    type Error = E;

    fn as_failure(&self) -> Option<&E> {
        self.as_ref().err()
    }

    fn into_failure(self) -> Result<E, Self> {
        match self {
            Err(err) => Ok(err),
            ok => Err(ok),
        }
    }

    fn as_any(&self) -> Option<&dyn Any> {
        self.as_ref().err().map(|err| err as &dyn Any)
    }
}

impl Failure for Box<dyn StdError + Send + Sync> {
    type Error = Self;

    fn as_failure(&self) -> Option<&Self> {
        Some(self)
    }

    fn into_failure(self) -> Result<Self, Self> {
        Ok(self)
    }

    fn as_dyn_error(&self) -> Option<&(dyn StdError + 'static)> {
        let err: &(dyn StdError + 'static) = &**self;
        Some(err)
    }
}

#[cfg(feature = "anyhow")]
impl Failure for anyhow::Error {
    type Error = Self;

    fn as_failure(&self) -> Option<&Self> {
        Some(self)
    }

    fn into_failure(self) -> Result<Self, Self> {
        Ok(self)
    }

    fn as_dyn_error(&self) -> Option<&(dyn StdError + 'static)> {
        let err: &(dyn StdError + 'static) = &**self;
        Some(err)
    }
}
