//! Carton - a single-value container with fluent combinators
//!
//! A [`Container`] is either present or empty. It covers optional values,
//! error-as-value handling and map/flat_map/filter chaining with one type,
//! so call sites never branch on absence or failure until the end of the
//! chain.
//!
//! # Example
//!
//! ```
//! use carton::Container;
//!
//! let port = Container::of_nullable(std::env::var("CARTON_DOC_PORT").ok())
//!     .filter_map(|raw| raw.parse::<u16>().ok())
//!     .filter(|port| *port >= 1024)
//!     .get_or_default(8080);
//! assert!(port >= 1024);
//!
//! let recovered = Container::of("42".parse::<i32>())
//!     .on_error_map(|_| Ok(0))
//!     .map(|parsed| parsed.unwrap_or_default());
//! assert_eq!(recovered, Container::of(42));
//! ```

pub mod container;
pub mod error;
pub mod failure;
pub mod foreign;
pub mod monad;

pub use container::Container;
pub use error::{CartonError, Result};
pub use failure::Failure;
pub use foreign::OptionLike;
pub use monad::Monad;
