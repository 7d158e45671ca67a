//! Error types for the mock SDK clients.
//!
//! Every client operation returns [`Result`] so that the mocks keep the same
//! shape as the real clients. The mocks themselves never fail on their own
//! initiative; errors only surface from the observer registry (for example an
//! observer without an id) or from message serialization.
//!
//! ```rust
//! use g2_sdk_mock::{Error, ErrorKind};
//!
//! let err = Error::invalid_argument("observer id cannot be empty");
//! assert_eq!(err.kind(), ErrorKind::InvalidArgument);
//! ```

mod core;
mod kind;

pub use self::core::Error;
pub use kind::ErrorKind;

/// A specialized `Result` type for mock client operations.
pub type Result<T> = std::result::Result<T, Error>;
