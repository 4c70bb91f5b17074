//! Error types for the admin client.
//!
//! [`Error`] covers everything that can go wrong on the client side of an
//! exchange: bad configuration, request construction, the network, and
//! decoding. It does **not** cover application-level outcomes.
//!
//! ## Key Invariant
//!
//! A non-2xx response is returned as `Ok(Response)`, never as `Err`. The
//! library does not interpret status codes.
//!
//! ```rust,ignore
//! let res = admin.realms().delete("first").await?;
//! if res.status() == StatusCode::NOT_FOUND {
//!     // already gone
//! }
//! ```

#[allow(clippy::module_inception)]
mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// A specialized `Result` type for admin client operations.
pub type Result<T> = std::result::Result<T, Error>;
