//! Error types for the suggestkit library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when cache configuration parameters are
//!   invalid (e.g. zero capacity).
//!
//! All operational conditions (cache misses, expired entries, empty
//! suggestion results) are communicated through `Option`/empty sequences,
//! never through errors. `ConfigError` is reserved for construction time.
//!
//! ## Example Usage
//!
//! ```
//! use suggestkit::cache::{Ttl, TtlLruCore};
//! use suggestkit::error::ConfigError;
//!
//! // Fallible constructor for user-configurable parameters
//! let cache: Result<TtlLruCore<String, i32>, ConfigError> =
//!     TtlLruCore::new(100, Ttl::Never);
//! assert!(cache.is_ok());
//!
//! // Zero capacity is caught without panicking
//! let bad = TtlLruCore::<String, i32>::new(0, Ttl::Never);
//! assert!(bad.is_err());
//! ```

use std::fmt;

/// Error returned when cache configuration parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`TtlLruCore::new`](crate::cache::TtlLruCore::new) and
/// [`TtlCacheBuilder::try_build`](crate::builder::TtlCacheBuilder::try_build).
/// Carries a human-readable description of which parameter failed
/// validation.
///
/// # Example
///
/// ```
/// use suggestkit::cache::{Ttl, TtlLruCore};
///
/// let err = TtlLruCore::<u64, u64>::new(0, Ttl::Never).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}
