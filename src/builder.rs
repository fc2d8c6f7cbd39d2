//! Fallible builder for [`TtlLruCore`].
//!
//! Collects capacity and expiry configuration before construction so that
//! all parameter validation happens in one place, and so "no TTL" is an
//! explicit call rather than a magic zero.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use suggestkit::builder::TtlCacheBuilder;
//!
//! let mut cache = TtlCacheBuilder::new(100)
//!     .ttl(Duration::from_secs(300))
//!     .try_build::<String, Vec<u8>>()
//!     .unwrap();
//! cache.insert("all_recipes".to_string(), vec![1, 2, 3]);
//! ```

use std::hash::Hash;
use std::time::Duration;

use crate::cache::{Ttl, TtlLruCore};
use crate::error::ConfigError;

/// Builder for [`TtlLruCore`] instances.
///
/// Defaults to [`Ttl::Never`]; call [`ttl`](Self::ttl) for time-based
/// expiry. A zero duration normalizes to "never expires".
#[derive(Debug, Clone)]
pub struct TtlCacheBuilder {
    capacity: usize,
    ttl: Ttl,
}

impl TtlCacheBuilder {
    /// Starts a builder for a cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ttl: Ttl::Never,
        }
    }

    /// Entries expire this long after their most recent write.
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Ttl::After(ttl);
        self
    }

    /// Entries never expire (the default).
    pub fn no_ttl(mut self) -> Self {
        self.ttl = Ttl::Never;
        self
    }

    /// Builds the cache.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the configured capacity is zero.
    pub fn try_build<K, V>(self) -> Result<TtlLruCore<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        TtlLruCore::new(self.capacity, self.ttl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_ttl() {
        let cache = TtlCacheBuilder::new(10)
            .ttl(Duration::from_secs(5))
            .try_build::<String, i32>()
            .unwrap();

        assert_eq!(cache.capacity(), 10);
        assert_eq!(cache.ttl(), Ttl::After(Duration::from_secs(5)));
    }

    #[test]
    fn defaults_to_never_expiring() {
        let cache = TtlCacheBuilder::new(10).try_build::<String, i32>().unwrap();
        assert_eq!(cache.ttl(), Ttl::Never);
    }

    #[test]
    fn no_ttl_overrides_an_earlier_ttl() {
        let cache = TtlCacheBuilder::new(10)
            .ttl(Duration::from_secs(5))
            .no_ttl()
            .try_build::<String, i32>()
            .unwrap();
        assert_eq!(cache.ttl(), Ttl::Never);
    }

    #[test]
    fn zero_duration_ttl_means_never() {
        let cache = TtlCacheBuilder::new(10)
            .ttl(Duration::ZERO)
            .try_build::<String, i32>()
            .unwrap();
        assert_eq!(cache.ttl(), Ttl::Never);
    }

    #[test]
    fn zero_capacity_fails() {
        let err = TtlCacheBuilder::new(0)
            .try_build::<String, i32>()
            .unwrap_err();
        assert!(err.to_string().contains("capacity"));
    }
}
