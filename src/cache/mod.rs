//! Bounded LRU caching with per-entry time-to-live.
//!
//! [`TtlLruCore`] is the single-threaded core; [`SharedTtlCache`] (feature
//! `concurrency`) wraps it in a `parking_lot::RwLock` for shared use.

pub mod ttl_lru;

#[cfg(feature = "concurrency")]
pub mod shared;

#[cfg(feature = "concurrency")]
pub use shared::SharedTtlCache;
pub use ttl_lru::{Ttl, TtlLruCore};
