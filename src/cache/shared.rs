//! Thread-safe wrapper over [`TtlLruCore`] (feature `concurrency`).
//!
//! Cloning a `SharedTtlCache` clones the handle, not the cache: all clones
//! operate on the same entries. Reads that update recency (`get`) take the
//! write lock; `peek`/`contains`/`len` take the read lock.

use std::hash::Hash;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::cache::ttl_lru::{Ttl, TtlLruCore};
use crate::error::ConfigError;

/// `Arc<RwLock<TtlLruCore>>` handle for shared use across threads.
///
/// Values are cloned out of the lock; in practice callers store
/// `Arc`-wrapped lists, making the clone a pointer bump.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use suggestkit::cache::{SharedTtlCache, Ttl};
///
/// let cache: SharedTtlCache<String, i32> =
///     SharedTtlCache::new(100, Ttl::After(Duration::from_secs(300))).unwrap();
///
/// cache.insert("k".to_string(), 7);
/// assert_eq!(cache.get(&"k".to_string()), Some(7));
/// ```
#[derive(Clone)]
pub struct SharedTtlCache<K, V>
where
    K: Eq + Hash + Clone,
{
    inner: Arc<RwLock<TtlLruCore<K, V>>>,
}

impl<K, V> SharedTtlCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Clone + Send + Sync,
{
    /// Creates a shared cache; same validation as [`TtlLruCore::new`].
    pub fn new(capacity: usize, ttl: Ttl) -> Result<Self, ConfigError> {
        Ok(Self {
            inner: Arc::new(RwLock::new(TtlLruCore::new(capacity, ttl)?)),
        })
    }

    /// Gets a value, promoting the entry to MRU.
    ///
    /// Takes the write lock: even reads update recency order.
    pub fn get(&self, key: &K) -> Option<V> {
        let mut cache = self.inner.write();
        cache.get(key).cloned()
    }

    /// Inserts or updates an entry, returning the previous value.
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        let mut cache = self.inner.write();
        cache.insert(key, value)
    }

    /// Reads a value without promoting; read lock only.
    pub fn peek(&self, key: &K) -> Option<V> {
        let cache = self.inner.read();
        cache.peek(key).cloned()
    }

    /// Expiry-aware existence check; read lock only.
    pub fn contains(&self, key: &K) -> bool {
        let cache = self.inner.read();
        cache.contains(key)
    }

    /// Removes an entry by key.
    pub fn remove(&self, key: &K) -> Option<V> {
        let mut cache = self.inner.write();
        cache.remove(key)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&self) -> Option<(K, V)> {
        let mut cache = self.inner.write();
        cache.pop_lru()
    }

    /// Removes all entries.
    pub fn clear(&self) {
        let mut cache = self.inner.write();
        cache.clear()
    }

    /// Current number of entries.
    pub fn len(&self) -> usize {
        let cache = self.inner.read();
        cache.len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        let cache = self.inner.read();
        cache.capacity()
    }

    /// The expiry policy entries are written with.
    pub fn ttl(&self) -> Ttl {
        let cache = self.inner.read();
        cache.ttl()
    }
}

impl<K, V> std::fmt::Debug for SharedTtlCache<K, V>
where
    K: Eq + Hash + Clone + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cache = self.inner.read();
        f.debug_struct("SharedTtlCache")
            .field("len", &cache.len())
            .field("capacity", &cache.capacity())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn handles_share_one_cache() {
        let cache: SharedTtlCache<&str, i32> = SharedTtlCache::new(4, Ttl::Never).unwrap();
        let clone = cache.clone();

        cache.insert("k", 1);
        assert_eq!(clone.get(&"k"), Some(1));
        assert_eq!(clone.len(), 1);
    }

    #[test]
    fn eviction_applies_across_handles() {
        let cache: SharedTtlCache<&str, i32> = SharedTtlCache::new(2, Ttl::Never).unwrap();
        cache.insert("a", 1);
        cache.insert("b", 2);
        cache.insert("c", 3);

        assert_eq!(cache.get(&"a"), None);
        assert!(cache.contains(&"b"));
        assert!(cache.contains(&"c"));
    }

    #[test]
    fn concurrent_inserts_stay_bounded() {
        let cache: SharedTtlCache<u64, u64> = SharedTtlCache::new(64, Ttl::Never).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let cache = cache.clone();
                thread::spawn(move || {
                    for i in 0..256u64 {
                        cache.insert(t * 1000 + i, i);
                        let _ = cache.get(&(t * 1000 + i));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert!(cache.len() <= 64);
    }
}
