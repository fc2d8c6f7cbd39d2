//! # Bounded LRU Cache with Time-Based Expiry
//!
//! This module provides the cache used to avoid redundant round-trips for
//! expensive list fetches: a fixed-capacity LRU with a per-entry TTL
//! assigned at write time and checked lazily at read time.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────┐
//!   │                        TtlLruCore<K, V>                          │
//!   │                                                                  │
//!   │   ┌────────────────────────────────────────────────────────┐     │
//!   │   │  FxHashMap<K, NonNull<Node>>                           │     │
//!   │   │                                                        │     │
//!   │   │  ┌──────────────┬──────────────────────────────────┐   │     │
//!   │   │  │     Key      │  Node pointer                    │   │     │
//!   │   │  ├──────────────┼──────────────────────────────────┤   │     │
//!   │   │  │ all_recipes  │  ────────────────────────────┐   │   │     │
//!   │   │  │ favorites    │  ──────────────────────┐     │   │   │     │
//!   │   │  └──────────────┴────────────────────────┼─────┼───┘   │     │
//!   │   └─────────────────────────────────────────┼─────┼────────┘     │
//!   │                                             ▼     ▼              │
//!   │   ┌────────────────────────────────────────────────────────┐     │
//!   │   │  Doubly linked recency list                            │     │
//!   │   │                                                        │     │
//!   │   │  head ──► ┌──────┐ ◄──► ┌──────┐ ◄── tail              │     │
//!   │   │    (MRU)  │ Node │      │ Node │   (LRU)               │     │
//!   │   │           └──────┘      └──────┘                       │     │
//!   │   │                                                        │     │
//!   │   │  Node { prev, next, key, value, expires_at }           │     │
//!   │   └────────────────────────────────────────────────────────┘     │
//!   └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations
//!
//! | Method       | Complexity | Description                                |
//! |--------------|------------|--------------------------------------------|
//! | `new`        | O(1)       | Validated construction (capacity ≥ 1)      |
//! | `insert`     | O(1)*      | Write + refresh expiry, may evict the LRU  |
//! | `get`        | O(1)       | Read, promote to MRU, purge if expired     |
//! | `peek`       | O(1)       | Read without promotion                     |
//! | `contains`   | O(1)       | Expiry-aware existence check               |
//! | `remove`     | O(1)       | Remove by key                              |
//! | `pop_lru`    | O(1)       | Remove the least recently used entry       |
//! | `peek_lru`   | O(1)       | Inspect the LRU entry                      |
//! | `clear`      | O(n)       | Drop all entries                           |
//!
//! ## TTL Semantics
//!
//! ```text
//!   insert(k, v)                          get(k)
//!   ─────────────                         ──────
//!   expires_at = now + ttl                expires_at < now ?
//!   (None when Ttl::Never)                  yes: unlink, drop, report miss
//!                                           no:  promote to MRU, return &v
//! ```
//!
//! - Every write (insert or update) recomputes the expiry from "now + TTL".
//! - Expiry is checked lazily on read only; there is no background sweep.
//!   An expired entry that is never read again simply occupies a capacity
//!   slot until the LRU policy evicts it or a write overwrites it.
//! - [`Ttl::Never`] entries carry no expiry at all. A zero-duration
//!   [`Ttl::After`] is normalized to `Never` at construction, so "no TTL"
//!   can never be misread as "expires immediately".
//!
//! ## Eviction
//!
//! A new key beyond capacity evicts exactly one entry, the current LRU
//! tail, before the new node is attached. `len() <= capacity()` holds at
//! every `insert` return. Updates to existing keys never evict.
//!
//! ## Memory Safety
//!
//! Nodes are heap-allocated and tracked via `NonNull` pointers; the map is
//! the sole owner of the key → node association, and every unlink is paired
//! with a `Box::from_raw` that returns ownership to Rust. `Drop` walks the
//! list and frees every remaining node.
//!
//! ## Thread Safety
//!
//! `TtlLruCore` is **not** thread-safe: every read that promotes takes
//! `&mut self`. Wrap it in [`SharedTtlCache`](crate::cache::SharedTtlCache)
//! (feature `concurrency`) for shared use.

use std::fmt;
use std::hash::Hash;
use std::ptr::NonNull;
use std::time::{Duration, Instant};

use rustc_hash::FxHashMap;

use crate::error::ConfigError;

/// Expiry policy for cache entries.
///
/// The tri-state replaces a numeric "ttl milliseconds" knob where zero was
/// ambiguous: here "no expiry" is spelled out, and `After(Duration::ZERO)`
/// normalizes to `Never` rather than to "already expired".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ttl {
    /// Entries never expire; only LRU eviction removes them.
    Never,
    /// Entries expire this long after their most recent write.
    After(Duration),
}

impl Ttl {
    /// Collapses `After(0)` into `Never`.
    #[inline]
    fn normalized(self) -> Self {
        match self {
            Ttl::After(d) if d.is_zero() => Ttl::Never,
            other => other,
        }
    }

    /// Expiry instant for a write happening at `now`.
    #[inline]
    fn expiry_from(self, now: Instant) -> Option<Instant> {
        match self {
            Ttl::Never => None,
            Ttl::After(d) => Some(now + d),
        }
    }
}

/// Node in the recency list.
///
/// Linked-list pointers first for traversal, key needed for map removal
/// during eviction, value and expiry accessed on reads.
#[repr(C)]
struct Node<K, V> {
    prev: Option<NonNull<Node<K, V>>>,
    next: Option<NonNull<Node<K, V>>>,
    key: K,
    value: V,
    expires_at: Option<Instant>,
}

impl<K, V> Node<K, V> {
    #[inline]
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| at < now)
    }
}

/// Bounded LRU cache with per-entry TTL.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use suggestkit::cache::{Ttl, TtlLruCore};
///
/// let mut cache = TtlLruCore::new(2, Ttl::After(Duration::from_secs(300))).unwrap();
/// cache.insert("a".to_string(), 1);
/// cache.insert("b".to_string(), 2);
/// cache.insert("c".to_string(), 3); // evicts "a"
///
/// assert_eq!(cache.get(&"a".to_string()), None);
/// assert_eq!(cache.get(&"b".to_string()), Some(&2));
/// assert_eq!(cache.get(&"c".to_string()), Some(&3));
/// ```
pub struct TtlLruCore<K, V>
where
    K: Eq + Hash + Clone,
{
    map: FxHashMap<K, NonNull<Node<K, V>>>,
    head: Option<NonNull<Node<K, V>>>,
    tail: Option<NonNull<Node<K, V>>>,
    capacity: usize,
    ttl: Ttl,
}

// SAFETY: TtlLruCore can be sent between threads if K and V are Send.
// The raw pointers only reference heap memory owned by the struct.
unsafe impl<K, V> Send for TtlLruCore<K, V>
where
    K: Eq + Hash + Clone + Send,
    V: Send,
{
}

// SAFETY: shared references never mutate through the pointers except via
// &mut self methods; thread safety for shared use is provided by the
// SharedTtlCache wrapper.
unsafe impl<K, V> Sync for TtlLruCore<K, V>
where
    K: Eq + Hash + Clone + Sync,
    V: Sync,
{
}

impl<K, V> TtlLruCore<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache holding at most `capacity` entries, each expiring
    /// per `ttl`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `capacity` is zero; a cache that can
    /// hold nothing is a configuration mistake, not a degenerate mode.
    pub fn new(capacity: usize, ttl: Ttl) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("capacity must be > 0"));
        }
        Ok(Self {
            map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            head: None,
            tail: None,
            capacity,
            ttl: ttl.normalized(),
        })
    }

    /// Returns the stored value and promotes the entry to MRU.
    ///
    /// A key past its expiry reads as absent and is unlinked as a side
    /// effect of this access.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        self.get_at(key, Instant::now())
    }

    /// Inserts or updates an entry, refreshing its expiry from now.
    ///
    /// Existing key: the value is replaced, the expiry recomputed, and the
    /// entry promoted; the previous value is returned. New key: the entry
    /// is attached at MRU, evicting the current LRU entry first when the
    /// cache is full.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.insert_at(key, value, Instant::now())
    }

    /// Returns the stored value without promoting, if present and fresh.
    ///
    /// Expired entries read as absent but stay linked until the next
    /// mutating access purges or evicts them.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let now = Instant::now();
        let &node_ptr = self.map.get(key)?;
        let node = unsafe { node_ptr.as_ref() };
        if node.is_expired(now) {
            return None;
        }
        Some(unsafe { &(*node_ptr.as_ptr()).value })
    }

    /// Expiry-aware existence check; does not promote.
    pub fn contains(&self, key: &K) -> bool {
        self.peek(key).is_some()
    }

    /// Removes an entry by key, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let node_ptr = self.map.remove(key)?;
        self.detach(node_ptr);
        let node = unsafe { Box::from_raw(node_ptr.as_ptr()) };

        #[cfg(debug_assertions)]
        self.validate_invariants();

        Some(node.value)
    }

    /// Removes and returns the least recently used entry.
    ///
    /// Expired entries are not skipped: until purged by a read, they hold
    /// a recency position like any other entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        let node = self.pop_tail()?;
        self.map.remove(&node.key);

        #[cfg(debug_assertions)]
        self.validate_invariants();

        Some((node.key, node.value))
    }

    /// Returns the least recently used entry without removing it.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.tail.map(|tail_ptr| unsafe {
            let node = tail_ptr.as_ref();
            (&node.key, &node.value)
        })
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        while self.pop_tail().is_some() {}
        self.map.clear();

        #[cfg(debug_assertions)]
        self.validate_invariants();
    }

    /// Current number of entries, expired-but-unpurged ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Maximum number of entries.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The expiry policy entries are written with.
    #[inline]
    pub fn ttl(&self) -> Ttl {
        self.ttl
    }

    /// `get` against an explicit clock, for deterministic expiry handling.
    fn get_at(&mut self, key: &K, now: Instant) -> Option<&V> {
        let &node_ptr = self.map.get(key)?;

        if unsafe { node_ptr.as_ref() }.is_expired(now) {
            self.map.remove(key);
            self.detach(node_ptr);
            drop(unsafe { Box::from_raw(node_ptr.as_ptr()) });
            return None;
        }

        self.detach(node_ptr);
        self.attach_front(node_ptr);

        #[cfg(debug_assertions)]
        self.validate_invariants();

        Some(unsafe { &(*node_ptr.as_ptr()).value })
    }

    /// `insert` against an explicit clock.
    fn insert_at(&mut self, key: K, value: V, now: Instant) -> Option<V> {
        let expires_at = self.ttl.expiry_from(now);

        if let Some(&node_ptr) = self.map.get(&key) {
            let previous = unsafe {
                let node = &mut *node_ptr.as_ptr();
                node.expires_at = expires_at;
                std::mem::replace(&mut node.value, value)
            };
            self.detach(node_ptr);
            self.attach_front(node_ptr);

            #[cfg(debug_assertions)]
            self.validate_invariants();

            return Some(previous);
        }

        if self.map.len() >= self.capacity {
            if let Some(evicted) = self.pop_tail() {
                self.map.remove(&evicted.key);
            }
        }

        let node = Box::new(Node {
            prev: None,
            next: None,
            key: key.clone(),
            value,
            expires_at,
        });
        let node_ptr = unsafe { NonNull::new_unchecked(Box::into_raw(node)) };

        self.map.insert(key, node_ptr);
        self.attach_front(node_ptr);

        #[cfg(debug_assertions)]
        self.validate_invariants();

        None
    }

    /// Detach a node from the linked list without touching the map.
    #[inline(always)]
    fn detach(&mut self, node_ptr: NonNull<Node<K, V>>) {
        unsafe {
            let node = node_ptr.as_ref();
            let prev = node.prev;
            let next = node.next;

            match prev {
                Some(mut p) => p.as_mut().next = next,
                None => self.head = next,
            }

            match next {
                Some(mut n) => n.as_mut().prev = prev,
                None => self.tail = prev,
            }
        }
    }

    /// Attach a node at the front (MRU position).
    #[inline(always)]
    fn attach_front(&mut self, mut node_ptr: NonNull<Node<K, V>>) {
        unsafe {
            let node = node_ptr.as_mut();
            node.prev = None;
            node.next = self.head;

            match self.head {
                Some(mut h) => h.as_mut().prev = Some(node_ptr),
                None => self.tail = Some(node_ptr),
            }

            self.head = Some(node_ptr);
        }
    }

    /// Pop the tail node (LRU) and return it.
    #[inline(always)]
    fn pop_tail(&mut self) -> Option<Box<Node<K, V>>> {
        self.tail.map(|tail_ptr| unsafe {
            let node = Box::from_raw(tail_ptr.as_ptr());

            self.tail = node.prev;
            match self.tail {
                Some(mut t) => t.as_mut().next = None,
                None => self.head = None,
            }

            node
        })
    }

    /// Validate internal invariants (debug builds only).
    #[cfg(debug_assertions)]
    fn validate_invariants(&self) {
        if self.map.is_empty() {
            debug_assert!(self.head.is_none());
            debug_assert!(self.tail.is_none());
            return;
        }

        let mut count = 0usize;
        let mut current = self.head;
        while let Some(ptr) = current {
            count += 1;
            unsafe {
                let node = ptr.as_ref();
                debug_assert!(self.map.contains_key(&node.key));
                current = node.next;
            }
            if count > self.map.len() {
                panic!("cycle detected in recency list");
            }
        }

        debug_assert_eq!(count, self.map.len());
        debug_assert!(self.map.len() <= self.capacity);
    }
}

impl<K, V> Drop for TtlLruCore<K, V>
where
    K: Eq + Hash + Clone,
{
    fn drop(&mut self) {
        while self.pop_tail().is_some() {}
    }
}

impl<K, V> fmt::Debug for TtlLruCore<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TtlLruCore")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl<K, V> Extend<(K, V)> for TtlLruCore<K, V>
where
    K: Eq + Hash + Clone,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
