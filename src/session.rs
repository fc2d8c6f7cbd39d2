//! Session-scoped wiring of cache and suggestion index.
//!
//! Reproduces the dashboard control flow as one owned object instead of a
//! module-scope singleton:
//!
//! ```text
//!   load_with(key, fetch)
//!   ─────────────────────
//!   cache.get(key) ── hit ──► rebuild index from cached list ──► return
//!        │
//!       miss
//!        │
//!        ▼
//!   fetch() ── Err ──► propagate, session state unchanged
//!        │
//!        Ok(list)
//!        │
//!        ▼
//!   cache.insert(key, list) ──► rebuild index ──► return
//! ```
//!
//! The index is rebuilt fresh on every successful load, never mutated in
//! place, so `suggest` always reflects exactly the most recently loaded
//! list. Keystroke-frequency `suggest`/`resolve` calls touch only the
//! in-memory index; the cache is consulted only at load boundaries.

use std::sync::Arc;

use crate::cache::{Ttl, TtlLruCore};
use crate::error::ConfigError;
use crate::index::SuggestionIndex;
use crate::traits::{Labeled, SuggestSource};

/// One browsing session's record cache plus suggestion index.
///
/// # Example
///
/// ```
/// use std::convert::Infallible;
/// use std::time::Duration;
/// use suggestkit::session::SuggestSession;
///
/// let mut session: SuggestSession<String> =
///     SuggestSession::new(1, suggestkit::cache::Ttl::After(Duration::from_secs(300))).unwrap();
///
/// let list = session
///     .load_with("all_recipes", || {
///         Ok::<_, Infallible>(vec!["Margherita Pizza".to_string()])
///     })
///     .unwrap();
///
/// assert_eq!(list.len(), 1);
/// assert_eq!(session.suggest("marg", 5), vec!["margherita pizza"]);
/// ```
pub struct SuggestSession<T> {
    cache: TtlLruCore<String, Arc<Vec<T>>>,
    index: Option<SuggestionIndex>,
}

impl<T: Labeled> SuggestSession<T> {
    /// Creates a session whose list cache holds `capacity` keyed lists,
    /// each expiring per `ttl`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `capacity` is zero.
    pub fn new(capacity: usize, ttl: Ttl) -> Result<Self, ConfigError> {
        Ok(Self {
            cache: TtlLruCore::new(capacity, ttl)?,
            index: None,
        })
    }

    /// Returns the list for `key`, fetching on a cache miss.
    ///
    /// A hit returns the cached list without invoking `fetch`; a miss runs
    /// `fetch`, stores its result under `key`, and returns it. Either way
    /// the suggestion index is rebuilt from the returned list. A fetch
    /// error propagates unchanged and leaves both cache and index as they
    /// were.
    pub fn load_with<E, F>(&mut self, key: &str, fetch: F) -> Result<Arc<Vec<T>>, E>
    where
        F: FnOnce() -> Result<Vec<T>, E>,
    {
        let key = key.to_owned();

        if let Some(list) = self.cache.get(&key) {
            let list = Arc::clone(list);
            self.index = Some(SuggestionIndex::from_records(&list));
            return Ok(list);
        }

        let list = Arc::new(fetch()?);
        self.cache.insert(key, Arc::clone(&list));
        self.index = Some(SuggestionIndex::from_records(&list));
        Ok(list)
    }

    /// Returns up to `limit` suggestions from the current index.
    ///
    /// Empty before the first successful [`load_with`](Self::load_with).
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<String> {
        self.index
            .as_ref()
            .map(|index| index.suggest(prefix, limit))
            .unwrap_or_default()
    }

    /// Resolves a selected suggestion to its record identifier.
    ///
    /// `None` for unknown labels, id-less records, or before the first
    /// load; the caller falls back to a generic listing view.
    pub fn resolve(&self, suggestion: &str) -> Option<&str> {
        self.index.as_ref()?.resolve(suggestion)
    }

    /// Drops the cached list for `key`, forcing the next load to fetch.
    ///
    /// The current index stays queryable until that load completes.
    pub fn invalidate(&mut self, key: &str) {
        self.cache.remove(&key.to_owned());
    }

    /// Returns `true` once a load has populated the index.
    pub fn is_loaded(&self) -> bool {
        self.index.is_some()
    }
}

impl<T: Labeled> SuggestSource for SuggestSession<T> {
    fn suggest(&self, prefix: &str, limit: usize) -> Vec<String> {
        SuggestSession::suggest(self, prefix, limit)
    }
}

impl<T> std::fmt::Debug for SuggestSession<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuggestSession")
            .field("cached_lists", &self.cache.len())
            .field("loaded", &self.index.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::time::Duration;

    #[derive(Debug)]
    struct Recipe {
        title: &'static str,
        id: &'static str,
    }

    impl Labeled for Recipe {
        fn label(&self) -> Option<&str> {
            Some(self.title)
        }

        fn ident(&self) -> Option<&str> {
            Some(self.id)
        }
    }

    fn sample() -> Vec<Recipe> {
        vec![
            Recipe {
                title: "Margherita Pizza",
                id: "r1",
            },
            Recipe {
                title: "Veggie Burger",
                id: "r2",
            },
        ]
    }

    fn session() -> SuggestSession<Recipe> {
        SuggestSession::new(4, Ttl::After(Duration::from_secs(300))).unwrap()
    }

    #[test]
    fn first_load_fetches_and_indexes() {
        let mut session = session();
        assert!(!session.is_loaded());

        let list = session
            .load_with("all_recipes", || Ok::<_, &str>(sample()))
            .unwrap();

        assert_eq!(list.len(), 2);
        assert!(session.is_loaded());
        assert_eq!(session.suggest("m", 5), vec!["margherita pizza"]);
        assert_eq!(session.resolve("margherita pizza"), Some("r1"));
    }

    #[test]
    fn second_load_hits_the_cache() {
        let mut session = session();
        let fetches = Cell::new(0u32);
        let fetch = || {
            fetches.set(fetches.get() + 1);
            Ok::<_, &str>(sample())
        };

        session.load_with("all_recipes", fetch).unwrap();
        session
            .load_with("all_recipes", || {
                fetches.set(fetches.get() + 1);
                Ok::<_, &str>(sample())
            })
            .unwrap();

        assert_eq!(fetches.get(), 1, "second load must not fetch");
        assert_eq!(session.suggest("veg", 5), vec!["veggie burger"]);
    }

    #[test]
    fn fetch_errors_propagate_and_leave_state_unchanged() {
        let mut session = session();
        let err = session
            .load_with("all_recipes", || Err::<Vec<Recipe>, _>("network down"))
            .unwrap_err();

        assert_eq!(err, "network down");
        assert!(!session.is_loaded());
        assert!(session.suggest("m", 5).is_empty());
        assert_eq!(session.resolve("anything"), None);
    }

    #[test]
    fn suggestions_track_the_latest_loaded_list() {
        let mut session = session();
        session
            .load_with("all_recipes", || Ok::<_, &str>(sample()))
            .unwrap();
        session
            .load_with("favorites", || {
                Ok::<_, &str>(vec![Recipe {
                    title: "Pad Thai",
                    id: "r7",
                }])
            })
            .unwrap();

        assert_eq!(session.suggest("pad", 5), vec!["pad thai"]);
        assert!(session.suggest("marg", 5).is_empty());
    }

    #[test]
    fn invalidate_forces_a_refetch() {
        let mut session = session();
        session
            .load_with("all_recipes", || Ok::<_, &str>(sample()))
            .unwrap();
        session.invalidate("all_recipes");

        let fetched = Cell::new(false);
        session
            .load_with("all_recipes", || {
                fetched.set(true);
                Ok::<_, &str>(sample())
            })
            .unwrap();

        assert!(fetched.get());
    }

    #[test]
    fn expired_list_forces_a_refetch() {
        let mut session: SuggestSession<Recipe> =
            SuggestSession::new(4, Ttl::After(Duration::from_millis(1))).unwrap();
        session
            .load_with("all_recipes", || Ok::<_, &str>(sample()))
            .unwrap();

        std::thread::sleep(Duration::from_millis(10));

        let fetched = Cell::new(false);
        session
            .load_with("all_recipes", || {
                fetched.set(true);
                Ok::<_, &str>(sample())
            })
            .unwrap();

        assert!(fetched.get());
    }

    #[test]
    fn resolve_before_load_degrades_to_none() {
        let session = session();
        assert_eq!(session.resolve("margherita pizza"), None);
    }
}
