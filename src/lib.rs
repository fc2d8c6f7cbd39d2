//! suggestkit: prefix-suggestion and bounded caching primitives for
//! list-driven autocomplete UIs.
//!
//! Two independent, composable cores:
//!
//! - [`index`]: a prefix trie ([`PrefixTrie`](index::PrefixTrie)) plus a
//!   lowercased-label → identifier lookup map, bundled as
//!   [`SuggestionIndex`](index::SuggestionIndex).
//! - [`cache`]: a bounded LRU cache with per-entry time-to-live
//!   ([`TtlLruCore`](cache::TtlLruCore)).
//!
//! [`session::SuggestSession`] wires the two together: consult the cache,
//! fall back to a caller-supplied fetch on a miss, and rebuild a fresh
//! suggestion index per load.

pub mod builder;
pub mod cache;
pub mod error;
pub mod index;
pub mod prelude;
pub mod session;
pub mod traits;
