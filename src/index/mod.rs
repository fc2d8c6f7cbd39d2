//! Prefix indexing for suggestion lookups.
//!
//! [`PrefixTrie`] answers "which stored labels start with this prefix?" and
//! [`SuggestionIndex`] pairs a trie with a lowercased-label → identifier
//! lookup map built from the same record list in a single pass.

pub mod catalog;
pub mod trie;

pub use catalog::SuggestionIndex;
pub use trie::PrefixTrie;
