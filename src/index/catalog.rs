//! Suggestion index: prefix trie + identifier lookup map.
//!
//! Builds both structures from the same record list in one pass so they can
//! never disagree: any string the trie can suggest is present in the lookup
//! map, mapped to the record's identifier (or `None` if the record had
//! none).
//!
//! ```text
//!   records ──► [ trim → fold → dedupe first-wins ] ──► ids map
//!                        │
//!                        └────────────────────────────► PrefixTrie
//! ```
//!
//! Rebuilds are arena-style: construct a fresh `SuggestionIndex` per source
//! list and drop the old one. There is deliberately no mutate-in-place
//! surface, which keeps stale entries from accumulating across rebuilds.

use rustc_hash::FxHashMap;

use crate::index::trie::PrefixTrie;
use crate::traits::{Labeled, SuggestSource};

/// Prefix trie plus lowercased-label → identifier map, built together.
///
/// # Example
///
/// ```
/// use suggestkit::index::SuggestionIndex;
/// use suggestkit::traits::Labeled;
///
/// struct Recipe {
///     title: &'static str,
///     id: &'static str,
/// }
///
/// impl Labeled for Recipe {
///     fn label(&self) -> Option<&str> {
///         Some(self.title)
///     }
///     fn ident(&self) -> Option<&str> {
///         Some(self.id)
///     }
/// }
///
/// let index = SuggestionIndex::from_records(&[
///     Recipe { title: "Margherita Pizza", id: "r1" },
///     Recipe { title: "Veggie Burger", id: "r2" },
/// ]);
///
/// assert_eq!(index.suggest("m", 5), vec!["margherita pizza"]);
/// assert_eq!(index.resolve("margherita pizza"), Some("r1"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SuggestionIndex {
    trie: PrefixTrie,
    ids: FxHashMap<String, Option<String>>,
}

impl SuggestionIndex {
    /// Builds a fresh index from an ordered record sequence.
    ///
    /// For each record the label is derived via [`Labeled::label`] and
    /// trimmed; records with no usable label are skipped. On duplicate
    /// lowercased labels the first record's identifier wins.
    pub fn from_records<T: Labeled>(records: &[T]) -> Self {
        let mut trie = PrefixTrie::new();
        let mut ids =
            FxHashMap::with_capacity_and_hasher(records.len(), Default::default());

        for record in records {
            let Some(label) = record.label().map(str::trim) else {
                continue;
            };
            if label.is_empty() {
                continue;
            }
            let folded = label.to_lowercase();
            ids.entry(folded)
                .or_insert_with(|| record.ident().map(str::to_owned));
            trie.insert(label);
        }

        Self { trie, ids }
    }

    /// Resolves a suggestion string to its record identifier.
    ///
    /// Case-insensitive. Returns `None` both for labels the index never
    /// saw and for records that carried no identifier; the caller is
    /// expected to degrade to a generic listing view in either case.
    pub fn resolve(&self, suggestion: &str) -> Option<&str> {
        self.ids
            .get(&suggestion.to_lowercase())
            .and_then(|id| id.as_deref())
    }

    /// Returns `true` if the label is indexed, identifier or not.
    pub fn contains_label(&self, label: &str) -> bool {
        self.ids.contains_key(&label.to_lowercase())
    }

    /// Returns the number of distinct indexed labels.
    #[inline]
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Returns `true` if nothing is indexed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Inherent forwarding of [`SuggestSource::suggest`].
    #[inline]
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<String> {
        self.trie.suggest(prefix, limit)
    }
}

impl SuggestSource for SuggestionIndex {
    fn suggest(&self, prefix: &str, limit: usize) -> Vec<String> {
        self.trie.suggest(prefix, limit)
    }
}
