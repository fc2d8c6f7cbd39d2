//! # Prefix Trie Implementation
//!
//! Case-insensitive prefix index over text labels, used to answer
//! autocomplete queries ("which stored labels start with this prefix?") in
//! O(prefix length + results).
//!
//! ## Architecture
//!
//! ```text
//!   ┌────────────────────────────────────────────────────────────────────┐
//!   │                          PrefixTrie                                │
//!   │                                                                    │
//!   │   nodes (Vec<Node>, index 0 = root)                                │
//!   │   ┌───────┬──────────────────────────────────────────────────┐     │
//!   │   │ index │ Node { children, terminal }                      │     │
//!   │   ├───────┼──────────────────────────────────────────────────┤     │
//!   │   │  0    │ { [('p', 1)],            terminal: false }       │     │
//!   │   │  1    │ { [('i', 2), ('a', 4)],  terminal: false }       │     │
//!   │   │  2    │ { [('e', 3)],            terminal: false }       │     │
//!   │   │  3    │ { [],                    terminal: true  }  "pie"│     │
//!   │   │  4    │ { [('n', 5)],            terminal: false }       │     │
//!   │   │  5    │ { [],                    terminal: true  }  "pan"│     │
//!   │   └───────┴──────────────────────────────────────────────────┘     │
//!   │                                                                    │
//!   │   Children are an insertion-ordered Vec<(char, usize)>: sibling    │
//!   │   order in suggest() output is the order distinct characters were  │
//!   │   first inserted, not alphabetical.                                │
//!   └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Components
//!
//! | Component    | Description                                          |
//! |--------------|------------------------------------------------------|
//! | `PrefixTrie` | Arena of nodes indexed by `usize`, root at index 0   |
//! | `Node`       | Insertion-ordered child edges + explicit terminal    |
//!
//! ## Operations
//!
//! | Method               | Complexity | Description                        |
//! |----------------------|------------|------------------------------------|
//! | `insert(label)`      | O(m)       | Lowercase, walk/extend, mark end   |
//! | `build_from_labels`  | O(Σm)      | Bulk insert, skips empty labels    |
//! | `suggest(p, limit)`  | O(m + t)   | DFS from the prefix node           |
//! | `contains(label)`    | O(m)       | Exact (case-insensitive) lookup    |
//! | `len` / `is_empty`   | O(1)       | Distinct label count               |
//!
//! m = characters in the processed string, t = emitted results.
//!
//! ## Design Rationale
//!
//! - Nodes live in a `Vec` and reference children by index: no pointer
//!   chains, cheap clones, trivially safe code.
//! - The terminal marker is an explicit `bool` on the node, not a sentinel
//!   child key, so it can never collide with a real character.
//! - There is no `clear`/rebuild-in-place: a rebuild allocates a fresh trie
//!   and drops the old one. `build_from_labels` on a non-empty trie
//!   accumulates, which is why call sites construct per rebuild.
//!
//! ## Case Handling
//!
//! Insertion and lookup both go through `str::to_lowercase`, so the index
//! only ever stores (and returns) lowercased labels. Callers that need
//! original casing keep it in a side table
//! (see [`SuggestionIndex`](crate::index::SuggestionIndex)).
//!
//! ## Thread Safety
//!
//! `PrefixTrie` has no interior mutability; it is `Send + Sync` and callers
//! wrap it in a lock only if they mutate it from multiple threads.

use crate::traits::SuggestSource;

#[derive(Debug, Clone, Default)]
struct Node {
    /// Insertion-ordered edges; linear scan is fine at autocomplete fanout.
    children: Vec<(char, usize)>,
    terminal: bool,
}

/// Case-insensitive prefix index over text labels.
///
/// # Example
///
/// ```
/// use suggestkit::index::PrefixTrie;
///
/// let mut trie = PrefixTrie::new();
/// trie.insert("Margherita Pizza");
/// trie.insert("Marinara Sauce");
///
/// let hits = trie.suggest("marg", 5);
/// assert_eq!(hits, vec!["margherita pizza".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct PrefixTrie {
    nodes: Vec<Node>,
    label_count: usize,
}

const ROOT: usize = 0;

impl PrefixTrie {
    /// Creates an empty trie.
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            label_count: 0,
        }
    }

    /// Inserts a label, lowercasing it first.
    ///
    /// Empty input is a no-op. Re-inserting the same label (in any casing)
    /// has no additional effect.
    ///
    /// # Example
    ///
    /// ```
    /// use suggestkit::index::PrefixTrie;
    ///
    /// let mut trie = PrefixTrie::new();
    /// trie.insert("Pasta");
    /// trie.insert("pasta");
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn insert(&mut self, label: &str) {
        if label.is_empty() {
            return;
        }
        let folded = label.to_lowercase();
        let mut current = ROOT;
        for ch in folded.chars() {
            current = match self.child(current, ch) {
                Some(next) => next,
                None => {
                    self.nodes.push(Node::default());
                    let next = self.nodes.len() - 1;
                    self.nodes[current].children.push((ch, next));
                    next
                },
            };
        }
        if !self.nodes[current].terminal {
            self.nodes[current].terminal = true;
            self.label_count += 1;
        }
    }

    /// Bulk-inserts labels, skipping empty ones.
    ///
    /// Does not clear prior contents; callers rebuild by constructing a
    /// fresh trie rather than reusing one.
    pub fn build_from_labels<I>(&mut self, labels: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for label in labels {
            self.insert(label.as_ref());
        }
    }

    /// Returns `true` if the exact label (case-insensitively) was inserted.
    pub fn contains(&self, label: &str) -> bool {
        let folded = label.to_lowercase();
        self.walk(&folded)
            .is_some_and(|idx| self.nodes[idx].terminal)
    }

    /// Returns the number of distinct labels stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.label_count
    }

    /// Returns `true` if no labels are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.label_count == 0
    }

    fn child(&self, node: usize, ch: char) -> Option<usize> {
        self.nodes[node]
            .children
            .iter()
            .find(|(c, _)| *c == ch)
            .map(|&(_, idx)| idx)
    }

    /// Follows `text` (already lowercased) from the root.
    fn walk(&self, text: &str) -> Option<usize> {
        let mut current = ROOT;
        for ch in text.chars() {
            current = self.child(current, ch)?;
        }
        Some(current)
    }

    /// Depth-first collection below `node`. A terminal node's own label is
    /// emitted before any of its extensions; siblings in insertion order.
    fn collect(&self, node: usize, path: &mut String, out: &mut Vec<String>, limit: usize) {
        if out.len() >= limit {
            return;
        }
        if self.nodes[node].terminal {
            out.push(path.clone());
        }
        for &(ch, child) in &self.nodes[node].children {
            if out.len() >= limit {
                break;
            }
            path.push(ch);
            self.collect(child, path, out, limit);
            path.pop();
        }
    }
}

impl SuggestSource for PrefixTrie {
    /// Returns up to `limit` stored labels starting with `prefix`.
    ///
    /// The prefix is lowercased before the walk; a missing path or
    /// `limit == 0` yields an empty vec. Results are full lowercased
    /// labels, shorter matches before their extensions, siblings in
    /// insertion order.
    ///
    /// # Example
    ///
    /// ```
    /// use suggestkit::index::PrefixTrie;
    /// use suggestkit::traits::SuggestSource;
    ///
    /// let mut trie = PrefixTrie::new();
    /// trie.insert("app");
    /// trie.insert("apple");
    /// trie.insert("apt");
    ///
    /// assert_eq!(trie.suggest("app", 8), vec!["app", "apple"]);
    /// assert!(trie.suggest("xyzzy", 8).is_empty());
    /// ```
    fn suggest(&self, prefix: &str, limit: usize) -> Vec<String> {
        if limit == 0 {
            return Vec::new();
        }
        let mut folded = prefix.to_lowercase();
        let Some(start) = self.walk(&folded) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        self.collect(start, &mut folded, &mut out, limit);
        out
    }
}

impl PrefixTrie {
    /// Inherent forwarding of [`SuggestSource::suggest`] so callers don't
    /// need the trait in scope.
    #[inline]
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<String> {
        SuggestSource::suggest(self, prefix, limit)
    }
}

impl Default for PrefixTrie {
    fn default() -> Self {
        Self::new()
    }
}
