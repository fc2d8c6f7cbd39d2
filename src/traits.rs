//! Trait seams for the suggestion subsystem.
//!
//! ## Architecture
//!
//! ```text
//!   record list ──Labeled──► SuggestionIndex ──SuggestSource──► UI dropdown
//!                               │
//!                               └── lookup map: lowercased label → id
//! ```
//!
//! | Trait           | Purpose                                              |
//! |-----------------|------------------------------------------------------|
//! | `Labeled`       | How a record yields its display label and identifier |
//! | `SuggestSource` | Anything that answers prefix-suggestion queries      |
//!
//! `Labeled` favors availability over strictness: a record with no usable
//! label is skipped during index builds, never an error.

/// A record that can contribute a label (and optionally an identifier) to a
/// suggestion index.
///
/// Plain strings are their own label and carry no identifier. Structured
/// records typically return their title, falling back to a secondary name
/// field, and expose a storage identifier for resolution after selection.
///
/// # Example
///
/// ```
/// use suggestkit::traits::Labeled;
///
/// struct Recipe {
///     title: String,
///     id: Option<String>,
/// }
///
/// impl Labeled for Recipe {
///     fn label(&self) -> Option<&str> {
///         Some(&self.title)
///     }
///
///     fn ident(&self) -> Option<&str> {
///         self.id.as_deref()
///     }
/// }
/// ```
pub trait Labeled {
    /// The text this record should be indexed under, if any.
    ///
    /// Returning `None` (or a label that is empty after trimming) excludes
    /// the record from the index.
    fn label(&self) -> Option<&str>;

    /// The identifier a selected suggestion resolves to, if any.
    ///
    /// Defaults to `None`; label-only sources (plain strings) rely on it.
    fn ident(&self) -> Option<&str> {
        None
    }
}

impl Labeled for str {
    fn label(&self) -> Option<&str> {
        Some(self)
    }
}

impl Labeled for String {
    fn label(&self) -> Option<&str> {
        Some(self)
    }
}

impl<T: Labeled + ?Sized> Labeled for &T {
    fn label(&self) -> Option<&str> {
        (**self).label()
    }

    fn ident(&self) -> Option<&str> {
        (**self).ident()
    }
}

/// Anything that answers "which stored labels start with this prefix?".
///
/// Implemented by [`PrefixTrie`](crate::index::PrefixTrie) and
/// [`SuggestionIndex`](crate::index::SuggestionIndex). Lookups are
/// case-insensitive and results are lowercased.
///
/// # Contract
///
/// - Never returns more than `limit` results; `limit == 0` yields an empty
///   vec.
/// - A prefix with no matches yields an empty vec, never an error.
/// - Result order across sibling branches is insertion order of distinct
///   characters, not alphabetical; callers must not assume sorted output.
pub trait SuggestSource {
    /// Returns up to `limit` stored labels starting with `prefix`.
    fn suggest(&self, prefix: &str, limit: usize) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn str_is_its_own_label() {
        assert_eq!("pizza".label(), Some("pizza"));
        assert_eq!("pizza".ident(), None);
    }

    #[test]
    fn string_is_its_own_label() {
        let s = String::from("pasta");
        assert_eq!(s.label(), Some("pasta"));
        assert_eq!(s.ident(), None);
    }

    #[test]
    fn references_delegate() {
        struct R;
        impl Labeled for R {
            fn label(&self) -> Option<&str> {
                Some("r")
            }
            fn ident(&self) -> Option<&str> {
                Some("id-1")
            }
        }

        let r = R;
        let by_ref: &R = &r;
        assert_eq!(by_ref.label(), Some("r"));
        assert_eq!(by_ref.ident(), Some("id-1"));
    }
}
