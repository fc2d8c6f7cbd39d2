//! Convenience re-exports of the commonly used surface.
//!
//! ```
//! use suggestkit::prelude::*;
//! ```

pub use crate::builder::TtlCacheBuilder;
#[cfg(feature = "concurrency")]
pub use crate::cache::SharedTtlCache;
pub use crate::cache::{Ttl, TtlLruCore};
pub use crate::error::ConfigError;
pub use crate::index::{PrefixTrie, SuggestionIndex};
pub use crate::session::SuggestSession;
pub use crate::traits::{Labeled, SuggestSource};
