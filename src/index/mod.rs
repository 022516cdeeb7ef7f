//! The in-memory inverted index: term to document-id postings.
//!
//! [`IndexBuilder`] turns a [`Documents`](crate::document::Documents) mapping into an
//! [`InvertedIndex`]; [`InvertedIndex::query`] answers AND queries over it. Persisting
//! the index is handled by [`crate::storage::codec`].

pub mod builder;
pub mod inverted_index;
pub mod query;

// Re-export commonly used types
pub use builder::{IndexBuilder, build_inverted_index};
pub use inverted_index::InvertedIndex;
