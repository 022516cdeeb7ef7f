//! # invidx
//!
//! A compact inverted index for line-oriented text corpora.
//!
//! ## Features
//!
//! - Whitespace tokenization with stop word removal
//! - Two-section big-endian binary container (one- or two-byte posting lengths)
//! - Boolean AND queries over per-term document id sets
//!
//! ```
//! use invidx::document::load_documents;
//! use invidx::index::build_inverted_index;
//! use invidx::storage::{decode, encode};
//! use std::io::Cursor;
//!
//! # fn main() -> invidx::error::Result<()> {
//! let documents = load_documents(Cursor::new("1 red fox\n2 red hen\n"))?;
//! let index = build_inverted_index(&documents, &Default::default())?;
//!
//! let loaded = decode(&encode(&index)?)?;
//! assert_eq!(loaded, index);
//! assert_eq!(loaded.query(&["red", "hen"])?.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod cli;
pub mod document;
pub mod error;
pub mod index;
pub mod storage;

pub mod prelude {
    pub use crate::document::{DocId, Documents, Input};
    pub use crate::error::{IndexError, Result};
    pub use crate::index::{IndexBuilder, InvertedIndex, build_inverted_index};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
