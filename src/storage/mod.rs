//! Binary persistence for the inverted index.
//!
//! - [`structured`]: big-endian primitive readers and writers
//! - [`codec`]: the two-section container format built on top of them

pub mod codec;
pub mod structured;

// Re-export commonly used types
pub use codec::{
    EntryKind, LARGE_POSTINGS_THRESHOLD, decode, dump, dump_to_path, encode, load, load_from_path,
};
pub use structured::{StructReader, StructWriter};
