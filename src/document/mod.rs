//! Document sources for index builds.
//!
//! Documents and stop words are plain newline-delimited UTF-8 text. They exist only
//! for the duration of a build and are never persisted.

pub mod input;
pub mod loader;

// Re-export commonly used types
pub use input::Input;
pub use loader::{
    DocId, Documents, load_documents, load_documents_from_path, load_stop_words,
    load_stop_words_from_path,
};
