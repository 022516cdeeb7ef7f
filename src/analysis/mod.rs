//! Text analysis for indexing.
//!
//! Documents are split into [`Token`]s by a [`Tokenizer`] and then passed through
//! [`Filter`]s such as the [`StopFilter`] before their text becomes index terms.

pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
