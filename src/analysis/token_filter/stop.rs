//! Stop filter implementation.
//!
//! Removes tokens whose text is in a caller-supplied stop word set. There is no
//! built-in word list; stop words are loaded once per build (see
//! [`crate::document::load_stop_words`]).
//!
//! # Examples
//!
//! ```
//! use invidx::analysis::token_filter::Filter;
//! use invidx::analysis::token_filter::stop::StopFilter;
//! use invidx::analysis::token::Token;
//!
//! let filter = StopFilter::from_words(["the"]);
//! let tokens = vec![Token::new("the", 0), Token::new("quick", 1)];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "quick");
//! ```

use std::sync::Arc;

use ahash::AHashSet;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A set of terms excluded from indexing.
pub type StopWords = AHashSet<String>;

/// A filter that removes stop words from the token stream.
#[derive(Clone, Debug, Default)]
pub struct StopFilter {
    stop_words: Arc<StopWords>,
}

impl StopFilter {
    /// Create a stop filter that removes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: StopWords) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_stop_words(words.into_iter().map(Into::into).collect())
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Whether the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stop_words = Arc::clone(&self.stop_words);
        Ok(Box::new(
            tokens.filter(move |token| !stop_words.contains(token.text.as_str())),
        ))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_stop_filter_removes_exact_matches() {
        let filter = StopFilter::from_words(["to_be", "the"]);
        let tokens = vec![
            Token::new("famous_phrases", 0),
            Token::new("to_be", 1),
            Token::new("The", 2),
        ];

        let result: Vec<String> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .map(|t| t.text)
            .collect();

        // Matching is case-sensitive.
        assert_eq!(result, vec!["famous_phrases", "The"]);
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let filter = StopFilter::new();
        assert!(filter.is_empty());

        let tokens = vec![Token::new("a", 0), Token::new("b", 1)];
        let result = filter.filter(Box::new(tokens.into_iter())).unwrap();
        assert_eq!(result.count(), 2);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopFilter::new().name(), "stop");
        assert_eq!(StopFilter::from_words(["x", "y"]).len(), 2);
    }
}
