//! Builds an [`InvertedIndex`] from loaded documents.

use ahash::AHashSet;
use log::info;

use crate::analysis::token_filter::{Filter, StopFilter, StopWords};
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::document::Documents;
use crate::error::Result;
use crate::index::inverted_index::InvertedIndex;

/// Tokenizes documents, drops stop words and collects postings.
pub struct IndexBuilder {
    tokenizer: Box<dyn Tokenizer>,
    stop_filter: StopFilter,
}

impl IndexBuilder {
    /// Create a builder that splits on whitespace and removes `stop_words`.
    pub fn new(stop_words: StopWords) -> Self {
        IndexBuilder {
            tokenizer: Box::new(WhitespaceTokenizer::new()),
            stop_filter: StopFilter::with_stop_words(stop_words),
        }
    }

    /// Replace the tokenizer.
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Build the index.
    ///
    /// A term occurring several times in one document yields a single posting. Postings
    /// are in ascending document id order. Documents made only of stop words leave no
    /// trace in the index.
    pub fn build(&self, documents: &Documents) -> Result<InvertedIndex> {
        info!(
            "building inverted index for {} documents with {} tokenizer",
            documents.len(),
            self.tokenizer.name()
        );

        let mut index = InvertedIndex::new();
        for (&doc_id, text) in documents {
            let tokens = self.stop_filter.filter(self.tokenizer.tokenize(text)?)?;
            let terms: AHashSet<String> = tokens.map(|token| token.text).collect();
            for term in terms {
                index.add_posting(term, doc_id);
            }
        }

        Ok(index)
    }
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new(StopWords::new())
    }
}

/// Build an index with the default whitespace tokenizer.
pub fn build_inverted_index(documents: &Documents, stop_words: &StopWords) -> Result<InvertedIndex> {
    IndexBuilder::new(stop_words.clone()).build(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::{Token, TokenStream};

    fn documents(lines: &[(u32, &str)]) -> Documents {
        lines.iter().map(|&(id, text)| (id, text.to_string())).collect()
    }

    #[test]
    fn test_build_collects_postings() {
        let docs = documents(&[(1, "apple banana"), (2, "banana cherry"), (3, "apple")]);
        let index = build_inverted_index(&docs, &StopWords::new()).unwrap();

        let expected = InvertedIndex::from_postings([
            ("apple", vec![1, 3]),
            ("banana", vec![1, 2]),
            ("cherry", vec![2]),
        ])
        .unwrap();
        assert_eq!(index, expected);
        assert_eq!(index.postings("apple"), Some(&[1, 3][..]));
    }

    #[test]
    fn test_repeated_term_in_document_counts_once() {
        let docs = documents(&[(7, "echo echo echo"), (8, "echo")]);
        let index = build_inverted_index(&docs, &StopWords::new()).unwrap();

        assert_eq!(index.postings("echo"), Some(&[7, 8][..]));
        assert!(!index.has_duplicate_postings());
    }

    #[test]
    fn test_stop_word_only_document_is_invisible() {
        let docs = documents(&[(1, "the and the"), (2, "the river")]);
        let stop_words: StopWords = ["the", "and"].iter().map(|s| s.to_string()).collect();
        let index = build_inverted_index(&docs, &stop_words).unwrap();

        assert_eq!(index.len(), 1);
        assert_eq!(index.postings("river"), Some(&[2][..]));
        assert!(!index.contains("the"));
    }

    #[test]
    fn test_build_is_deterministic() {
        let docs = documents(&[(3, "c b a"), (1, "a b"), (2, "b")]);
        let first = build_inverted_index(&docs, &StopWords::new()).unwrap();
        let second = build_inverted_index(&docs, &StopWords::new()).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.postings("b"), second.postings("b"));
    }

    struct CommaTokenizer;

    impl Tokenizer for CommaTokenizer {
        fn tokenize(&self, text: &str) -> Result<TokenStream> {
            let tokens: Vec<Token> = text
                .split(',')
                .enumerate()
                .map(|(i, t)| Token::new(t, i))
                .collect();
            Ok(Box::new(tokens.into_iter()))
        }

        fn name(&self) -> &'static str {
            "comma"
        }
    }

    #[test]
    fn test_custom_tokenizer() {
        let docs = documents(&[(1, "new york,paris")]);
        let index = IndexBuilder::default()
            .with_tokenizer(Box::new(CommaTokenizer))
            .build(&docs)
            .unwrap();

        assert!(index.contains("new york"));
        assert!(index.contains("paris"));
    }
}
