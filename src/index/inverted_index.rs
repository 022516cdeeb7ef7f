//! Inverted index type and its set-equality semantics.

use std::collections::BTreeSet;

use ahash::AHashMap;

use crate::document::DocId;
use crate::error::{IndexError, Result};

/// Mapping from term to the ids of the documents containing it.
///
/// Every stored term has a non-empty posting list. Equality compares each term's
/// postings as a set; order and repeated ids are not significant.
///
/// Once built or loaded the index is not mutated by queries, so a shared reference
/// can be handed to any number of reader threads.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    terms: AHashMap<String, Vec<DocId>>,
}

impl InvertedIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an index from `(term, postings)` pairs.
    ///
    /// Fails if a posting list is empty or a term is given twice.
    pub fn from_postings<I, S>(postings: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<DocId>)>,
        S: Into<String>,
    {
        let mut index = Self::new();
        for (term, ids) in postings {
            let term = term.into();
            if index.insert(term.clone(), ids)?.is_some() {
                return Err(IndexError::invalid_argument(format!(
                    "term '{term}' given more than once"
                )));
            }
        }
        Ok(index)
    }

    /// Insert a term with its posting list, returning the list it replaced.
    pub fn insert<S: Into<String>>(&mut self, term: S, postings: Vec<DocId>) -> Result<Option<Vec<DocId>>> {
        let term = term.into();
        if postings.is_empty() {
            return Err(IndexError::invalid_argument(format!(
                "term '{term}' has an empty posting list"
            )));
        }
        Ok(self.terms.insert(term, postings))
    }

    /// Append a document id to a term's posting list, creating the term if needed.
    pub(crate) fn add_posting(&mut self, term: String, doc_id: DocId) {
        self.terms.entry(term).or_default().push(doc_id);
    }

    /// Posting list of a term, if the term is indexed.
    pub fn postings(&self, term: &str) -> Option<&[DocId]> {
        self.terms.get(term).map(Vec::as_slice)
    }

    /// Whether the term is indexed.
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    /// Iterate over the indexed terms in arbitrary order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(String::as_str)
    }

    /// Iterate over `(term, postings)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[DocId])> {
        self.terms.iter().map(|(t, p)| (t.as_str(), p.as_slice()))
    }

    /// Number of indexed terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the index has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Total number of postings over all terms.
    pub fn total_postings(&self) -> usize {
        self.terms.values().map(Vec::len).sum()
    }

    /// Whether any posting list holds the same document id more than once.
    ///
    /// Never true for an index produced by [`IndexBuilder`](crate::index::IndexBuilder).
    /// A loaded index keeps whatever the container held.
    pub fn has_duplicate_postings(&self) -> bool {
        self.terms.values().any(|ids| {
            let distinct: BTreeSet<&DocId> = ids.iter().collect();
            distinct.len() != ids.len()
        })
    }
}

impl PartialEq for InvertedIndex {
    fn eq(&self, other: &Self) -> bool {
        if self.terms.len() != other.terms.len() {
            return false;
        }

        self.terms.iter().all(|(term, ids)| match other.terms.get(term) {
            Some(other_ids) => {
                ids.iter().collect::<BTreeSet<_>>() == other_ids.iter().collect::<BTreeSet<_>>()
            }
            None => false,
        })
    }
}

impl Eq for InvertedIndex {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_order() {
        let a = InvertedIndex::from_postings([("x", vec![1, 2, 3]), ("y", vec![7])]).unwrap();
        let b = InvertedIndex::from_postings([("y", vec![7]), ("x", vec![3, 1, 2])]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_equality_collapses_duplicates() {
        let a = InvertedIndex::from_postings([("x", vec![1, 2])]).unwrap();
        let b = InvertedIndex::from_postings([("x", vec![2, 1, 2])]).unwrap();

        assert_eq!(a, b);
        assert!(!a.has_duplicate_postings());
        assert!(b.has_duplicate_postings());
    }

    #[test]
    fn test_inequality() {
        let a = InvertedIndex::from_postings([("x", vec![1, 2])]).unwrap();
        let different_ids = InvertedIndex::from_postings([("x", vec![1, 3])]).unwrap();
        let extra_term = InvertedIndex::from_postings([("x", vec![1, 2]), ("y", vec![1])]).unwrap();
        let other_term = InvertedIndex::from_postings([("z", vec![1, 2])]).unwrap();

        assert_ne!(a, different_ids);
        assert_ne!(a, extra_term);
        assert_ne!(extra_term, a);
        assert_ne!(a, other_term);
    }

    #[test]
    fn test_empty_posting_list_rejected() {
        let mut index = InvertedIndex::new();
        let result = index.insert("lonely", Vec::new());
        assert!(matches!(result, Err(IndexError::InvalidArgument(_))));
        assert!(index.is_empty());
    }

    #[test]
    fn test_repeated_term_rejected() {
        let result = InvertedIndex::from_postings([("x", vec![1]), ("x", vec![2])]);
        assert!(matches!(result, Err(IndexError::InvalidArgument(_))));
    }

    #[test]
    fn test_accessors() {
        let index = InvertedIndex::from_postings([("x", vec![1, 2]), ("y", vec![3])]).unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index.total_postings(), 3);
        assert_eq!(index.postings("x"), Some(&[1, 2][..]));
        assert_eq!(index.postings("missing"), None);
        assert!(index.contains("y"));

        let mut terms: Vec<&str> = index.terms().collect();
        terms.sort_unstable();
        assert_eq!(terms, vec!["x", "y"]);
    }
}
