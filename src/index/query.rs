//! Boolean AND queries over an [`InvertedIndex`].

use ahash::AHashSet;
use log::debug;

use crate::document::DocId;
use crate::error::{IndexError, Result};
use crate::index::inverted_index::InvertedIndex;

impl InvertedIndex {
    /// Return the ids of the documents containing every one of `terms`.
    ///
    /// An unknown term matches nothing, so it makes the whole result empty. The
    /// result is unordered; sorting it is left to the caller.
    ///
    /// ```
    /// use invidx::index::InvertedIndex;
    ///
    /// let index = InvertedIndex::from_postings([
    ///     ("A_word", vec![123, 37]),
    ///     ("B_word", vec![2, 37]),
    /// ]).unwrap();
    ///
    /// let hits = index.query(&["A_word", "B_word"]).unwrap();
    /// assert_eq!(hits.into_iter().collect::<Vec<_>>(), vec![37]);
    /// ```
    pub fn query<S: AsRef<str>>(&self, terms: &[S]) -> Result<AHashSet<DocId>> {
        if terms.is_empty() {
            return Err(IndexError::invalid_argument("query needs at least one term"));
        }
        debug!(
            "query inverted index with request {:?}",
            terms.iter().map(|t| t.as_ref()).collect::<Vec<&str>>()
        );

        let mut lists = Vec::with_capacity(terms.len());
        for term in terms {
            match self.postings(term.as_ref()) {
                Some(postings) => lists.push(postings),
                None => return Ok(AHashSet::new()),
            }
        }

        // Intersect starting from the shortest list.
        lists.sort_by_key(|postings| postings.len());

        let mut result: AHashSet<DocId> = lists[0].iter().copied().collect();
        for postings in &lists[1..] {
            if result.is_empty() {
                break;
            }
            let next: AHashSet<DocId> = postings.iter().copied().collect();
            result.retain(|id| next.contains(id));
        }

        Ok(result)
    }
}
