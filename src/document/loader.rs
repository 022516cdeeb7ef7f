//! Loaders for the document and stop word sources.
//!
//! The document source has one document per line, `<decimal-id><whitespace><text...>`:
//!
//! ```text
//! 123 some words A_word and nothing
//! 2   some word B_word in this dataset
//! ```
//!
//! The stop word source has one word per line.

use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;

use log::{debug, info, warn};

use crate::analysis::token_filter::StopWords;
use crate::document::input::Input;
use crate::error::{IndexError, Result};

/// Document identifier as read from the source.
///
/// The binary container stores ids as `u16`; the range is checked by the encoder.
pub type DocId = u32;

/// Mapping from document id to document text.
///
/// Ordered by id so that builds iterate documents deterministically.
pub type Documents = BTreeMap<DocId, String>;

/// Load documents from a line-oriented reader.
///
/// Blank lines are skipped. If an id occurs more than once, the last line wins.
pub fn load_documents<R: BufRead>(reader: R) -> Result<Documents> {
    let mut documents = Documents::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (id, text) = parse_document_line(line, line_no + 1)?;
        if documents.insert(id, text.to_string()).is_some() {
            warn!("document id {id} on line {} replaces an earlier one", line_no + 1);
        }
    }

    debug!("loaded {} documents", documents.len());
    Ok(documents)
}

/// Load documents from a file.
pub fn load_documents_from_path<P: AsRef<Path>>(path: P) -> Result<Documents> {
    info!("loading documents from {}", path.as_ref().display());
    load_documents(Input::path(path).open()?)
}

/// Load a stop word set, one word per line.
///
/// Trailing whitespace is stripped and empty lines are ignored.
pub fn load_stop_words<R: BufRead>(reader: R) -> Result<StopWords> {
    let mut stop_words = StopWords::new();

    for line in reader.lines() {
        let line = line?;
        let word = line.trim_end();
        if !word.is_empty() {
            stop_words.insert(word.to_string());
        }
    }

    debug!("loaded {} stop words", stop_words.len());
    Ok(stop_words)
}

/// Load a stop word set from a file.
pub fn load_stop_words_from_path<P: AsRef<Path>>(path: P) -> Result<StopWords> {
    info!("loading stop words from {}", path.as_ref().display());
    load_stop_words(Input::path(path).open()?)
}

/// Split a trimmed, non-empty line into its id and text.
fn parse_document_line(line: &str, line_no: usize) -> Result<(DocId, &str)> {
    let (id, text) = line.split_once(char::is_whitespace).ok_or_else(|| {
        IndexError::format(format!(
            "line {line_no}: expected '<id> <text>', found no whitespace separator"
        ))
    })?;

    let id = id.parse::<DocId>().map_err(|e| {
        IndexError::format(format!("line {line_no}: invalid document id '{id}': {e}"))
    })?;

    Ok((id, text.trim_start()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_load_documents() {
        let source = "123\tsome words A_word and nothing\n2 some word B_word in this dataset  \r\n";
        let documents = load_documents(Cursor::new(source)).unwrap();

        assert_eq!(documents.len(), 2);
        assert_eq!(documents[&123], "some words A_word and nothing");
        assert_eq!(documents[&2], "some word B_word in this dataset");
    }

    #[test]
    fn test_separator_run_is_trimmed_once() {
        let documents = load_documents(Cursor::new("5   \t famous_phrases  to_be\n")).unwrap();
        assert_eq!(documents[&5], "famous_phrases  to_be");
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let documents = load_documents(Cursor::new("\n1 a\n   \n2 b\n")).unwrap();
        assert_eq!(documents.len(), 2);
    }

    #[test]
    fn test_duplicate_id_last_wins() {
        let documents = load_documents(Cursor::new("1 first\n1 second\n")).unwrap();
        assert_eq!(documents[&1], "second");
    }

    #[test]
    fn test_missing_separator_is_format_error() {
        let err = load_documents(Cursor::new("1 ok\n42\n")).unwrap_err();
        match err {
            IndexError::Format(msg) => assert!(msg.starts_with("line 2:"), "{msg}"),
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_id_is_format_error() {
        for source in ["abc some text\n", "-3 some text\n", "99999999999 text\n"] {
            let result = load_documents(Cursor::new(source));
            assert!(matches!(result, Err(IndexError::Format(_))), "{source:?}");
        }
    }

    #[test]
    fn test_load_stop_words() {
        let stop_words = load_stop_words(Cursor::new("the\nto_be  \n\nand\r\n")).unwrap();

        assert_eq!(stop_words.len(), 3);
        assert!(stop_words.contains("to_be"));
        assert!(stop_words.contains("and"));
        assert!(!stop_words.contains(""));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = load_documents_from_path(dir.path().join("nope.txt"));
        assert!(matches!(result, Err(IndexError::Io(_))));
    }
}
