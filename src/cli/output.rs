//! Output formatting for CLI commands.

use std::io::Write;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::document::DocId;
use crate::error::Result;

/// Result structure for index builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSummary {
    pub documents: usize,
    pub terms: usize,
    pub postings: usize,
    pub bytes_written: u64,
}

/// Render one query result as a single line.
///
/// Ids are listed in ascending order. An empty result renders as an empty line in
/// human format and as `[]` in JSON.
pub fn render_doc_ids(ids: &AHashSet<DocId>, format: OutputFormat) -> Result<String> {
    let mut ids: Vec<DocId> = ids.iter().copied().collect();
    ids.sort_unstable();

    match format {
        OutputFormat::Human => Ok(ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")),
        OutputFormat::Json => Ok(serde_json::to_string(&ids)?),
    }
}

/// Write one query result line.
pub fn output_doc_ids(out: &mut dyn Write, ids: &AHashSet<DocId>, format: OutputFormat) -> Result<()> {
    writeln!(out, "{}", render_doc_ids(ids, format)?)?;
    Ok(())
}

/// Write the build summary. Human format stays silent on stdout.
pub fn output_build_summary(out: &mut dyn Write, summary: &BuildSummary, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string(summary)?)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_human() {
        let ids: AHashSet<DocId> = [37, 2, 123].into_iter().collect();
        assert_eq!(render_doc_ids(&ids, OutputFormat::Human).unwrap(), "2,37,123");
        assert_eq!(render_doc_ids(&AHashSet::new(), OutputFormat::Human).unwrap(), "");
    }

    #[test]
    fn test_render_json() {
        let ids: AHashSet<DocId> = [5, 1].into_iter().collect();
        assert_eq!(render_doc_ids(&ids, OutputFormat::Json).unwrap(), "[1,5]");
        assert_eq!(render_doc_ids(&AHashSet::new(), OutputFormat::Json).unwrap(), "[]");
    }

    #[test]
    fn test_build_summary_json() {
        let summary = BuildSummary {
            documents: 4,
            terms: 20,
            postings: 25,
            bytes_written: 190,
        };

        let mut out = Vec::new();
        output_build_summary(&mut out, &summary, OutputFormat::Human).unwrap();
        assert!(out.is_empty());

        output_build_summary(&mut out, &summary, OutputFormat::Json).unwrap();
        let parsed: BuildSummary = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, summary);
    }
}
