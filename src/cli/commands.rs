//! Command implementations for the invidx CLI.

use std::io::{BufRead, Write};
use std::path::Path;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::document::{load_documents_from_path, load_stop_words_from_path};
use crate::error::Result;
use crate::index::{IndexBuilder, InvertedIndex};
use crate::storage::codec;

/// Execute a CLI command, writing results to `out`.
pub fn execute_command(args: &InvidxArgs, out: &mut dyn Write) -> Result<()> {
    debug!("{args:?}");
    match &args.command {
        Command::Build(build_args) => {
            let summary = process_build(
                &build_args.dataset_path,
                &build_args.stop_words,
                &build_args.output,
            )?;
            output_build_summary(out, &summary, args.output_format)
        }
        Command::Query(query_args) => query_index(query_args, args.output_format, out),
    }
}

/// Load documents and stop words, build the index and dump it to `output`.
pub fn process_build(dataset_path: &Path, stop_words_path: &Path, output: &Path) -> Result<BuildSummary> {
    debug!(
        "call build with: {} and {}",
        dataset_path.display(),
        output.display()
    );
    let documents = load_documents_from_path(dataset_path)?;
    let stop_words = load_stop_words_from_path(stop_words_path)?;

    let index = IndexBuilder::new(stop_words).build(&documents)?;
    let bytes_written = codec::dump_to_path(&index, output)?;

    let summary = BuildSummary {
        documents: documents.len(),
        terms: index.len(),
        postings: index.total_postings(),
        bytes_written,
    };
    info!(
        "indexed {} documents into {} terms, wrote {} bytes",
        summary.documents, summary.terms, summary.bytes_written
    );
    Ok(summary)
}

fn query_index(args: &QueryArgs, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    let index = codec::load_from_path(&args.index_path)?;

    match args.query_source() {
        None => process_list_queries(&index, &args.query_list, format, out),
        Some(input) => process_file_queries(&index, input.open()?, format, out),
    }
}

/// Run each query group, one output line per group.
///
/// Each element of a group may hold several whitespace-separated terms.
pub fn process_list_queries(
    index: &InvertedIndex,
    queries: &[Vec<String>],
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    for group in queries {
        let terms: Vec<&str> = group.iter().flat_map(|s| s.split_whitespace()).collect();
        let doc_ids = index.query(&terms)?;
        output_doc_ids(out, &doc_ids, format)?;
    }
    Ok(())
}

/// Run one query per input line.
///
/// A blank line produces an empty output line, keeping output aligned with input.
pub fn process_file_queries<R: BufRead>(
    index: &InvertedIndex,
    reader: R,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    for line in reader.lines() {
        let line = line?;
        let terms: Vec<&str> = line.split_whitespace().collect();
        if terms.is_empty() {
            writeln!(out)?;
            continue;
        }
        let doc_ids = index.query(&terms)?;
        output_doc_ids(out, &doc_ids, format)?;
    }
    Ok(())
}
