//! Command line argument parsing for the invidx CLI using clap.
//!
//! Every path has a default and an environment variable fallback.

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Args, FromArgMatches, Parser, Subcommand, ValueEnum, value_parser};
use serde::{Deserialize, Serialize};

use crate::document::Input;

/// Default location of the document source.
pub const DEFAULT_DATASET_PATH: &str = "./wikipedia_sample";

/// Default location of the stop word source.
pub const DEFAULT_STOP_WORDS_PATH: &str = "./stop_words_en.txt";

/// Default location of the persisted index.
pub const DEFAULT_INVERTED_INDEX_STORE_PATH: &str = "inverted.index";

/// invidx - build, dump, load and query an inverted index
#[derive(Parser, Debug, Clone)]
#[command(name = "invidx")]
#[command(about = "Tool to build, dump, load and query an inverted index")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct InvidxArgs {
    /// Verbosity level (-v warn, -vv info, -vvv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl InvidxArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build an inverted index and save it in binary format
    Build(BuildArgs),

    /// Query a previously built inverted index
    Query(QueryArgs),
}

/// Arguments for building an index
#[derive(Parser, Debug, Clone)]
pub struct BuildArgs {
    /// Path to the dataset to load
    #[arg(short = 'd', long = "dataset", env = "INVIDX_DATASET", default_value = DEFAULT_DATASET_PATH)]
    pub dataset_path: PathBuf,

    /// Path to the stop words
    #[arg(short = 's', long = "stop-words", env = "INVIDX_STOP_WORDS", default_value = DEFAULT_STOP_WORDS_PATH)]
    pub stop_words: PathBuf,

    /// Path to store the inverted index
    #[arg(short, long, env = "INVIDX_INDEX", default_value = DEFAULT_INVERTED_INDEX_STORE_PATH)]
    pub output: PathBuf,
}

/// Arguments for querying an index
///
/// `Args` is implemented by hand so that each `--query` occurrence stays its own
/// term group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryArgs {
    /// Path to read the inverted index from
    pub index_path: PathBuf,

    /// Term groups, one per `--query` occurrence
    pub query_list: Vec<Vec<String>>,

    /// File with one query per line
    pub query_file: Option<Input>,
}

const INDEX_PATH_ID: &str = "index_path";
const QUERY_LIST_ID: &str = "query_list";
const QUERY_FILE_ID: &str = "query_file";

impl Args for QueryArgs {
    fn augment_args(cmd: clap::Command) -> clap::Command {
        cmd.arg(
            Arg::new(INDEX_PATH_ID)
                .short('i')
                .long("index")
                .env("INVIDX_INDEX")
                .default_value(DEFAULT_INVERTED_INDEX_STORE_PATH)
                .value_parser(value_parser!(PathBuf))
                .help("Path to read the inverted index from"),
        )
        .arg(
            Arg::new(QUERY_LIST_ID)
                .long("query")
                .value_name("TERM")
                .num_args(1..)
                .action(ArgAction::Append)
                .value_parser(value_parser!(String))
                .help("Query terms; repeat the flag to run several queries"),
        )
        .arg(
            Arg::new(QUERY_FILE_ID)
                .long("query-file")
                .value_name("PATH")
                .value_parser(value_parser!(Input))
                .conflicts_with(QUERY_LIST_ID)
                .help("File with one query per line ('-' for stdin, the default without --query)"),
        )
    }

    fn augment_args_for_update(cmd: clap::Command) -> clap::Command {
        Self::augment_args(cmd)
    }
}

impl FromArgMatches for QueryArgs {
    fn from_arg_matches(matches: &ArgMatches) -> Result<Self, clap::Error> {
        let index_path = matches
            .get_one::<PathBuf>(INDEX_PATH_ID)
            .cloned()
            .ok_or_else(|| {
                clap::Error::raw(ErrorKind::MissingRequiredArgument, "missing --index\n")
            })?;

        let query_list: Vec<Vec<String>> = matches
            .get_occurrences::<String>(QUERY_LIST_ID)
            .map(|occurrences| {
                occurrences
                    .map(|group| group.cloned().collect())
                    .collect()
            })
            .unwrap_or_default();

        Ok(QueryArgs {
            index_path,
            query_list,
            query_file: matches.get_one::<Input>(QUERY_FILE_ID).cloned(),
        })
    }

    fn update_from_arg_matches(&mut self, matches: &ArgMatches) -> Result<(), clap::Error> {
        *self = Self::from_arg_matches(matches)?;
        Ok(())
    }
}

impl QueryArgs {
    /// Source of line-per-query input, if queries do not come from `--query`.
    pub fn query_source(&self) -> Option<Input> {
        if self.query_list.is_empty() {
            Some(self.query_file.clone().unwrap_or(Input::Stdin))
        } else {
            None
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma-joined document ids
    Human,
    /// JSON arrays
    Json,
}
