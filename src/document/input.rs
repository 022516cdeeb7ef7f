//! Readable text sources.
//!
//! An [`Input`] is either a file path or the process's standard input. The loaders
//! only need a [`BufRead`], so anything else that implements it can be passed to them
//! directly.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::Result;

/// A line-oriented text source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A file on disk.
    Path(PathBuf),
    /// Standard input.
    Stdin,
}

impl Input {
    /// Create a path-backed input.
    pub fn path<P: AsRef<Path>>(path: P) -> Self {
        Input::Path(path.as_ref().to_path_buf())
    }

    /// Open the source for buffered reading.
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            Input::Path(path) => {
                let file = File::open(path).map_err(|e| {
                    io::Error::new(e.kind(), format!("can't open '{}': {e}", path.display()))
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
            Input::Stdin => Ok(Box::new(io::stdin().lock())),
        }
    }
}

impl FromStr for Input {
    type Err = std::convert::Infallible;

    /// `-` means standard input; everything else is a path.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s == "-" {
            Ok(Input::Stdin)
        } else {
            Ok(Input::Path(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Path(path) => write!(f, "{}", path.display()),
            Input::Stdin => write!(f, "-"),
        }
    }
}
