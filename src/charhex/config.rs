//! Run configuration
//!
//! Built once from the command line and passed to [`crate::charhex::run`].

use crate::charhex::error::ConfigError;
use std::path::{Path, PathBuf};

/// Where to read from, where to write to, and whether an existing output file may be replaced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Input file; `None` reads standard input
    pub input: Option<PathBuf>,
    /// Output file; `None` writes standard output
    pub output: Option<PathBuf>,
    /// Truncate an existing output file instead of refusing to create it
    pub overwrite: bool,
}

impl Config {
    /// Build a config, treating empty paths as the standard streams.
    pub fn new<I, O>(input: Option<I>, output: Option<O>, overwrite: bool) -> Self
    where
        I: Into<PathBuf>,
        O: Into<PathBuf>,
    {
        Self {
            input: non_empty(input),
            output: non_empty(output),
            overwrite,
        }
    }

    /// Reject flag combinations that cannot be honoured.
    ///
    /// Checked before any stream is opened.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.overwrite && self.output.is_none() {
            return Err(ConfigError::OverwriteWithoutOutput);
        }
        Ok(())
    }

    pub fn input_path(&self) -> Option<&Path> {
        self.input.as_deref()
    }

    pub fn output_path(&self) -> Option<&Path> {
        self.output.as_deref()
    }
}

fn non_empty<P: Into<PathBuf>>(path: Option<P>) -> Option<PathBuf> {
    path.map(Into::into)
        .filter(|p: &PathBuf| !p.as_os_str().is_empty())
}
