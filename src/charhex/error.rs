//! Error types for charhex
//!
//! Configuration problems are reported before any stream is touched, resource
//! problems abort the run, and write failures surface from the transcoder.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit status used for an invalid flag combination, matching clap's usage errors.
pub const EXIT_USAGE: i32 = 2;

/// Exit status used for every other failure.
pub const EXIT_FAILURE: i32 = 1;

/// Invalid combination of command-line flags
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("flag -overwrite is invalid without flag -output")]
    OverwriteWithoutOutput,
}

/// A stream could not be acquired or released
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("cannot open input file '{}': {source}", path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot open output file '{}': {source}", path.display())]
    OpenOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot flush output: {source}")]
    Flush {
        #[source]
        source: io::Error,
    },
}

/// Failure while emitting records
#[derive(Error, Debug)]
pub enum TranscodeError {
    #[error("cannot write record for line {line}: {source}")]
    Write {
        line: u64,
        #[source]
        source: io::Error,
    },
}

/// Top-level error returned by [`crate::charhex::run`]
#[derive(Error, Debug)]
pub enum CharhexError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error(transparent)]
    Transcode(#[from] TranscodeError),
}

impl CharhexError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CharhexError::Config(_) => EXIT_USAGE,
            CharhexError::Resource(_) | CharhexError::Transcode(_) => EXIT_FAILURE,
        }
    }
}
