//! Main module for charhex library functionality

pub mod cli;
pub mod config;
pub mod error;
pub mod streams;
pub mod transcoder;

pub use config::Config;
pub use error::{CharhexError, ConfigError, ResourceError, TranscodeError};
pub use transcoder::{transcode, Summary};

use log::info;

/// Validate `config`, open both streams and transcode input to output.
///
/// Nothing is opened when the configuration is invalid. The input is opened
/// before the output.
pub fn run(config: &Config) -> Result<Summary, CharhexError> {
    config.validate()?;

    let input = streams::open_input(config.input_path())?;
    let mut output = streams::open_output(config.output_path(), config.overwrite)?;

    let summary = transcode(input, &mut output)?;
    output.finish()?;

    info!("transcoded {} lines", summary.lines);
    Ok(summary)
}
