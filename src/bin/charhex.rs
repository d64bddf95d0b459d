//! Command-line interface for charhex
//!
//! Usage:
//!   charhex [-input `<path>`] [-output `<path>`] [-overwrite]
//!
//! Without `-input` lines are read from stdin, without `-output` records go
//! to stdout. Set `RUST_LOG` (e.g. `RUST_LOG=debug`) for diagnostics on stderr.

use charhex::charhex::{cli, error::EXIT_USAGE, run, CharhexError};
use log::LevelFilter;

fn init_logging() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() {
    init_logging();

    let config = cli::parse_config_from(std::env::args_os()).unwrap_or_else(|e| e.exit());

    match run(&config) {
        Ok(_) => {}
        Err(CharhexError::Config(e)) => {
            eprintln!("{}", e);
            eprintln!("{}", cli::command().render_help());
            std::process::exit(EXIT_USAGE);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
