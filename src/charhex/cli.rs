//! Command-line surface
//!
//! Flags are spelled with a single dash (`-input`, `-output`, `-overwrite`,
//! `-help`),
//! and the GNU forms (`--input`, `-i`) are accepted as well. Single-dash long
//! flags are rewritten by [`normalize_args`] before clap sees them.

use crate::charhex::config::Config;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;

const LONG_FLAGS: [&str; 4] = ["input", "output", "overwrite", "help"];

/// Build the clap command for charhex
pub fn command() -> Command {
    Command::new("charhex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print each input line as spaced characters and as hexadecimal code points")
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .value_name("PATH")
                .value_parser(value_parser!(OsString))
                .help("Input file (default stdin)"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("PATH")
                .value_parser(value_parser!(OsString))
                .help("Output file (default stdout)"),
        )
        .arg(
            Arg::new("overwrite")
                .long("overwrite")
                .short('w')
                .help("Whether the output file can be overwritten (default false)")
                .num_args(0..=1)
                .require_equals(true)
                .default_value("false")
                .default_missing_value("true")
                .value_parser(value_parser!(bool))
                .action(ArgAction::Set),
        )
}

/// Rewrite `-input`, `-output`, `-overwrite` and `-help` (optionally with `=value`)
/// to their double-dash form. Arguments after `--` are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut end_of_flags = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg: OsString| {
            if end_of_flags {
                return arg;
            }
            let rewrite = match arg.to_str() {
                Some("--") => {
                    end_of_flags = true;
                    false
                }
                Some(text) => text
                    .strip_prefix('-')
                    .is_some_and(is_single_dash_long_flag),
                None => false,
            };
            if rewrite {
                let mut flag = OsString::from("-");
                flag.push(&arg);
                flag
            } else {
                arg
            }
        })
        .collect()
}

fn is_single_dash_long_flag(rest: &str) -> bool {
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    LONG_FLAGS.contains(&name)
}

/// Extract the run configuration from parsed matches
pub fn config_from_matches(matches: &ArgMatches) -> Config {
    Config::new(
        matches.get_one::<OsString>("input").cloned(),
        matches.get_one::<OsString>("output").cloned(),
        matches.get_one::<bool>("overwrite").copied().unwrap_or(false),
    )
}

/// Parse a full argument vector (program name first) into a [`Config`].
///
/// The returned config is not yet validated.
pub fn parse_config_from<I, T>(args: I) -> Result<Config, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let matches = command().try_get_matches_from(normalize_args(args))?;
    Ok(config_from_matches(&matches))
}
