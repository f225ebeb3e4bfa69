//! Command-line parsing.
//!
//! `minicss [options] <input> [output]`. Options may appear anywhere and do
//! not count towards the two positional arguments; `--` ends option parsing.

use std::ffi::OsString;
use std::path::PathBuf;

use minicss_scan::ScanConfig;

use crate::error::UsageError;

pub const USAGE: &str = "\
Usage: minicss [options] <input-file> [output-file]

Strips /* block comments */ (including nested ones) and collapses runs of
blank lines. Writes to standard output when no output file is given or the
output file cannot be created.

Options:
  --trim-leading-newlines   Drop line breaks before the first output byte
  -h, --help                Print this help
  -V, --version             Print version

Set RUST_LOG=minicss=debug (or minicss_scan=trace) for diagnostics on stderr.";

/// Parsed minify invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub config: ScanConfig,
}

/// What the binary should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Version,
    Minify(CliOptions),
}

/// Parse arguments (without the program name).
pub fn parse_args<I>(args: I) -> Result<Command, UsageError>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let mut positional: Vec<PathBuf> = Vec::new();
    let mut config = ScanConfig::default();
    let mut options_done = false;

    for arg in args {
        let arg: OsString = arg.into();
        if !options_done {
            match arg.to_str() {
                Some("--") => {
                    options_done = true;
                    continue;
                }
                Some("-h" | "--help") => return Ok(Command::Help),
                Some("-V" | "--version") => return Ok(Command::Version),
                Some("--trim-leading-newlines") => {
                    config.trim_leading_newlines = true;
                    continue;
                }
                Some(flag) if flag.starts_with('-') && flag != "-" => {
                    return Err(UsageError::UnknownOption(flag.to_string()));
                }
                _ => {}
            }
        }
        positional.push(PathBuf::from(arg));
    }

    if positional.len() > 2 {
        return Err(UsageError::TooManyArguments(positional.len()));
    }
    let mut positional = positional.into_iter();
    let Some(input) = positional.next() else {
        return Err(UsageError::MissingInput);
    };
    Ok(Command::Minify(CliOptions {
        input,
        output: positional.next(),
        config,
    }))
}
