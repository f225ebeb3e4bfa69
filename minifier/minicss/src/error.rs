//! Errors reported at the command-line boundary.

use std::io;
use std::path::PathBuf;

use minicss_scan::ScanError;

/// Malformed command line.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("invalid arguments: specify an input file")]
    MissingInput,
    #[error("invalid arguments: too many arguments provided ({0}, expected at most 2)")]
    TooManyArguments(usize),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
}

/// Everything that can go wrong while minifying a file.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Usage(#[from] UsageError),
    #[error("could not open input file: {}: {source}", .path.display())]
    InputOpen { path: PathBuf, source: io::Error },
    #[error("could not open output file: {}: {source}", .path.display())]
    OutputOpen { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Scan(#[from] ScanError),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage(_) => 2,
            CliError::InputOpen { .. } | CliError::OutputOpen { .. } | CliError::Scan(_) => 1,
        }
    }
}
