//! Errors surfaced by a scan.

use std::io;

/// An I/O failure that aborted a scan.
///
/// The variant names the failing side. A scan is never resumed after an
/// error; whatever the sink already accepted is all the output there is.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Reading (or repositioning) the input failed.
    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),
    /// Writing or flushing the output failed.
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}

impl ScanError {
    /// The failing operation, `"read"` or `"write"`.
    pub fn operation(&self) -> &'static str {
        match self {
            ScanError::Read(_) => "read",
            ScanError::Write(_) => "write",
        }
    }

    /// The underlying I/O error.
    pub fn io_error(&self) -> &io::Error {
        match self {
            ScanError::Read(err) | ScanError::Write(err) => err,
        }
    }
}
