//! Output destination: a created file or standard output.

use std::fs::File;
use std::io::{self, StdoutLock, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::CliError;

/// Where the minified output went.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DestinationKind {
    Stdout,
    File(PathBuf),
}

/// Writable output chosen for one run.
pub enum Destination {
    Stdout(StdoutLock<'static>),
    File { file: File, path: PathBuf },
}

impl Destination {
    pub fn stdout() -> Self {
        Destination::Stdout(io::stdout().lock())
    }

    pub fn kind(&self) -> DestinationKind {
        match self {
            Destination::Stdout(_) => DestinationKind::Stdout,
            Destination::File { path, .. } => DestinationKind::File(path.clone()),
        }
    }

    /// Create `path` (truncating it), or fall back to standard output.
    ///
    /// The error that forced the fallback is returned alongside, so the
    /// caller can report it without aborting the run.
    pub fn open(path: Option<&Path>) -> (Self, Option<CliError>) {
        let Some(path) = path else {
            return (Self::stdout(), None);
        };
        match File::create(path) {
            Ok(file) => {
                debug!(path = %path.display(), "writing to file");
                let path = path.to_path_buf();
                (Destination::File { file, path }, None)
            }
            Err(source) => (
                Self::stdout(),
                Some(CliError::OutputOpen {
                    path: path.to_path_buf(),
                    source,
                }),
            ),
        }
    }
}

impl Write for Destination {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Destination::Stdout(out) => out.write(buf),
            Destination::File { file, .. } => file.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Destination::Stdout(out) => out.flush(),
            Destination::File { file, .. } => file.flush(),
        }
    }
}
