//! File-to-file minification.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use minicss_scan::{ScanConfig, ScanError, ScanStats, Scanner, SeekSource, Sink, WriterSink};
use tracing::warn;

use crate::destination::{Destination, DestinationKind};
use crate::error::CliError;

/// Outcome of a successful run.
#[derive(Debug)]
pub struct Report {
    pub stats: ScanStats,
    /// Where the output was actually written.
    pub destination: DestinationKind,
    /// Set when the requested output file could not be created and the
    /// output went to standard output instead.
    pub output_error: Option<CliError>,
}

/// Minifies one input file.
#[derive(Clone, Debug)]
pub struct Minifier {
    input: PathBuf,
    config: ScanConfig,
}

impl Minifier {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            config: ScanConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Open the input and read its first block.
    ///
    /// Opening a directory succeeds on some platforms and only fails on the
    /// first read, so the read happens here, before any output is created.
    ///
    /// # Errors
    ///
    /// [`CliError::InputOpen`] naming the path.
    pub fn open_input(&self) -> Result<BufReader<File>, CliError> {
        let open = || -> io::Result<BufReader<File>> {
            let mut reader = BufReader::new(File::open(&self.input)?);
            reader.fill_buf()?;
            Ok(reader)
        };
        open().map_err(|source| CliError::InputOpen {
            path: self.input.clone(),
            source,
        })
    }

    /// Scan an opened input into `destination` and flush it.
    ///
    /// # Errors
    ///
    /// [`CliError::Scan`] on a read or write failure, including the final
    /// flush.
    #[tracing::instrument(level = "debug", skip_all, fields(input = %self.input.display()))]
    pub fn minimize_into(
        &self,
        input: BufReader<File>,
        destination: Destination,
    ) -> Result<ScanStats, CliError> {
        let mut source = SeekSource::new(input);
        let mut sink = WriterSink::new(BufWriter::new(destination));
        let stats = Scanner::with_config(self.config).run(&mut source, &mut sink)?;
        sink.flush().map_err(ScanError::Write)?;
        Ok(stats)
    }

    /// Minify the input into `output`, or to standard output if `None`.
    ///
    /// The input is opened and read first; if that fails nothing is created
    /// and nothing is written. An output file that cannot be created is not
    /// fatal: the run continues on standard output and the error is handed
    /// back in [`Report::output_error`].
    ///
    /// # Errors
    ///
    /// [`CliError::InputOpen`] or [`CliError::Scan`].
    pub fn minimize_to(&self, output: Option<&Path>) -> Result<Report, CliError> {
        let input = self.open_input()?;

        let (destination, output_error) = Destination::open(output);
        if let Some(err) = &output_error {
            warn!(%err, "falling back to standard output");
        }
        let kind = destination.kind();

        let stats = self.minimize_into(input, destination)?;
        Ok(Report {
            stats,
            destination: kind,
            output_error,
        })
    }
}
