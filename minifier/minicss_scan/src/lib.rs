//! Streaming comment stripper for CSS-like text.
//!
//! A one-pass filter that drops `/* ... */` spans (with nesting) and collapses
//! runs of line breaks, writing every surviving byte straight to a [`Sink`].
//!
//! # Modules
//!
//! - [`source`]: Input capability with a whitespace-skipping, non-consuming peek
//! - [`sink`]: Output capability for in-memory buffers and `io::Write` targets
//! - [`scanner`]: The state machine and the scan loop
//! - [`error`]: Read/write failures surfaced by a scan
//!
//! # Example
//!
//! ```
//! assert_eq!(minicss_scan::minify_str("a/*x*/b\n\nc"), "ab\nc");
//! ```

pub mod error;
pub mod scanner;
pub mod sink;
pub mod source;

pub use error::ScanError;
pub use scanner::{ScanConfig, ScanState, ScanStats, Scanner, Transition};
pub use sink::{BufferSink, Sink, WriterSink};
pub use source::{is_whitespace, ByteSource, SeekSource, SliceSource};

/// Minify an in-memory byte buffer.
///
/// Returns the surviving bytes together with the scan statistics.
pub fn minify_bytes(input: &[u8], config: ScanConfig) -> (Vec<u8>, ScanStats) {
    let mut source = SliceSource::new(input);
    let mut sink = BufferSink::with_capacity(input.len());
    let stats = Scanner::with_config(config).run_in_memory(&mut source, &mut sink);
    (sink.into_bytes(), stats)
}

/// Minify a string with the default configuration.
///
/// Comment spans start and end on ASCII delimiters and only ASCII line
/// breaks are collapsed, so the output of valid UTF-8 stays valid UTF-8.
pub fn minify_str(input: &str) -> String {
    let (bytes, _) = minify_bytes(input.as_bytes(), ScanConfig::default());
    match String::from_utf8(bytes) {
        Ok(output) => output,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}
