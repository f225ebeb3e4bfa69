//! The comment-stripping state machine.
//!
//! Each input byte is classified against three scalars: whether we are inside
//! a comment, how many openers have been seen inside it, and whether the last
//! emitted byte was a line break. Lookahead is a single significant byte from
//! [`ByteSource::peek_significant`], so markers split by whitespace
//! (`/ *`, `*\n/`) are recognised too.
//!
//! # Marker skipping
//!
//! Once a marker is recognised the scan discards bytes up to and including the
//! next `*` (opener) or `/` (closer) rather than a fixed two bytes. Because the
//! peek already skipped whitespace, that discard covers exactly the whitespace
//! between the two marker bytes plus the second one.
//!
//! # Unterminated comments
//!
//! A comment with no closer swallows the rest of the input.

use tracing::{debug, trace, warn};

use crate::error::ScanError;
use crate::sink::{BufferSink, Sink};
use crate::source::{ByteSource, SliceSource};

/// Scan options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanConfig {
    /// Drop line breaks that come before the first emitted byte.
    pub trim_leading_newlines: bool,
}

/// What the scanner does with one input byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// `/*` outside a comment.
    OpenComment,
    /// `/*` inside a comment.
    NestComment,
    /// `*/` closing an inner level.
    UnnestComment,
    /// `*/` closing the outermost comment.
    CloseComment,
    /// Literal byte, written to the sink.
    Emit,
    /// Line break directly after an emitted line break.
    CollapseNewline,
    /// Byte inside a comment.
    Discard,
}

impl Transition {
    /// Delimiter byte to discard through after this transition, if any.
    pub fn skip_target(self) -> Option<u8> {
        match self {
            Transition::OpenComment | Transition::NestComment => Some(b'*'),
            Transition::UnnestComment | Transition::CloseComment => Some(b'/'),
            Transition::Emit | Transition::CollapseNewline | Transition::Discard => None,
        }
    }
}

/// Mutable scan state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanState {
    pub in_comment: bool,
    pub nesting_depth: u32,
    pub last_emitted_was_newline: bool,
}

impl ScanState {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            in_comment: false,
            nesting_depth: 0,
            last_emitted_was_newline: config.trim_leading_newlines,
        }
    }

    /// Classify `byte` given the next significant byte and update the state.
    ///
    /// Rules are checked in priority order: opener outside a comment, opener
    /// inside one, closer inside one, then literal vs. comment content.
    pub fn step(&mut self, byte: u8, peek: Option<u8>) -> Transition {
        match (self.in_comment, byte, peek) {
            (false, b'/', Some(b'*')) => {
                self.in_comment = true;
                Transition::OpenComment
            }
            (true, b'/', Some(b'*')) => {
                self.nesting_depth += 1;
                Transition::NestComment
            }
            (true, b'*', Some(b'/')) => {
                if self.nesting_depth > 0 {
                    self.nesting_depth -= 1;
                    Transition::UnnestComment
                } else {
                    self.in_comment = false;
                    Transition::CloseComment
                }
            }
            (false, _, _) => {
                let is_newline = matches!(byte, b'\r' | b'\n');
                let collapse = is_newline && self.last_emitted_was_newline;
                self.last_emitted_was_newline = is_newline;
                if collapse {
                    Transition::CollapseNewline
                } else {
                    Transition::Emit
                }
            }
            (true, _, _) => Transition::Discard,
        }
    }
}

/// Counters collected during a scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub bytes_read: u64,
    pub bytes_emitted: u64,
    /// Outermost comments removed, including an unterminated trailing one.
    pub comments_removed: u64,
    pub max_nesting_depth: u32,
    /// The input ended inside a comment.
    pub unterminated: bool,
}

/// One-shot scanner: owns the state of a single scan.
///
/// [`run`](Self::run) consumes the scanner, so state never leaks from one
/// input into the next.
#[derive(Debug, Default)]
pub struct Scanner {
    state: ScanState,
    stats: ScanStats,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ScanConfig) -> Self {
        Self {
            state: ScanState::new(config),
            stats: ScanStats::default(),
        }
    }

    /// Current state (the initial state before `run`).
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Scan `source` to the end, writing surviving bytes to `sink`.
    ///
    /// The sink is not flushed; callers owning a buffered sink flush it once
    /// the scan returns.
    ///
    /// # Errors
    ///
    /// [`ScanError::Read`] if the source fails, [`ScanError::Write`] if the
    /// sink does. The scan stops at the first failure.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run<S, K>(mut self, source: &mut S, sink: &mut K) -> Result<ScanStats, ScanError>
    where
        S: ByteSource + ?Sized,
        K: Sink + ?Sized,
    {
        while let Some(byte) = source.next_byte().map_err(ScanError::Read)? {
            let peek = source.peek_significant().map_err(ScanError::Read)?;
            let transition = self.state.step(byte, peek);
            if transition == Transition::Emit {
                sink.emit(byte).map_err(ScanError::Write)?;
            }
            self.record(transition, source.offset() - 1);

            if let Some(delim) = transition.skip_target() {
                if !source.discard_through(delim).map_err(ScanError::Read)? {
                    break;
                }
            }
        }
        Ok(self.finish(source.offset()))
    }

    /// Same scan as [`run`](Self::run) over memory, where nothing can fail.
    #[tracing::instrument(level = "debug", skip_all)]
    pub(crate) fn run_in_memory(
        mut self,
        source: &mut SliceSource<'_>,
        sink: &mut BufferSink,
    ) -> ScanStats {
        while let Some(byte) = source.bump() {
            let transition = self.state.step(byte, source.significant());
            if transition == Transition::Emit {
                sink.push(byte);
            }
            self.record(transition, source.position() as u64 - 1);

            if let Some(delim) = transition.skip_target() {
                if !source.skip_through(delim) {
                    break;
                }
            }
        }
        self.finish(source.position() as u64)
    }

    /// Update counters and trace comment boundaries for one transition.
    fn record(&mut self, transition: Transition, offset: u64) {
        match transition {
            Transition::Emit => self.stats.bytes_emitted += 1,
            Transition::CollapseNewline | Transition::Discard => {}
            Transition::OpenComment => trace!(offset, "comment opened"),
            Transition::NestComment => {
                self.stats.max_nesting_depth =
                    self.stats.max_nesting_depth.max(self.state.nesting_depth);
                trace!(offset, depth = self.state.nesting_depth, "nested comment opened");
            }
            Transition::UnnestComment => {
                trace!(offset, depth = self.state.nesting_depth, "nested comment closed");
            }
            Transition::CloseComment => {
                self.stats.comments_removed += 1;
                trace!(offset, "comment closed");
            }
        }
    }

    fn finish(mut self, bytes_read: u64) -> ScanStats {
        self.stats.bytes_read = bytes_read;
        if self.state.in_comment {
            self.stats.unterminated = true;
            self.stats.comments_removed += 1;
            warn!(
                depth = self.state.nesting_depth,
                "input ended inside an unterminated comment"
            );
        }
        debug!(
            bytes_read = self.stats.bytes_read,
            bytes_emitted = self.stats.bytes_emitted,
            comments_removed = self.stats.comments_removed,
            "scan complete"
        );
        self.stats
    }
}
