//! Output sinks.
//!
//! The scanner writes every surviving byte to a [`Sink`] as soon as it is
//! classified. Different implementations support in-memory buffers and any
//! [`io::Write`] target (a file, standard output).

use std::io::{self, Write};

/// Append-only destination for surviving bytes.
pub trait Sink {
    /// Append one byte.
    fn emit(&mut self, byte: u8) -> io::Result<()>;

    /// Push any buffered output to its destination.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn emit(&mut self, byte: u8) -> io::Result<()> {
        (**self).emit(byte)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

/// In-memory sink.
#[derive(Clone, Debug, Default)]
pub struct BufferSink {
    buffer: Vec<u8>,
}

impl BufferSink {
    /// Create an empty buffer sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Infallible [`Sink::emit`].
    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.buffer.push(byte);
    }

    /// Get the current contents without consuming.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Get the collected output.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Sink for BufferSink {
    #[inline]
    fn emit(&mut self, byte: u8) -> io::Result<()> {
        self.push(byte);
        Ok(())
    }
}

/// Sink over any [`io::Write`].
///
/// Each byte goes straight to the writer. Wrap unbuffered writers in a
/// `BufWriter` and call [`Sink::flush`] once the scan is done, so a failing
/// final flush is reported instead of being lost on drop.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for WriterSink<W> {
    #[inline]
    fn emit(&mut self, byte: u8) -> io::Result<()> {
        self.writer.write_all(&[byte])
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
