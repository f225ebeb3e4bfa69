//! Byte sources with a non-consuming, whitespace-skipping peek.
//!
//! The scanner needs exactly one kind of lookahead: the next byte that is not
//! whitespace. Sources answer that without moving their read position, so the
//! scan keeps O(1) auxiliary memory. [`SliceSource`] bookmarks an index into a
//! borrowed buffer; [`SeekSource`] consumes forward through a buffered stream
//! and seeks back by the number of bytes it consumed.

use std::io::{self, BufRead, ErrorKind, Seek};

/// Returns `true` for the bytes the lookahead skips over.
///
/// Space, tab, carriage return, line feed and form feed.
#[inline]
pub const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n' | 0x0C)
}

/// A read-once input with a non-consuming significant-byte peek.
pub trait ByteSource {
    /// Consume and return the next byte, or `None` at end of input.
    fn next_byte(&mut self) -> io::Result<Option<u8>>;

    /// Return the next non-whitespace byte without consuming anything.
    ///
    /// The read position after the call equals the position before it.
    fn peek_significant(&mut self) -> io::Result<Option<u8>>;

    /// Consume bytes up to and including the next `target`.
    ///
    /// Returns `false` if the input ended before `target` was found.
    fn discard_through(&mut self, target: u8) -> io::Result<bool> {
        while let Some(byte) = self.next_byte()? {
            if byte == target {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Number of bytes consumed so far.
    fn offset(&self) -> u64;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        (**self).next_byte()
    }

    fn peek_significant(&mut self) -> io::Result<Option<u8>> {
        (**self).peek_significant()
    }

    fn discard_through(&mut self, target: u8) -> io::Result<bool> {
        (**self).discard_through(target)
    }

    fn offset(&self) -> u64 {
        (**self).offset()
    }
}

/// Source over an in-memory byte slice.
#[derive(Clone, Copy, Debug)]
pub struct SliceSource<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    /// Create a source positioned at the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// The bytes not yet consumed.
    pub fn remaining(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// Infallible [`ByteSource::next_byte`].
    #[inline]
    pub fn bump(&mut self) -> Option<u8> {
        let byte = self.buf.get(self.pos).copied();
        if byte.is_some() {
            self.pos += 1;
        }
        byte
    }

    /// Infallible [`ByteSource::peek_significant`].
    pub fn significant(&self) -> Option<u8> {
        self.remaining()
            .iter()
            .copied()
            .find(|&byte| !is_whitespace(byte))
    }

    /// Infallible [`ByteSource::discard_through`].
    pub fn skip_through(&mut self, target: u8) -> bool {
        match memchr::memchr(target, self.remaining()) {
            Some(idx) => {
                self.pos += idx + 1;
                true
            }
            None => {
                self.pos = self.buf.len();
                false
            }
        }
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl ByteSource for SliceSource<'_> {
    #[inline]
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        Ok(self.bump())
    }

    fn peek_significant(&mut self) -> io::Result<Option<u8>> {
        Ok(self.significant())
    }

    fn discard_through(&mut self, target: u8) -> io::Result<bool> {
        Ok(self.skip_through(target))
    }

    fn offset(&self) -> u64 {
        self.pos as u64
    }
}

/// Source over a buffered, seekable stream such as `BufReader<File>`.
///
/// The peek scans forward through the reader's buffer and restores the
/// position with [`Seek::seek_relative`]. `BufReader` serves short backward
/// moves from its buffer, so in the common case no system call is made.
#[derive(Debug)]
pub struct SeekSource<R> {
    inner: R,
    offset: u64,
}

impl<R: BufRead + Seek> SeekSource<R> {
    /// Wrap a buffered reader. Offsets are counted from its current position.
    pub fn new(inner: R) -> Self {
        Self { inner, offset: 0 }
    }

    /// Unwrap the reader.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// `fill_buf`, retrying on `Interrupted`.
    fn fill(&mut self) -> io::Result<&[u8]> {
        loop {
            match self.inner.fill_buf() {
                Ok(_) => break,
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt);
        self.offset += amt as u64;
    }
}

impl<R: BufRead + Seek> ByteSource for SeekSource<R> {
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let Some(&byte) = self.fill()?.first() else {
            return Ok(None);
        };
        self.consume(1);
        Ok(Some(byte))
    }

    fn peek_significant(&mut self) -> io::Result<Option<u8>> {
        let mut consumed = 0usize;
        let found = loop {
            let buf = self.fill()?;
            if buf.is_empty() {
                break None;
            }
            if let Some(&byte) = buf.iter().find(|&&byte| !is_whitespace(byte)) {
                break Some(byte);
            }
            // Whole buffer is whitespace: step over it and refill.
            let len = buf.len();
            self.inner.consume(len);
            consumed += len;
        };
        if consumed > 0 {
            let back = i64::try_from(consumed).map_err(io::Error::other)?;
            self.inner.seek_relative(-back)?;
        }
        Ok(found)
    }

    fn discard_through(&mut self, target: u8) -> io::Result<bool> {
        loop {
            let buf = self.fill()?;
            if buf.is_empty() {
                return Ok(false);
            }
            match memchr::memchr(target, buf) {
                Some(idx) => {
                    self.consume(idx + 1);
                    return Ok(true);
                }
                None => {
                    let len = buf.len();
                    self.consume(len);
                }
            }
        }
    }

    fn offset(&self) -> u64 {
        self.offset
    }
}

#[cfg(test)]
mod tests;
