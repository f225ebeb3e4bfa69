use super::*;
use std::io::{BufReader, Cursor, Read, SeekFrom};

/// Seek source over `data` with a tiny buffer so peeks cross refills.
fn seek_source(data: &[u8], capacity: usize) -> SeekSource<BufReader<Cursor<Vec<u8>>>> {
    SeekSource::new(BufReader::with_capacity(capacity, Cursor::new(data.to_vec())))
}

/// Drain a source, returning every byte it yields.
fn drain(source: &mut impl ByteSource) -> Vec<u8> {
    let mut out = Vec::new();
    while let Some(byte) = source.next_byte().unwrap() {
        out.push(byte);
    }
    out
}

/// Reader whose every operation fails.
struct BrokenReader;

impl Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(ErrorKind::BrokenPipe, "disk on fire"))
    }
}

impl Seek for BrokenReader {
    fn seek(&mut self, _pos: SeekFrom) -> io::Result<u64> {
        Err(io::Error::new(ErrorKind::BrokenPipe, "disk on fire"))
    }
}

// ─── Whitespace class ──────────────────────────────────────────

#[test]
fn whitespace_class() {
    for byte in [b' ', b'\t', b'\r', b'\n', 0x0C] {
        assert!(is_whitespace(byte), "{byte:#04x} should be whitespace");
    }
    for byte in [b'a', b'*', b'/', 0x0B, 0x00, 0xA0] {
        assert!(!is_whitespace(byte), "{byte:#04x} should not be whitespace");
    }
}

// ─── SliceSource ───────────────────────────────────────────────

#[test]
fn slice_yields_bytes_in_order() {
    let mut source = SliceSource::new(b"abc");
    assert_eq!(drain(&mut source), b"abc");
    assert_eq!(source.next_byte().unwrap(), None);
    assert_eq!(source.offset(), 3);
}

#[test]
fn slice_peek_skips_whitespace_without_consuming() {
    let mut source = SliceSource::new(b"/ \t\r\n\x0C*x");
    assert_eq!(source.next_byte().unwrap(), Some(b'/'));
    assert_eq!(source.peek_significant().unwrap(), Some(b'*'));
    assert_eq!(source.peek_significant().unwrap(), Some(b'*'));
    assert_eq!(source.offset(), 1);
    assert_eq!(source.next_byte().unwrap(), Some(b' '));
}

#[test]
fn slice_peek_at_end() {
    let mut source = SliceSource::new(b"a   \n");
    source.next_byte().unwrap();
    assert_eq!(source.peek_significant().unwrap(), None);
    assert_eq!(source.remaining(), b"   \n");
}

#[test]
fn slice_discard_through_found() {
    let mut source = SliceSource::new(b"  * rest");
    assert!(source.discard_through(b'*').unwrap());
    assert_eq!(source.remaining(), b" rest");
    assert_eq!(source.offset(), 3);
}

#[test]
fn slice_discard_through_missing_exhausts() {
    let mut source = SliceSource::new(b"no star here");
    assert!(!source.discard_through(b'*').unwrap());
    assert_eq!(source.next_byte().unwrap(), None);
    assert_eq!(source.offset(), 12);
}

#[test]
fn slice_infallible_methods() {
    let mut source = SliceSource::new(b"a \n*b*");
    assert_eq!(source.bump(), Some(b'a'));
    assert_eq!(source.significant(), Some(b'*'));
    assert_eq!(source.position(), 1);
    assert!(source.skip_through(b'*'));
    assert_eq!(source.remaining(), b"b*");
    assert!(!source.skip_through(b'/'));
    assert_eq!(source.bump(), None);
    assert_eq!(source.position(), 7);
}

// ─── SeekSource ────────────────────────────────────────────────

#[test]
fn seek_yields_bytes_in_order() {
    let mut source = seek_source(b"hello, world", 4);
    assert_eq!(drain(&mut source), b"hello, world");
    assert_eq!(source.offset(), 12);
}

#[test]
fn seek_peek_restores_position_across_refills() {
    // Eleven whitespace bytes with a 2-byte buffer forces several refills
    // before the peek finds `*`, then a seek back past the buffer start.
    let mut source = seek_source(b"/          \n*tail", 2);
    assert_eq!(source.next_byte().unwrap(), Some(b'/'));
    assert_eq!(source.peek_significant().unwrap(), Some(b'*'));
    assert_eq!(source.offset(), 1);
    assert_eq!(drain(&mut source), b"          \n*tail");
}

#[test]
fn seek_peek_at_end_restores_position() {
    let mut source = seek_source(b"x \n\t ", 3);
    assert_eq!(source.next_byte().unwrap(), Some(b'x'));
    assert_eq!(source.peek_significant().unwrap(), None);
    assert_eq!(drain(&mut source), b" \n\t ");
}

#[test]
fn seek_discard_through_spans_buffers() {
    let mut source = seek_source(b"abcdefg/rest", 3);
    assert!(source.discard_through(b'/').unwrap());
    assert_eq!(source.offset(), 8);
    assert_eq!(drain(&mut source), b"rest");
}

#[test]
fn seek_discard_through_missing() {
    let mut source = seek_source(b"abcdefg", 3);
    assert!(!source.discard_through(b'/').unwrap());
    assert_eq!(source.next_byte().unwrap(), None);
}

#[test]
fn seek_starts_from_reader_position() {
    let mut reader = BufReader::new(Cursor::new(b"skip|data".to_vec()));
    reader.seek(SeekFrom::Start(5)).unwrap();
    let mut source = SeekSource::new(reader);
    assert_eq!(drain(&mut source), b"data");
    assert_eq!(source.offset(), 4);
}

#[test]
fn seek_read_error_propagates() {
    let mut source = SeekSource::new(BufReader::new(BrokenReader));
    let err = source.next_byte().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BrokenPipe);
    assert!(source.peek_significant().is_err());
}

#[test]
fn slice_and_seek_agree() {
    let data = b"a /* b */\r\n\r\n  c * / d";
    let mut slice = SliceSource::new(data);
    let mut seek = seek_source(data, 2);
    loop {
        assert_eq!(
            slice.peek_significant().unwrap(),
            seek.peek_significant().unwrap()
        );
        let (a, b) = (slice.next_byte().unwrap(), seek.next_byte().unwrap());
        assert_eq!(a, b);
        if a.is_none() {
            break;
        }
    }
}
