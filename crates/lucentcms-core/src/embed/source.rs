//! Byte-source abstraction
//!
//! The extractors are polymorphic over a minimal read capability so the
//! same scanning logic serves a file handle, an in-memory buffer, or any
//! generic stream.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::Result;

/// A forward-only byte source
pub trait ByteSource {
    /// Read up to `buf.len()` bytes; returns the number of bytes read
    /// (0 at end of source)
    fn read(&mut self, buf: &mut [u8]) -> usize;

    /// Read a single byte, or None at end of source
    fn read_byte(&mut self) -> Option<u8>;

    /// Whether the source is exhausted
    fn at_end(&mut self) -> bool;
}

/// An in-memory byte source
#[derive(Debug)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

impl ByteSource for SliceSource<'_> {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        let n = buf.len().min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        n
    }

    fn read_byte(&mut self) -> Option<u8> {
        let byte = *self.data.get(self.pos)?;
        self.pos += 1;
        Some(byte)
    }

    fn at_end(&mut self) -> bool {
        self.pos >= self.data.len()
    }
}

/// A byte source over any `io::Read` stream
///
/// A one-byte lookahead slot makes `at_end` answerable without consuming
/// input. Read errors are treated as end of source; the boundary contract
/// is an empty extraction result, not a hard failure.
#[derive(Debug)]
pub struct StreamSource<R: Read> {
    inner: R,
    peeked: Option<u8>,
}

impl<R: Read> StreamSource<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            peeked: None,
        }
    }
}

impl StreamSource<BufReader<File>> {
    /// Open a file as a byte source
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: Read> ByteSource for StreamSource<R> {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        if buf.is_empty() {
            return 0;
        }
        let mut written = 0;
        if let Some(byte) = self.peeked.take() {
            buf[0] = byte;
            written = 1;
        }
        while written < buf.len() {
            match self.inner.read(&mut buf[written..]) {
                Ok(0) | Err(_) => break,
                Ok(n) => written += n,
            }
        }
        written
    }

    fn read_byte(&mut self) -> Option<u8> {
        if let Some(byte) = self.peeked.take() {
            return Some(byte);
        }
        let mut byte = [0u8; 1];
        match self.inner.read(&mut byte) {
            Ok(1) => Some(byte[0]),
            _ => None,
        }
    }

    fn at_end(&mut self) -> bool {
        if self.peeked.is_some() {
            return false;
        }
        match self.read_byte() {
            Some(byte) => {
                self.peeked = Some(byte);
                false
            }
            None => true,
        }
    }
}

/// Drain the rest of a source into `out`
pub(crate) fn read_to_end<S: ByteSource>(src: &mut S, out: &mut Vec<u8>) {
    let mut chunk = [0u8; 2048];
    loop {
        let n = src.read(&mut chunk);
        if n == 0 {
            break;
        }
        out.extend_from_slice(&chunk[..n]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_source() {
        let data = [1u8, 2, 3, 4, 5];
        let mut src = SliceSource::new(&data);
        assert!(!src.at_end());
        assert_eq!(src.read_byte(), Some(1));

        let mut buf = [0u8; 3];
        assert_eq!(src.read(&mut buf), 3);
        assert_eq!(buf, [2, 3, 4]);

        assert_eq!(src.read_byte(), Some(5));
        assert!(src.at_end());
        assert_eq!(src.read_byte(), None);
        assert_eq!(src.read(&mut buf), 0);
    }

    #[test]
    fn test_stream_source_matches_slice() {
        let data: Vec<u8> = (0..100).collect();
        let mut stream = StreamSource::new(&data[..]);
        let mut out = Vec::new();
        read_to_end(&mut stream, &mut out);
        assert_eq!(out, data);
        assert!(stream.at_end());
    }

    #[test]
    fn test_stream_peek_does_not_consume() {
        let data = [42u8, 43];
        let mut stream = StreamSource::new(&data[..]);
        assert!(!stream.at_end());
        assert!(!stream.at_end());
        assert_eq!(stream.read_byte(), Some(42));
        assert_eq!(stream.read_byte(), Some(43));
        assert!(stream.at_end());
    }

    #[test]
    fn test_open_missing_file() {
        assert!(StreamSource::open("/nonexistent/profile.icc").is_err());
    }
}
