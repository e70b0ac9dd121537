//! Big-endian byte cursor
//!
//! All multi-byte fields in an ICC profile are big-endian. The cursor
//! wraps a borrowed byte buffer and returns `Error::Truncated` on any read
//! past the end; untrusted input never panics.

use crate::color::Xyz;
use crate::error::{Error, Result};

/// A reading cursor over a profile byte buffer
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of the buffer
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current position in bytes
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left to read
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Move to an absolute position
    pub fn seek(&mut self, pos: usize) -> Result<()> {
        if pos > self.data.len() {
            return Err(Error::Truncated {
                expected: pos,
                actual: self.data.len(),
            });
        }
        self.pos = pos;
        Ok(())
    }

    /// Skip forward by `n` bytes
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.seek(self.pos + n)
    }

    /// Borrow the next `n` bytes and advance
    pub fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(Error::Truncated {
                expected: self.pos + n,
                actual: self.data.len(),
            });
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let b = self.take(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let b = self.take(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        let b = self.take(8)?;
        Ok(u64::from_be_bytes([
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
        ]))
    }

    /// s15Fixed16Number: signed 16.16 fixed point
    pub fn read_s15f16(&mut self) -> Result<f64> {
        let raw = self.read_u32()? as i32;
        Ok(raw as f64 / 65536.0)
    }

    /// u16Fixed16Number: unsigned 16.16 fixed point
    pub fn read_u16f16(&mut self) -> Result<f64> {
        Ok(self.read_u32()? as f64 / 65536.0)
    }

    /// u8Fixed8Number: unsigned 8.8 fixed point
    pub fn read_u8f8(&mut self) -> Result<f64> {
        Ok(self.read_u16()? as f64 / 256.0)
    }

    /// s7Fixed8Number: signed 8.8 fixed point
    pub fn read_s7f8(&mut self) -> Result<f64> {
        let raw = self.read_u16()? as i16;
        Ok(raw as f64 / 256.0)
    }

    /// 4-byte character code
    pub fn read_signature(&mut self) -> Result<u32> {
        self.read_u32()
    }

    /// XYZNumber: three consecutive s15Fixed16 values
    pub fn read_xyz(&mut self) -> Result<Xyz> {
        let x = self.read_s15f16()?;
        let y = self.read_s15f16()?;
        let z = self.read_s15f16()?;
        Ok(Xyz::new(x, y, z))
    }
}
