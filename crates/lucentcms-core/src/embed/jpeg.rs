//! JPEG APP2 extraction
//!
//! Scans forward for an APP2 marker (`FF E2`) carrying the
//! `ICC_PROFILE\0` identifier and returns its payload. The declared
//! segment length covers the length word itself plus the 14-byte
//! identifier block, so the payload is `length - 2 - 14` bytes.

use crate::embed::source::ByteSource;
use crate::error::{Error, Result};

/// APP2 identifier block: "ICC_PROFILE\0" plus sequence and count bytes
const IDENTIFIER_SIZE: usize = 14;

/// The ASCII identifier opening the block
const ICC_IDENTIFIER: &[u8; 12] = b"ICC_PROFILE\0";

/// Extract the ICC payload of the first matching JPEG APP2 segment
///
/// [`Error::MarkerNotFound`] when no APP2 segment with the ICC identifier
/// exists before end of source.
pub fn extract_jpeg_profile<S: ByteSource>(src: &mut S) -> Result<Vec<u8>> {
    let mut prev = 0u8;
    while let Some(byte) = src.read_byte() {
        let matched = prev == 0xFF && byte == 0xE2;
        prev = byte;
        if !matched {
            continue;
        }

        let (hi, lo) = match (src.read_byte(), src.read_byte()) {
            (Some(hi), Some(lo)) => (hi, lo),
            _ => return Err(Error::MarkerNotFound),
        };
        let seg_len = u16::from_be_bytes([hi, lo]) as usize;

        let mut ident = [0u8; IDENTIFIER_SIZE];
        if src.read(&mut ident) < IDENTIFIER_SIZE {
            return Err(Error::MarkerNotFound);
        }
        if &ident[..ICC_IDENTIFIER.len()] != ICC_IDENTIFIER {
            // Some other APP2 payload; keep scanning
            prev = ident[IDENTIFIER_SIZE - 1];
            continue;
        }

        // Length covers the length word and the identifier block
        let payload_len = seg_len.saturating_sub(2 + IDENTIFIER_SIZE);
        let mut payload = vec![0u8; payload_len];
        let n = src.read(&mut payload);
        payload.truncate(n);
        return Ok(payload);
    }
    Err(Error::MarkerNotFound)
}
