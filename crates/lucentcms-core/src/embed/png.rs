//! PNG iCCP extraction
//!
//! Scans forward for the literal `iCCP` chunk-type bytes with a rolling
//! window, then reads the chunk body: a null-terminated profile name, one
//! compression-method byte, and a zlib stream holding the profile. The
//! stream is inflated in bounded 2048-byte chunks; whatever follows the
//! zlib stream (chunk CRC, later chunks) is ignored.

use std::io::Read;

use flate2::read::ZlibDecoder;

use crate::embed::source::{ByteSource, read_to_end};
use crate::error::{Error, Result};

/// iCCP chunk-type bytes
const ICCP_MARKER: [u8; 4] = *b"iCCP";

/// Maximum length of the iCCP profile name, per the PNG specification
const MAX_PROFILE_NAME: usize = 80;

/// Inflate buffer size
const INFLATE_CHUNK: usize = 2048;

/// Extract and inflate the ICC payload of a PNG iCCP chunk
///
/// [`Error::MarkerNotFound`] when no usable iCCP chunk exists,
/// [`Error::DecompressionFailed`] when the zlib stream yields no output.
pub fn extract_png_profile<S: ByteSource>(src: &mut S) -> Result<Vec<u8>> {
    if !scan_for_marker(src) {
        return Err(Error::MarkerNotFound);
    }

    // Null-terminated profile name, then the compression-method byte
    let mut name_len = 0;
    loop {
        match src.read_byte() {
            Some(0) => break,
            Some(_) => {
                name_len += 1;
                if name_len > MAX_PROFILE_NAME {
                    return Err(Error::MarkerNotFound);
                }
            }
            None => return Err(Error::MarkerNotFound),
        }
    }
    if src.read_byte().is_none() {
        return Err(Error::MarkerNotFound);
    }

    let mut compressed = Vec::new();
    read_to_end(src, &mut compressed);
    inflate(&compressed)
}

/// Rolling 4-byte window scan for the iCCP marker
fn scan_for_marker<S: ByteSource>(src: &mut S) -> bool {
    let mut window = [0u8; 4];
    let mut filled = 0;
    while let Some(byte) = src.read_byte() {
        if filled < 4 {
            window[filled] = byte;
            filled += 1;
        } else {
            window.copy_within(1.., 0);
            window[3] = byte;
        }
        if filled == 4 && window == ICCP_MARKER {
            return true;
        }
    }
    false
}

/// Inflate a zlib stream in bounded chunks
///
/// Accumulates until the stream ends or errors; a partial result is kept,
/// an error before any output is reported.
fn inflate(compressed: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = ZlibDecoder::new(compressed);
    let mut out = Vec::new();
    let mut chunk = [0u8; INFLATE_CHUNK];
    loop {
        match decoder.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => out.extend_from_slice(&chunk[..n]),
            Err(e) => {
                if out.is_empty() {
                    return Err(Error::DecompressionFailed(e.to_string()));
                }
                break;
            }
        }
    }
    Ok(out)
}
