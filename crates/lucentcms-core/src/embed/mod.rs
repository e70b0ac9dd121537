//! Embedded-profile extraction
//!
//! Locates and extracts a raw ICC payload embedded in a PNG iCCP chunk or
//! a JPEG APP2 marker segment, from any [`ByteSource`]. Extraction is
//! best-effort by contract: a missing marker, a bad zlib stream, or an
//! unreadable source all degrade to an empty result so callers can fall
//! back to a default profile.

pub mod jpeg;
pub mod png;
pub mod source;

pub use jpeg::extract_jpeg_profile;
pub use png::extract_png_profile;
pub use source::{ByteSource, SliceSource, StreamSource};

/// PNG file signature
const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Extract an ICC payload from a source sniffed by its magic bytes
///
/// PNG and JPEG containers are scanned for their embedded-profile markers;
/// anything else is treated as a raw ICC stream and returned whole. A
/// missing marker or failed decompression is recovered here into an empty
/// vec, per the degradation contract.
pub fn extract_embedded_profile<S: ByteSource>(src: &mut S) -> Vec<u8> {
    let mut magic = [0u8; 2];
    let n = src.read(&mut magic);
    if n < 2 {
        return Vec::new();
    }

    if magic == [0xFF, 0xD8] {
        return extract_jpeg_profile(src).unwrap_or_default();
    }

    if magic == [PNG_SIGNATURE[0], PNG_SIGNATURE[1]] {
        // Consume the rest of the 8-byte signature before scanning
        let mut rest = [0u8; 6];
        if src.read(&mut rest) == 6 && rest == PNG_SIGNATURE[2..8] {
            return extract_png_profile(src).unwrap_or_default();
        }
        return Vec::new();
    }

    // Raw ICC stream: hand back everything, sniffed bytes included
    let mut raw = magic.to_vec();
    source::read_to_end(src, &mut raw);
    raw
}
