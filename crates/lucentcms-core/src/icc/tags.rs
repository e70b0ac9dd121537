//! ICC tag directory entries and payload decoding
//!
//! Only the tags the color-management core consumes are decoded: XYZ
//! triples (white/black point, colorants), tone reproduction curves in the
//! three encodings the `curv` count word selects, and copyright text.

use crate::color::Xyz;
use crate::error::Result;
use crate::icc::cursor::Cursor;
use crate::math::tonecurve::{ToneCurve, recognize_tonemap};

/// ICC Tag Signature (4-byte ASCII code)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagSignature(pub u32);

impl TagSignature {
    /// Create from 4 ASCII characters
    pub const fn from_bytes(b: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(b))
    }

    pub const MEDIA_WHITE: Self = Self::from_bytes(*b"wtpt");
    pub const MEDIA_BLACK: Self = Self::from_bytes(*b"bkpt");
    pub const RED_COLORANT: Self = Self::from_bytes(*b"rXYZ");
    pub const GREEN_COLORANT: Self = Self::from_bytes(*b"gXYZ");
    pub const BLUE_COLORANT: Self = Self::from_bytes(*b"bXYZ");
    pub const RED_TRC: Self = Self::from_bytes(*b"rTRC");
    pub const GREEN_TRC: Self = Self::from_bytes(*b"gTRC");
    pub const BLUE_TRC: Self = Self::from_bytes(*b"bTRC");
    pub const COPYRIGHT: Self = Self::from_bytes(*b"cprt");
}

impl std::fmt::Display for TagSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bytes = self.0.to_be_bytes();
        write!(f, "{}", String::from_utf8_lossy(&bytes))
    }
}

/// One row of the tag directory
#[derive(Debug, Clone, Copy)]
pub struct TagEntry {
    /// Tag signature
    pub signature: TagSignature,
    /// Offset from the start of the profile
    pub offset: u32,
    /// Size of the tag data in bytes
    pub size: u32,
}

impl TagEntry {
    /// Parse one directory row
    pub fn parse(cur: &mut Cursor<'_>) -> Result<Self> {
        Ok(Self {
            signature: TagSignature(cur.read_signature()?),
            offset: cur.read_u32()?,
            size: cur.read_u32()?,
        })
    }
}

/// Count word selecting the parametric type-3 curve encoding
const PARAMETRIC_TYPE_3: u32 = 0x0003_0000;

/// Decode an XYZ tag payload (cursor positioned past the 8-byte tag header)
pub fn decode_xyz(cur: &mut Cursor<'_>) -> Result<Xyz> {
    cur.read_xyz()
}

/// Decode a tone-curve tag payload (cursor positioned past the 8-byte tag
/// header)
///
/// A leading u32 count selects the encoding: 0 is the identity curve, 1 a
/// single u8Fixed8 gamma, `0x00030000` a parametric type-3 curve of which
/// only the gamma term is retained (the four shape parameters are read and
/// discarded; full parametric curves are out of scope), and any other
/// count a table of that many u16 samples classified by
/// [`recognize_tonemap`].
pub fn decode_curve(cur: &mut Cursor<'_>) -> Result<ToneCurve> {
    let count = cur.read_u32()?;

    match count {
        0 => Ok(ToneCurve::Linear),
        1 => {
            let gamma = cur.read_u8f8()?;
            // A raw gamma word of 0 has no inverse; treat as identity
            if gamma == 0.0 {
                Ok(ToneCurve::Linear)
            } else {
                Ok(ToneCurve::Gamma(gamma))
            }
        }
        PARAMETRIC_TYPE_3 => {
            let gamma = cur.read_s15f16()?;
            for _ in 0..4 {
                cur.read_s15f16()?;
            }
            Ok(ToneCurve::Gamma(gamma))
        }
        n => {
            // The count word is untrusted; reserve only what the payload
            // can actually hold (2 bytes per sample), the read fails on
            // overrun either way
            let mut samples = Vec::with_capacity((n as usize).min(cur.remaining() / 2));
            for _ in 0..n {
                samples.push(cur.read_u16()?);
            }
            Ok(ToneCurve::Table {
                gamma: recognize_tonemap(&samples),
            })
        }
    }
}

/// Decode a text tag payload as ASCII up to the first NUL
pub fn decode_text(cur: &mut Cursor<'_>) -> Result<String> {
    let bytes = cur.take(cur.remaining())?;
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    Ok(String::from_utf8_lossy(&bytes[..end]).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_identity_curve() {
        let data = [0, 0, 0, 0];
        let mut cur = Cursor::new(&data);
        assert_eq!(decode_curve(&mut cur).unwrap(), ToneCurve::Linear);
    }

    #[test]
    fn test_decode_gamma_curve() {
        // count = 1, gamma 2.2 as u8Fixed8 (563/256)
        let data = [0, 0, 0, 1, 0x02, 0x33];
        let mut cur = Cursor::new(&data);
        match decode_curve(&mut cur).unwrap() {
            ToneCurve::Gamma(g) => assert!((g - 2.199).abs() < 0.01),
            other => panic!("expected gamma curve, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_parametric_type3() {
        // count word 0x00030000, gamma 2.4 then four shape parameters
        let mut data = vec![0x00, 0x03, 0x00, 0x00];
        data.extend_from_slice(&((2.4 * 65536.0) as i32).to_be_bytes());
        for _ in 0..4 {
            data.extend_from_slice(&0u32.to_be_bytes());
        }
        let mut cur = Cursor::new(&data);
        match decode_curve(&mut cur).unwrap() {
            ToneCurve::Gamma(g) => assert!((g - 2.4).abs() < 1e-4),
            other => panic!("expected gamma curve, got {other:?}"),
        }
        assert_eq!(cur.remaining(), 0);
    }

    #[test]
    fn test_decode_table_curve() {
        // 1024-entry gamma 2.2 table
        let mut data = vec![0u8; 4];
        data[0..4].copy_from_slice(&1024u32.to_be_bytes());
        for i in 0..1024 {
            let x = i as f64 / 1023.0;
            let v = (x.powf(2.2) * 65535.0).round() as u16;
            data.extend_from_slice(&v.to_be_bytes());
        }
        let mut cur = Cursor::new(&data);
        match decode_curve(&mut cur).unwrap() {
            ToneCurve::Table { gamma } => assert!((gamma - 2.2).abs() < 0.01),
            other => panic!("expected table curve, got {other:?}"),
        }
    }

    #[test]
    fn test_truncated_table_curve() {
        // Declares 16 samples but supplies 2
        let mut data = vec![0u8; 4];
        data[0..4].copy_from_slice(&16u32.to_be_bytes());
        data.extend_from_slice(&[0x12, 0x34, 0x56, 0x78]);
        let mut cur = Cursor::new(&data);
        assert!(decode_curve(&mut cur).is_err());
    }

    #[test]
    fn test_huge_declared_count_fails_without_reserving() {
        // A count word of ~u32::MAX over a 4-byte payload must error out,
        // not reserve gigabytes up front
        let mut data = 0xFFFF_FFFEu32.to_be_bytes().to_vec();
        data.extend_from_slice(&[0x12, 0x34, 0x56, 0x78]);
        let mut cur = Cursor::new(&data);
        assert!(matches!(
            decode_curve(&mut cur),
            Err(crate::error::Error::Truncated { .. })
        ));
    }

    #[test]
    fn test_zero_gamma_word_is_linear() {
        // count = 1 with a raw gamma word of 0
        let data = [0, 0, 0, 1, 0x00, 0x00];
        let mut cur = Cursor::new(&data);
        assert_eq!(decode_curve(&mut cur).unwrap(), ToneCurve::Linear);
    }

    #[test]
    fn test_decode_text() {
        let data = b"Copyright example\0padding";
        let mut cur = Cursor::new(data);
        assert_eq!(decode_text(&mut cur).unwrap(), "Copyright example");
    }

    #[test]
    fn test_tag_signature_display() {
        assert_eq!(TagSignature::MEDIA_WHITE.to_string(), "wtpt");
        assert_eq!(TagSignature::RED_TRC.to_string(), "rTRC");
    }
}
