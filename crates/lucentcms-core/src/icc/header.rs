//! ICC Profile Header
//!
//! The ICC profile header is exactly 128 bytes and contains basic profile
//! information. See ICC.1:2022 Section 7.2.
//!
//! Unknown device-class or color-space codes are retained as raw 4-byte
//! signatures rather than rejected: a profile with an exotic class still
//! parses, and the worst-case outcome downstream is the default sRGB
//! profile.

use crate::color::Xyz;
use crate::error::Result;
use crate::icc::cursor::Cursor;

/// Profile file signature - must be 'acsp' (0x61637370)
pub const PROFILE_SIGNATURE: u32 = 0x61637370;

/// Header size in bytes
pub const HEADER_SIZE: usize = 128;

/// Profile creation date and time
///
/// Stored in the header as three packed 4-byte words (year/month, day/hour,
/// minute/second).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateTime {
    pub year: u16,
    pub month: u16,
    pub day: u16,
    pub hour: u16,
    pub minute: u16,
    pub second: u16,
}

/// ICC Rendering Intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderingIntent {
    #[default]
    Perceptual,
    RelativeColorimetric,
    Saturation,
    AbsoluteColorimetric,
}

impl RenderingIntent {
    /// Decode from the header word; unrecognized values fall back to
    /// perceptual rather than failing the parse.
    pub fn from_u32(val: u32) -> Self {
        match val {
            1 => Self::RelativeColorimetric,
            2 => Self::Saturation,
            3 => Self::AbsoluteColorimetric,
            _ => Self::Perceptual,
        }
    }
}

/// ICC Profile Header (128 bytes)
#[derive(Debug, Clone, PartialEq)]
pub struct IccHeader {
    /// Profile size in bytes
    pub size: u32,
    /// Preferred CMM type signature
    pub cmm_type: u32,
    /// Profile version, raw encoding (major byte, minor/patch nibbles)
    pub version: u32,
    /// Device class signature ('mntr', 'scnr', ...)
    pub device_class: u32,
    /// Color space of device data ('RGB ', ...)
    pub color_space: u32,
    /// Profile connection space signature ('XYZ ' or 'Lab ')
    pub pcs: u32,
    /// Date and time the profile was created
    pub creation_date: DateTime,
    /// Profile file signature (must be 'acsp')
    pub signature: u32,
    /// Primary platform signature
    pub platform: u32,
    /// Profile flags
    pub flags: u32,
    /// Device manufacturer signature
    pub manufacturer: u32,
    /// Device model signature
    pub model: u32,
    /// Device attributes
    pub attributes: u64,
    /// Rendering intent
    pub rendering_intent: RenderingIntent,
    /// PCS illuminant XYZ
    pub illuminant: Xyz,
    /// Profile creator signature
    pub creator: u32,
}

impl IccHeader {
    /// Parse the fixed 128-byte header
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut cur = Cursor::new(data);

        let size = cur.read_u32()?;
        let cmm_type = cur.read_signature()?;
        let version = cur.read_u32()?;
        let device_class = cur.read_signature()?;
        let color_space = cur.read_signature()?;
        let pcs = cur.read_signature()?;

        let creation_date = DateTime {
            year: cur.read_u16()?,
            month: cur.read_u16()?,
            day: cur.read_u16()?,
            hour: cur.read_u16()?,
            minute: cur.read_u16()?,
            second: cur.read_u16()?,
        };

        let signature = cur.read_signature()?;
        let platform = cur.read_signature()?;
        let flags = cur.read_u32()?;
        let manufacturer = cur.read_signature()?;
        let model = cur.read_signature()?;
        let attributes = cur.read_u64()?;
        let rendering_intent = RenderingIntent::from_u32(cur.read_u32()?);
        let illuminant = cur.read_xyz()?;
        let creator = cur.read_signature()?;

        // Profile ID and reserved bytes fill the rest of the header
        cur.seek(HEADER_SIZE)?;

        Ok(Self {
            size,
            cmm_type,
            version,
            device_class,
            color_space,
            pcs,
            creation_date,
            signature,
            platform,
            flags,
            manufacturer,
            model,
            attributes,
            rendering_intent,
            illuminant,
            creator,
        })
    }

    /// Whether the 'acsp' file signature is present
    pub fn has_valid_signature(&self) -> bool {
        self.signature == PROFILE_SIGNATURE
    }

    /// Profile version as (major, minor)
    pub fn version_tuple(&self) -> (u8, u8) {
        let bytes = self.version.to_be_bytes();
        (bytes[0], bytes[1] >> 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_header() -> Vec<u8> {
        let mut data = vec![0u8; HEADER_SIZE];
        data[0..4].copy_from_slice(&(HEADER_SIZE as u32).to_be_bytes());
        data[8] = 4; // version 4.0
        data[12..16].copy_from_slice(b"mntr");
        data[16..20].copy_from_slice(b"RGB ");
        data[20..24].copy_from_slice(b"XYZ ");
        data[36..40].copy_from_slice(&PROFILE_SIGNATURE.to_be_bytes());
        // D50 illuminant
        data[68..72].copy_from_slice(&0x0000F6D6u32.to_be_bytes());
        data[72..76].copy_from_slice(&0x00010000u32.to_be_bytes());
        data[76..80].copy_from_slice(&0x0000D32Du32.to_be_bytes());
        data
    }

    #[test]
    fn test_parse_minimal_header() {
        let data = minimal_header();
        let header = IccHeader::parse(&data).unwrap();

        assert!(header.has_valid_signature());
        assert_eq!(header.version_tuple(), (4, 0));
        assert_eq!(header.device_class, u32::from_be_bytes(*b"mntr"));
        assert_eq!(header.color_space, u32::from_be_bytes(*b"RGB "));
        assert!((header.illuminant.x - 0.9642).abs() < 1e-3);
        assert!((header.illuminant.y - 1.0).abs() < 1e-9);
        assert!((header.illuminant.z - 0.8249).abs() < 1e-3);
    }

    #[test]
    fn test_header_too_small() {
        let data = vec![0u8; 100];
        assert!(IccHeader::parse(&data).is_err());
    }

    #[test]
    fn test_creation_date() {
        let mut data = minimal_header();
        data[24..26].copy_from_slice(&2024u16.to_be_bytes());
        data[26..28].copy_from_slice(&6u16.to_be_bytes());
        data[28..30].copy_from_slice(&15u16.to_be_bytes());
        let header = IccHeader::parse(&data).unwrap();
        assert_eq!(header.creation_date.year, 2024);
        assert_eq!(header.creation_date.month, 6);
        assert_eq!(header.creation_date.day, 15);
    }

    #[test]
    fn test_unknown_codes_kept_raw() {
        let mut data = minimal_header();
        data[12..16].copy_from_slice(b"zzzz");
        let header = IccHeader::parse(&data).unwrap();
        assert_eq!(header.device_class, u32::from_be_bytes(*b"zzzz"));
    }

    #[test]
    fn test_rendering_intent_fallback() {
        assert_eq!(RenderingIntent::from_u32(1), RenderingIntent::RelativeColorimetric);
        assert_eq!(RenderingIntent::from_u32(99), RenderingIntent::Perceptual);
    }
}
