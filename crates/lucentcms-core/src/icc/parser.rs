//! ICC profile parser
//!
//! Walks the tag directory and decodes the tags the core consumes into a
//! flat field set. Individual tags that are out of bounds or unparseable
//! are skipped — the corresponding profile field falls back to its default
//! during assembly — so a partially corrupt profile still yields a usable
//! result.

use crate::color::Xyz;
use crate::error::{Error, Result};
use crate::icc::cursor::Cursor;
use crate::icc::header::{HEADER_SIZE, IccHeader};
use crate::icc::tags::{self, TagEntry, TagSignature};
use crate::math::tonecurve::ToneCurve;

/// Byte offset of the tag-type/reserved header inside a tag payload
const TAG_HEADER_SIZE: usize = 8;

/// The fields decoded from an ICC profile byte buffer
#[derive(Debug, Clone)]
pub struct IccProfile {
    /// Profile header (128 bytes)
    pub header: IccHeader,
    /// Media white point ('wtpt'); the header illuminant takes precedence
    /// during assembly
    pub white_point: Option<Xyz>,
    /// Media black point ('bkpt')
    pub black_point: Option<Xyz>,
    /// Red primary XYZ ('rXYZ')
    pub red_colorant: Option<Xyz>,
    /// Green primary XYZ ('gXYZ')
    pub green_colorant: Option<Xyz>,
    /// Blue primary XYZ ('bXYZ')
    pub blue_colorant: Option<Xyz>,
    /// Per-channel tone curves ('rTRC'/'gTRC'/'bTRC')
    pub trc: [Option<ToneCurve>; 3],
    /// Copyright text ('cprt'), informational only
    pub copyright: Option<String>,
}

impl IccProfile {
    /// Parse an ICC profile from bytes
    pub fn parse(data: &[u8]) -> Result<Self> {
        let header = IccHeader::parse(data)?;

        let mut cur = Cursor::new(data);
        cur.seek(HEADER_SIZE)?;
        let tag_count = cur.read_u32()? as usize;

        let mut entries = Vec::with_capacity(tag_count.min(64));
        for _ in 0..tag_count {
            entries.push(TagEntry::parse(&mut cur)?);
        }

        let mut profile = IccProfile {
            header,
            white_point: None,
            black_point: None,
            red_colorant: None,
            green_colorant: None,
            blue_colorant: None,
            trc: [None; 3],
            copyright: None,
        };
        for entry in &entries {
            // Skipping a bad tag leaves its field at the default
            let _ = profile.decode_tag(data, entry);
        }

        Ok(profile)
    }

    fn decode_tag(&mut self, data: &[u8], entry: &TagEntry) -> Result<()> {
        let start = entry.offset as usize + TAG_HEADER_SIZE;
        let end = entry.offset as usize + entry.size as usize;
        if end > data.len() || start > end {
            return Err(Error::Truncated {
                expected: end,
                actual: data.len(),
            });
        }
        let mut cur = Cursor::new(&data[start..end]);

        match entry.signature {
            TagSignature::MEDIA_WHITE => self.white_point = Some(tags::decode_xyz(&mut cur)?),
            TagSignature::MEDIA_BLACK => self.black_point = Some(tags::decode_xyz(&mut cur)?),
            TagSignature::RED_COLORANT => self.red_colorant = Some(tags::decode_xyz(&mut cur)?),
            TagSignature::GREEN_COLORANT => self.green_colorant = Some(tags::decode_xyz(&mut cur)?),
            TagSignature::BLUE_COLORANT => self.blue_colorant = Some(tags::decode_xyz(&mut cur)?),
            TagSignature::RED_TRC => self.trc[0] = Some(tags::decode_curve(&mut cur)?),
            TagSignature::GREEN_TRC => self.trc[1] = Some(tags::decode_curve(&mut cur)?),
            TagSignature::BLUE_TRC => self.trc[2] = Some(tags::decode_curve(&mut cur)?),
            TagSignature::COPYRIGHT => self.copyright = Some(tags::decode_text(&mut cur)?),
            _ => {}
        }
        Ok(())
    }
}
