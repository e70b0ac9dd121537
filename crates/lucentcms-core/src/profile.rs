//! Assembled color profiles
//!
//! [`Profile`] is the terminal value object of the crate: an RGB→XYZ
//! matrix with its precomputed inverse, a white point at Y = 1, three
//! tone curves, and a black point. It is built from a built-in named
//! constant, from parsed ICC bytes, or straight from image container
//! bytes, and is immutable afterwards.

use std::path::Path;

use crate::color::{Xyz, white_point};
use crate::embed::{ByteSource, SliceSource, StreamSource, extract_embedded_profile};
use crate::error::{Error, Result};
use crate::icc::IccProfile;
use crate::math::{
    AdaptationMethod, Matrix3x3, ToneCurve, adaptation_matrix, primaries_to_xyz_matrix,
};
use crate::named::{ChromaticityProfile, XyzProfile};

/// Linear sRGB → XYZ (D65), Lindbloom reference values
pub const SRGB_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]);

/// XYZ (D65) → linear sRGB, precomputed inverse
pub const XYZ_TO_SRGB: Matrix3x3 = Matrix3x3::new([
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
]);

/// A fully assembled RGB device profile
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Linear device RGB → XYZ
    pub rgb_to_xyz: Matrix3x3,
    /// XYZ → linear device RGB
    pub xyz_to_rgb: Matrix3x3,
    /// White point, normalized to Y = 1
    pub white_point: Xyz,
    /// Per-channel tone curves (R, G, B)
    pub tone_curves: [ToneCurve; 3],
    /// Black point, zero unless the source supplies one
    pub black_point: Xyz,
}

impl Profile {
    /// Build a profile, checking the primaries matrix is invertible
    ///
    /// The one condition reported rather than absorbed: a singular matrix
    /// would surface as NaNs at render time, long after the parse.
    pub fn new(
        rgb_to_xyz: Matrix3x3,
        white_point: Xyz,
        tone_curves: [ToneCurve; 3],
        black_point: Xyz,
    ) -> Result<Self> {
        let xyz_to_rgb = rgb_to_xyz.inverse().ok_or(Error::DegenerateProfile)?;
        Ok(Self {
            rgb_to_xyz,
            xyz_to_rgb,
            white_point: white_point.normalize(),
            tone_curves,
            black_point,
        })
    }

    /// The sRGB/D65 profile
    pub fn srgb() -> Self {
        Self {
            rgb_to_xyz: SRGB_TO_XYZ,
            xyz_to_rgb: XYZ_TO_SRGB,
            white_point: white_point::D65.xyz,
            tone_curves: [ToneCurve::Gamma(2.4); 3],
            black_point: Xyz::new(0.0, 0.0, 0.0),
        }
    }

    /// Build from a chromaticity-defined named constant
    pub fn from_named(named: &ChromaticityProfile) -> Result<Self> {
        let rgb_to_xyz =
            primaries_to_xyz_matrix(named.white, named.red, named.green, named.blue)?;
        Self::new(
            rgb_to_xyz,
            named.white.to_white_xyz(),
            named.gamma.map(curve_for_gamma),
            Xyz::new(0.0, 0.0, 0.0),
        )
    }

    /// Build from an XYZ-defined named constant
    pub fn from_named_xyz(named: &XyzProfile) -> Result<Self> {
        let rgb_to_xyz = Matrix3x3::from_columns(
            named.red.to_array(),
            named.green.to_array(),
            named.blue.to_array(),
        );
        Self::new(
            rgb_to_xyz,
            named.white,
            named.gamma.map(curve_for_gamma),
            named.black,
        )
    }

    /// Build from raw ICC profile bytes
    ///
    /// Decoded fields overwrite sRGB defaults: colorant columns replace the
    /// matching sRGB matrix column, TRC tags replace the sRGB curve, and
    /// the white point is the header illuminant when it carries luminance,
    /// falling back to the 'wtpt' tag and then D65. Primaries are taken as
    /// absolute XYZ with no implicit adaptation; use [`Profile::adapted_to`]
    /// for that.
    pub fn from_icc_bytes(data: &[u8]) -> Result<Self> {
        let icc = IccProfile::parse(data)?;

        let red = icc.red_colorant.unwrap_or_else(|| column(&SRGB_TO_XYZ, 0));
        let green = icc
            .green_colorant
            .unwrap_or_else(|| column(&SRGB_TO_XYZ, 1));
        let blue = icc.blue_colorant.unwrap_or_else(|| column(&SRGB_TO_XYZ, 2));
        let rgb_to_xyz =
            Matrix3x3::from_columns(red.to_array(), green.to_array(), blue.to_array());

        let white = if icc.header.illuminant.y > 0.0 {
            icc.header.illuminant
        } else {
            icc.white_point.unwrap_or(white_point::D65.xyz)
        };

        let tone_curves = [
            icc.trc[0].unwrap_or_default(),
            icc.trc[1].unwrap_or_default(),
            icc.trc[2].unwrap_or_default(),
        ];
        let black = icc.black_point.unwrap_or(Xyz::new(0.0, 0.0, 0.0));

        Self::new(rgb_to_xyz, white, tone_curves, black)
    }

    /// Build from image container bytes (PNG, JPEG, or raw ICC)
    ///
    /// A missing or unparseable embedded profile degrades to the sRGB
    /// default; only [`Error::DegenerateProfile`] is surfaced.
    pub fn from_image_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_source(&mut SliceSource::new(bytes))
    }

    /// Build from any byte source (PNG, JPEG, or raw ICC)
    pub fn from_source<S: ByteSource>(src: &mut S) -> Result<Self> {
        let raw = extract_embedded_profile(src);
        if raw.is_empty() {
            return Ok(Self::srgb());
        }
        match Self::from_icc_bytes(&raw) {
            Ok(profile) => Ok(profile),
            Err(Error::DegenerateProfile) => Err(Error::DegenerateProfile),
            Err(_) => Ok(Self::srgb()),
        }
    }

    /// Build from an image file path
    ///
    /// An unreadable file degrades to the sRGB default like any other
    /// missing profile.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        match StreamSource::open(path) {
            Ok(mut src) => Self::from_source(&mut src),
            Err(_) => Ok(Self::srgb()),
        }
    }

    /// Encoded device RGB → XYZ
    pub fn to_xyz(&self, rgb: [f64; 3]) -> Xyz {
        let linear = [
            self.tone_curves[0].decode(rgb[0]),
            self.tone_curves[1].decode(rgb[1]),
            self.tone_curves[2].decode(rgb[2]),
        ];
        Xyz::from_array(self.rgb_to_xyz.multiply_vec(linear))
    }

    /// XYZ → encoded device RGB
    pub fn from_xyz(&self, xyz: Xyz) -> [f64; 3] {
        let linear = self.xyz_to_rgb.multiply_vec(xyz.to_array());
        [
            self.tone_curves[0].encode(linear[0]),
            self.tone_curves[1].encode(linear[1]),
            self.tone_curves[2].encode(linear[2]),
        ]
    }

    /// Re-express this profile under another white point
    pub fn adapted_to(&self, dst_white: Xyz, method: AdaptationMethod) -> Result<Self> {
        let dst = dst_white.normalize();
        let adapt = adaptation_matrix(self.white_point, dst, method);
        let black = Xyz::from_array(adapt.multiply_vec(self.black_point.to_array()));
        Self::new(
            adapt.multiply(&self.rgb_to_xyz),
            dst,
            self.tone_curves,
            black,
        )
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::srgb()
    }
}

fn curve_for_gamma(gamma: f64) -> ToneCurve {
    if (gamma - 1.0).abs() < 1e-9 {
        ToneCurve::Linear
    } else {
        ToneCurve::Gamma(gamma)
    }
}

fn column(m: &Matrix3x3, j: usize) -> Xyz {
    Xyz::new(m.m[0][j], m.m[1][j], m.m[2][j])
}
