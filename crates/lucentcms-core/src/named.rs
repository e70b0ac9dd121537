//! Built-in named profile constants
//!
//! Two shapes of constant: profiles defined by primary chromaticities plus
//! a per-channel gamma (the common working spaces), and wide-gamut/cinema
//! profiles already expressed as absolute XYZ columns with a black point.
//! Both tables are process-wide read-only data; [`crate::Profile`] copies
//! from them on demand.

use crate::color::{Chromaticity, Xyz};

/// A named profile defined by primary and white chromaticities
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromaticityProfile {
    pub name: &'static str,
    pub white: Chromaticity,
    pub red: Chromaticity,
    pub green: Chromaticity,
    pub blue: Chromaticity,
    /// Per-channel gamma; 2.4 selects the two-segment sRGB form
    pub gamma: [f64; 3],
}

/// A named profile already expressed as absolute XYZ columns
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XyzProfile {
    pub name: &'static str,
    pub white: Xyz,
    pub red: Xyz,
    pub green: Xyz,
    pub blue: Xyz,
    pub gamma: [f64; 3],
    pub black: Xyz,
}

// Standard illuminant chromaticities used by the tables below
const WHITE_D65: Chromaticity = Chromaticity::new(0.3127, 0.3290);
const WHITE_D50: Chromaticity = Chromaticity::new(0.3457, 0.3585);
const WHITE_C: Chromaticity = Chromaticity::new(0.3101, 0.3162);
const WHITE_E: Chromaticity = Chromaticity::new(1.0 / 3.0, 1.0 / 3.0);

const fn chroma_profile(
    name: &'static str,
    white: Chromaticity,
    red: (f64, f64),
    green: (f64, f64),
    blue: (f64, f64),
    gamma: f64,
) -> ChromaticityProfile {
    ChromaticityProfile {
        name,
        white,
        red: Chromaticity::new(red.0, red.1),
        green: Chromaticity::new(green.0, green.1),
        blue: Chromaticity::new(blue.0, blue.1),
        gamma: [gamma; 3],
    }
}

pub const SRGB: ChromaticityProfile = chroma_profile(
    "sRGB",
    WHITE_D65,
    (0.64, 0.33),
    (0.30, 0.60),
    (0.15, 0.06),
    2.4,
);

pub const DISPLAY_P3: ChromaticityProfile = chroma_profile(
    "Display P3",
    WHITE_D65,
    (0.680, 0.320),
    (0.265, 0.690),
    (0.150, 0.060),
    2.4,
);

pub const ADOBE_RGB: ChromaticityProfile = chroma_profile(
    "Adobe RGB (1998)",
    WHITE_D65,
    (0.64, 0.33),
    (0.21, 0.71),
    (0.15, 0.06),
    2.2,
);

pub const APPLE_RGB: ChromaticityProfile = chroma_profile(
    "Apple RGB",
    WHITE_D65,
    (0.625, 0.340),
    (0.280, 0.595),
    (0.155, 0.070),
    1.8,
);

pub const NTSC_1953: ChromaticityProfile = chroma_profile(
    "NTSC 1953",
    WHITE_C,
    (0.67, 0.33),
    (0.21, 0.71),
    (0.14, 0.08),
    2.2,
);

pub const PAL_SECAM: ChromaticityProfile = chroma_profile(
    "PAL/SECAM",
    WHITE_D65,
    (0.64, 0.33),
    (0.29, 0.60),
    (0.15, 0.06),
    2.2,
);

pub const SMPTE_C: ChromaticityProfile = chroma_profile(
    "SMPTE-C",
    WHITE_D65,
    (0.630, 0.340),
    (0.310, 0.595),
    (0.155, 0.070),
    2.2,
);

pub const REC_709: ChromaticityProfile = chroma_profile(
    "Rec. 709",
    WHITE_D65,
    (0.64, 0.33),
    (0.30, 0.60),
    (0.15, 0.06),
    2.4,
);

pub const REC_2020: ChromaticityProfile = chroma_profile(
    "Rec. 2020",
    WHITE_D65,
    (0.708, 0.292),
    (0.170, 0.797),
    (0.131, 0.046),
    2.4,
);

pub const PROPHOTO_RGB: ChromaticityProfile = chroma_profile(
    "ProPhoto RGB",
    WHITE_D50,
    (0.7347, 0.2653),
    (0.1596, 0.8404),
    (0.0366, 0.0001),
    1.8,
);

pub const CIE_RGB: ChromaticityProfile = chroma_profile(
    "CIE RGB",
    WHITE_E,
    (0.735, 0.265),
    (0.274, 0.717),
    (0.167, 0.009),
    2.2,
);

pub const WIDE_GAMUT_RGB: ChromaticityProfile = chroma_profile(
    "Wide Gamut RGB",
    WHITE_D50,
    (0.735, 0.265),
    (0.115, 0.826),
    (0.157, 0.018),
    2.2,
);

pub const BRUCE_RGB: ChromaticityProfile = chroma_profile(
    "Bruce RGB",
    WHITE_D65,
    (0.64, 0.33),
    (0.28, 0.65),
    (0.15, 0.06),
    2.2,
);

pub const COLORMATCH_RGB: ChromaticityProfile = chroma_profile(
    "ColorMatch RGB",
    WHITE_D50,
    (0.630, 0.340),
    (0.295, 0.605),
    (0.150, 0.075),
    1.8,
);

pub const BEST_RGB: ChromaticityProfile = chroma_profile(
    "Best RGB",
    WHITE_D50,
    (0.7347, 0.2653),
    (0.2150, 0.7750),
    (0.1300, 0.0350),
    2.2,
);

pub const BETA_RGB: ChromaticityProfile = chroma_profile(
    "Beta RGB",
    WHITE_D50,
    (0.6888, 0.3112),
    (0.1986, 0.7551),
    (0.1265, 0.0352),
    2.2,
);

pub const DON_RGB_4: ChromaticityProfile = chroma_profile(
    "Don RGB 4",
    WHITE_D50,
    (0.6960, 0.2998),
    (0.2152, 0.7650),
    (0.1300, 0.0350),
    2.2,
);

pub const ECI_RGB: ChromaticityProfile = chroma_profile(
    "eciRGB v2",
    WHITE_D50,
    (0.6700, 0.3300),
    (0.2100, 0.7100),
    (0.1400, 0.0800),
    1.8,
);

/// All chromaticity-defined constants
pub const CHROMATICITY_PROFILES: [ChromaticityProfile; 18] = [
    SRGB,
    DISPLAY_P3,
    ADOBE_RGB,
    APPLE_RGB,
    NTSC_1953,
    PAL_SECAM,
    SMPTE_C,
    REC_709,
    REC_2020,
    PROPHOTO_RGB,
    CIE_RGB,
    WIDE_GAMUT_RGB,
    BRUCE_RGB,
    COLORMATCH_RGB,
    BEST_RGB,
    BETA_RGB,
    DON_RGB_4,
    ECI_RGB,
];

// XYZ columns below were derived from the published primary chromaticities
// with the white point scaled to Y = 1.

pub const DCI_P3: XyzProfile = XyzProfile {
    name: "DCI-P3",
    white: Xyz::new(0.8945868946, 1.0, 0.9544159544),
    red: Xyz::new(0.4451698156, 0.2094916779, 0.0),
    green: Xyz::new(0.2771344092, 0.7215952542, 0.0470605601),
    blue: Xyz::new(0.1722826698, 0.0689130679, 0.9073553944),
    gamma: [2.6; 3],
    black: Xyz::new(0.0, 0.0, 0.0),
};

pub const ACES_2065_1: XyzProfile = XyzProfile {
    name: "ACES 2065-1",
    white: Xyz::new(0.9526460746, 1.0, 1.0088251844),
    red: Xyz::new(0.9525523959, 0.3439664498, 0.0),
    green: Xyz::new(0.0, 0.7281660966, 0.0),
    blue: Xyz::new(0.0000936786, -0.0721325464, 1.0088251844),
    gamma: [1.0; 3],
    black: Xyz::new(0.0, 0.0, 0.0),
};

pub const ACES_CG: XyzProfile = XyzProfile {
    name: "ACEScg",
    white: Xyz::new(0.9526460746, 1.0, 1.0088251844),
    red: Xyz::new(0.6624541811, 0.2722287168, -0.0055746495),
    green: Xyz::new(0.1340042065, 0.6740817658, 0.0040607335),
    blue: Xyz::new(0.1561876870, 0.0536895174, 1.0103391003),
    gamma: [1.0; 3],
    black: Xyz::new(0.0, 0.0, 0.0),
};

/// All XYZ-defined constants
pub const XYZ_PROFILES: [XyzProfile; 3] = [DCI_P3, ACES_2065_1, ACES_CG];

/// Look up a chromaticity-defined profile by its display name
pub fn chromaticity_profile(name: &str) -> Option<&'static ChromaticityProfile> {
    CHROMATICITY_PROFILES.iter().find(|p| p.name == name)
}

/// Look up an XYZ-defined profile by its display name
pub fn xyz_profile(name: &str) -> Option<&'static XyzProfile> {
    XYZ_PROFILES.iter().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(chromaticity_profile("sRGB"), Some(&SRGB));
        assert_eq!(chromaticity_profile("Rec. 2020"), Some(&REC_2020));
        assert!(chromaticity_profile("not a profile").is_none());
        assert_eq!(xyz_profile("ACEScg"), Some(&ACES_CG));
        assert!(xyz_profile("sRGB").is_none());
    }

    #[test]
    fn test_names_unique() {
        for (i, a) in CHROMATICITY_PROFILES.iter().enumerate() {
            for b in &CHROMATICITY_PROFILES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_xyz_columns_sum_to_white() {
        for p in &XYZ_PROFILES {
            let sum = Xyz::new(
                p.red.x + p.green.x + p.blue.x,
                p.red.y + p.green.y + p.blue.y,
                p.red.z + p.green.z + p.blue.z,
            );
            assert!(sum.approx_eq(&p.white, 1e-6), "{}", p.name);
        }
    }

    #[test]
    fn test_gammas_in_range() {
        for p in &CHROMATICITY_PROFILES {
            for g in p.gamma {
                assert!((1.0..=2.6).contains(&g), "{}", p.name);
            }
        }
    }
}
