//! Chromatic Adaptation Transforms
//!
//! Chromatic adaptation transforms re-express colors from one white point
//! under another. The transform is built from a fixed cone-response matrix
//! C and its precomputed inverse:
//!
//! `M = C⁻¹ · diag(C·dst_white / C·src_white) · C`
//!
//! References:
//! - ICC.1:2022 Annex E
//! - Lindbloom: http://www.brucelindbloom.com/index.html?Eqn_ChromAdapt.html

use crate::color::Xyz;
use crate::math::Matrix3x3;

/// Chromatic adaptation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdaptationMethod {
    /// Bradford adaptation (ICC default, recommended)
    #[default]
    Bradford,
    /// Von Kries adaptation
    VonKries,
    /// XYZ scaling (identity cone response; simple but less accurate)
    XyzScaling,
}

impl AdaptationMethod {
    /// All methods, for exhaustive testing
    pub const ALL: [AdaptationMethod; 3] = [
        AdaptationMethod::Bradford,
        AdaptationMethod::VonKries,
        AdaptationMethod::XyzScaling,
    ];
}

/// Bradford matrix: XYZ → cone response
const BRADFORD_XYZ_TO_LMS: Matrix3x3 = Matrix3x3::new([
    [0.8951000, 0.2664000, -0.1614000],
    [-0.7502000, 1.7135000, 0.0367000],
    [0.0389000, -0.0685000, 1.0296000],
]);

/// Bradford matrix: cone response → XYZ (precomputed inverse)
const BRADFORD_LMS_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.9869929, -0.1470543, 0.1599627],
    [0.4323053, 0.5183603, 0.0492912],
    [-0.0085287, 0.0400428, 0.9684867],
]);

/// Von Kries matrix: XYZ → cone response
const VON_KRIES_XYZ_TO_LMS: Matrix3x3 = Matrix3x3::new([
    [0.4002400, 0.7076000, -0.0808100],
    [-0.2263000, 1.1653200, 0.0457000],
    [0.0000000, 0.0000000, 0.9182200],
]);

/// Von Kries matrix: cone response → XYZ (precomputed inverse)
const VON_KRIES_LMS_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [1.8599364, -1.1293816, 0.2198974],
    [0.3611914, 0.6388125, -0.0000064],
    [0.0000000, 0.0000000, 1.0890636],
]);

fn cone_matrix(method: AdaptationMethod) -> Matrix3x3 {
    match method {
        AdaptationMethod::Bradford => BRADFORD_XYZ_TO_LMS,
        AdaptationMethod::VonKries => VON_KRIES_XYZ_TO_LMS,
        AdaptationMethod::XyzScaling => Matrix3x3::identity(),
    }
}

fn cone_matrix_inverse(method: AdaptationMethod) -> Matrix3x3 {
    match method {
        AdaptationMethod::Bradford => BRADFORD_LMS_TO_XYZ,
        AdaptationMethod::VonKries => VON_KRIES_LMS_TO_XYZ,
        AdaptationMethod::XyzScaling => Matrix3x3::identity(),
    }
}

/// Compute the adaptation matrix from one white point to another
///
/// The returned matrix M satisfies `XYZ_dst = M × XYZ_src`; in particular
/// `M × src_white ≈ dst_white`, and adapting a white point to itself
/// yields the identity matrix (within floating tolerance).
pub fn adaptation_matrix(src_white: Xyz, dst_white: Xyz, method: AdaptationMethod) -> Matrix3x3 {
    let cone = cone_matrix(method);
    let cone_inv = cone_matrix_inverse(method);

    let src_lms = cone.multiply_vec(src_white.to_array());
    let dst_lms = cone.multiply_vec(dst_white.to_array());

    let mut ratios = [1.0; 3];
    for i in 0..3 {
        if src_lms[i].abs() > 1e-10 {
            ratios[i] = dst_lms[i] / src_lms[i];
        }
    }
    let scale = Matrix3x3::diagonal(ratios[0], ratios[1], ratios[2]);

    cone_inv.multiply(&scale.multiply(&cone))
}

/// Adapt an XYZ color from one white point to another
#[inline]
pub fn adapt_xyz(xyz: Xyz, src_white: Xyz, dst_white: Xyz, method: AdaptationMethod) -> Xyz {
    let matrix = adaptation_matrix(src_white, dst_white, method);
    Xyz::from_array(matrix.multiply_vec(xyz.to_array()))
}
