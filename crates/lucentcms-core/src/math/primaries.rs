//! Primaries-matrix construction
//!
//! Builds the 3x3 RGB→XYZ matrix from the chromaticities of the three
//! primaries and the white point, following the standard derivation:
//! solve for per-primary luminance scales so that RGB (1,1,1) maps to the
//! white point's XYZ at Y = 1.

use crate::color::Chromaticity;
use crate::error::{Error, Result};
use crate::math::Matrix3x3;

/// Build the RGB→XYZ matrix for a set of primaries and a white point
///
/// Colinear primaries make the raw chromaticity matrix singular; that is
/// surfaced as [`Error::DegenerateProfile`] rather than a matrix of NaNs.
pub fn primaries_to_xyz_matrix(
    white: Chromaticity,
    red: Chromaticity,
    green: Chromaticity,
    blue: Chromaticity,
) -> Result<Matrix3x3> {
    let raw = Matrix3x3::from_columns(
        red.to_xyz().to_array(),
        green.to_xyz().to_array(),
        blue.to_xyz().to_array(),
    );

    let raw_inv = raw.inverse().ok_or(Error::DegenerateProfile)?;
    let scales = raw_inv.multiply_vec(white.to_white_xyz().to_array());

    Ok(raw.scale_columns(scales))
}
