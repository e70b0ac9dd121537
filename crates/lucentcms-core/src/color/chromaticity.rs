//! CIE 1931 chromaticity coordinates
//!
//! A chromaticity identifies hue and saturation independent of luminance.
//! Built-in named profiles specify their primaries and white points as
//! chromaticities; profile assembly lifts them to XYZ.

use crate::color::Xyz;

/// A CIE 1931 (x, y) chromaticity coordinate
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Chromaticity {
    pub x: f64,
    pub y: f64,
}

impl Chromaticity {
    /// Create a new chromaticity
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Lift to unnormalized tristimulus values (x, y, 1-x-y)
    ///
    /// The result is a direction in XYZ space, not a color at a specific
    /// luminance. Use [`to_white_xyz`](Self::to_white_xyz) for Y = 1.
    #[inline]
    pub fn to_xyz(&self) -> Xyz {
        Xyz::new(self.x, self.y, 1.0 - self.x - self.y)
    }

    /// Lift to XYZ at luminance Y = 1.0
    #[inline]
    pub fn to_white_xyz(&self) -> Xyz {
        if self.y > 0.0 {
            Xyz::new(self.x / self.y, 1.0, (1.0 - self.x - self.y) / self.y)
        } else {
            Xyz::new(0.0, 0.0, 0.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_xyz() {
        let c = Chromaticity::new(0.3127, 0.3290);
        let xyz = c.to_xyz();
        assert!((xyz.x - 0.3127).abs() < 1e-12);
        assert!((xyz.y - 0.3290).abs() < 1e-12);
        assert!((xyz.z - (1.0 - 0.3127 - 0.3290)).abs() < 1e-12);
    }

    #[test]
    fn test_d65_white_xyz() {
        // D65 chromaticity lifts to the familiar (0.9505, 1.0, 1.0890)
        let d65 = Chromaticity::new(0.3127, 0.3290);
        let white = d65.to_white_xyz();
        assert!((white.x - 0.9505).abs() < 1e-3);
        assert!((white.y - 1.0).abs() < 1e-12);
        assert!((white.z - 1.0890).abs() < 1e-3);
    }

    #[test]
    fn test_degenerate_white() {
        let c = Chromaticity::new(0.5, 0.0);
        assert_eq!(c.to_white_xyz(), Xyz::new(0.0, 0.0, 0.0));
    }
}
