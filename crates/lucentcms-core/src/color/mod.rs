//! Color value types
//!
//! CIE chromaticity coordinates, XYZ tristimulus values, and the standard
//! illuminant white points.

pub mod chromaticity;
pub mod white_point;
pub mod xyz;

pub use chromaticity::Chromaticity;
pub use white_point::WhitePoint;
pub use xyz::Xyz;
