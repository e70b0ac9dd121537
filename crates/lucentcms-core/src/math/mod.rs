//! Colorimetric math
//!
//! 3x3 matrix operations, primaries-matrix construction, chromatic
//! adaptation transforms, and tone-curve application and recognition.

pub mod chromatic_adaptation;
pub mod matrix;
pub mod primaries;
pub mod tonecurve;

pub use chromatic_adaptation::{AdaptationMethod, adapt_xyz, adaptation_matrix};
pub use matrix::Matrix3x3;
pub use primaries::primaries_to_xyz_matrix;
pub use tonecurve::{ToneCurve, inv_tonemap, recognize_tonemap, tonemap};
