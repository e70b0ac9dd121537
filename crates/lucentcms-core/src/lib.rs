//! # lucentcms - embedded color profile management
//!
//! A small, safe color-management core: it models device color profiles
//! (primaries, white point, tone curves), performs the colorimetric math
//! between chromaticities, XYZ and device RGB, and extracts and decodes
//! ICC profiles embedded in PNG and JPEG containers.
//!
//! ## Goals
//!
//! - **Safe on hostile input**: malformed or truncated profile data never
//!   panics; it degrades to a usable sRGB default
//! - **Small**: matrix/TRC profiles only — no CMYK, DeviceLink, or LUT
//!   pipelines
//! - **Honest about failure**: a non-invertible primaries matrix is the
//!   one condition always reported, never absorbed into NaNs
//!
//! ## Quick Start
//!
//! ```no_run
//! use lucentcms_core::Profile;
//!
//! // From an image file: embedded ICC profile, or sRGB if none
//! let profile = Profile::from_path("photo.jpg")?;
//!
//! // Encoded RGB to XYZ and back
//! let xyz = profile.to_xyz([0.25, 0.5, 0.75]);
//! let rgb = profile.from_xyz(xyz);
//! # Ok::<(), lucentcms_core::Error>(())
//! ```

pub mod color;
pub mod embed;
pub mod error;
pub mod icc;
pub mod math;
pub mod named;
pub mod profile;

pub use color::{Chromaticity, WhitePoint, Xyz};
pub use embed::{ByteSource, SliceSource, StreamSource, extract_embedded_profile};
pub use error::{Error, Result};
pub use icc::{IccHeader, IccProfile};
pub use math::{
    AdaptationMethod, Matrix3x3, ToneCurve, adapt_xyz, adaptation_matrix,
    primaries_to_xyz_matrix, recognize_tonemap,
};
pub use profile::Profile;
