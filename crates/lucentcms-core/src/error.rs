//! Error types for lucentcms

use thiserror::Error;

/// Result type for lucentcms operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lucentcms operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The byte source could not be opened or read
    #[error("source unreadable: {0}")]
    SourceUnreadable(#[from] std::io::Error),

    /// No embedded-profile marker (PNG iCCP / JPEG APP2) was located
    #[error("no embedded profile marker found")]
    MarkerNotFound,

    /// The zlib stream inside a PNG iCCP chunk could not be inflated
    #[error("profile decompression failed: {0}")]
    DecompressionFailed(String),

    /// The RGB→XYZ primaries matrix is not invertible (colinear primaries)
    #[error("degenerate profile: primaries matrix is not invertible")]
    DegenerateProfile,

    /// Profile data ended before a declared field
    #[error("profile data truncated: need {expected} bytes, have {actual}")]
    Truncated { expected: usize, actual: usize },
}
