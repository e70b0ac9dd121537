//! ICC profile container decoding
//!
//! A byte-cursor decoder for the tagged binary profile format: the
//! 128-byte header, the tag directory, and the payload types the
//! color-management core consumes (XYZ triples, tone curves, text).

pub mod cursor;
pub mod header;
pub mod parser;
pub mod tags;

pub use cursor::Cursor;
pub use header::{DateTime, IccHeader, RenderingIntent};
pub use parser::IccProfile;
pub use tags::{TagEntry, TagSignature};
