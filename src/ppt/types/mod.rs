//! Field types shared by many records.

pub mod color;
pub mod enums;
pub mod flags;
pub mod geometry;
pub mod strings;

pub use color::ColorStruct;
pub use enums::{
    InteractiveInfoAction, InteractiveInfoJump, LinkTo, Placeholder, SlideLayout, SlideSize,
    TextType,
};
pub use flags::{HeadersFootersFlags, SlideFlags, SlidePersistFlags};
pub use geometry::{PointStruct, RatioStruct, TextRange};
pub use strings::{MachineName, PrintableString, StringKind, TextString, UncPath, UrlOrPath};

use crate::common::error::{PptError, Result};
use crate::ppt::records::RecordReader;

/// Read a one-byte boolean that must be 0 or 1.
pub fn read_bool8(reader: &mut RecordReader<'_>) -> Result<bool> {
    let offset = reader.position();
    match reader.read_u8()? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(PptError::corrupted(
            offset,
            format!("boolean byte {other:#04x} is neither 0 nor 1"),
        )),
    }
}
