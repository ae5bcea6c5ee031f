//! The 8-byte record header.

use crate::common::binary::ByteCursor;
use crate::common::error::Result;
use crate::ppt::consts::{CONTAINER_VERSION, RecordType};

/// Header preceding every record payload.
///
/// Layout (little-endian):
///
/// | bytes | field                                              |
/// |-------|----------------------------------------------------|
/// | 0-1   | `recVer` (bits 0-3) and `recInstance` (bits 4-15)  |
/// | 2-3   | record type code                                   |
/// | 4-7   | payload length in bytes                            |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordHeader {
    /// Version nibble, `0xF` for containers
    pub version: u8,
    /// 12-bit instance number
    pub instance: u16,
    /// Mapped record type, [`RecordType::Unknown`] for unmapped codes
    pub record_type: RecordType,
    /// Type code exactly as stored
    pub raw_type: u16,
    /// Payload length in bytes
    pub length: u32,
}

impl RecordHeader {
    /// Decode a header at the cursor position.
    ///
    /// Unmapped type codes are not an error: they decode to
    /// [`RecordType::Unknown`] with the code preserved in `raw_type`.
    pub fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        // On-disk layout: version in the low nibble, instance in the high 12 bits.
        let mut bits = cursor.read_bits::<u16>()?;
        let version = bits.read(4) as u8;
        let instance = bits.read(12) as u16;
        let raw_type = cursor.read_u16()?;
        let length = cursor.read_u32()?;

        Ok(Self {
            version,
            instance,
            record_type: RecordType::from_code(raw_type),
            raw_type,
            length,
        })
    }

    /// `true` if the version nibble marks a container.
    #[inline]
    pub fn is_container(&self) -> bool {
        self.version == CONTAINER_VERSION
    }

    /// `true` if the type code is in the known table.
    #[inline]
    pub fn is_known(&self) -> bool {
        self.record_type.is_known()
    }
}
