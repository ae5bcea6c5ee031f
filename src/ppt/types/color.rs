//! Colour values.

use crate::common::error::Result;
use crate::ppt::records::RecordReader;

/// An RGB colour followed by one unused byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ColorStruct {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    /// Ignored
    pub unused: u8,
}

impl ColorStruct {
    pub fn decode(reader: &mut RecordReader<'_>) -> Result<Self> {
        let bytes = reader.read_bytes(4)?;
        Ok(Self {
            red: bytes[0],
            green: bytes[1],
            blue: bytes[2],
            unused: bytes[3],
        })
    }

    /// `0xRRGGBB`
    #[inline]
    pub fn rgb(&self) -> u32 {
        (u32::from(self.red) << 16) | (u32::from(self.green) << 8) | u32::from(self.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb() {
        let bytes = [0x12, 0x34, 0x56, 0xFF];
        let color = ColorStruct::decode(&mut RecordReader::new(&bytes)).unwrap();
        assert_eq!(color.rgb(), 0x12_3456);
        assert_eq!(color.unused, 0xFF);
    }
}
