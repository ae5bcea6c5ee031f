//! Points, ratios and text ranges.

use crate::common::error::{PptError, Result};
use crate::ppt::records::RecordReader;

/// A point in master units (1/576 inch).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PointStruct {
    pub x: i32,
    pub y: i32,
}

impl PointStruct {
    pub fn decode(reader: &mut RecordReader<'_>) -> Result<Self> {
        Ok(Self {
            x: reader.read_i32()?,
            y: reader.read_i32()?,
        })
    }
}

/// A strictly positive fraction, such as a zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RatioStruct {
    pub numer: i32,
    pub denom: i32,
}

impl RatioStruct {
    pub fn decode(reader: &mut RecordReader<'_>) -> Result<Self> {
        let offset = reader.position();
        let numer = reader.read_i32()?;
        let denom = reader.read_i32()?;
        if numer <= 0 || denom <= 0 {
            return Err(PptError::corrupted(
                offset,
                format!("ratio {numer}/{denom} is not positive"),
            ));
        }
        Ok(Self { numer, denom })
    }

    #[inline]
    pub fn value(&self) -> f64 {
        f64::from(self.numer) / f64::from(self.denom)
    }
}

/// A range of character positions within a text body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TextRange {
    pub begin: i32,
    pub end: i32,
}

impl TextRange {
    pub fn decode(reader: &mut RecordReader<'_>) -> Result<Self> {
        let offset = reader.position();
        let begin = reader.read_i32()?;
        let end = reader.read_i32()?;
        if begin < 0 || end < begin {
            return Err(PptError::corrupted(
                offset,
                format!("invalid text range {begin}..{end}"),
            ));
        }
        Ok(Self { begin, end })
    }

    #[inline]
    pub fn len(&self) -> usize {
        (self.end - self.begin) as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ppt::records::test_support::u32s;

    #[test]
    fn test_ratio_must_be_positive() {
        let bytes = u32s(&[1, 2]);
        let ratio = RatioStruct::decode(&mut RecordReader::new(&bytes)).unwrap();
        assert!((ratio.value() - 0.5).abs() < f64::EPSILON);

        let bytes = u32s(&[1, 0]);
        assert!(RatioStruct::decode(&mut RecordReader::new(&bytes)).is_err());
    }

    #[test]
    fn test_text_range() {
        let bytes = u32s(&[3, 7]);
        assert_eq!(TextRange::decode(&mut RecordReader::new(&bytes)).unwrap().len(), 4);
        let bytes = u32s(&[7, 3]);
        assert!(TextRange::decode(&mut RecordReader::new(&bytes)).is_err());
    }
}
