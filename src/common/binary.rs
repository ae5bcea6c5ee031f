//! Binary cursor over little-endian record data.
//!
//! Every multi-byte value in a PowerPoint binary stream is little-endian. The
//! [`ByteCursor`] reads scalars through zerocopy's byte-order types so no value
//! is ever reinterpreted in native endianness, and [`BitReader`] splits an
//! integer into bit fields starting from the least significant bit.

use crate::common::error::{PptError, Result};
use zerocopy::{FromBytes, I16, I32, LE, U16, U32};

/// A positioned, forward reader over a borrowed byte buffer.
///
/// The position can be saved and restored freely, which is how record headers
/// are peeked without being consumed.
///
/// # Examples
///
/// ```
/// use ppt_records::common::binary::ByteCursor;
/// let data = [0x34, 0x12, 0x78, 0x56, 0x34, 0x12];
/// let mut cursor = ByteCursor::new(&data);
/// assert_eq!(cursor.read_u16().unwrap(), 0x1234);
/// assert_eq!(cursor.read_u32().unwrap(), 0x1234_5678);
/// assert_eq!(cursor.position(), 6);
/// assert!(cursor.read_u8().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor positioned at the start of `data`.
    #[inline]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current absolute position.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move to an absolute position.
    ///
    /// Positions past the end are allowed; the next read fails instead.
    #[inline]
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// Total length of the underlying buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` if the underlying buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of bytes between the position and the end of the buffer.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    fn take(&mut self, count: usize) -> Result<&'a [u8]> {
        let bytes = self.peek_bytes(count)?;
        self.pos += count;
        Ok(bytes)
    }

    /// Borrow the next `count` bytes without advancing.
    pub fn peek_bytes(&self, count: usize) -> Result<&'a [u8]> {
        self.pos
            .checked_add(count)
            .and_then(|end| self.data.get(self.pos..end))
            .ok_or_else(|| {
                PptError::corrupted(
                    self.pos,
                    format!(
                        "unexpected end of data: need {} bytes, {} available",
                        count,
                        self.remaining()
                    ),
                )
            })
    }

    /// Read `count` raw bytes.
    #[inline]
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        self.take(count)
    }

    /// Advance past `count` bytes.
    #[inline]
    pub fn skip(&mut self, count: usize) -> Result<()> {
        self.take(count).map(|_| ())
    }

    /// Read a fixed-layout value directly from the next `size_of::<T>()` bytes.
    ///
    /// `T` should be built from zerocopy byte-order types so that the layout
    /// is endian-independent.
    pub fn read_struct<T: FromBytes>(&mut self) -> Result<T> {
        let start = self.pos;
        let bytes = self.take(std::mem::size_of::<T>())?;
        T::read_from_bytes(bytes)
            .map_err(|_| PptError::corrupted(start, "fixed-layout read size mismatch"))
    }

    /// Read an unsigned byte.
    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    /// Read a little-endian u16.
    #[inline]
    pub fn read_u16(&mut self) -> Result<u16> {
        self.read_struct::<U16<LE>>().map(|v| v.get())
    }

    /// Read a little-endian i16.
    #[inline]
    pub fn read_i16(&mut self) -> Result<i16> {
        self.read_struct::<I16<LE>>().map(|v| v.get())
    }

    /// Read a little-endian u32.
    #[inline]
    pub fn read_u32(&mut self) -> Result<u32> {
        self.read_struct::<U32<LE>>().map(|v| v.get())
    }

    /// Read a little-endian i32.
    #[inline]
    pub fn read_i32(&mut self) -> Result<i32> {
        self.read_struct::<I32<LE>>().map(|v| v.get())
    }

    /// Read an integer of type `T` and expose it as a sequence of bit fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use ppt_records::common::binary::ByteCursor;
    /// let data = [0b0000_0011];
    /// let mut cursor = ByteCursor::new(&data);
    /// let mut bits = cursor.read_bits::<u8>().unwrap();
    /// assert!(bits.read_bool());
    /// assert!(bits.read_bool());
    /// assert_eq!(bits.read(6), 0);
    /// ```
    #[inline]
    pub fn read_bits<T: BitWord>(&mut self) -> Result<BitReader> {
        T::read_word(self).map(BitReader::new)
    }
}

/// Integer widths that can back a [`BitReader`].
pub trait BitWord: Copy + Into<u64> {
    /// Width of the word in bits.
    const BITS: u32;

    /// Read one little-endian word from the cursor.
    fn read_word(cursor: &mut ByteCursor<'_>) -> Result<Self>;
}

impl BitWord for u8 {
    const BITS: u32 = 8;

    fn read_word(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        cursor.read_u8()
    }
}

impl BitWord for u16 {
    const BITS: u32 = 16;

    fn read_word(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        cursor.read_u16()
    }
}

impl BitWord for u32 {
    const BITS: u32 = 32;

    fn read_word(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        cursor.read_u32()
    }
}

/// Sequential bit-field extractor over one integer word, low bit first.
#[derive(Debug, Clone, Copy)]
pub struct BitReader {
    value: u64,
    width: u32,
    offset: u32,
}

impl BitReader {
    /// Wrap an already-read word.
    #[inline]
    pub fn new<T: BitWord>(word: T) -> Self {
        Self {
            value: word.into(),
            width: T::BITS,
            offset: 0,
        }
    }

    /// Take the next `count` bits (at most 32).
    ///
    /// Reading past the width of the word yields zero bits.
    pub fn read(&mut self, count: u32) -> u32 {
        debug_assert!(count <= 32, "bit field wider than 32 bits");
        let count = count.min(32).min(self.remaining());
        if count == 0 {
            return 0;
        }
        let mask = (1u64 << count) - 1;
        let bits = (self.value >> self.offset) & mask;
        self.offset += count;
        bits as u32
    }

    /// Take the next bit as a flag.
    #[inline]
    pub fn read_bool(&mut self) -> bool {
        self.read(1) != 0
    }

    /// Bits not yet consumed.
    #[inline]
    pub fn remaining(&self) -> u32 {
        self.width - self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_scalars() {
        let data = [
            0xFF, 0xFF, // i16 -1
            0x78, 0x56, 0x34, 0x12, // u32
            0xFE, 0xFF, 0xFF, 0xFF, // i32 -2
        ];
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.read_i16().unwrap(), -1);
        assert_eq!(cursor.read_u32().unwrap(), 0x1234_5678);
        assert_eq!(cursor.read_i32().unwrap(), -2);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_read_past_end_reports_position() {
        let data = [0x01, 0x02, 0x03];
        let mut cursor = ByteCursor::new(&data);
        cursor.skip(2).unwrap();
        let err = cursor.read_u16().unwrap_err();
        assert_eq!(err.offset(), 2);
        // A failed read does not move the cursor.
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_peek_does_not_advance() {
        let data = [0x0F, 0x00, 0xE8, 0x03];
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.peek_bytes(2).unwrap(), &[0x0F, 0x00]);
        assert_eq!(cursor.position(), 0);
        cursor.set_position(2);
        assert_eq!(cursor.read_u16().unwrap(), 0x03E8);
    }

    #[test]
    fn test_bit_reader_low_bit_first() {
        let mut bits = BitReader::new(0xABCD_u16);
        assert_eq!(bits.read(4), 0xD);
        assert_eq!(bits.read(12), 0xABC);
        assert_eq!(bits.remaining(), 0);
        assert_eq!(bits.read(3), 0);
    }

    #[test]
    fn test_bit_reader_u32_split() {
        // 20-bit id followed by 12-bit count
        let word = (3u32 << 20) | 0x000F_FFFF;
        let mut bits = BitReader::new(word);
        assert_eq!(bits.read(20), 0xF_FFFF);
        assert_eq!(bits.read(12), 3);
    }
}
