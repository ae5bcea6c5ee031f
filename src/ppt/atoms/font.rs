//! Font table atoms.

use crate::common::error::Result;
use crate::ppt::consts::RecordType;
use crate::ppt::records::{InstanceRule, LengthRule, Record, RecordHeader, RecordReader, RecordSpec};
use crate::ppt::types::{PrintableString, StringKind};
use bytes::Bytes;

/// Byte size of the face name buffer (32 UTF-16 code units).
const FACE_NAME_SIZE: usize = 64;

/// Bit fields of the second flag byte of a [`FontEntityAtom`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FontTypeFlags {
    pub raster: bool,
    pub device: bool,
    pub truetype: bool,
    /// Font must not be substituted
    pub no_substitution: bool,
    /// Ignored
    pub reserved: u8,
}

/// One font of the document's font table. The instance is the font index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontEntityAtom {
    pub header: RecordHeader,
    pub face_name: PrintableString,
    pub charset: u8,
    /// Embedded data holds only the glyphs in use
    pub embed_subsetted: bool,
    /// Ignored
    pub reserved: u8,
    pub font_type: FontTypeFlags,
    pub pitch_and_family: u8,
}

impl FontEntityAtom {
    /// Index of the font in the table.
    #[inline]
    pub fn index(&self) -> u16 {
        self.header.instance
    }
}

impl Record for FontEntityAtom {
    const SPEC: RecordSpec = RecordSpec::atom("FontEntityAtom", RecordType::FontEntityAtom)
        .with_instance(InstanceRule::Any)
        .with_length(LengthRule::Exactly(0x44));

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        let face_name = PrintableString::decode_terminated(reader, FACE_NAME_SIZE)?;
        let charset = reader.read_u8()?;

        let mut embed = reader.read_bits::<u8>()?;
        let embed_subsetted = embed.read_bool();
        let reserved = embed.read(7) as u8;

        let mut bits = reader.read_bits::<u8>()?;
        let font_type = FontTypeFlags {
            raster: bits.read_bool(),
            device: bits.read_bool(),
            truetype: bits.read_bool(),
            no_substitution: bits.read_bool(),
            reserved: bits.read(4) as u8,
        };

        Ok(Self {
            header: *header,
            face_name,
            charset,
            embed_subsetted,
            reserved,
            font_type,
            pitch_and_family: reader.read_u8()?,
        })
    }
}

/// Embedded font data; the instance selects regular, bold, italic or bold italic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontEmbedDataBlob {
    pub header: RecordHeader,
    pub data: Bytes,
}

impl Record for FontEmbedDataBlob {
    const SPEC: RecordSpec = RecordSpec::atom("FontEmbedDataBlob", RecordType::FontEmbedDataBlob)
        .with_instance(InstanceRule::Range(0, 3));

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        let data = reader.read_bytes(header.length as usize)?;
        Ok(Self {
            header: *header,
            data: Bytes::copy_from_slice(data),
        })
    }
}
