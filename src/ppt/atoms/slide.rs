//! Slide, notes and slide-persist atoms.

use crate::common::error::Result;
use crate::ppt::consts::RecordType;
use crate::ppt::records::{LengthRule, Record, RecordHeader, RecordReader, RecordSpec, VersionRule};
use crate::ppt::types::{Placeholder, SlideFlags, SlideLayout, SlidePersistFlags};

/// Layout and master references of a slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideAtom {
    pub header: RecordHeader,
    pub layout: SlideLayout,
    pub placeholders: [Placeholder; 8],
    /// Slide id of the master, 0 for masters themselves
    pub master_id_ref: u32,
    /// Slide id of the notes page, 0 if there is none
    pub notes_id_ref: u32,
    pub flags: SlideFlags,
    pub unused: u16,
}

impl Record for SlideAtom {
    const SPEC: RecordSpec = RecordSpec::atom("SlideAtom", RecordType::SlideAtom)
        .with_version(VersionRule::Exactly(0x2))
        .with_length(LengthRule::Exactly(0x18));

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        let layout = SlideLayout::decode(reader)?;
        let mut placeholders = [Placeholder::None; 8];
        for slot in &mut placeholders {
            *slot = Placeholder::decode(reader)?;
        }
        Ok(Self {
            header: *header,
            layout,
            placeholders,
            master_id_ref: reader.read_u32()?,
            notes_id_ref: reader.read_u32()?,
            flags: SlideFlags::from_bits_retain(reader.read_u16()?),
            unused: reader.read_u16()?,
        })
    }
}

/// Identifies the slide a notes page belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesAtom {
    pub header: RecordHeader,
    pub slide_id_ref: u32,
    pub flags: SlideFlags,
    pub unused: u16,
}

impl Record for NotesAtom {
    const SPEC: RecordSpec = RecordSpec::atom("NotesAtom", RecordType::NotesAtom)
        .with_version(VersionRule::Exactly(0x1))
        .with_length(LengthRule::Exactly(0x8));

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        Ok(Self {
            header: *header,
            slide_id_ref: reader.read_u32()?,
            flags: SlideFlags::from_bits_retain(reader.read_u16()?),
            unused: reader.read_u16()?,
        })
    }
}

/// Entry of a slide list naming a slide, master or notes page by persist id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlidePersistAtom {
    pub header: RecordHeader,
    /// Persist id of the referenced container
    pub persist_id_ref: u32,
    pub flags: SlidePersistFlags,
    /// Number of placeholder text bodies that follow in the slide list
    pub text_count: i32,
    pub slide_id: u32,
    pub reserved: u32,
}

impl Record for SlidePersistAtom {
    const SPEC: RecordSpec = RecordSpec::atom("SlidePersistAtom", RecordType::SlidePersistAtom)
        .with_length(LengthRule::Exactly(0x14));

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        Ok(Self {
            header: *header,
            persist_id_ref: reader.read_u32()?,
            flags: SlidePersistFlags::from_bits_retain(reader.read_u32()?),
            text_count: reader.read_i32()?,
            slide_id: reader.read_u32()?,
            reserved: reader.read_u32()?,
        })
    }
}
