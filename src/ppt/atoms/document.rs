//! Document-level atoms.

use crate::common::error::Result;
use crate::ppt::consts::RecordType;
use crate::ppt::records::{LengthRule, Record, RecordHeader, RecordReader, RecordSpec, VersionRule};
use crate::ppt::types::{PointStruct, RatioStruct, SlideSize, read_bool8};

/// Document-wide settings (slide size, notes size, master references).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentAtom {
    pub header: RecordHeader,
    /// Slide size in master units
    pub slide_size: PointStruct,
    /// Notes page size in master units
    pub notes_size: PointStruct,
    /// Zoom used when the presentation is shown in a web browser
    pub server_zoom: RatioStruct,
    /// Persist id of the notes master, 0 if there is none
    pub notes_master_persist_id_ref: u32,
    /// Persist id of the handout master, 0 if there is none
    pub handout_master_persist_id_ref: u32,
    pub first_slide_number: u16,
    pub slide_size_type: SlideSize,
    pub save_with_fonts: bool,
    pub omit_title_place: bool,
    pub right_to_left: bool,
    pub show_comments: bool,
}

impl Record for DocumentAtom {
    const SPEC: RecordSpec = RecordSpec::atom("DocumentAtom", RecordType::DocumentAtom)
        .with_version(VersionRule::Exactly(0x1))
        .with_length(LengthRule::Exactly(0x28));

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        Ok(Self {
            header: *header,
            slide_size: PointStruct::decode(reader)?,
            notes_size: PointStruct::decode(reader)?,
            server_zoom: RatioStruct::decode(reader)?,
            notes_master_persist_id_ref: reader.read_u32()?,
            handout_master_persist_id_ref: reader.read_u32()?,
            first_slide_number: reader.read_u16()?,
            slide_size_type: SlideSize::decode(reader)?,
            save_with_fonts: read_bool8(reader)?,
            omit_title_place: read_bool8(reader)?,
            right_to_left: read_bool8(reader)?,
            show_comments: read_bool8(reader)?,
        })
    }
}

/// Marks the end of the document container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndDocumentAtom {
    pub header: RecordHeader,
}

impl Record for EndDocumentAtom {
    const SPEC: RecordSpec = RecordSpec::atom("EndDocumentAtom", RecordType::EndDocumentAtom)
        .with_length(LengthRule::Exactly(0));

    fn decode_payload(_reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        Ok(Self { header: *header })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::ppt::records::test_support::record;

    pub(crate) fn document_atom_bytes() -> Vec<u8> {
        let mut payload = Vec::new();
        for v in [5760i32, 4320, 4320, 5760, 1, 2] {
            payload.extend_from_slice(&v.to_le_bytes());
        }
        payload.extend_from_slice(&0x0000_0007u32.to_le_bytes());
        payload.extend_from_slice(&0u32.to_le_bytes());
        payload.extend_from_slice(&1u16.to_le_bytes());
        payload.extend_from_slice(&0u16.to_le_bytes());
        payload.extend_from_slice(&[0, 0, 0, 1]);
        record(1, 0, RecordType::DocumentAtom.code(), &payload)
    }

    #[test]
    fn test_document_atom() {
        let bytes = document_atom_bytes();
        let atom = DocumentAtom::decode(&mut RecordReader::new(&bytes)).unwrap();
        assert_eq!(atom.slide_size, PointStruct { x: 5760, y: 4320 });
        assert_eq!(atom.server_zoom.numer, 1);
        assert_eq!(atom.notes_master_persist_id_ref, 7);
        assert_eq!(atom.slide_size_type, SlideSize::OnScreen);
        assert!(atom.show_comments);
        assert!(!atom.right_to_left);
    }

    #[test]
    fn test_document_atom_version_is_checked() {
        let mut bytes = document_atom_bytes();
        bytes[0] = 0x00;
        assert!(DocumentAtom::decode(&mut RecordReader::new(&bytes)).is_err());
    }

    #[test]
    fn test_document_atom_bad_boolean() {
        let mut bytes = document_atom_bytes();
        let last = bytes.len() - 1;
        bytes[last] = 2;
        let err = DocumentAtom::decode(&mut RecordReader::new(&bytes)).unwrap_err();
        assert!(err.reason().contains("neither 0 nor 1"));
    }

    #[test]
    fn test_end_document_must_be_empty() {
        let bytes = record(0, 0, RecordType::EndDocumentAtom.code(), &[]);
        assert!(EndDocumentAtom::decode(&mut RecordReader::new(&bytes)).is_ok());
        let bytes = record(0, 0, RecordType::EndDocumentAtom.code(), &[0]);
        assert!(EndDocumentAtom::decode(&mut RecordReader::new(&bytes)).is_err());
    }
}
