//! Slide and notes containers.
//!
//! The drawing of a slide is an OfficeArt tree and is kept as a raw record.

use crate::common::error::Result;
use crate::ppt::atoms::{CString, ColorSchemeAtom, NotesAtom, SCHEME_INSTANCE_SLIDE, SlideAtom};
use crate::ppt::consts::RecordType;
use crate::ppt::records::{RawRecord, Record, RecordHeader, RecordReader, RecordSpec, TypeDispatch};
use crate::ppt::types::PrintableString;

use super::headers_footers::{HF_INSTANCE_PER_SLIDE, HeadersFootersContainer};
use super::prog_tags::ProgTagsContainer;

/// Instance of the slide name string.
const SLIDE_NAME_INSTANCE: u16 = 0x003;

const DRAWING: RecordSpec = RecordSpec::container("DrawingContainer", RecordType::Drawing);
const SLIDE_SHOW_SLIDE_INFO: RecordSpec =
    RecordSpec::atom("SlideShowSlideInfoAtom", RecordType::SlideShowSlideInfoAtom);
const SLIDE_SYNC_INFO: RecordSpec = RecordSpec::container(
    "RoundTripSlideSyncInfo12Container",
    RecordType::RoundTripSlideSyncInfo12,
);

/// Round-trip records written by PowerPoint 2007 and later for lossless
/// conversion back to the XML format.
const ROUND_TRIP: TypeDispatch<RawRecord> = TypeDispatch {
    name: "round-trip records",
    cases: &[
        (RecordType::RoundTripTheme12Atom, RawRecord::decode),
        (RecordType::RoundTripColorMapping12Atom, RawRecord::decode),
        (RecordType::RoundTripOriginalMainMasterId12Atom, RawRecord::decode),
        (RecordType::RoundTripCompositeMasterId12Atom, RawRecord::decode),
        (RecordType::RoundTripContentMasterInfo12Atom, RawRecord::decode),
        (RecordType::RoundTripContentMasterId12Atom, RawRecord::decode),
        (RecordType::RoundTripAnimationAtom12Atom, RawRecord::decode),
        (RecordType::RoundTripAnimationHashAtom12Atom, RawRecord::decode),
        (RecordType::RoundTripHeaderFooterDefaults12Atom, RawRecord::decode),
        (RecordType::RoundTripNotesMasterTextStyles12Atom, RawRecord::decode),
    ],
    unknown: Some(RawRecord::decode),
};

/// A slide or title master.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideContainer {
    pub header: RecordHeader,
    pub atom: SlideAtom,
    /// Transition and timing, kept as stored
    pub slide_show_info: Option<RawRecord>,
    pub headers_footers: Option<HeadersFootersContainer>,
    pub slide_sync_info: Option<RawRecord>,
    pub drawing: RawRecord,
    pub color_scheme: ColorSchemeAtom,
    pub name: Option<CString<PrintableString>>,
    pub prog_tags: Option<ProgTagsContainer>,
    pub round_trip: Vec<RawRecord>,
}

impl Record for SlideContainer {
    const SPEC: RecordSpec = RecordSpec::container("SlideContainer", RecordType::Slide);

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        Ok(Self {
            header: *header,
            atom: SlideAtom::decode(reader)?,
            slide_show_info: RawRecord::optional(reader, &SLIDE_SHOW_SLIDE_INFO)?,
            headers_footers: HeadersFootersContainer::optional(reader, HF_INSTANCE_PER_SLIDE)?,
            slide_sync_info: RawRecord::optional(reader, &SLIDE_SYNC_INFO)?,
            drawing: RawRecord::decode_with(reader, &DRAWING)?,
            color_scheme: ColorSchemeAtom::decode_instance(reader, SCHEME_INSTANCE_SLIDE)?,
            name: CString::optional(reader, SLIDE_NAME_INSTANCE, None)?,
            prog_tags: reader.read_optional::<ProgTagsContainer>()?,
            round_trip: ROUND_TRIP.decode_all(reader)?,
        })
    }
}

/// A notes page, or the notes master.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesContainer {
    pub header: RecordHeader,
    pub atom: NotesAtom,
    pub drawing: RawRecord,
    pub color_scheme: ColorSchemeAtom,
    pub name: Option<CString<PrintableString>>,
    pub prog_tags: Option<ProgTagsContainer>,
    pub round_trip: Vec<RawRecord>,
}

impl Record for NotesContainer {
    const SPEC: RecordSpec = RecordSpec::container("NotesContainer", RecordType::Notes);

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        Ok(Self {
            header: *header,
            atom: NotesAtom::decode(reader)?,
            drawing: RawRecord::decode_with(reader, &DRAWING)?,
            color_scheme: ColorSchemeAtom::decode_instance(reader, SCHEME_INSTANCE_SLIDE)?,
            name: CString::optional(reader, SLIDE_NAME_INSTANCE, None)?,
            prog_tags: reader.read_optional::<ProgTagsContainer>()?,
            round_trip: ROUND_TRIP.decode_all(reader)?,
        })
    }
}

/// An entry of the master list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Master {
    /// Main master, kept as stored
    Main(RawRecord),
    Title(SlideContainer),
}

const MAIN_MASTER: RecordSpec =
    RecordSpec::container("MainMasterContainer", RecordType::MainMaster);

impl Master {
    const DISPATCH: TypeDispatch<Self> = TypeDispatch {
        name: "master",
        cases: &[
            (RecordType::MainMaster, |r| RawRecord::decode_with(r, &MAIN_MASTER).map(Self::Main)),
            (RecordType::Slide, |r| SlideContainer::decode(r).map(Self::Title)),
        ],
        unknown: None,
    };

    pub fn decode(reader: &mut RecordReader<'_>) -> Result<Self> {
        Self::DISPATCH.decode(reader)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::ppt::atoms::scheme::tests::scheme_bytes;
    use crate::ppt::atoms::slide::tests::slide_atom_bytes;
    use crate::ppt::containers::headers_footers::tests::headers_footers_bytes;
    use crate::ppt::containers::prog_tags::tests::prog_tags_bytes;
    use crate::ppt::records::test_support::{container, cstring, record};

    pub(crate) fn drawing_bytes() -> Vec<u8> {
        record(0xF, 0, RecordType::Drawing.code(), &[0x0F, 0x00, 0x02, 0xF0, 0, 0, 0, 0])
    }

    pub(crate) fn slide_bytes(master_id: u32) -> Vec<u8> {
        container(
            RecordType::Slide,
            0,
            &[slide_atom_bytes(master_id), drawing_bytes(), scheme_bytes(SCHEME_INSTANCE_SLIDE)],
        )
    }

    pub(crate) fn notes_bytes(slide_id: u32) -> Vec<u8> {
        let mut payload = slide_id.to_le_bytes().to_vec();
        payload.extend_from_slice(&[0x01, 0x00, 0x00, 0x00]);
        let atom = record(1, 0, RecordType::NotesAtom.code(), &payload);
        container(
            RecordType::Notes,
            0,
            &[atom, drawing_bytes(), scheme_bytes(SCHEME_INSTANCE_SLIDE)],
        )
    }

    #[test]
    fn test_minimal_slide() {
        let bytes = slide_bytes(0x8000_0000);
        let slide = SlideContainer::decode(&mut RecordReader::new(&bytes)).unwrap();
        assert_eq!(slide.atom.master_id_ref, 0x8000_0000);
        assert!(slide.slide_show_info.is_none());
        assert!(slide.headers_footers.is_none());
        assert_eq!(slide.drawing.payload.len(), 8);
        assert!(slide.name.is_none());
        assert!(slide.round_trip.is_empty());
    }

    #[test]
    fn test_full_slide() {
        let bytes = container(
            RecordType::Slide,
            0,
            &[
                slide_atom_bytes(0x8000_0000),
                record(0, 0, RecordType::SlideShowSlideInfoAtom.code(), &[0; 16]),
                headers_footers_bytes(HF_INSTANCE_PER_SLIDE, "Draft"),
                drawing_bytes(),
                scheme_bytes(SCHEME_INSTANCE_SLIDE),
                cstring(SLIDE_NAME_INSTANCE, "Agenda"),
                prog_tags_bytes(),
                record(0, 0, RecordType::RoundTripTheme12Atom.code(), &[1, 2, 3]),
                record(0, 0, 0x7B7B, &[4]),
            ],
        );
        let slide = SlideContainer::decode(&mut RecordReader::new(&bytes)).unwrap();
        assert!(slide.slide_show_info.is_some());
        assert!(slide.headers_footers.is_some());
        assert_eq!(slide.name.as_ref().map(CString::as_str), Some("Agenda"));
        assert!(slide.prog_tags.is_some());
        assert_eq!(slide.round_trip.len(), 2);
        assert_eq!(slide.round_trip[1].header.raw_type, 0x7B7B);
    }

    #[test]
    fn test_slide_requires_slide_scheme() {
        let bytes = container(
            RecordType::Slide,
            0,
            &[slide_atom_bytes(0), drawing_bytes(), scheme_bytes(6)],
        );
        assert!(SlideContainer::decode(&mut RecordReader::new(&bytes)).is_err());
    }

    #[test]
    fn test_slide_rejects_misplaced_known_record() {
        let mut children = vec![
            slide_atom_bytes(0),
            drawing_bytes(),
            scheme_bytes(SCHEME_INSTANCE_SLIDE),
        ];
        children.push(slide_atom_bytes(0));
        let bytes = container(RecordType::Slide, 0, &children);
        assert!(SlideContainer::decode(&mut RecordReader::new(&bytes)).is_err());
    }

    #[test]
    fn test_notes() {
        let bytes = notes_bytes(256);
        let notes = NotesContainer::decode(&mut RecordReader::new(&bytes)).unwrap();
        assert_eq!(notes.atom.slide_id_ref, 256);
        assert!(notes.prog_tags.is_none());
    }

    #[test]
    fn test_master_dispatch() {
        let main = container(RecordType::MainMaster, 0, &[slide_atom_bytes(0)]);
        let master = Master::decode(&mut RecordReader::new(&main)).unwrap();
        assert!(matches!(master, Master::Main(_)));

        let title = slide_bytes(0x8000_0000);
        let master = Master::decode(&mut RecordReader::new(&title)).unwrap();
        assert!(matches!(master, Master::Title(_)));

        let notes = notes_bytes(0);
        assert!(Master::decode(&mut RecordReader::new(&notes)).is_err());
    }
}
