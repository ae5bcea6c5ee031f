//! The document container: document-wide settings and the three slide lists.
//!
//! Children appear in a fixed order; optional ones are recognised by peeking
//! at the type and instance of the next header.

use crate::common::error::Result;
use crate::ppt::atoms::{DocumentAtom, EndDocumentAtom};
use crate::ppt::consts::RecordType;
use crate::ppt::records::{InstanceRule, RawRecord, Record, RecordHeader, RecordReader, RecordSpec};

use super::doc_info::DocInfoListContainer;
use super::environment::DocumentTextInfoContainer;
use super::ex_obj_list::ExObjListContainer;
use super::headers_footers::{HF_INSTANCE_NOTES, HF_INSTANCE_SLIDES, HeadersFootersContainer};
use super::slide_list::{
    PersistListContainer, SLIDE_LIST_MASTERS, SLIDE_LIST_NOTES, SlideListWithTextContainer,
};
use super::sound::SoundCollectionContainer;

const DRAWING_GROUP: RecordSpec =
    RecordSpec::container("DrawingGroupContainer", RecordType::DrawingGroup);
const SLIDE_SHOW_DOC_INFO: RecordSpec =
    RecordSpec::atom("SlideShowDocInfoAtom", RecordType::SlideShowDocInfoAtom);
const NAMED_SHOWS: RecordSpec =
    RecordSpec::container("NamedShowsContainer", RecordType::NamedShows);
const SUMMARY: RecordSpec = RecordSpec::container("SummaryContainer", RecordType::Summary);
const DOC_ROUTING_SLIP: RecordSpec =
    RecordSpec::atom("DocRoutingSlipAtom", RecordType::DocRoutingSlipAtom);
const PRINT_OPTIONS: RecordSpec =
    RecordSpec::atom("PrintOptionsAtom", RecordType::PrintOptionsAtom);
const CUSTOM_TABLE_STYLES: RecordSpec = RecordSpec::atom(
    "RoundTripCustomTableStyles12Atom",
    RecordType::RoundTripCustomTableStyles12Atom,
)
.with_instance(InstanceRule::Any);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentContainer {
    pub header: RecordHeader,
    pub document_atom: DocumentAtom,
    pub ex_obj_list: Option<ExObjListContainer>,
    pub text_info: DocumentTextInfoContainer,
    pub sound_collection: Option<SoundCollectionContainer>,
    /// Shared OfficeArt data, kept as stored
    pub drawing_group: RawRecord,
    pub master_list: PersistListContainer,
    pub doc_info_list: Option<DocInfoListContainer>,
    pub slide_headers_footers: Option<HeadersFootersContainer>,
    pub notes_headers_footers: Option<HeadersFootersContainer>,
    pub slide_list: Option<SlideListWithTextContainer>,
    pub notes_list: Option<PersistListContainer>,
    pub slide_show_doc_info: Option<RawRecord>,
    pub named_shows: Option<RawRecord>,
    pub summary: Option<RawRecord>,
    pub doc_routing_slip: Option<RawRecord>,
    pub print_options: Option<RawRecord>,
    pub custom_table_styles: Option<RawRecord>,
    pub end_document: EndDocumentAtom,
    /// Second copy written after the end atom by some versions
    pub trailing_custom_table_styles: Option<RawRecord>,
}

impl Record for DocumentContainer {
    const SPEC: RecordSpec = RecordSpec::container("DocumentContainer", RecordType::Document);

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        Ok(Self {
            header: *header,
            document_atom: DocumentAtom::decode(reader)?,
            ex_obj_list: reader.read_optional::<ExObjListContainer>()?,
            text_info: DocumentTextInfoContainer::decode(reader)?,
            sound_collection: reader.read_optional::<SoundCollectionContainer>()?,
            drawing_group: RawRecord::decode_with(reader, &DRAWING_GROUP)?,
            master_list: PersistListContainer::decode_instance(reader, SLIDE_LIST_MASTERS)?,
            doc_info_list: reader.read_optional::<DocInfoListContainer>()?,
            slide_headers_footers: HeadersFootersContainer::optional(reader, HF_INSTANCE_SLIDES)?,
            notes_headers_footers: HeadersFootersContainer::optional(reader, HF_INSTANCE_NOTES)?,
            slide_list: reader.read_optional::<SlideListWithTextContainer>()?,
            notes_list: PersistListContainer::optional(reader, SLIDE_LIST_NOTES)?,
            slide_show_doc_info: RawRecord::optional(reader, &SLIDE_SHOW_DOC_INFO)?,
            named_shows: RawRecord::optional(reader, &NAMED_SHOWS)?,
            summary: RawRecord::optional(reader, &SUMMARY)?,
            doc_routing_slip: RawRecord::optional(reader, &DOC_ROUTING_SLIP)?,
            print_options: RawRecord::optional(reader, &PRINT_OPTIONS)?,
            custom_table_styles: RawRecord::optional(reader, &CUSTOM_TABLE_STYLES)?,
            end_document: EndDocumentAtom::decode(reader)?,
            trailing_custom_table_styles: RawRecord::optional(reader, &CUSTOM_TABLE_STYLES)?,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::ppt::atoms::document::tests::document_atom_bytes;
    use crate::ppt::atoms::slide::tests::slide_persist_bytes;
    use crate::ppt::containers::environment::tests::text_info_bytes;
    use crate::ppt::containers::ex_obj_list::tests::{ex_obj_list_bytes, hyperlink_bytes};
    use crate::ppt::containers::headers_footers::tests::headers_footers_bytes;
    use crate::ppt::containers::slide_list::SLIDE_LIST_SLIDES;
    use crate::ppt::containers::slide_list::tests::slide_list_bytes;
    use crate::ppt::records::test_support::{atom, container};

    /// A document container referencing masters, slides and notes by persist id.
    pub(crate) fn document_bytes(masters: &[u32], slides: &[u32], notes: &[u32]) -> Vec<u8> {
        let persist_list = |instance: u16, ids: &[u32]| {
            let atoms: Vec<Vec<u8>> = ids
                .iter()
                .enumerate()
                .map(|(i, &id)| slide_persist_bytes(id, 0x100 + i as u32))
                .collect();
            slide_list_bytes(instance, &atoms)
        };

        let mut children = vec![
            document_atom_bytes(),
            text_info_bytes(),
            container(RecordType::DrawingGroup, 0, &[]),
            persist_list(SLIDE_LIST_MASTERS, masters),
        ];
        if !slides.is_empty() {
            children.push(persist_list(SLIDE_LIST_SLIDES, slides));
        }
        if !notes.is_empty() {
            children.push(persist_list(SLIDE_LIST_NOTES, notes));
        }
        children.push(atom(RecordType::EndDocumentAtom, 0, &[]));
        container(RecordType::Document, 0, &children)
    }

    #[test]
    fn test_minimal_document() {
        let bytes = document_bytes(&[2], &[], &[]);
        let doc = DocumentContainer::decode(&mut RecordReader::new(&bytes)).unwrap();
        assert!(doc.ex_obj_list.is_none());
        assert_eq!(doc.master_list.persists.len(), 1);
        assert!(doc.slide_list.is_none());
        assert!(doc.notes_list.is_none());
        assert!(doc.trailing_custom_table_styles.is_none());
    }

    #[test]
    fn test_document_with_optional_children() {
        let bytes = container(
            RecordType::Document,
            0,
            &[
                document_atom_bytes(),
                ex_obj_list_bytes(&[hyperlink_bytes(1, "https://example.com/")]),
                text_info_bytes(),
                container(RecordType::DrawingGroup, 0, &[]),
                slide_list_bytes(SLIDE_LIST_MASTERS, &[slide_persist_bytes(2, 0x8000_0000)]),
                headers_footers_bytes(HF_INSTANCE_SLIDES, "footer"),
                slide_list_bytes(SLIDE_LIST_SLIDES, &[slide_persist_bytes(3, 0x100)]),
                atom(RecordType::PrintOptionsAtom, 0, &[0; 4]),
                atom(RecordType::EndDocumentAtom, 0, &[]),
                atom(RecordType::RoundTripCustomTableStyles12Atom, 0, &[1]),
            ],
        );
        let doc = DocumentContainer::decode(&mut RecordReader::new(&bytes)).unwrap();
        assert_eq!(doc.ex_obj_list.map(|list| list.objects.len()), Some(1));
        assert!(doc.slide_headers_footers.is_some());
        assert!(doc.notes_headers_footers.is_none());
        assert_eq!(doc.slide_list.map(|list| list.entries.len()), Some(1));
        assert!(doc.print_options.is_some());
        assert!(doc.custom_table_styles.is_none());
        assert!(doc.trailing_custom_table_styles.is_some());
    }

    #[test]
    fn test_document_requires_master_list() {
        let bytes = container(
            RecordType::Document,
            0,
            &[
                document_atom_bytes(),
                text_info_bytes(),
                container(RecordType::DrawingGroup, 0, &[]),
                atom(RecordType::EndDocumentAtom, 0, &[]),
            ],
        );
        assert!(DocumentContainer::decode(&mut RecordReader::new(&bytes)).is_err());
    }

    #[test]
    fn test_document_children_out_of_order() {
        let bytes = container(
            RecordType::Document,
            0,
            &[
                document_atom_bytes(),
                text_info_bytes(),
                container(RecordType::DrawingGroup, 0, &[]),
                slide_list_bytes(SLIDE_LIST_MASTERS, &[]),
                atom(RecordType::EndDocumentAtom, 0, &[]),
                atom(RecordType::PrintOptionsAtom, 0, &[0; 4]),
            ],
        );
        assert!(DocumentContainer::decode(&mut RecordReader::new(&bytes)).is_err());
    }
}
