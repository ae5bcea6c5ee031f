//! The document info list: tags, VBA project reference and saved view state.

use crate::common::error::Result;
use crate::ppt::consts::RecordType;
use crate::ppt::records::{
    InstanceRule, RawRecord, Record, RecordHeader, RecordReader, RecordSpec, TypeDispatch,
};

use super::prog_tags::ProgTagsContainer;

/// A child of the document info list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocInfo {
    ProgTags(ProgTagsContainer),
    VbaInfo(RawRecord),
    SlideViewInfo(RawRecord),
    OutlineViewInfo(RawRecord),
    NotesTextViewInfo(RawRecord),
    NormalViewSetInfo(RawRecord),
    SorterViewInfo(RawRecord),
    Unknown(RawRecord),
}

const fn view(name: &'static str, record_type: RecordType) -> RecordSpec {
    RecordSpec::container(name, record_type).with_instance(InstanceRule::Any)
}

const VBA_INFO: RecordSpec = view("VBAInfoContainer", RecordType::VbaInfo);
const SLIDE_VIEW_INFO: RecordSpec = view("SlideViewInfoContainer", RecordType::SlideViewInfo);
const OUTLINE_VIEW_INFO: RecordSpec = view("OutlineViewInfoContainer", RecordType::OutlineViewInfo);
const NOTES_TEXT_VIEW_INFO: RecordSpec =
    view("NotesTextViewInfoContainer", RecordType::NotesTextViewInfo9);
const NORMAL_VIEW_SET_INFO: RecordSpec =
    view("NormalViewSetInfoContainer", RecordType::NormalViewSetInfo9);
const SORTER_VIEW_INFO: RecordSpec = view("SorterViewInfoContainer", RecordType::SorterViewInfo);

impl DocInfo {
    const DISPATCH: TypeDispatch<Self> = TypeDispatch {
        name: "DocInfoListContainer",
        cases: &[
            (RecordType::ProgTags, |r| ProgTagsContainer::decode(r).map(Self::ProgTags)),
            (RecordType::VbaInfo, |r| RawRecord::decode_with(r, &VBA_INFO).map(Self::VbaInfo)),
            (RecordType::SlideViewInfo, |r| {
                RawRecord::decode_with(r, &SLIDE_VIEW_INFO).map(Self::SlideViewInfo)
            }),
            (RecordType::OutlineViewInfo, |r| {
                RawRecord::decode_with(r, &OUTLINE_VIEW_INFO).map(Self::OutlineViewInfo)
            }),
            (RecordType::NotesTextViewInfo9, |r| {
                RawRecord::decode_with(r, &NOTES_TEXT_VIEW_INFO).map(Self::NotesTextViewInfo)
            }),
            (RecordType::NormalViewSetInfo9, |r| {
                RawRecord::decode_with(r, &NORMAL_VIEW_SET_INFO).map(Self::NormalViewSetInfo)
            }),
            (RecordType::SorterViewInfo, |r| {
                RawRecord::decode_with(r, &SORTER_VIEW_INFO).map(Self::SorterViewInfo)
            }),
        ],
        unknown: Some(|r| RawRecord::decode(r).map(Self::Unknown)),
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocInfoListContainer {
    pub header: RecordHeader,
    pub children: Vec<DocInfo>,
}

impl DocInfoListContainer {
    /// Document-level programmable tags.
    pub fn prog_tags(&self) -> impl Iterator<Item = &ProgTagsContainer> {
        self.children.iter().filter_map(|child| match child {
            DocInfo::ProgTags(tags) => Some(tags),
            _ => None,
        })
    }
}

impl Record for DocInfoListContainer {
    const SPEC: RecordSpec = RecordSpec::container("DocInfoListContainer", RecordType::List);

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        Ok(Self {
            header: *header,
            children: DocInfo::DISPATCH.decode_all(reader)?,
        })
    }
}
