//! Slide lists: the persist references of slides, masters and notes pages.
//!
//! The list of slides also carries the text of each slide's placeholders.
//! Each `SlidePersistAtom` starts a new group that runs up to the next one;
//! see [`SlideListWithTextContainer::atom_sets`].

use crate::common::error::{PptError, Result};
use crate::ppt::atoms::{
    MasterTextPropAtom, SlidePersistAtom, TextBookmarkAtom, TextBytesAtom, TextCharsAtom,
    TextHeaderAtom, TextInteractiveInfo,
};
use crate::ppt::consts::RecordType;
use crate::ppt::records::{
    InstanceDispatch, InstanceRule, RawRecord, Record, RecordHeader, RecordReader, RecordSpec,
    TypeDispatch,
};

use super::interactive::InteractiveInfo;

/// Instance of the list of presentation slides.
pub const SLIDE_LIST_SLIDES: u16 = 0x000;
/// Instance of the list of main and title masters.
pub const SLIDE_LIST_MASTERS: u16 = 0x001;
/// Instance of the list of notes pages.
pub const SLIDE_LIST_NOTES: u16 = 0x002;

/// A record of the slide list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideListEntry {
    Persist(SlidePersistAtom),
    TextHeader(TextHeaderAtom),
    TextChars(TextCharsAtom),
    TextBytes(TextBytesAtom),
    /// Character and paragraph runs, kept as stored
    StyleTextProp(RawRecord),
    MasterTextProp(MasterTextPropAtom),
    TextSpecialInfo(RawRecord),
    TextRuler(RawRecord),
    TextBookmark(TextBookmarkAtom),
    TextInteractiveInfo(TextInteractiveInfo),
    InteractiveInfo(InteractiveInfo),
    /// Slide number, date, header or footer field
    MetaChar(RawRecord),
}

const fn text_atom(name: &'static str, record_type: RecordType) -> RecordSpec {
    RecordSpec::atom(name, record_type).with_instance(InstanceRule::Any)
}

const STYLE_TEXT_PROP: RecordSpec = text_atom("StyleTextPropAtom", RecordType::StyleTextPropAtom);
const TEXT_SPECIAL_INFO: RecordSpec =
    text_atom("TextSpecialInfoAtom", RecordType::TextSpecialInfoAtom);
const TEXT_RULER: RecordSpec = text_atom("TextRulerAtom", RecordType::TextRulerAtom);
const SLIDE_NUMBER_MC: RecordSpec =
    text_atom("SlideNumberMCAtom", RecordType::SlideNumberMetaCharAtom);
const DATE_TIME_MC: RecordSpec = text_atom("DateTimeMCAtom", RecordType::DateTimeMetaCharAtom);
const GENERIC_DATE_MC: RecordSpec =
    text_atom("GenericDateMCAtom", RecordType::GenericDateMetaCharAtom);
const HEADER_MC: RecordSpec = text_atom("HeaderMCAtom", RecordType::HeaderMetaCharAtom);
const FOOTER_MC: RecordSpec = text_atom("FooterMCAtom", RecordType::FooterMetaCharAtom);
const RTF_DATE_TIME_MC: RecordSpec =
    text_atom("RTFDateTimeMCAtom", RecordType::RtfDateTimeMetaCharAtom);

impl SlideListEntry {
    const DISPATCH: TypeDispatch<Self> = TypeDispatch {
        name: "SlideListWithTextContainer",
        cases: &[
            (RecordType::SlidePersistAtom, |r| SlidePersistAtom::decode(r).map(Self::Persist)),
            (RecordType::TextHeaderAtom, |r| TextHeaderAtom::decode(r).map(Self::TextHeader)),
            (RecordType::TextCharsAtom, |r| TextCharsAtom::decode(r).map(Self::TextChars)),
            (RecordType::TextBytesAtom, |r| TextBytesAtom::decode(r).map(Self::TextBytes)),
            (RecordType::StyleTextPropAtom, |r| {
                RawRecord::decode_with(r, &STYLE_TEXT_PROP).map(Self::StyleTextProp)
            }),
            (RecordType::MasterTextPropAtom, |r| {
                MasterTextPropAtom::decode(r).map(Self::MasterTextProp)
            }),
            (RecordType::TextSpecialInfoAtom, |r| {
                RawRecord::decode_with(r, &TEXT_SPECIAL_INFO).map(Self::TextSpecialInfo)
            }),
            (RecordType::TextRulerAtom, |r| {
                RawRecord::decode_with(r, &TEXT_RULER).map(Self::TextRuler)
            }),
            (RecordType::TextBookmarkAtom, |r| {
                TextBookmarkAtom::decode(r).map(Self::TextBookmark)
            }),
            (RecordType::TextInteractiveInfoAtom, |r| {
                TextInteractiveInfo::decode(r).map(Self::TextInteractiveInfo)
            }),
            (RecordType::InteractiveInfo, |r| {
                InteractiveInfo::decode(r).map(Self::InteractiveInfo)
            }),
            (RecordType::SlideNumberMetaCharAtom, |r| {
                RawRecord::decode_with(r, &SLIDE_NUMBER_MC).map(Self::MetaChar)
            }),
            (RecordType::DateTimeMetaCharAtom, |r| {
                RawRecord::decode_with(r, &DATE_TIME_MC).map(Self::MetaChar)
            }),
            (RecordType::GenericDateMetaCharAtom, |r| {
                RawRecord::decode_with(r, &GENERIC_DATE_MC).map(Self::MetaChar)
            }),
            (RecordType::HeaderMetaCharAtom, |r| {
                RawRecord::decode_with(r, &HEADER_MC).map(Self::MetaChar)
            }),
            (RecordType::FooterMetaCharAtom, |r| {
                RawRecord::decode_with(r, &FOOTER_MC).map(Self::MetaChar)
            }),
            (RecordType::RtfDateTimeMetaCharAtom, |r| {
                RawRecord::decode_with(r, &RTF_DATE_TIME_MC).map(Self::MetaChar)
            }),
        ],
        unknown: None,
    };

    /// Text of a chars or bytes atom.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::TextChars(atom) => Some(atom.text.as_str()),
            Self::TextBytes(atom) => Some(atom.text.as_str()),
            _ => None,
        }
    }
}

/// The records belonging to one slide of a [`SlideListWithTextContainer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideAtomsSet<'a> {
    pub persist: &'a SlidePersistAtom,
    /// Records between this persist atom and the next
    pub records: &'a [SlideListEntry],
}

impl<'a> SlideAtomsSet<'a> {
    #[inline]
    pub fn slide_id(&self) -> u32 {
        self.persist.slide_id
    }

    /// Placeholder texts of the slide, in list order.
    pub fn texts(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.records.iter().filter_map(SlideListEntry::text)
    }

    /// All placeholder texts, one per line.
    pub fn text(&self) -> String {
        self.texts().collect::<Vec<_>>().join("\n")
    }
}

/// The list of presentation slides with their placeholder text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideListWithTextContainer {
    pub header: RecordHeader,
    pub entries: Vec<SlideListEntry>,
}

impl SlideListWithTextContainer {
    pub fn persists(&self) -> impl Iterator<Item = &SlidePersistAtom> {
        self.entries.iter().filter_map(|entry| match entry {
            SlideListEntry::Persist(persist) => Some(persist),
            _ => None,
        })
    }

    /// Group the entries by slide.
    pub fn atom_sets(&self) -> Vec<SlideAtomsSet<'_>> {
        let starts: Vec<(usize, &SlidePersistAtom)> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(i, entry)| match entry {
                SlideListEntry::Persist(persist) => Some((i, persist)),
                _ => None,
            })
            .collect();

        starts
            .iter()
            .enumerate()
            .map(|(n, &(start, persist))| {
                let end = starts.get(n + 1).map_or(self.entries.len(), |&(next, _)| next);
                SlideAtomsSet {
                    persist,
                    records: &self.entries[start + 1..end],
                }
            })
            .collect()
    }
}

impl Record for SlideListWithTextContainer {
    const SPEC: RecordSpec =
        RecordSpec::container("SlideListWithTextContainer", RecordType::SlideListWithText)
            .with_instance(InstanceRule::Exactly(SLIDE_LIST_SLIDES));

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        let mut entries: Vec<SlideListEntry> = Vec::new();
        while !reader.at_record_end() {
            let offset = reader.position();
            let entry = SlideListEntry::DISPATCH.decode(reader)?;
            if entries.is_empty() && !matches!(entry, SlideListEntry::Persist(_)) {
                return Err(PptError::corrupted(
                    offset,
                    "slide list text precedes the first SlidePersistAtom",
                ));
            }
            entries.push(entry);
        }
        Ok(Self {
            header: *header,
            entries,
        })
    }
}

/// The list of masters or of notes pages: persist references only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistListContainer {
    pub header: RecordHeader,
    pub persists: Vec<SlidePersistAtom>,
}

impl PersistListContainer {
    pub const fn spec_for(instance: u16) -> RecordSpec {
        Self::SPEC.with_instance(InstanceRule::Exactly(instance))
    }

    pub fn decode_instance(reader: &mut RecordReader<'_>, instance: u16) -> Result<Self> {
        reader.read_record(&Self::spec_for(instance), Self::decode_payload)
    }

    pub fn optional(reader: &mut RecordReader<'_>, instance: u16) -> Result<Option<Self>> {
        reader.read_optional_with(&Self::spec_for(instance), |r| Self::decode_instance(r, instance))
    }
}

impl Record for PersistListContainer {
    const SPEC: RecordSpec =
        RecordSpec::container("SlideListWithTextContainer", RecordType::SlideListWithText)
            .with_instance(InstanceRule::OneOf(&[SLIDE_LIST_MASTERS, SLIDE_LIST_NOTES]));

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        Ok(Self {
            header: *header,
            persists: reader.read_until_end(SlidePersistAtom::decode)?,
        })
    }
}

/// A slide list, selected by instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideList {
    Slides(SlideListWithTextContainer),
    Masters(PersistListContainer),
    Notes(PersistListContainer),
}

impl SlideList {
    const DISPATCH: InstanceDispatch<Self> = InstanceDispatch {
        name: "SlideListWithTextContainer",
        record_type: RecordType::SlideListWithText,
        cases: &[
            (SLIDE_LIST_SLIDES, |r| SlideListWithTextContainer::decode(r).map(Self::Slides)),
            (SLIDE_LIST_MASTERS, |r| {
                PersistListContainer::decode_instance(r, SLIDE_LIST_MASTERS).map(Self::Masters)
            }),
            (SLIDE_LIST_NOTES, |r| {
                PersistListContainer::decode_instance(r, SLIDE_LIST_NOTES).map(Self::Notes)
            }),
        ],
    };

    pub fn decode(reader: &mut RecordReader<'_>) -> Result<Self> {
        Self::DISPATCH.decode(reader)
    }

    pub fn persists(&self) -> Vec<&SlidePersistAtom> {
        match self {
            Self::Slides(list) => list.persists().collect(),
            Self::Masters(list) | Self::Notes(list) => list.persists.iter().collect(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::ppt::atoms::slide::tests::slide_persist_bytes;
    use crate::ppt::containers::interactive::tests::interactive_bytes;
    use crate::ppt::records::test_support::{atom, container, u32s, utf16};

    pub(crate) fn slide_list_bytes(instance: u16, children: &[Vec<u8>]) -> Vec<u8> {
        container(RecordType::SlideListWithText, instance, children)
    }

    fn slides_with_text() -> Vec<u8> {
        slide_list_bytes(
            SLIDE_LIST_SLIDES,
            &[
                slide_persist_bytes(2, 256),
                atom(RecordType::TextHeaderAtom, 0, &u32s(&[0])),
                atom(RecordType::TextCharsAtom, 0, &utf16("Title")),
                atom(RecordType::StyleTextPropAtom, 0, &[0; 10]),
                atom(RecordType::TextHeaderAtom, 0, &u32s(&[1])),
                atom(RecordType::TextBytesAtom, 0, b"Body"),
                interactive_bytes(0),
                atom(RecordType::TextInteractiveInfoAtom, 0, &u32s(&[0, 4])),
                slide_persist_bytes(3, 257),
                atom(RecordType::TextHeaderAtom, 0, &u32s(&[0])),
                atom(RecordType::TextCharsAtom, 0, &utf16("Second")),
            ],
        )
    }

    #[test]
    fn test_atom_sets() {
        let bytes = slides_with_text();
        let list = SlideListWithTextContainer::decode(&mut RecordReader::new(&bytes)).unwrap();
        assert_eq!(list.entries.len(), 11);

        let sets = list.atom_sets();
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].slide_id(), 256);
        assert_eq!(sets[0].records.len(), 7);
        assert_eq!(sets[0].text(), "Title\nBody");
        assert_eq!(sets[1].persist.persist_id_ref, 3);
        assert_eq!(sets[1].texts().collect::<Vec<_>>(), vec!["Second"]);
    }

    #[test]
    fn test_text_before_first_persist() {
        let bytes = slide_list_bytes(
            SLIDE_LIST_SLIDES,
            &[atom(RecordType::TextHeaderAtom, 0, &u32s(&[0])), slide_persist_bytes(2, 256)],
        );
        let err = SlideListWithTextContainer::decode(&mut RecordReader::new(&bytes)).unwrap_err();
        assert_eq!(err.offset(), 8);
    }

    #[test]
    fn test_dispatch_by_instance() {
        let bytes = slide_list_bytes(SLIDE_LIST_NOTES, &[slide_persist_bytes(5, 0x100)]);
        let list = SlideList::decode(&mut RecordReader::new(&bytes)).unwrap();
        assert!(matches!(list, SlideList::Notes(_)));
        assert_eq!(list.persists()[0].persist_id_ref, 5);

        let bytes = slides_with_text();
        let list = SlideList::decode(&mut RecordReader::new(&bytes)).unwrap();
        assert_eq!(list.persists().len(), 2);

        let bytes = slide_list_bytes(3, &[]);
        assert!(SlideList::decode(&mut RecordReader::new(&bytes)).is_err());
    }

    #[test]
    fn test_master_list_holds_persists_only() {
        let bytes = slide_list_bytes(
            SLIDE_LIST_MASTERS,
            &[
                slide_persist_bytes(1, 0x8000_0000),
                atom(RecordType::TextHeaderAtom, 0, &u32s(&[0])),
            ],
        );
        assert!(SlideList::decode(&mut RecordReader::new(&bytes)).is_err());
    }
}
