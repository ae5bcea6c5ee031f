//! Document-wide text defaults and the font table.

use crate::common::error::Result;
use crate::ppt::atoms::{FontEmbedDataBlob, FontEntityAtom};
use crate::ppt::consts::RecordType;
use crate::ppt::records::{
    InstanceRule, RawRecord, Record, RecordHeader, RecordReader, RecordSpec, TypeDispatch,
};

/// At most one embedded blob per style: regular, bold, italic, bold italic.
const MAX_EMBEDDED_FACES: usize = 4;

/// A font and its embedded data, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontEntry {
    pub entity: FontEntityAtom,
    pub embedded: Vec<FontEmbedDataBlob>,
}

impl FontEntry {
    fn decode(reader: &mut RecordReader<'_>) -> Result<Self> {
        let entity = FontEntityAtom::decode(reader)?;
        let mut embedded = Vec::new();
        while embedded.len() < MAX_EMBEDDED_FACES {
            match reader.read_optional::<FontEmbedDataBlob>()? {
                Some(blob) => embedded.push(blob),
                None => break,
            }
        }
        Ok(Self { entity, embedded })
    }
}

/// The document's font table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontCollectionContainer {
    pub header: RecordHeader,
    pub fonts: Vec<FontEntry>,
}

impl FontCollectionContainer {
    /// Font with the given index, as referenced from text formatting.
    pub fn font(&self, index: u16) -> Option<&FontEntry> {
        self.fonts.iter().find(|font| font.entity.index() == index)
    }
}

impl Record for FontCollectionContainer {
    const SPEC: RecordSpec =
        RecordSpec::container("FontCollectionContainer", RecordType::FontCollection);

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        Ok(Self {
            header: *header,
            fonts: reader.read_until_end(FontEntry::decode)?,
        })
    }
}

/// A child of the document text info container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInfoChild {
    FontCollection(FontCollectionContainer),
    Kinsoku(RawRecord),
    /// Default character formatting
    TextCharFormatDefaults(RawRecord),
    /// Default paragraph formatting
    TextParagraphFormatDefaults(RawRecord),
    DefaultRuler(RawRecord),
    TextSpecialInfoDefaults(RawRecord),
    /// Master style of one text type, selected by instance
    TextMasterStyle(RawRecord),
    Unknown(RawRecord),
}

const KINSOKU: RecordSpec = RecordSpec::container("KinsokuContainer", RecordType::Kinsoku)
    .with_instance(InstanceRule::Exactly(0x002));
const TEXT_CF_DEFAULTS: RecordSpec =
    RecordSpec::atom("TextCFExceptionAtom", RecordType::TextCharFormatExceptionAtom);
const TEXT_PF_DEFAULTS: RecordSpec =
    RecordSpec::atom("TextPFExceptionAtom", RecordType::TextParagraphFormatExceptionAtom);
const DEFAULT_RULER: RecordSpec =
    RecordSpec::atom("DefaultRulerAtom", RecordType::DefaultRulerAtom);
const TEXT_SI_DEFAULTS: RecordSpec =
    RecordSpec::atom("TextSIExceptionAtom", RecordType::TextSpecialInfoDefaultAtom);
const TEXT_MASTER_STYLE: RecordSpec =
    RecordSpec::atom("TextMasterStyleAtom", RecordType::TextMasterStyleAtom)
        .with_instance(InstanceRule::Range(0, 8));

impl TextInfoChild {
    const DISPATCH: TypeDispatch<Self> = TypeDispatch {
        name: "DocumentTextInfoContainer",
        cases: &[
            (RecordType::FontCollection, |r| {
                FontCollectionContainer::decode(r).map(Self::FontCollection)
            }),
            (RecordType::Kinsoku, |r| RawRecord::decode_with(r, &KINSOKU).map(Self::Kinsoku)),
            (RecordType::TextCharFormatExceptionAtom, |r| {
                RawRecord::decode_with(r, &TEXT_CF_DEFAULTS).map(Self::TextCharFormatDefaults)
            }),
            (RecordType::TextParagraphFormatExceptionAtom, |r| {
                RawRecord::decode_with(r, &TEXT_PF_DEFAULTS).map(Self::TextParagraphFormatDefaults)
            }),
            (RecordType::DefaultRulerAtom, |r| {
                RawRecord::decode_with(r, &DEFAULT_RULER).map(Self::DefaultRuler)
            }),
            (RecordType::TextSpecialInfoDefaultAtom, |r| {
                RawRecord::decode_with(r, &TEXT_SI_DEFAULTS).map(Self::TextSpecialInfoDefaults)
            }),
            (RecordType::TextMasterStyleAtom, |r| {
                RawRecord::decode_with(r, &TEXT_MASTER_STYLE).map(Self::TextMasterStyle)
            }),
        ],
        unknown: Some(|r| RawRecord::decode(r).map(Self::Unknown)),
    };
}

/// Text defaults shared by the whole document (the `Environment` record).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTextInfoContainer {
    pub header: RecordHeader,
    pub children: Vec<TextInfoChild>,
}

impl DocumentTextInfoContainer {
    pub fn font_collection(&self) -> Option<&FontCollectionContainer> {
        self.children.iter().find_map(|child| match child {
            TextInfoChild::FontCollection(fonts) => Some(fonts),
            _ => None,
        })
    }
}

impl Record for DocumentTextInfoContainer {
    const SPEC: RecordSpec =
        RecordSpec::container("DocumentTextInfoContainer", RecordType::Environment);

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        Ok(Self {
            header: *header,
            children: TextInfoChild::DISPATCH.decode_all(reader)?,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::ppt::atoms::font::tests::font_entity_bytes;
    use crate::ppt::records::Diagnostic;
    use crate::ppt::records::test_support::{atom, container, record};

    pub(crate) fn font_collection_bytes(names: &[&str]) -> Vec<u8> {
        let fonts: Vec<Vec<u8>> = names
            .iter()
            .enumerate()
            .map(|(i, name)| font_entity_bytes(i as u16, name))
            .collect();
        container(RecordType::FontCollection, 0, &fonts)
    }

    pub(crate) fn text_info_bytes() -> Vec<u8> {
        container(
            RecordType::Environment,
            0,
            &[
                font_collection_bytes(&["Arial"]),
                atom(RecordType::TextCharFormatExceptionAtom, 0, &[0; 6]),
                atom(RecordType::TextMasterStyleAtom, 1, &[0; 4]),
            ],
        )
    }

    #[test]
    fn test_font_collection_with_embedding() {
        let bytes = container(
            RecordType::FontCollection,
            0,
            &[
                font_entity_bytes(0, "Arial"),
                atom(RecordType::FontEmbedDataBlob, 0, &[1, 2]),
                atom(RecordType::FontEmbedDataBlob, 1, &[3]),
                font_entity_bytes(1, "Wingdings"),
            ],
        );
        let fonts = FontCollectionContainer::decode(&mut RecordReader::new(&bytes)).unwrap();
        assert_eq!(fonts.fonts.len(), 2);
        assert_eq!(fonts.fonts[0].embedded.len(), 2);
        assert!(fonts.fonts[1].embedded.is_empty());
        assert_eq!(fonts.font(1).map(|f| f.entity.face_name.as_str()), Some("Wingdings"));
    }

    #[test]
    fn test_font_collection_rejects_stray_blob() {
        let bytes = container(
            RecordType::FontCollection,
            0,
            &[atom(RecordType::FontEmbedDataBlob, 0, &[1, 2])],
        );
        assert!(FontCollectionContainer::decode(&mut RecordReader::new(&bytes)).is_err());
    }

    #[test]
    fn test_text_info_children() {
        let bytes = text_info_bytes();
        let info = DocumentTextInfoContainer::decode(&mut RecordReader::new(&bytes)).unwrap();
        assert_eq!(info.children.len(), 3);
        assert!(info.font_collection().is_some());
        assert!(matches!(info.children[2], TextInfoChild::TextMasterStyle(_)));
    }

    #[test]
    fn test_text_info_skips_unknown() {
        let bytes = container(
            RecordType::Environment,
            0,
            &[record(0, 0, 0x7A7A, &[9, 9]), font_collection_bytes(&["Arial"])],
        );
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let info = {
            let mut reader = RecordReader::new(&bytes).with_sink(&mut diagnostics);
            DocumentTextInfoContainer::decode(&mut reader).unwrap()
        };
        assert!(matches!(
            &info.children[0],
            TextInfoChild::Unknown(raw) if raw.header.raw_type == 0x7A7A
        ));
        assert!(info.font_collection().is_some());
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_text_info_rejects_misplaced_known_record() {
        let bytes = container(RecordType::Environment, 0, &[atom(RecordType::SlideAtom, 0, &[])]);
        assert!(DocumentTextInfoContainer::decode(&mut RecordReader::new(&bytes)).is_err());
    }
}
