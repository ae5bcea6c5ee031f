//! Text atoms found in slide lists and text containers.

use crate::common::error::{PptError, Result};
use crate::ppt::consts::RecordType;
use crate::ppt::records::{
    InstanceDispatch, InstanceRule, LengthRule, Record, RecordHeader, RecordReader, RecordSpec,
};
use crate::ppt::types::{StringKind, TextRange, TextString, TextType};
use encoding_rs::mem::decode_latin1;

/// Starts a text body and states its role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextHeaderAtom {
    pub header: RecordHeader,
    pub text_type: TextType,
}

impl Record for TextHeaderAtom {
    const SPEC: RecordSpec = RecordSpec::atom("TextHeaderAtom", RecordType::TextHeaderAtom)
        .with_length(LengthRule::Exactly(4));

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        Ok(Self {
            header: *header,
            text_type: TextType::decode(reader)?,
        })
    }
}

/// Text stored as UTF-16.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCharsAtom {
    pub header: RecordHeader,
    pub text: TextString,
}

impl Record for TextCharsAtom {
    const SPEC: RecordSpec = RecordSpec::atom("TextCharsAtom", RecordType::TextCharsAtom)
        .with_length(LengthRule::Even);

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        Ok(Self {
            header: *header,
            text: TextString::decode(reader, header.length as usize)?,
        })
    }
}

/// Text stored as the low bytes of UTF-16 code units (ISO-8859-1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBytesAtom {
    pub header: RecordHeader,
    pub text: TextString,
}

impl Record for TextBytesAtom {
    const SPEC: RecordSpec = RecordSpec::atom("TextBytesAtom", RecordType::TextBytesAtom);

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        let offset = reader.position();
        let bytes = reader.read_bytes(header.length as usize)?;
        let text = TextString::validated(decode_latin1(bytes).into_owned(), offset)?;
        Ok(Self {
            header: *header,
            text,
        })
    }
}

/// Indent level of a run of master text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MasterTextPropRun {
    /// Number of characters in the run
    pub count: u32,
    pub indent_level: u16,
}

/// Indent levels of the text of a master placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterTextPropAtom {
    pub header: RecordHeader,
    pub runs: Vec<MasterTextPropRun>,
}

impl Record for MasterTextPropAtom {
    const SPEC: RecordSpec = RecordSpec::atom("MasterTextPropAtom", RecordType::MasterTextPropAtom)
        .with_length(LengthRule::MultipleOf(6));

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        let runs = reader.read_until_end(|r| {
            let offset = r.position();
            let count = r.read_u32()?;
            let indent_level = r.read_u16()?;
            if indent_level > 4 {
                return Err(PptError::corrupted(
                    offset,
                    format!("indent level {indent_level} above 4"),
                ));
            }
            Ok(MasterTextPropRun {
                count,
                indent_level,
            })
        })?;
        Ok(Self {
            header: *header,
            runs,
        })
    }
}

/// A bookmark over a range of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBookmarkAtom {
    pub header: RecordHeader,
    pub range: TextRange,
    pub bookmark_id: i32,
}

impl Record for TextBookmarkAtom {
    const SPEC: RecordSpec = RecordSpec::atom("TextBookmarkAtom", RecordType::TextBookmarkAtom)
        .with_length(LengthRule::Exactly(0xC));

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        Ok(Self {
            header: *header,
            range: TextRange::decode(reader)?,
            bookmark_id: reader.read_i32()?,
        })
    }
}

/// Range of text covered by the preceding interactive-info container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInteractiveInfoAtom {
    pub header: RecordHeader,
    pub range: TextRange,
}

impl Record for TextInteractiveInfoAtom {
    const SPEC: RecordSpec =
        RecordSpec::atom("TextInteractiveInfoAtom", RecordType::TextInteractiveInfoAtom)
            .with_instance(InstanceRule::OneOf(&[0, 1]))
            .with_length(LengthRule::Exactly(8));

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        Ok(Self {
            header: *header,
            range: TextRange::decode(reader)?,
        })
    }
}

/// Text range with the trigger it responds to, chosen by instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInteractiveInfo {
    MouseClick(TextInteractiveInfoAtom),
    MouseOver(TextInteractiveInfoAtom),
}

impl TextInteractiveInfo {
    const DISPATCH: InstanceDispatch<Self> = InstanceDispatch {
        name: "TextInteractiveInfoAtom",
        record_type: RecordType::TextInteractiveInfoAtom,
        cases: &[
            (0, |r| TextInteractiveInfoAtom::decode(r).map(Self::MouseClick)),
            (1, |r| TextInteractiveInfoAtom::decode(r).map(Self::MouseOver)),
        ],
    };

    pub fn decode(reader: &mut RecordReader<'_>) -> Result<Self> {
        Self::DISPATCH.decode(reader)
    }

    pub fn range(&self) -> TextRange {
        match self {
            Self::MouseClick(atom) | Self::MouseOver(atom) => atom.range,
        }
    }
}

/// Index of the text body of a shape in the slide list's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineTextRefAtom {
    pub header: RecordHeader,
    pub index: i32,
}

impl Record for OutlineTextRefAtom {
    const SPEC: RecordSpec = RecordSpec::atom("OutlineTextRefAtom", RecordType::OutlineTextRefAtom)
        .with_length(LengthRule::Exactly(4));

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        let offset = reader.position();
        let index = reader.read_i32()?;
        if index < 0 {
            return Err(PptError::corrupted(offset, format!("negative text index {index}")));
        }
        Ok(Self {
            header: *header,
            index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ppt::records::test_support::{atom, u32s, utf16};

    #[test]
    fn test_text_header() {
        let bytes = atom(RecordType::TextHeaderAtom, 0, &u32s(&[1]));
        let parsed = TextHeaderAtom::decode(&mut RecordReader::new(&bytes)).unwrap();
        assert_eq!(parsed.text_type, TextType::Body);
    }

    #[test]
    fn test_text_header_fixed_instance() {
        let bytes = atom(RecordType::TextHeaderAtom, 1, &u32s(&[1]));
        let err = TextHeaderAtom::decode(&mut RecordReader::new(&bytes)).unwrap_err();
        assert_eq!(err.offset(), 0);
    }

    #[test]
    fn test_text_chars() {
        let bytes = atom(RecordType::TextCharsAtom, 0, &utf16("Hello\rWorld\u{0B}!"));
        let parsed = TextCharsAtom::decode(&mut RecordReader::new(&bytes)).unwrap();
        assert_eq!(parsed.text, "Hello\rWorld\u{0B}!");
    }

    #[test]
    fn test_text_chars_odd_length() {
        let bytes = atom(RecordType::TextCharsAtom, 0, &[0x41, 0x00, 0x42]);
        assert!(TextCharsAtom::decode(&mut RecordReader::new(&bytes)).is_err());
    }

    #[test]
    fn test_text_bytes_latin1() {
        let bytes = atom(RecordType::TextBytesAtom, 0, &[b'c', b'a', b'f', 0xE9]);
        let parsed = TextBytesAtom::decode(&mut RecordReader::new(&bytes)).unwrap();
        assert_eq!(parsed.text, "caf\u{e9}");

        let bytes = atom(RecordType::TextBytesAtom, 0, &[b'a', 0x01]);
        assert!(TextBytesAtom::decode(&mut RecordReader::new(&bytes)).is_err());
    }

    #[test]
    fn test_master_text_prop_runs() {
        let mut payload = Vec::new();
        for (count, level) in [(10u32, 0u16), (5, 2)] {
            payload.extend_from_slice(&count.to_le_bytes());
            payload.extend_from_slice(&level.to_le_bytes());
        }
        let bytes = atom(RecordType::MasterTextPropAtom, 0, &payload);
        let parsed = MasterTextPropAtom::decode(&mut RecordReader::new(&bytes)).unwrap();
        assert_eq!(parsed.runs.len(), 2);
        assert_eq!(parsed.runs[1].indent_level, 2);

        let bytes = atom(RecordType::MasterTextPropAtom, 0, &payload[..8]);
        assert!(MasterTextPropAtom::decode(&mut RecordReader::new(&bytes)).is_err());
    }

    #[test]
    fn test_text_interactive_info_by_instance() {
        let bytes = atom(RecordType::TextInteractiveInfoAtom, 1, &u32s(&[2, 9]));
        let info = TextInteractiveInfo::decode(&mut RecordReader::new(&bytes)).unwrap();
        assert!(matches!(info, TextInteractiveInfo::MouseOver(_)));
        assert_eq!(info.range(), TextRange { begin: 2, end: 9 });

        let bytes = atom(RecordType::TextInteractiveInfoAtom, 2, &u32s(&[2, 9]));
        assert!(TextInteractiveInfo::decode(&mut RecordReader::new(&bytes)).is_err());
    }

    #[test]
    fn test_bookmark_and_outline_ref() {
        let bytes = atom(RecordType::TextBookmarkAtom, 0, &u32s(&[0, 4, 17]));
        let parsed = TextBookmarkAtom::decode(&mut RecordReader::new(&bytes)).unwrap();
        assert_eq!(parsed.bookmark_id, 17);

        let bytes = atom(RecordType::OutlineTextRefAtom, 0, &u32s(&[u32::MAX]));
        assert!(OutlineTextRefAtom::decode(&mut RecordReader::new(&bytes)).is_err());
    }
}
