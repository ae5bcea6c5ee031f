//! Programmable tags: named extension data attached to the document or a slide.
//!
//! Binary tags are told apart by the name stored in their first child, not by
//! any header field. Later PowerPoint versions keep their extension records
//! under the names `___PPT9` through `___PPT12`; names this crate does not know
//! are kept as raw records.

use crate::common::error::{PptError, Result};
use crate::ppt::atoms::CString;
use crate::ppt::consts::{CONTAINER_VERSION, RecordType};
use crate::ppt::records::{
    DecodeFn, RawRecord, Record, RecordHeader, RecordReader, RecordSpec, TagDispatch,
    TypeDispatch, VersionRule,
};
use crate::ppt::types::PrintableString;
use phf::phf_map;

/// A tag holding a name and an optional string value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgStringTagContainer {
    pub header: RecordHeader,
    pub name: CString<PrintableString>,
    pub value: Option<CString<PrintableString>>,
}

impl Record for ProgStringTagContainer {
    const SPEC: RecordSpec =
        RecordSpec::container("ProgStringTagContainer", RecordType::ProgStringTag);

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        Ok(Self {
            header: *header,
            name: CString::decode_instance(reader, 0, None)?,
            value: CString::optional(reader, 1, None)?,
        })
    }
}

/// The records stored in a binary tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryTagData {
    pub header: RecordHeader,
    pub records: Vec<RawRecord>,
}

impl Record for BinaryTagData {
    const SPEC: RecordSpec = RecordSpec::atom("BinaryTagDataBlob", RecordType::BinaryTagDataBlob);

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        Ok(Self {
            header: *header,
            records: reader.read_until_end(RawRecord::decode)?,
        })
    }
}

/// Header constraints of a binary tag.
///
/// Containers are written with version `0xF`, but files saved by PowerPoint
/// itself carry binary tags with version `0x0`. Both are accepted.
pub const PROG_BINARY_TAG: RecordSpec =
    RecordSpec::container("ProgBinaryTagContainer", RecordType::ProgBinaryTag)
        .with_version(VersionRule::OneOf(&[0x0, CONTAINER_VERSION]));

/// A binary tag whose name this crate recognises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryTagExtension {
    pub header: RecordHeader,
    pub name: CString<PrintableString>,
    pub data: BinaryTagData,
}

impl BinaryTagExtension {
    /// Decode a binary tag that must be named `expected`.
    pub fn decode_named(reader: &mut RecordReader<'_>, expected: &str) -> Result<Self> {
        reader.read_record(&PROG_BINARY_TAG, |r, header| {
            let offset = r.position();
            let name = CString::<PrintableString>::decode_instance(r, 0, None)?;
            if name.as_str() != expected {
                return Err(PptError::corrupted(
                    offset,
                    format!("binary tag named {:?}, expected {expected:?}", name.as_str()),
                ));
            }
            Ok(Self {
                header: *header,
                name,
                data: BinaryTagData::decode(r)?,
            })
        })
    }
}

/// A binary tag, selected by the name stored inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgBinaryTag {
    /// PowerPoint 2000 extensions
    Ppt9(BinaryTagExtension),
    /// PowerPoint 2002 extensions
    Ppt10(BinaryTagExtension),
    /// PowerPoint 2003 extensions
    Ppt11(BinaryTagExtension),
    /// PowerPoint 2007 round-trip data
    Ppt12(BinaryTagExtension),
    Unknown(RawRecord),
}

fn binary_tag_name(reader: &mut RecordReader<'_>) -> Result<String> {
    CString::<PrintableString>::decode_instance(reader, 0, None)
        .map(|name| name.value.into_string())
}

fn ppt9(reader: &mut RecordReader<'_>) -> Result<ProgBinaryTag> {
    BinaryTagExtension::decode_named(reader, "___PPT9").map(ProgBinaryTag::Ppt9)
}

fn ppt10(reader: &mut RecordReader<'_>) -> Result<ProgBinaryTag> {
    BinaryTagExtension::decode_named(reader, "___PPT10").map(ProgBinaryTag::Ppt10)
}

fn ppt11(reader: &mut RecordReader<'_>) -> Result<ProgBinaryTag> {
    BinaryTagExtension::decode_named(reader, "___PPT11").map(ProgBinaryTag::Ppt11)
}

fn ppt12(reader: &mut RecordReader<'_>) -> Result<ProgBinaryTag> {
    BinaryTagExtension::decode_named(reader, "___PPT12").map(ProgBinaryTag::Ppt12)
}

fn unknown_binary_tag(reader: &mut RecordReader<'_>) -> Result<ProgBinaryTag> {
    RawRecord::decode_with(reader, &PROG_BINARY_TAG).map(ProgBinaryTag::Unknown)
}

static BINARY_TAGS: phf::Map<&'static str, DecodeFn<ProgBinaryTag>> = phf_map! {
    "___PPT9" => ppt9,
    "___PPT10" => ppt10,
    "___PPT11" => ppt11,
    "___PPT12" => ppt12,
};

static BINARY_TAG_DISPATCH: TagDispatch<ProgBinaryTag> = TagDispatch {
    spec: PROG_BINARY_TAG,
    tag: binary_tag_name,
    cases: &BINARY_TAGS,
    fallback: unknown_binary_tag,
};

impl ProgBinaryTag {
    pub fn decode(reader: &mut RecordReader<'_>) -> Result<Self> {
        BINARY_TAG_DISPATCH.decode(reader)
    }

    /// The decoded extension, unless the tag name was not recognised.
    pub fn extension(&self) -> Option<&BinaryTagExtension> {
        match self {
            Self::Ppt9(ext) | Self::Ppt10(ext) | Self::Ppt11(ext) | Self::Ppt12(ext) => Some(ext),
            Self::Unknown(_) => None,
        }
    }
}

/// One programmable tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgTag {
    String(ProgStringTagContainer),
    Binary(ProgBinaryTag),
}

impl ProgTag {
    const DISPATCH: TypeDispatch<Self> = TypeDispatch {
        name: "ProgTagsContainer",
        cases: &[
            (RecordType::ProgStringTag, |r| ProgStringTagContainer::decode(r).map(Self::String)),
            (RecordType::ProgBinaryTag, |r| ProgBinaryTag::decode(r).map(Self::Binary)),
        ],
        unknown: None,
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgTagsContainer {
    pub header: RecordHeader,
    pub tags: Vec<ProgTag>,
}

impl ProgTagsContainer {
    pub fn binary_tags(&self) -> impl Iterator<Item = &ProgBinaryTag> {
        self.tags.iter().filter_map(|tag| match tag {
            ProgTag::Binary(binary) => Some(binary),
            ProgTag::String(_) => None,
        })
    }
}

impl Record for ProgTagsContainer {
    const SPEC: RecordSpec = RecordSpec::container("ProgTagsContainer", RecordType::ProgTags);

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        Ok(Self {
            header: *header,
            tags: ProgTag::DISPATCH.decode_all(reader)?,
        })
    }
}
