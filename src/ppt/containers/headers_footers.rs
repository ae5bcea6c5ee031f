//! Header and footer settings of slides and notes pages.

use crate::common::error::Result;
use crate::ppt::atoms::{CString, HeadersFootersAtom};
use crate::ppt::consts::RecordType;
use crate::ppt::records::{InstanceRule, Record, RecordHeader, RecordReader, RecordSpec};
use crate::ppt::types::{HeadersFootersFlags, PrintableString, TextString};

/// Settings that override the document defaults for one slide.
pub const HF_INSTANCE_PER_SLIDE: u16 = 0x000;
/// Document defaults for slides.
pub const HF_INSTANCE_SLIDES: u16 = 0x003;
/// Document defaults for notes and handouts.
pub const HF_INSTANCE_NOTES: u16 = 0x004;

/// Longest string in bytes.
const MAX_STRING_LEN: u32 = 510;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadersFootersContainer {
    pub header: RecordHeader,
    pub atom: HeadersFootersAtom,
    pub user_date: Option<CString<PrintableString>>,
    /// Notes and handouts only
    pub header_text: Option<CString<TextString>>,
    pub footer_text: Option<CString<TextString>>,
}

impl HeadersFootersContainer {
    pub const fn spec_for(instance: u16) -> RecordSpec {
        Self::SPEC.with_instance(InstanceRule::Exactly(instance))
    }

    /// Decode a container that must carry `instance`.
    pub fn decode_instance(reader: &mut RecordReader<'_>, instance: u16) -> Result<Self> {
        reader.read_record(&Self::spec_for(instance), Self::decode_payload)
    }

    /// Decode the next record if it is a container with `instance`.
    pub fn optional(reader: &mut RecordReader<'_>, instance: u16) -> Result<Option<Self>> {
        reader.read_optional_with(&Self::spec_for(instance), |r| {
            Self::decode_instance(r, instance)
        })
    }

    #[inline]
    pub fn flags(&self) -> HeadersFootersFlags {
        self.atom.flags
    }
}

impl Record for HeadersFootersContainer {
    const SPEC: RecordSpec =
        RecordSpec::container("HeadersFootersContainer", RecordType::HeadersFooters).with_instance(
            InstanceRule::OneOf(&[HF_INSTANCE_PER_SLIDE, HF_INSTANCE_SLIDES, HF_INSTANCE_NOTES]),
        );

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        Ok(Self {
            header: *header,
            atom: HeadersFootersAtom::decode(reader)?,
            user_date: CString::optional(reader, 0, Some(MAX_STRING_LEN))?,
            header_text: CString::optional(reader, 1, Some(MAX_STRING_LEN))?,
            footer_text: CString::optional(reader, 2, Some(MAX_STRING_LEN))?,
        })
    }
}
