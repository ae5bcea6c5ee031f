//! Colour scheme atom.

use crate::common::error::Result;
use crate::ppt::consts::RecordType;
use crate::ppt::records::{InstanceRule, LengthRule, Record, RecordHeader, RecordReader, RecordSpec};
use crate::ppt::types::ColorStruct;

/// Instance of the scheme a slide, notes page or master uses.
pub const SCHEME_INSTANCE_SLIDE: u16 = 0x001;
/// Instance of a scheme in a master's list of extra schemes.
pub const SCHEME_INSTANCE_LIST: u16 = 0x006;

/// The eight colours of a colour scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSchemeAtom {
    pub header: RecordHeader,
    pub background: ColorStruct,
    pub text_and_lines: ColorStruct,
    pub shadow: ColorStruct,
    pub title_text: ColorStruct,
    pub fill: ColorStruct,
    pub accent1: ColorStruct,
    pub accent2: ColorStruct,
    pub accent3: ColorStruct,
}

impl ColorSchemeAtom {
    /// Header constraints for a scheme with the given instance only.
    pub const fn spec_for(instance: u16) -> RecordSpec {
        Self::SPEC.with_instance(InstanceRule::Exactly(instance))
    }

    /// Decode a scheme that must carry `instance`.
    pub fn decode_instance(reader: &mut RecordReader<'_>, instance: u16) -> Result<Self> {
        reader.read_record(&Self::spec_for(instance), Self::decode_payload)
    }

    pub fn colors(&self) -> [ColorStruct; 8] {
        [
            self.background,
            self.text_and_lines,
            self.shadow,
            self.title_text,
            self.fill,
            self.accent1,
            self.accent2,
            self.accent3,
        ]
    }
}

impl Record for ColorSchemeAtom {
    const SPEC: RecordSpec = RecordSpec::atom("ColorSchemeAtom", RecordType::ColorSchemeAtom)
        .with_instance(InstanceRule::OneOf(&[SCHEME_INSTANCE_SLIDE, SCHEME_INSTANCE_LIST]))
        .with_length(LengthRule::Exactly(0x20));

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        Ok(Self {
            header: *header,
            background: ColorStruct::decode(reader)?,
            text_and_lines: ColorStruct::decode(reader)?,
            shadow: ColorStruct::decode(reader)?,
            title_text: ColorStruct::decode(reader)?,
            fill: ColorStruct::decode(reader)?,
            accent1: ColorStruct::decode(reader)?,
            accent2: ColorStruct::decode(reader)?,
            accent3: ColorStruct::decode(reader)?,
        })
    }
}
