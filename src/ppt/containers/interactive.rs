//! Interactive info containers: actions on click and on mouse over.

use crate::common::error::Result;
use crate::ppt::atoms::{CString, InteractiveInfoAtom};
use crate::ppt::consts::RecordType;
use crate::ppt::records::{
    InstanceDispatch, InstanceRule, Record, RecordHeader, RecordReader, RecordSpec,
};
use crate::ppt::types::PrintableString;

/// Instance of the macro name string.
const MACRO_NAME_INSTANCE: u16 = 0x002;
/// Longest macro name in bytes.
const MAX_MACRO_NAME_LEN: u32 = 0x40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractiveInfoContainer {
    pub header: RecordHeader,
    pub atom: InteractiveInfoAtom,
    /// Macro run by the action, present only for macro actions
    pub macro_name: Option<CString<PrintableString>>,
}

impl Record for InteractiveInfoContainer {
    const SPEC: RecordSpec =
        RecordSpec::container("InteractiveInfoContainer", RecordType::InteractiveInfo)
            .with_instance(InstanceRule::OneOf(&[0, 1]));

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        let atom = InteractiveInfoAtom::decode(reader)?;
        let macro_name = reader.read_trailing(|r| {
            CString::decode_instance(r, MACRO_NAME_INSTANCE, Some(MAX_MACRO_NAME_LEN))
        })?;
        Ok(Self {
            header: *header,
            atom,
            macro_name,
        })
    }
}

/// Interactive info with the trigger it responds to, chosen by instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractiveInfo {
    MouseClick(InteractiveInfoContainer),
    MouseOver(InteractiveInfoContainer),
}

impl InteractiveInfo {
    const DISPATCH: InstanceDispatch<Self> = InstanceDispatch {
        name: "InteractiveInfoContainer",
        record_type: RecordType::InteractiveInfo,
        cases: &[
            (0, |r| InteractiveInfoContainer::decode(r).map(Self::MouseClick)),
            (1, |r| InteractiveInfoContainer::decode(r).map(Self::MouseOver)),
        ],
    };

    pub fn decode(reader: &mut RecordReader<'_>) -> Result<Self> {
        Self::DISPATCH.decode(reader)
    }

    pub fn container(&self) -> &InteractiveInfoContainer {
        match self {
            Self::MouseClick(info) | Self::MouseOver(info) => info,
        }
    }
}
