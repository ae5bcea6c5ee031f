//! Action settings of a shape or text range.

use crate::common::binary::BitReader;
use crate::common::error::Result;
use crate::ppt::consts::RecordType;
use crate::ppt::records::{LengthRule, Record, RecordHeader, RecordReader, RecordSpec};
use crate::ppt::types::{InteractiveInfoAction, InteractiveInfoJump, LinkTo};

/// Flag byte of an [`InteractiveInfoAtom`], low bit first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractiveInfoFlags {
    /// Button is highlighted when clicked
    pub animated: bool,
    /// Playing sounds stop
    pub stop_sound: bool,
    /// Return from a custom show to the calling slide
    pub custom_show_return: bool,
    pub visited: bool,
    /// Ignored
    pub reserved: u8,
}

impl InteractiveInfoFlags {
    pub fn from_bits(mut bits: BitReader) -> Self {
        Self {
            animated: bits.read_bool(),
            stop_sound: bits.read_bool(),
            custom_show_return: bits.read_bool(),
            visited: bits.read_bool(),
            reserved: bits.read(4) as u8,
        }
    }
}

/// What happens when a shape or text range is clicked or hovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractiveInfoAtom {
    pub header: RecordHeader,
    /// Sound id played on activation, 0 for none
    pub sound_id_ref: u32,
    /// Hyperlink id, used by the hyperlink, jump and custom show actions
    pub ex_hyperlink_id_ref: u32,
    pub action: InteractiveInfoAction,
    pub ole_verb: u8,
    pub jump: InteractiveInfoJump,
    pub flags: InteractiveInfoFlags,
    pub hyperlink_type: LinkTo,
    pub unused: [u8; 3],
}

impl Record for InteractiveInfoAtom {
    const SPEC: RecordSpec =
        RecordSpec::atom("InteractiveInfoAtom", RecordType::InteractiveInfoAtom)
            .with_length(LengthRule::Exactly(0x10));

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        let sound_id_ref = reader.read_u32()?;
        let ex_hyperlink_id_ref = reader.read_u32()?;
        let action = InteractiveInfoAction::decode(reader)?;
        let ole_verb = reader.read_u8()?;
        let jump = InteractiveInfoJump::decode(reader)?;
        let flags = InteractiveInfoFlags::from_bits(reader.read_bits::<u8>()?);
        let hyperlink_type = LinkTo::decode(reader)?;
        let mut unused = [0u8; 3];
        unused.copy_from_slice(reader.read_bytes(3)?);

        Ok(Self {
            header: *header,
            sound_id_ref,
            ex_hyperlink_id_ref,
            action,
            ole_verb,
            jump,
            flags,
            hyperlink_type,
            unused,
        })
    }
}
