//! Atoms of the external object list.

use crate::common::error::{PptError, Result};
use crate::ppt::consts::RecordType;
use crate::ppt::records::{LengthRule, Record, RecordHeader, RecordReader, RecordSpec};

/// Seed for the ids of new external objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExObjListAtom {
    pub header: RecordHeader,
    /// Greater than every id in use, at least 1
    pub id_seed: i32,
}

impl Record for ExObjListAtom {
    const SPEC: RecordSpec = RecordSpec::atom("ExObjListAtom", RecordType::ExObjListAtom)
        .with_length(LengthRule::Exactly(4));

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        let offset = reader.position();
        let id_seed = reader.read_i32()?;
        if id_seed < 1 {
            return Err(PptError::corrupted(offset, format!("object id seed {id_seed} below 1")));
        }
        Ok(Self {
            header: *header,
            id_seed,
        })
    }
}

/// Id of a hyperlink, referenced from interactive info atoms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExHyperlinkAtom {
    pub header: RecordHeader,
    pub ex_hyperlink_id: u32,
}

impl Record for ExHyperlinkAtom {
    const SPEC: RecordSpec = RecordSpec::atom("ExHyperlinkAtom", RecordType::ExHyperlinkAtom)
        .with_length(LengthRule::Exactly(4));

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        Ok(Self {
            header: *header,
            ex_hyperlink_id: reader.read_u32()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ppt::records::test_support::{atom, u32s};

    #[test]
    fn test_id_seed() {
        let bytes = atom(RecordType::ExObjListAtom, 0, &u32s(&[5]));
        let parsed = ExObjListAtom::decode(&mut RecordReader::new(&bytes)).unwrap();
        assert_eq!(parsed.id_seed, 5);

        let bytes = atom(RecordType::ExObjListAtom, 0, &u32s(&[0]));
        assert!(ExObjListAtom::decode(&mut RecordReader::new(&bytes)).is_err());
    }

    #[test]
    fn test_hyperlink_atom() {
        let bytes = atom(RecordType::ExHyperlinkAtom, 0, &u32s(&[9]));
        let parsed = ExHyperlinkAtom::decode(&mut RecordReader::new(&bytes)).unwrap();
        assert_eq!(parsed.ex_hyperlink_id, 9);
    }
}
