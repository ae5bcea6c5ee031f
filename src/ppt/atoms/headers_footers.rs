//! Header and footer settings atom.

use crate::common::error::{PptError, Result};
use crate::ppt::consts::RecordType;
use crate::ppt::records::{LengthRule, Record, RecordHeader, RecordReader, RecordSpec};
use crate::ppt::types::HeadersFootersFlags;

/// Highest date format index.
const MAX_FORMAT_ID: i16 = 12;

/// Visibility of header and footer elements plus the date format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadersFootersAtom {
    pub header: RecordHeader,
    /// Index of the automatic date format, 0 through 12
    pub format_id: i16,
    pub flags: HeadersFootersFlags,
}

impl Record for HeadersFootersAtom {
    const SPEC: RecordSpec = RecordSpec::atom("HeadersFootersAtom", RecordType::HeadersFootersAtom)
        .with_length(LengthRule::Exactly(4));

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        let offset = reader.position();
        let format_id = reader.read_i16()?;
        if !(0..=MAX_FORMAT_ID).contains(&format_id) {
            return Err(PptError::corrupted(
                offset,
                format!("date format {format_id} outside 0..={MAX_FORMAT_ID}"),
            ));
        }
        Ok(Self {
            header: *header,
            format_id,
            flags: HeadersFootersFlags::from_bits_retain(reader.read_u16()?),
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::ppt::records::test_support::atom;

    pub(crate) fn headers_footers_atom_bytes(format_id: i16, flags: u16) -> Vec<u8> {
        let mut payload = format_id.to_le_bytes().to_vec();
        payload.extend_from_slice(&flags.to_le_bytes());
        atom(RecordType::HeadersFootersAtom, 0, &payload)
    }

    #[test]
    fn test_headers_footers_atom() {
        let bytes = headers_footers_atom_bytes(4, 0x0029);
        let parsed = HeadersFootersAtom::decode(&mut RecordReader::new(&bytes)).unwrap();
        assert_eq!(parsed.format_id, 4);
        assert!(parsed.flags.contains(HeadersFootersFlags::HAS_DATE));
        assert!(parsed.flags.contains(HeadersFootersFlags::HAS_SLIDE_NUMBER));
        assert!(parsed.flags.contains(HeadersFootersFlags::HAS_FOOTER));
        assert!(!parsed.flags.contains(HeadersFootersFlags::HAS_HEADER));
    }

    #[test]
    fn test_format_id_range() {
        let bytes = headers_footers_atom_bytes(13, 0);
        let err = HeadersFootersAtom::decode(&mut RecordReader::new(&bytes)).unwrap_err();
        assert_eq!(err.offset(), 8);

        let bytes = headers_footers_atom_bytes(-1, 0);
        assert!(HeadersFootersAtom::decode(&mut RecordReader::new(&bytes)).is_err());
    }
}
