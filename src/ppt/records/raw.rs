//! Records kept as header plus undecoded payload.

use super::descriptor::RecordSpec;
use super::header::RecordHeader;
use super::reader::RecordReader;
use crate::common::error::Result;
use crate::ppt::consts::RecordType;
use bytes::Bytes;

/// A record whose payload is preserved byte for byte.
///
/// Used for type codes missing from the known table and for known records
/// whose payload is an embedded sub-format (OfficeArt drawings, OLE storages,
/// text style runs and the like).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub header: RecordHeader,
    pub payload: Bytes,
}

impl RawRecord {
    /// Take whatever record comes next. Only the length is checked.
    pub fn decode(reader: &mut RecordReader<'_>) -> Result<Self> {
        let offset = reader.position();
        let header = reader.read_header()?;
        reader.read_body(offset, &header, "record", Self::take_payload)
    }

    /// Take the next record after validating its header against `spec`.
    pub fn decode_with(reader: &mut RecordReader<'_>, spec: &RecordSpec) -> Result<Self> {
        reader.read_record(spec, Self::take_payload)
    }

    /// Take the next record only if `spec` selects it.
    pub fn optional(reader: &mut RecordReader<'_>, spec: &RecordSpec) -> Result<Option<Self>> {
        reader.read_optional_with(spec, |r| Self::decode_with(r, spec))
    }

    fn take_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        let payload = reader.read_bytes(header.length as usize)?;
        Ok(Self {
            header: *header,
            payload: Bytes::copy_from_slice(payload),
        })
    }

    #[inline]
    pub fn record_type(&self) -> RecordType {
        self.header.record_type
    }

    /// Size of the record including its header.
    #[inline]
    pub fn total_len(&self) -> usize {
        crate::ppt::consts::RECORD_HEADER_SIZE + self.payload.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ppt::records::test_support::{atom, record};

    #[test]
    fn test_unknown_record_is_preserved() {
        let bytes = record(0x3, 0x12, 0xBEEF, &[1, 2, 3]);
        let mut diagnostics = Vec::new();
        let raw = {
            let mut reader = RecordReader::new(&bytes).with_sink(&mut diagnostics);
            RawRecord::decode(&mut reader).unwrap()
        };
        assert_eq!(raw.record_type(), RecordType::Unknown);
        assert_eq!(raw.header.raw_type, 0xBEEF);
        assert_eq!(raw.header.version, 0x3);
        assert_eq!(raw.header.instance, 0x12);
        assert_eq!(&raw.payload[..], &[1, 2, 3]);
        assert_eq!(raw.total_len(), bytes.len());
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_decode_with_validates_header() {
        let spec = RecordSpec::atom("Drawing", RecordType::Drawing);
        let bytes = atom(RecordType::Drawing, 0, &[0xAA; 5]);
        let raw = RawRecord::decode_with(&mut RecordReader::new(&bytes), &spec).unwrap();
        assert_eq!(raw.payload.len(), 5);

        let bytes = atom(RecordType::DrawingGroup, 0, &[]);
        assert!(RawRecord::decode_with(&mut RecordReader::new(&bytes), &spec).is_err());
    }
}
