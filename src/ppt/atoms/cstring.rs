//! The `CString` atom: a UTF-16 string whose meaning depends on its instance.

use crate::common::error::Result;
use crate::ppt::consts::RecordType;
use crate::ppt::records::{InstanceRule, LengthRule, Record, RecordHeader, RecordReader, RecordSpec};
use crate::ppt::types::StringKind;

/// A `CString` atom holding a string of kind `K`.
///
/// The containing record decides which instance is expected at each position
/// and how long the string may be; see [`CString::decode_instance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CString<K> {
    pub header: RecordHeader,
    pub value: K,
}

impl<K: StringKind> CString<K> {
    /// Header constraints for a string with the given instance and maximum byte length.
    pub const fn spec(instance: u16, max_len: Option<u32>) -> RecordSpec {
        let length = match max_len {
            Some(max) => LengthRule::EvenAtMost(max),
            None => LengthRule::Even,
        };
        Self::SPEC
            .with_instance(InstanceRule::Exactly(instance))
            .with_length(length)
    }

    fn decode_with(reader: &mut RecordReader<'_>, spec: &RecordSpec) -> Result<Self> {
        reader.read_record(spec, Self::decode_payload)
    }

    /// Decode a string that must carry `instance`.
    pub fn decode_instance(
        reader: &mut RecordReader<'_>,
        instance: u16,
        max_len: Option<u32>,
    ) -> Result<Self> {
        Self::decode_with(reader, &Self::spec(instance, max_len))
    }

    /// Decode the next record if it is a `CString` with `instance`.
    pub fn optional(
        reader: &mut RecordReader<'_>,
        instance: u16,
        max_len: Option<u32>,
    ) -> Result<Option<Self>> {
        let spec = Self::spec(instance, max_len);
        reader.read_optional_with(&spec, |r| Self::decode_with(r, &spec))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.value.as_ref()
    }
}

impl<K: StringKind> Record for CString<K> {
    const SPEC: RecordSpec = RecordSpec::atom("CString", RecordType::CString)
        .with_instance(InstanceRule::Any)
        .with_length(LengthRule::Even);

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        Ok(Self {
            header: *header,
            value: K::decode(reader, header.length as usize)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ppt::records::test_support::{atom, cstring};
    use crate::ppt::types::{PrintableString, TextString};

    #[test]
    fn test_any_instance_through_record() {
        let bytes = cstring(7, "Notes");
        let s = CString::<PrintableString>::decode(&mut RecordReader::new(&bytes)).unwrap();
        assert_eq!(s.header.instance, 7);
        assert_eq!(s.as_str(), "Notes");
    }

    #[test]
    fn test_instance_and_bound() {
        let bytes = cstring(2, "Footer");
        let s = CString::<TextString>::decode_instance(&mut RecordReader::new(&bytes), 2, Some(510))
            .unwrap();
        assert_eq!(s.as_str(), "Footer");

        assert!(
            CString::<TextString>::decode_instance(&mut RecordReader::new(&bytes), 1, Some(510))
                .is_err()
        );
        assert!(
            CString::<TextString>::decode_instance(&mut RecordReader::new(&bytes), 2, Some(10))
                .is_err()
        );
    }

    #[test]
    fn test_optional_skips_other_instance() {
        let bytes = cstring(1, "Header");
        let mut reader = RecordReader::new(&bytes);
        assert!(CString::<TextString>::optional(&mut reader, 0, None).unwrap().is_none());
        assert_eq!(reader.position(), 0);
        let s = CString::<TextString>::optional(&mut reader, 1, None).unwrap();
        assert_eq!(s.map(|s| s.value.into_string()).as_deref(), Some("Header"));
    }

    #[test]
    fn test_odd_length_rejected() {
        let bytes = atom(RecordType::CString, 0, &[0x41, 0x00, 0x42]);
        assert!(CString::<PrintableString>::decode(&mut RecordReader::new(&bytes)).is_err());
    }
}
