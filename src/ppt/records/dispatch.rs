//! Decode-time selection of the next record's shape.
//!
//! Three rules appear in the format and each dispatch site uses exactly one:
//!
//! - [`TypeDispatch`]: the type code of the next header picks the decoder.
//! - [`InstanceDispatch`]: one type code, the instance field picks the decoder.
//! - [`TagDispatch`]: a name string stored inside the record picks the decoder.
//!
//! Dispatch tables are plain data. Peeking never consumes input; the chosen
//! decoder always starts from the record header.

use super::descriptor::RecordSpec;
use super::diagnostics::Diagnostic;
use super::reader::RecordReader;
use crate::common::error::{PptError, Result};
use crate::ppt::consts::RecordType;

/// Decoder for one dispatch case, starting at a record header.
pub type DecodeFn<T> = fn(&mut RecordReader<'_>) -> Result<T>;

/// Selects a decoder by the type code of the next record.
///
/// The case list is closed: a known type code that has no case is corrupt
/// input at this position. Records with an unmapped type code go to
/// `unknown` when the position tolerates extension records, and are
/// rejected otherwise.
pub struct TypeDispatch<T: 'static> {
    pub name: &'static str,
    pub cases: &'static [(RecordType, DecodeFn<T>)],
    pub unknown: Option<DecodeFn<T>>,
}

impl<T> TypeDispatch<T> {
    pub fn decode(&self, reader: &mut RecordReader<'_>) -> Result<T> {
        let offset = reader.position();
        let header = reader.peek_header()?;

        if header.is_known() {
            if let Some((_, decode)) = self
                .cases
                .iter()
                .find(|(record_type, _)| *record_type == header.record_type)
            {
                return decode(reader);
            }
        } else if let Some(decode) = self.unknown {
            return decode(reader);
        }

        Err(PptError::corrupted(
            offset,
            format!(
                "{}: record type {:#06x} is not allowed here",
                self.name, header.raw_type
            ),
        ))
    }

    /// Decode children of the current record until its payload is exhausted.
    pub fn decode_all(&self, reader: &mut RecordReader<'_>) -> Result<Vec<T>> {
        reader.read_until_end(|r| self.decode(r))
    }
}

/// Selects a decoder by the instance of the next record, whose type is fixed.
pub struct InstanceDispatch<T: 'static> {
    pub name: &'static str,
    pub record_type: RecordType,
    pub cases: &'static [(u16, DecodeFn<T>)],
}

impl<T> InstanceDispatch<T> {
    pub fn decode(&self, reader: &mut RecordReader<'_>) -> Result<T> {
        let offset = reader.position();
        let header = reader.peek_header()?;

        if header.record_type != self.record_type {
            return Err(PptError::corrupted(
                offset,
                format!(
                    "{}: expected record type {:#06x}, found {:#06x}",
                    self.name,
                    self.record_type.code(),
                    header.raw_type
                ),
            ));
        }

        match self
            .cases
            .iter()
            .find(|(instance, _)| *instance == header.instance)
        {
            Some((_, decode)) => decode(reader),
            None => Err(PptError::corrupted(
                offset,
                format!("{}: instance {:#05x} is not allowed here", self.name, header.instance),
            )),
        }
    }
}

/// Selects a decoder by a name stored at the start of the record's payload.
///
/// `tag` reads the name from inside the record (positioned just after the
/// outer header); the reader is then rewound and the matching decoder reads
/// the whole record again, name included. Names without a case are not an
/// error: they go to `fallback`, which is expected to keep the bytes.
pub struct TagDispatch<T: 'static> {
    /// Constraints of the outer record
    pub spec: RecordSpec,
    pub tag: DecodeFn<String>,
    pub cases: &'static phf::Map<&'static str, DecodeFn<T>>,
    pub fallback: DecodeFn<T>,
}

impl<T> TagDispatch<T> {
    pub fn decode(&self, reader: &mut RecordReader<'_>) -> Result<T> {
        let offset = reader.position();
        let name = reader.peek_into(&self.spec, self.tag)?;

        match self.cases.get(name.as_str()) {
            Some(decode) => decode(reader),
            None => {
                reader.report(Diagnostic::UnrecognizedTag { offset, name });
                (self.fallback)(reader)
            },
        }
    }
}
