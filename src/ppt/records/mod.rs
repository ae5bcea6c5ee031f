//! Record-level decoding machinery.
//!
//! - [`RecordHeader`]: the 8-byte prefix of every record
//! - [`RecordSpec`]: declarative header constraints of one record type
//! - [`RecordReader`]: the decode context (cursor, record boundaries, ceilings, diagnostics)
//! - [`Record`]: implemented by every typed record
//! - [`TypeDispatch`], [`InstanceDispatch`], [`TagDispatch`]: variant selection
//! - [`RawRecord`]: a record kept as opaque bytes

pub mod descriptor;
pub mod diagnostics;
pub mod dispatch;
pub mod header;
pub mod raw;
pub mod reader;

#[cfg(test)]
pub(crate) mod test_support;

pub use descriptor::{InstanceRule, LengthRule, RecordSpec, VersionRule};
pub use diagnostics::{Diagnostic, DiagnosticSink, LogSink};
pub use dispatch::{DecodeFn, InstanceDispatch, TagDispatch, TypeDispatch};
pub use header::RecordHeader;
pub use raw::RawRecord;
pub use reader::RecordReader;

use crate::common::error::Result;

/// A record type with a fixed set of header constraints.
///
/// Implementors describe their header in [`SPEC`](Record::SPEC) and decode
/// only the payload; [`decode`](Record::decode) wraps that with header
/// validation and the exact-length check.
pub trait Record: Sized {
    const SPEC: RecordSpec;

    /// Decode the payload. The reader is positioned just after the header and
    /// refuses reads past the end of this record.
    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self>;

    fn decode(reader: &mut RecordReader<'_>) -> Result<Self> {
        reader.read_record(&Self::SPEC, Self::decode_payload)
    }
}
