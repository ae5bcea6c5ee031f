//! Binary PowerPoint record decoding.
//!
//! - [`records`]: headers, the reader, dispatchers and opaque records
//! - [`types`]: scalar fields shared across records
//! - [`atoms`] and [`containers`]: the typed record tree
//! - [`persist`]: persist id resolution
//! - [`presentation`]: loading a whole document through the user edit chain

pub mod atoms;
pub mod consts;
pub mod containers;
pub mod options;
pub mod persist;
pub mod presentation;
pub mod records;
pub mod types;

pub use consts::RecordType;
pub use options::DecodeOptions;
pub use presentation::Presentation;
pub use records::{
    Diagnostic, DiagnosticSink, LogSink, RawRecord, Record, RecordHeader, RecordReader,
};
