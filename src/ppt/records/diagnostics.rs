//! Non-fatal findings reported while decoding.

use std::fmt;

/// Something worth reporting that does not stop decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A record header carried a type code missing from the known table.
    UnknownRecordType {
        offset: usize,
        raw_type: u16,
        length: u32,
    },
    /// A binary tag carried a name without a dedicated decoder; its bytes were kept opaque.
    UnrecognizedTag { offset: usize, name: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownRecordType {
                offset,
                raw_type,
                length,
            } => write!(
                f,
                "unknown record type {raw_type:#06x} ({length} bytes) at offset {offset:#x}"
            ),
            Diagnostic::UnrecognizedTag { offset, name } => {
                write!(f, "unrecognized binary tag {name:?} at offset {offset:#x}")
            },
        }
    }
}

/// Receiver of [`Diagnostic`]s.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Forwards diagnostics to the `log` facade as warnings.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        log::warn!("{diagnostic}");
    }
}
