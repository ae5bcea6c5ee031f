//! ppt-records - a strict decoder for binary PowerPoint (.ppt) record streams.
//!
//! A `.ppt` file is an OLE2 compound file whose `PowerPoint Document` stream is
//! a sequence of nested records. Every record starts with an 8-byte header
//! (version, instance, type code, payload length) and its payload is either a
//! list of child records (a container) or plain fields (an atom).
//!
//! This crate decodes those records into an immutable typed tree. Decoding is
//! validating: every header field is checked against the constraints of the
//! record being read, and every record must consume exactly the number of
//! bytes its header declares. Any violation is reported as
//! [`PptError::Corrupted`](common::error::PptError::Corrupted).
//!
//! Extracting the streams from the compound file is left to the caller.
//!
//! # Example - Decoding a single record
//!
//! ```
//! use ppt_records::ppt::atoms::EndDocumentAtom;
//! use ppt_records::ppt::records::{Record, RecordReader};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bytes = [0x00, 0x00, 0xEA, 0x03, 0x00, 0x00, 0x00, 0x00];
//! let mut reader = RecordReader::new(&bytes);
//! let atom = EndDocumentAtom::decode(&mut reader)?;
//! assert_eq!(atom.header.length, 0);
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Loading a presentation
//!
//! ```no_run
//! use ppt_records::ppt::{DecodeOptions, Presentation};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let current_user: Vec<u8> = Vec::new();
//! # let document: Vec<u8> = Vec::new();
//! let presentation = Presentation::load(&current_user, &document, DecodeOptions::default())?;
//! println!("{} slides", presentation.slides.len());
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod ppt;

pub use common::error::{PptError, Result};
