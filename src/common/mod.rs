//! Format-independent building blocks: the binary cursor and the error type.

pub mod binary;
pub mod error;

pub use binary::{BitReader, BitWord, ByteCursor};
pub use error::{PptError, Result};
