//! Error types for ppt-records.
//!
//! Every decode failure surfaces as [`PptError::Corrupted`].

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{PptError, Result};
