//! Decoder configuration.

use serde::{Deserialize, Serialize};

/// Default ceiling on nested records.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Default ceiling on the number of record headers read by one reader.
pub const DEFAULT_MAX_RECORDS: usize = 1_000_000;

/// Limits applied while decoding.
///
/// The format itself nests only a handful of levels deep, but a crafted file
/// can claim arbitrary nesting or billions of empty records. Exceeding either
/// ceiling is reported as corrupted input.
///
/// # Examples
///
/// ```rust
/// use ppt_records::ppt::DecodeOptions;
///
/// let options = DecodeOptions::new()
///     .with_max_depth(16)
///     .with_max_records(10_000);
/// assert_eq!(options.max_depth, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Maximum number of records open at the same time
    pub max_depth: usize,
    /// Maximum number of record headers read in total
    pub max_records: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_records: DEFAULT_MAX_RECORDS,
        }
    }
}

impl DecodeOptions {
    /// Create options with the default ceilings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the nesting ceiling.
    #[inline]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the total record ceiling.
    #[inline]
    pub fn with_max_records(mut self, max_records: usize) -> Self {
        self.max_records = max_records;
        self
    }
}
