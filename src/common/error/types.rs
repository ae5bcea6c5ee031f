//! Error type for binary PowerPoint decoding.
//!
//! Decoding has exactly one failure kind: the input does not conform to the
//! record grammar at the point of decode. Callers never recover differently
//! based on which constraint failed, so the constraint is only described in
//! the message.
use thiserror::Error;

/// Main error type for record decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PptError {
    /// Corrupted or malformed input
    #[error("Corrupted file at offset {offset:#x}: {reason}")]
    Corrupted {
        /// Absolute stream offset where the violation was detected
        offset: usize,
        /// Human-readable description of the violated constraint
        reason: String,
    },
}

impl PptError {
    /// Build a corruption error for the given stream offset.
    #[inline]
    pub fn corrupted(offset: usize, reason: impl Into<String>) -> Self {
        PptError::Corrupted {
            offset,
            reason: reason.into(),
        }
    }

    /// Stream offset at which decoding failed.
    #[inline]
    pub fn offset(&self) -> usize {
        match self {
            PptError::Corrupted { offset, .. } => *offset,
        }
    }

    /// Description of the violated constraint.
    #[inline]
    pub fn reason(&self) -> &str {
        match self {
            PptError::Corrupted { reason, .. } => reason,
        }
    }
}

/// Result type for record decoding.
pub type Result<T> = std::result::Result<T, PptError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_offset_and_reason() {
        let err = PptError::corrupted(0x1C, "length mismatch");
        assert_eq!(err.offset(), 0x1C);
        assert_eq!(err.reason(), "length mismatch");
        assert_eq!(
            err.to_string(),
            "Corrupted file at offset 0x1c: length mismatch"
        );
    }
}
