//! Declarative header constraints.
//!
//! Each record type states the version, instance and length it accepts as a
//! [`RecordSpec`]. The reader checks the spec before any payload byte is read,
//! so the per-record decode functions only deal with payload fields.

use super::header::RecordHeader;
use crate::common::error::{PptError, Result};
use crate::ppt::consts::{CONTAINER_VERSION, RecordType};

/// Accepted values of the version nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionRule {
    Exactly(u8),
    OneOf(&'static [u8]),
}

impl VersionRule {
    pub fn accepts(&self, version: u8) -> bool {
        match *self {
            VersionRule::Exactly(expected) => version == expected,
            VersionRule::OneOf(allowed) => allowed.contains(&version),
        }
    }
}

/// Accepted values of the instance field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceRule {
    Any,
    Exactly(u16),
    OneOf(&'static [u16]),
    /// Inclusive range
    Range(u16, u16),
}

impl InstanceRule {
    pub fn accepts(&self, instance: u16) -> bool {
        match *self {
            InstanceRule::Any => true,
            InstanceRule::Exactly(expected) => instance == expected,
            InstanceRule::OneOf(allowed) => allowed.contains(&instance),
            InstanceRule::Range(low, high) => (low..=high).contains(&instance),
        }
    }
}

/// Accepted values of the length field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthRule {
    Any,
    Exactly(u32),
    OneOf(&'static [u32]),
    Even,
    AtMost(u32),
    /// Even and at most the given value
    EvenAtMost(u32),
    AtLeast(u32),
    MultipleOf(u32),
}

impl LengthRule {
    pub fn accepts(&self, length: u32) -> bool {
        match *self {
            LengthRule::Any => true,
            LengthRule::Exactly(expected) => length == expected,
            LengthRule::OneOf(allowed) => allowed.contains(&length),
            LengthRule::Even => length % 2 == 0,
            LengthRule::AtMost(max) => length <= max,
            LengthRule::EvenAtMost(max) => length % 2 == 0 && length <= max,
            LengthRule::AtLeast(min) => length >= min,
            LengthRule::MultipleOf(unit) => unit != 0 && length % unit == 0,
        }
    }
}

/// Header constraints of one record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSpec {
    /// Name used in error messages and traces
    pub name: &'static str,
    pub record_type: RecordType,
    pub version: VersionRule,
    pub instance: InstanceRule,
    pub length: LengthRule,
}

impl RecordSpec {
    /// An atom: version 0, instance 0, any length.
    pub const fn atom(name: &'static str, record_type: RecordType) -> Self {
        Self {
            name,
            record_type,
            version: VersionRule::Exactly(0),
            instance: InstanceRule::Exactly(0),
            length: LengthRule::Any,
        }
    }

    /// A container: version `0xF`, instance 0, any length.
    pub const fn container(name: &'static str, record_type: RecordType) -> Self {
        Self {
            name,
            record_type,
            version: VersionRule::Exactly(CONTAINER_VERSION),
            instance: InstanceRule::Exactly(0),
            length: LengthRule::Any,
        }
    }

    pub const fn with_version(self, version: VersionRule) -> Self {
        Self { version, ..self }
    }

    pub const fn with_instance(self, instance: InstanceRule) -> Self {
        Self { instance, ..self }
    }

    pub const fn with_length(self, length: LengthRule) -> Self {
        Self { length, ..self }
    }

    /// `true` if a peeked header selects this record: same type, accepted instance.
    pub fn selects(&self, header: &RecordHeader) -> bool {
        header.record_type == self.record_type && self.instance.accepts(header.instance)
    }

    /// Check every header field. `offset` is the position of the header.
    pub fn validate(&self, header: &RecordHeader, offset: usize) -> Result<()> {
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
        if !self.version.accepts(header.version) {
            return Err(PptError::corrupted(
                offset,
                format!(
                    "{}: version {:#x} not accepted ({:?})",
                    self.name, header.version, self.version
                ),
            ));
        }
        if !self.instance.accepts(header.instance) {
            return Err(PptError::corrupted(
                offset,
                format!(
                    "{}: instance {:#05x} not accepted ({:?})",
                    self.name, header.instance, self.instance
                ),
            ));
        }
        if !self.length.accepts(header.length) {
            return Err(PptError::corrupted(
                offset,
                format!(
                    "{}: length {:#x} not accepted ({:?})",
                    self.name, header.length, self.length
                ),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(version: u8, instance: u16, record_type: RecordType, length: u32) -> RecordHeader {
        RecordHeader {
            version,
            instance,
            record_type,
            raw_type: record_type.code(),
            length,
        }
    }

    const TEXT_HEADER: RecordSpec = RecordSpec::atom("TextHeaderAtom", RecordType::TextHeaderAtom)
        .with_length(LengthRule::Exactly(4));

    #[test]
    fn test_atom_accepts_matching_header() {
        let h = header(0, 0, RecordType::TextHeaderAtom, 4);
        assert!(TEXT_HEADER.validate(&h, 0).is_ok());
    }

    #[test]
    fn test_each_field_is_checked() {
        let bad = [
            header(0, 0, RecordType::TextCharsAtom, 4),
            header(0xF, 0, RecordType::TextHeaderAtom, 4),
            header(0, 1, RecordType::TextHeaderAtom, 4),
            header(0, 0, RecordType::TextHeaderAtom, 6),
        ];
        for h in bad {
            let err = TEXT_HEADER.validate(&h, 0x40).unwrap_err();
            assert_eq!(err.offset(), 0x40);
            assert!(err.reason().starts_with("TextHeaderAtom"));
        }
    }

    #[test]
    fn test_length_rules() {
        assert!(LengthRule::Even.accepts(0));
        assert!(!LengthRule::Even.accepts(3));
        assert!(LengthRule::EvenAtMost(510).accepts(510));
        assert!(!LengthRule::EvenAtMost(510).accepts(512));
        assert!(LengthRule::MultipleOf(6).accepts(12));
        assert!(!LengthRule::MultipleOf(6).accepts(8));
        assert!(!LengthRule::MultipleOf(0).accepts(0));
        assert!(LengthRule::OneOf(&[0x1C, 0x20]).accepts(0x20));
        assert!(LengthRule::AtLeast(4).accepts(4));
    }

    #[test]
    fn test_selects_ignores_version_and_length() {
        let spec = RecordSpec::atom("CString", RecordType::CString)
            .with_instance(InstanceRule::Exactly(2));
        assert!(spec.selects(&header(0xF, 2, RecordType::CString, 7)));
        assert!(!spec.selects(&header(0, 1, RecordType::CString, 8)));
    }
}
