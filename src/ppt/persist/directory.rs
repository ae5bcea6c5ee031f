//! Persist directory: persist id to stream offset maps.
//!
//! Every save appends a `PersistDirectoryAtom` listing the objects it wrote.
//! The effective map is the union over the whole user edit chain, with the
//! newest edit winning for ids written more than once.

use crate::common::error::{PptError, Result};
use crate::ppt::consts::RecordType;
use crate::ppt::records::{LengthRule, Record, RecordHeader, RecordReader, RecordSpec};
use std::collections::BTreeMap;

/// Largest value of the 20-bit persist id field.
const MAX_PERSIST_ID: u32 = 0x000F_FFFF;

/// A run of consecutive persist ids starting at `persist_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistDirectoryEntry {
    pub persist_id: u32,
    /// Stream offset of each id in the run
    pub offsets: Vec<u32>,
}

impl PersistDirectoryEntry {
    fn decode(reader: &mut RecordReader<'_>) -> Result<Self> {
        let offset = reader.position();
        let mut bits = reader.read_bits::<u32>()?;
        let persist_id = bits.read(20);
        let count = bits.read(12);

        if persist_id == 0 {
            return Err(PptError::corrupted(offset, "persist id 0 is reserved"));
        }
        if count > 0 && persist_id + count - 1 > MAX_PERSIST_ID {
            return Err(PptError::corrupted(
                offset,
                format!("persist ids {persist_id}+{count} overflow 20 bits"),
            ));
        }

        let offsets = (0..count)
            .map(|_| reader.read_u32())
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            persist_id,
            offsets,
        })
    }

    /// `(persist id, offset)` pairs of the run.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (self.persist_id..).zip(self.offsets.iter().copied())
    }
}

/// The persist directory written by one save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistDirectoryAtom {
    pub header: RecordHeader,
    pub entries: Vec<PersistDirectoryEntry>,
}

impl Record for PersistDirectoryAtom {
    const SPEC: RecordSpec =
        RecordSpec::atom("PersistDirectoryAtom", RecordType::PersistDirectoryAtom)
            .with_length(LengthRule::MultipleOf(4));

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        Ok(Self {
            header: *header,
            entries: reader.read_until_end(PersistDirectoryEntry::decode)?,
        })
    }
}

/// Effective persist id to offset map of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistDirectory {
    offsets: BTreeMap<u32, u32>,
}

impl PersistDirectory {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one edit's directory on top of what is already known.
    ///
    /// Call in edit order, oldest first.
    pub fn merge(&mut self, atom: &PersistDirectoryAtom) {
        for entry in &atom.entries {
            self.offsets.extend(entry.iter());
        }
    }

    /// Build the effective map from directories listed newest first, the order
    /// in which the edit chain is walked.
    pub fn from_newest_first<'a, I>(atoms: I) -> Self
    where
        I: IntoIterator<Item = &'a PersistDirectoryAtom>,
        I::IntoIter: DoubleEndedIterator,
    {
        let mut directory = Self::new();
        for atom in atoms.into_iter().rev() {
            directory.merge(atom);
        }
        directory
    }

    /// Stream offset of the object with `persist_id`.
    #[inline]
    pub fn lookup(&self, persist_id: u32) -> Option<u32> {
        self.offsets.get(&persist_id).copied()
    }

    /// Like [`lookup`](Self::lookup), but a missing id is corrupt input.
    /// `offset` locates the reference for error reporting.
    pub fn resolve(&self, persist_id: u32, offset: usize) -> Result<u32> {
        self.lookup(persist_id).ok_or_else(|| {
            PptError::corrupted(offset, format!("persist id {persist_id} is not in the directory"))
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.offsets.iter().map(|(&id, &offset)| (id, offset))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::ppt::records::test_support::{atom, u32s};
    use proptest::prelude::*;

    /// Encode runs of `(first persist id, offsets)`.
    pub(crate) fn persist_directory_bytes(runs: &[(u32, &[u32])]) -> Vec<u8> {
        let mut words = Vec::new();
        for (persist_id, offsets) in runs {
            words.push(persist_id | ((offsets.len() as u32) << 20));
            words.extend_from_slice(offsets);
        }
        atom(RecordType::PersistDirectoryAtom, 0, &u32s(&words))
    }

    fn decode(bytes: &[u8]) -> Result<PersistDirectoryAtom> {
        PersistDirectoryAtom::decode(&mut RecordReader::new(bytes))
    }

    #[test]
    fn test_entries() {
        let bytes = persist_directory_bytes(&[(1, &[0x100, 0x200]), (5, &[0x300])]);
        let parsed = decode(&bytes).unwrap();
        assert_eq!(parsed.entries.len(), 2);
        let pairs: Vec<_> = parsed.entries.iter().flat_map(|e| e.iter()).collect();
        assert_eq!(pairs, vec![(1, 0x100), (2, 0x200), (5, 0x300)]);
    }

    #[test]
    fn test_truncated_run() {
        let mut bytes = persist_directory_bytes(&[(1, &[0x100, 0x200])]);
        bytes.truncate(bytes.len() - 4);
        bytes[4] = 8;
        let err = decode(&bytes).unwrap_err();
        assert!(err.reason().contains("past the end"));
    }

    #[test]
    fn test_reserved_id() {
        let bytes = persist_directory_bytes(&[(0, &[0x100])]);
        assert!(decode(&bytes).is_err());
    }

    #[test]
    fn test_newer_edit_wins() {
        let old = decode(&persist_directory_bytes(&[(1, &[0x10, 0x20, 0x30])])).unwrap();
        let new = decode(&persist_directory_bytes(&[(2, &[0x99]), (4, &[0x40])])).unwrap();

        let directory = PersistDirectory::from_newest_first([&new, &old]);
        assert_eq!(directory.lookup(1), Some(0x10));
        assert_eq!(directory.lookup(2), Some(0x99));
        assert_eq!(directory.lookup(3), Some(0x30));
        assert_eq!(directory.lookup(4), Some(0x40));
        assert_eq!(directory.lookup(5), None);
        assert_eq!(directory.len(), 4);
        assert!(directory.resolve(5, 0).is_err());
    }

    proptest! {
        #[test]
        fn prop_merge_order(first in 1u32..1000, a in any::<u32>(), b in any::<u32>()) {
            let old = decode(&persist_directory_bytes(&[(first, &[a])])).unwrap();
            let new = decode(&persist_directory_bytes(&[(first, &[b])])).unwrap();
            let directory = PersistDirectory::from_newest_first([&new, &old]);
            prop_assert_eq!(directory.lookup(first), Some(b));
        }
    }
}
