//! Sound collection atoms.

use crate::common::error::Result;
use crate::ppt::consts::RecordType;
use crate::ppt::records::{LengthRule, Record, RecordHeader, RecordReader, RecordSpec};
use bytes::Bytes;

/// Seed for the ids of new sounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundCollectionAtom {
    pub header: RecordHeader,
    pub sound_id_seed: i32,
}

impl Record for SoundCollectionAtom {
    const SPEC: RecordSpec =
        RecordSpec::atom("SoundCollectionAtom", RecordType::SoundCollectionAtom)
            .with_length(LengthRule::Exactly(4));

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        Ok(Self {
            header: *header,
            sound_id_seed: reader.read_i32()?,
        })
    }
}

/// Embedded sound file, kept as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundDataBlob {
    pub header: RecordHeader,
    pub data: Bytes,
}

impl Record for SoundDataBlob {
    const SPEC: RecordSpec = RecordSpec::atom("SoundDataBlob", RecordType::SoundDataBlob);

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        let data = reader.read_bytes(header.length as usize)?;
        Ok(Self {
            header: *header,
            data: Bytes::copy_from_slice(data),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ppt::records::test_support::{atom, u32s};

    #[test]
    fn test_sound_atoms() {
        let bytes = atom(RecordType::SoundCollectionAtom, 0, &u32s(&[3]));
        let parsed = SoundCollectionAtom::decode(&mut RecordReader::new(&bytes)).unwrap();
        assert_eq!(parsed.sound_id_seed, 3);

        let bytes = atom(RecordType::SoundDataBlob, 0, b"RIFF....WAVE");
        let blob = SoundDataBlob::decode(&mut RecordReader::new(&bytes)).unwrap();
        assert_eq!(blob.data.len(), 12);
    }
}
