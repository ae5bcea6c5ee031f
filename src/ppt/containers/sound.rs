//! The document's sound collection.

use crate::common::error::Result;
use crate::ppt::atoms::{CString, SoundCollectionAtom, SoundDataBlob};
use crate::ppt::consts::RecordType;
use crate::ppt::records::{InstanceRule, Record, RecordHeader, RecordReader, RecordSpec};
use crate::ppt::types::PrintableString;

/// One sound: its name, file extension and id, plus the embedded data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundContainer {
    pub header: RecordHeader,
    pub name: CString<PrintableString>,
    /// File extension, such as `.wav`
    pub extension: CString<PrintableString>,
    /// Decimal sound id referenced by interactive info atoms
    pub sound_id: CString<PrintableString>,
    /// Id of a sound that ships with PowerPoint
    pub builtin_id: Option<CString<PrintableString>>,
    pub data: Option<SoundDataBlob>,
}

impl SoundContainer {
    pub fn id(&self) -> Option<u32> {
        self.sound_id.as_str().parse().ok()
    }
}

impl Record for SoundContainer {
    const SPEC: RecordSpec = RecordSpec::container("SoundContainer", RecordType::Sound);

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        Ok(Self {
            header: *header,
            name: CString::decode_instance(reader, 0, None)?,
            extension: CString::decode_instance(reader, 1, None)?,
            sound_id: CString::decode_instance(reader, 2, None)?,
            builtin_id: CString::optional(reader, 3, None)?,
            data: reader.read_optional::<SoundDataBlob>()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundCollectionContainer {
    pub header: RecordHeader,
    pub atom: SoundCollectionAtom,
    pub sounds: Vec<SoundContainer>,
}

impl SoundCollectionContainer {
    pub fn sound(&self, id: u32) -> Option<&SoundContainer> {
        self.sounds.iter().find(|sound| sound.id() == Some(id))
    }
}

impl Record for SoundCollectionContainer {
    const SPEC: RecordSpec =
        RecordSpec::container("SoundCollectionContainer", RecordType::SoundCollection)
            .with_instance(InstanceRule::Exactly(0x005));

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        Ok(Self {
            header: *header,
            atom: SoundCollectionAtom::decode(reader)?,
            sounds: reader.read_until_end(SoundContainer::decode)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ppt::records::test_support::{atom, container, cstring, u32s};

    fn sound_bytes(id: &str, data: Option<&[u8]>) -> Vec<u8> {
        let mut children = vec![cstring(0, "Applause"), cstring(1, ".wav"), cstring(2, id)];
        if let Some(data) = data {
            children.push(atom(RecordType::SoundDataBlob, 0, data));
        }
        container(RecordType::Sound, 0, &children)
    }

    #[test]
    fn test_collection() {
        let bytes = container(
            RecordType::SoundCollection,
            5,
            &[
                atom(RecordType::SoundCollectionAtom, 0, &u32s(&[3])),
                sound_bytes("1", Some(b"RIFF")),
                sound_bytes("2", None),
            ],
        );
        let sounds = SoundCollectionContainer::decode(&mut RecordReader::new(&bytes)).unwrap();
        assert_eq!(sounds.sounds.len(), 2);
        let first = sounds.sound(1).unwrap();
        assert_eq!(first.extension.as_str(), ".wav");
        assert_eq!(first.data.as_ref().map(|d| d.data.len()), Some(4));
        assert!(sounds.sound(2).unwrap().data.is_none());
    }

    #[test]
    fn test_collection_instance() {
        let bytes = container(
            RecordType::SoundCollection,
            0,
            &[atom(RecordType::SoundCollectionAtom, 0, &u32s(&[1]))],
        );
        assert!(SoundCollectionContainer::decode(&mut RecordReader::new(&bytes)).is_err());
    }

    #[test]
    fn test_sound_requires_id() {
        let bytes = container(RecordType::Sound, 0, &[cstring(0, "Applause"), cstring(1, ".wav")]);
        assert!(SoundContainer::decode(&mut RecordReader::new(&bytes)).is_err());
    }
}
