//! External objects: hyperlinks, OLE objects, controls and media.
//!
//! Only hyperlinks are decoded. The other kinds wrap OLE storages or media
//! references and are kept as raw records.

use crate::common::error::Result;
use crate::ppt::atoms::{CString, ExHyperlinkAtom, ExObjListAtom};
use crate::ppt::consts::RecordType;
use crate::ppt::records::{
    InstanceRule, RawRecord, Record, RecordHeader, RecordReader, RecordSpec, TypeDispatch,
};
use crate::ppt::types::{PrintableString, UrlOrPath};

/// A hyperlink target with its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExHyperlinkContainer {
    pub header: RecordHeader,
    pub atom: ExHyperlinkAtom,
    pub friendly_name: Option<CString<PrintableString>>,
    pub target: Option<CString<UrlOrPath>>,
    /// Location inside the target, such as a slide or bookmark
    pub location: Option<CString<PrintableString>>,
}

impl ExHyperlinkContainer {
    #[inline]
    pub fn id(&self) -> u32 {
        self.atom.ex_hyperlink_id
    }
}

impl Record for ExHyperlinkContainer {
    const SPEC: RecordSpec = RecordSpec::container("ExHyperlinkContainer", RecordType::ExHyperlink);

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        Ok(Self {
            header: *header,
            atom: ExHyperlinkAtom::decode(reader)?,
            friendly_name: CString::optional(reader, 0, None)?,
            target: CString::optional(reader, 1, None)?,
            location: CString::optional(reader, 3, None)?,
        })
    }
}

/// One entry of the external object list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExObj {
    Hyperlink(ExHyperlinkContainer),
    OleEmbed(RawRecord),
    OleLink(RawRecord),
    Control(RawRecord),
    AviMovie(RawRecord),
    MciMovie(RawRecord),
    MidiAudio(RawRecord),
    CdAudio(RawRecord),
    WavAudioEmbedded(RawRecord),
    WavAudioLink(RawRecord),
}

const fn opaque(name: &'static str, record_type: RecordType) -> RecordSpec {
    RecordSpec::container(name, record_type).with_instance(InstanceRule::Any)
}

const OLE_EMBED: RecordSpec = opaque("ExOleEmbedContainer", RecordType::ExOleEmbed);
const OLE_LINK: RecordSpec = opaque("ExOleLinkContainer", RecordType::ExOleLink);
const CONTROL: RecordSpec = opaque("ExControlContainer", RecordType::ExControl);
const AVI_MOVIE: RecordSpec = opaque("ExAviMovieContainer", RecordType::ExAviMovie);
const MCI_MOVIE: RecordSpec = opaque("ExMciMovieContainer", RecordType::ExMciMovie);
const MIDI_AUDIO: RecordSpec = opaque("ExMidiAudioContainer", RecordType::ExMidiAudio);
const CD_AUDIO: RecordSpec = opaque("ExCdAudioContainer", RecordType::ExCdAudio);
const WAV_EMBEDDED: RecordSpec =
    opaque("ExWavAudioEmbeddedContainer", RecordType::ExWavAudioEmbedded);
const WAV_LINK: RecordSpec = opaque("ExWavAudioLinkContainer", RecordType::ExWavAudioLink);

impl ExObj {
    const DISPATCH: TypeDispatch<Self> = TypeDispatch {
        name: "ExObjListContainer",
        cases: &[
            (RecordType::ExHyperlink, |r| ExHyperlinkContainer::decode(r).map(Self::Hyperlink)),
            (RecordType::ExOleEmbed, |r| RawRecord::decode_with(r, &OLE_EMBED).map(Self::OleEmbed)),
            (RecordType::ExOleLink, |r| RawRecord::decode_with(r, &OLE_LINK).map(Self::OleLink)),
            (RecordType::ExControl, |r| RawRecord::decode_with(r, &CONTROL).map(Self::Control)),
            (RecordType::ExAviMovie, |r| RawRecord::decode_with(r, &AVI_MOVIE).map(Self::AviMovie)),
            (RecordType::ExMciMovie, |r| RawRecord::decode_with(r, &MCI_MOVIE).map(Self::MciMovie)),
            (RecordType::ExMidiAudio, |r| {
                RawRecord::decode_with(r, &MIDI_AUDIO).map(Self::MidiAudio)
            }),
            (RecordType::ExCdAudio, |r| RawRecord::decode_with(r, &CD_AUDIO).map(Self::CdAudio)),
            (RecordType::ExWavAudioEmbedded, |r| {
                RawRecord::decode_with(r, &WAV_EMBEDDED).map(Self::WavAudioEmbedded)
            }),
            (RecordType::ExWavAudioLink, |r| {
                RawRecord::decode_with(r, &WAV_LINK).map(Self::WavAudioLink)
            }),
        ],
        unknown: None,
    };

    pub fn decode(reader: &mut RecordReader<'_>) -> Result<Self> {
        Self::DISPATCH.decode(reader)
    }
}

/// The document's external objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExObjListContainer {
    pub header: RecordHeader,
    pub atom: ExObjListAtom,
    pub objects: Vec<ExObj>,
}

impl ExObjListContainer {
    pub fn hyperlinks(&self) -> impl Iterator<Item = &ExHyperlinkContainer> {
        self.objects.iter().filter_map(|obj| match obj {
            ExObj::Hyperlink(link) => Some(link),
            _ => None,
        })
    }

    /// Hyperlink with the given id.
    pub fn hyperlink(&self, id: u32) -> Option<&ExHyperlinkContainer> {
        self.hyperlinks().find(|link| link.id() == id)
    }
}

impl Record for ExObjListContainer {
    const SPEC: RecordSpec = RecordSpec::container("ExObjListContainer", RecordType::ExObjList);

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        Ok(Self {
            header: *header,
            atom: ExObjListAtom::decode(reader)?,
            objects: ExObj::DISPATCH.decode_all(reader)?,
        })
    }
}
