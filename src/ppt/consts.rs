//! Record type codes of the PowerPoint binary format.

/// Size of the record header that precedes every record payload.
pub const RECORD_HEADER_SIZE: usize = 8;

/// Version nibble carried by every container record.
pub const CONTAINER_VERSION: u8 = 0xF;

/// Header token of an unencrypted `Current User` stream.
pub const CURRENT_USER_TOKEN: u32 = 0xE391_C05F;

/// Header token of a `Current User` stream for an encrypted document.
pub const CURRENT_USER_TOKEN_ENCRYPTED: u32 = 0xF3D1_C4DF;

/// Value of `docFileVersion` in every PowerPoint 97-2003 `Current User` stream.
pub const DOC_FILE_VERSION: u16 = 0x03F4;

macro_rules! record_types {
    ($( $(#[$meta:meta])* $name:ident = $code:literal, )*) => {
        /// Closed table of the record type codes this crate knows about.
        ///
        /// Codes that are not in the table map to [`RecordType::Unknown`]; the
        /// original code is kept in [`RecordHeader::raw_type`](crate::ppt::records::RecordHeader).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum RecordType {
            /// Type code not present in the table
            Unknown = 0,
            $( $(#[$meta])* $name = $code, )*
        }

        impl RecordType {
            /// Map a raw type code, substituting [`RecordType::Unknown`] for unmapped values.
            pub const fn from_code(code: u16) -> Self {
                match code {
                    $( $code => RecordType::$name, )*
                    _ => RecordType::Unknown,
                }
            }
        }
    };
}

record_types! {
    /// Document container
    Document = 0x03E8u16,
    /// Document atom
    DocumentAtom = 0x03E9u16,
    /// End of the document container
    EndDocumentAtom = 0x03EAu16,
    /// Slide container (also used for title masters)
    Slide = 0x03EEu16,
    SlideAtom = 0x03EFu16,
    Notes = 0x03F0u16,
    NotesAtom = 0x03F1u16,
    /// Document-wide text defaults (DocumentTextInfoContainer)
    Environment = 0x03F2u16,
    SlidePersistAtom = 0x03F3u16,
    MainMaster = 0x03F8u16,
    SlideShowSlideInfoAtom = 0x03F9u16,
    SlideViewInfo = 0x03FAu16,
    GuideAtom = 0x03FBu16,
    ViewInfoAtom = 0x03FDu16,
    SlideViewInfoAtom = 0x03FEu16,
    VbaInfo = 0x03FFu16,
    VbaInfoAtom = 0x0400u16,
    SlideShowDocInfoAtom = 0x0401u16,
    Summary = 0x0402u16,
    DocRoutingSlipAtom = 0x0406u16,
    OutlineViewInfo = 0x0407u16,
    SorterViewInfo = 0x0408u16,
    ExObjList = 0x0409u16,
    ExObjListAtom = 0x040Au16,
    /// OfficeArt drawing group (carried opaquely)
    DrawingGroup = 0x040Bu16,
    /// OfficeArt drawing (carried opaquely)
    Drawing = 0x040Cu16,
    GridSpacing10Atom = 0x040Du16,
    RoundTripTheme12Atom = 0x040Eu16,
    RoundTripColorMapping12Atom = 0x040Fu16,
    NamedShows = 0x0410u16,
    NamedShow = 0x0411u16,
    NamedShowSlidesAtom = 0x0412u16,
    NotesTextViewInfo9 = 0x0413u16,
    NormalViewSetInfo9 = 0x0414u16,
    NormalViewSetInfo9Atom = 0x0415u16,
    RoundTripOriginalMainMasterId12Atom = 0x041Cu16,
    RoundTripCompositeMasterId12Atom = 0x041Du16,
    RoundTripContentMasterInfo12Atom = 0x041Eu16,
    RoundTripShapeId12Atom = 0x041Fu16,
    RoundTripHFPlaceholder12Atom = 0x0420u16,
    RoundTripContentMasterId12Atom = 0x0422u16,
    RoundTripOArtTextStyles12Atom = 0x0423u16,
    RoundTripHeaderFooterDefaults12Atom = 0x0424u16,
    RoundTripDocFlags12Atom = 0x0425u16,
    RoundTripShapeCheckSumForCL12Atom = 0x0426u16,
    RoundTripNotesMasterTextStyles12Atom = 0x0427u16,
    RoundTripCustomTableStyles12Atom = 0x0428u16,
    /// DocInfoListContainer
    List = 0x07D0u16,
    FontCollection = 0x07D5u16,
    BookmarkCollection = 0x07E3u16,
    SoundCollection = 0x07E4u16,
    SoundCollectionAtom = 0x07E5u16,
    Sound = 0x07E6u16,
    SoundDataBlob = 0x07E7u16,
    BookmarkSeedAtom = 0x07E9u16,
    ColorSchemeAtom = 0x07F0u16,
    BlipCollection9 = 0x07F8u16,
    BlipEntity9Atom = 0x07F9u16,
    ExternalObjectRefAtom = 0x0BC1u16,
    PlaceholderAtom = 0x0BC3u16,
    ShapeAtom = 0x0BDBu16,
    ShapeFlags10Atom = 0x0BDCu16,
    RoundTripNewPlaceholderId12Atom = 0x0BDDu16,
    OutlineTextRefAtom = 0x0F9Eu16,
    TextHeaderAtom = 0x0F9Fu16,
    TextCharsAtom = 0x0FA0u16,
    StyleTextPropAtom = 0x0FA1u16,
    MasterTextPropAtom = 0x0FA2u16,
    TextMasterStyleAtom = 0x0FA3u16,
    TextCharFormatExceptionAtom = 0x0FA4u16,
    TextParagraphFormatExceptionAtom = 0x0FA5u16,
    TextRulerAtom = 0x0FA6u16,
    TextBookmarkAtom = 0x0FA7u16,
    TextBytesAtom = 0x0FA8u16,
    TextSpecialInfoDefaultAtom = 0x0FA9u16,
    TextSpecialInfoAtom = 0x0FAAu16,
    DefaultRulerAtom = 0x0FABu16,
    StyleTextProp9Atom = 0x0FACu16,
    TextMasterStyle9Atom = 0x0FADu16,
    OutlineTextProps9 = 0x0FAEu16,
    OutlineTextPropsHeader9Atom = 0x0FAFu16,
    TextDefaults9Atom = 0x0FB0u16,
    StyleTextProp10Atom = 0x0FB1u16,
    TextMasterStyle10Atom = 0x0FB2u16,
    OutlineTextProps10 = 0x0FB3u16,
    TextDefaults10Atom = 0x0FB4u16,
    OutlineTextProps11 = 0x0FB5u16,
    StyleTextProp11Atom = 0x0FB6u16,
    FontEntityAtom = 0x0FB7u16,
    FontEmbedDataBlob = 0x0FB8u16,
    CString = 0x0FBAu16,
    MetaFile = 0x0FC1u16,
    ExOleObjAtom = 0x0FC3u16,
    Kinsoku = 0x0FC8u16,
    HandOut = 0x0FC9u16,
    ExOleEmbed = 0x0FCCu16,
    ExOleEmbedAtom = 0x0FCDu16,
    ExOleLink = 0x0FCEu16,
    BookmarkEntityAtom = 0x0FD0u16,
    ExOleLinkAtom = 0x0FD1u16,
    KinsokuAtom = 0x0FD2u16,
    ExHyperlinkAtom = 0x0FD3u16,
    ExHyperlink = 0x0FD7u16,
    SlideNumberMetaCharAtom = 0x0FD8u16,
    HeadersFooters = 0x0FD9u16,
    HeadersFootersAtom = 0x0FDAu16,
    TextInteractiveInfoAtom = 0x0FDFu16,
    ExHyperlink9 = 0x0FE4u16,
    RecolorInfoAtom = 0x0FE7u16,
    ExControl = 0x0FEEu16,
    SlideListWithText = 0x0FF0u16,
    InteractiveInfo = 0x0FF2u16,
    InteractiveInfoAtom = 0x0FF3u16,
    UserEditAtom = 0x0FF5u16,
    CurrentUserAtom = 0x0FF6u16,
    DateTimeMetaCharAtom = 0x0FF7u16,
    GenericDateMetaCharAtom = 0x0FF8u16,
    HeaderMetaCharAtom = 0x0FF9u16,
    FooterMetaCharAtom = 0x0FFAu16,
    ExControlAtom = 0x0FFBu16,
    ExMediaAtom = 0x1004u16,
    ExVideoContainer = 0x1005u16,
    ExAviMovie = 0x1006u16,
    ExMciMovie = 0x1007u16,
    ExMidiAudio = 0x100Du16,
    ExCdAudio = 0x100Eu16,
    ExWavAudioEmbedded = 0x100Fu16,
    ExWavAudioLink = 0x1010u16,
    ExOleObjStg = 0x1011u16,
    ExCdAudioAtom = 0x1012u16,
    ExWavAudioEmbeddedAtom = 0x1013u16,
    AnimationInfo = 0x1014u16,
    RtfDateTimeMetaCharAtom = 0x1015u16,
    ExHyperlinkFlagsAtom = 0x1018u16,
    ProgTags = 0x1388u16,
    ProgStringTag = 0x1389u16,
    ProgBinaryTag = 0x138Au16,
    BinaryTagDataBlob = 0x138Bu16,
    PrintOptionsAtom = 0x1770u16,
    PersistDirectoryAtom = 0x1772u16,
    PresentationAdvisorFlags9Atom = 0x177Au16,
    HtmlDocInfo9Atom = 0x177Bu16,
    HtmlPublishInfoAtom = 0x177Cu16,
    HtmlPublishInfo9 = 0x177Du16,
    BroadcastDocInfo9 = 0x177Eu16,
    BroadcastDocInfo9Atom = 0x177Fu16,
    EnvelopeFlags9Atom = 0x1784u16,
    EnvelopeData9Atom = 0x1785u16,
    VisualShapeAtom = 0x2AFBu16,
    HashCodeAtom = 0x2B00u16,
    VisualPageAtom = 0x2B01u16,
    BuildList = 0x2B02u16,
    BuildAtom = 0x2B03u16,
    ChartBuild = 0x2B04u16,
    ChartBuildAtom = 0x2B05u16,
    DiagramBuild = 0x2B06u16,
    DiagramBuildAtom = 0x2B07u16,
    ParaBuild = 0x2B08u16,
    ParaBuildAtom = 0x2B09u16,
    LevelInfoAtom = 0x2B0Au16,
    RoundTripAnimationAtom12Atom = 0x2B0Bu16,
    RoundTripAnimationHashAtom12Atom = 0x2B0Du16,
    Comment10 = 0x2EE0u16,
    Comment10Atom = 0x2EE1u16,
    CommentIndex10 = 0x2EE4u16,
    CommentIndex10Atom = 0x2EE5u16,
    LinkedShape10Atom = 0x2EE6u16,
    LinkedSlide10Atom = 0x2EE7u16,
    SlideFlags10Atom = 0x2EEAu16,
    SlideTime10Atom = 0x2EEBu16,
    DiffTree10 = 0x2EECu16,
    Diff10 = 0x2EEDu16,
    Diff10Atom = 0x2EEEu16,
    SlideListTableSize10Atom = 0x2EEFu16,
    SlideListEntry10Atom = 0x2EF0u16,
    SlideListTable10 = 0x2EF1u16,
    CryptSession10Container = 0x2F14u16,
    FontEmbedFlags10Atom = 0x32C8u16,
    FilterPrivacyFlags10Atom = 0x3036u16,
    DocToolbarStates10Atom = 0x36B1u16,
    PhotoAlbumInfo10Atom = 0x36B2u16,
    SmartTagStore11Container = 0x36B3u16,
    RoundTripSlideSyncInfo12 = 0x3714u16,
    RoundTripSlideSyncInfoAtom12 = 0x3715u16,
}

impl RecordType {
    /// The numeric type code.
    #[inline]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// `true` for every mapped code.
    #[inline]
    pub const fn is_known(self) -> bool {
        !matches!(self, RecordType::Unknown)
    }
}

impl From<u16> for RecordType {
    #[inline]
    fn from(value: u16) -> Self {
        Self::from_code(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_map_both_ways() {
        for code in [0x03E8u16, 0x0FBA, 0x0FF0, 0x138A, 0x1772, 0x3714] {
            let record_type = RecordType::from_code(code);
            assert!(record_type.is_known(), "{code:#06x} should be known");
            assert_eq!(record_type.code(), code);
        }
    }

    #[test]
    fn test_unmapped_codes_are_unknown() {
        assert_eq!(RecordType::from(0x0000), RecordType::Unknown);
        assert_eq!(RecordType::from(0x000A), RecordType::Unknown);
        assert_eq!(RecordType::from(0xFFFF), RecordType::Unknown);
    }
}
