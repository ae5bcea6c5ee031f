//! Container decoders: records whose payload is a sequence of child records.

pub mod doc_info;
pub mod document;
pub mod environment;
pub mod ex_obj_list;
pub mod headers_footers;
pub mod interactive;
pub mod prog_tags;
pub mod slide;
pub mod slide_list;
pub mod sound;

pub use doc_info::{DocInfo, DocInfoListContainer};
pub use document::DocumentContainer;
pub use environment::{DocumentTextInfoContainer, FontCollectionContainer, FontEntry, TextInfoChild};
pub use ex_obj_list::{ExHyperlinkContainer, ExObj, ExObjListContainer};
pub use headers_footers::{
    HF_INSTANCE_NOTES, HF_INSTANCE_PER_SLIDE, HF_INSTANCE_SLIDES, HeadersFootersContainer,
};
pub use interactive::{InteractiveInfo, InteractiveInfoContainer};
pub use prog_tags::{
    BinaryTagData, BinaryTagExtension, PROG_BINARY_TAG, ProgBinaryTag, ProgStringTagContainer,
    ProgTag, ProgTagsContainer,
};
pub use slide::{Master, NotesContainer, SlideContainer};
pub use slide_list::{
    PersistListContainer, SLIDE_LIST_MASTERS, SLIDE_LIST_NOTES, SLIDE_LIST_SLIDES, SlideAtomsSet,
    SlideList, SlideListEntry, SlideListWithTextContainer,
};
pub use sound::{SoundCollectionContainer, SoundContainer};
