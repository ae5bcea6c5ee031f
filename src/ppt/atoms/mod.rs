//! Atom decoders: leaf records holding scalar and string fields.

pub mod cstring;
pub mod document;
pub mod ex_obj;
pub mod font;
pub mod headers_footers;
pub mod interactive;
pub mod scheme;
pub mod slide;
pub mod sound;
pub mod text;
pub mod user;

pub use cstring::CString;
pub use document::{DocumentAtom, EndDocumentAtom};
pub use ex_obj::{ExHyperlinkAtom, ExObjListAtom};
pub use font::{FontEmbedDataBlob, FontEntityAtom, FontTypeFlags};
pub use headers_footers::HeadersFootersAtom;
pub use interactive::{InteractiveInfoAtom, InteractiveInfoFlags};
pub use scheme::{ColorSchemeAtom, SCHEME_INSTANCE_LIST, SCHEME_INSTANCE_SLIDE};
pub use slide::{NotesAtom, SlideAtom, SlidePersistAtom};
pub use sound::{SoundCollectionAtom, SoundDataBlob};
pub use text::{
    MasterTextPropAtom, MasterTextPropRun, OutlineTextRefAtom, TextBookmarkAtom, TextBytesAtom,
    TextCharsAtom, TextHeaderAtom, TextInteractiveInfo, TextInteractiveInfoAtom,
};
pub use user::{CurrentUserAtom, UserEditAtom};
