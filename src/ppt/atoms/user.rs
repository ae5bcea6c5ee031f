//! The `Current User` atom and the user edit atoms of the edit chain.
//!
//! Both records end with a field that older writers omit. The field is read
//! only when the record's payload has bytes left after the fixed part.

use crate::common::error::{PptError, Result};
use crate::ppt::consts::{
    CURRENT_USER_TOKEN, CURRENT_USER_TOKEN_ENCRYPTED, DOC_FILE_VERSION, RecordType,
};
use crate::ppt::records::{LengthRule, Record, RecordHeader, RecordReader, RecordSpec};
use crate::ppt::types::{PrintableString, StringKind};
use encoding_rs::mem::decode_latin1;
use zerocopy::{LE, U16, U32};
use zerocopy_derive::FromBytes;

/// Fixed part of a `UserEditAtom` payload.
#[derive(FromBytes)]
#[repr(C)]
struct UserEditFixed {
    last_slide_id_ref: U32<LE>,
    version: U16<LE>,
    minor_version: u8,
    major_version: u8,
    offset_last_edit: U32<LE>,
    offset_persist_directory: U32<LE>,
    doc_persist_id_ref: U32<LE>,
    persist_id_seed: U32<LE>,
    last_view: U16<LE>,
    unused: U16<LE>,
}

/// One save operation: where its persist directory is and where the previous edit is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEditAtom {
    pub header: RecordHeader,
    /// Slide id of the slide last viewed
    pub last_slide_id_ref: u32,
    pub version: u16,
    pub minor_version: u8,
    pub major_version: u8,
    /// Stream offset of the previous user edit, 0 for the first
    pub offset_last_edit: u32,
    /// Stream offset of this edit's persist directory
    pub offset_persist_directory: u32,
    /// Persist id of the document container, always 1
    pub doc_persist_id_ref: u32,
    /// Greater than every persist id in use
    pub persist_id_seed: u32,
    /// View shown when the document was saved
    pub last_view: u16,
    pub unused: u16,
    /// Persist id of the encryption session, present only in encrypted documents
    pub encrypt_session_persist_id_ref: Option<u32>,
}

impl UserEditAtom {
    pub fn is_first_edit(&self) -> bool {
        self.offset_last_edit == 0
    }
}

impl Record for UserEditAtom {
    const SPEC: RecordSpec = RecordSpec::atom("UserEditAtom", RecordType::UserEditAtom)
        .with_length(LengthRule::OneOf(&[0x1C, 0x20]));

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        let start = reader.position();
        let fixed = reader.read_struct::<UserEditFixed>()?;

        let version = fixed.version.get();
        if version != 0 {
            return Err(PptError::corrupted(start + 4, format!("user edit version {version:#x}")));
        }
        if fixed.minor_version != 0 || fixed.major_version != 3 {
            return Err(PptError::corrupted(
                start + 6,
                format!(
                    "user edit file version {}.{}, expected 3.0",
                    fixed.major_version, fixed.minor_version
                ),
            ));
        }
        let doc_persist_id_ref = fixed.doc_persist_id_ref.get();
        if doc_persist_id_ref != 1 {
            return Err(PptError::corrupted(
                start + 16,
                format!("document persist id {doc_persist_id_ref}, expected 1"),
            ));
        }

        Ok(Self {
            header: *header,
            last_slide_id_ref: fixed.last_slide_id_ref.get(),
            version,
            minor_version: fixed.minor_version,
            major_version: fixed.major_version,
            offset_last_edit: fixed.offset_last_edit.get(),
            offset_persist_directory: fixed.offset_persist_directory.get(),
            doc_persist_id_ref,
            persist_id_seed: fixed.persist_id_seed.get(),
            last_view: fixed.last_view.get(),
            unused: fixed.unused.get(),
            encrypt_session_persist_id_ref: reader.read_trailing(|r| r.read_u32())?,
        })
    }
}

/// Fixed part of a `CurrentUserAtom` payload.
#[derive(FromBytes)]
#[repr(C)]
struct CurrentUserFixed {
    size: U32<LE>,
    header_token: U32<LE>,
    offset_to_current_edit: U32<LE>,
    len_user_name: U16<LE>,
    doc_file_version: U16<LE>,
    major_version: u8,
    minor_version: u8,
    unused: U16<LE>,
}

/// Value of the `size` field.
const CURRENT_USER_SIZE: u32 = 0x14;
const MAX_USER_NAME_LEN: u16 = 255;

/// The single record of the `Current User` stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUserAtom {
    pub header: RecordHeader,
    pub size: u32,
    /// [`CURRENT_USER_TOKEN`] or, for encrypted documents, [`CURRENT_USER_TOKEN_ENCRYPTED`]
    pub header_token: u32,
    /// Stream offset of the most recent user edit
    pub offset_to_current_edit: u32,
    pub len_user_name: u16,
    pub doc_file_version: u16,
    pub major_version: u8,
    pub minor_version: u8,
    pub unused: u16,
    /// User name in the system code page, decoded as Latin-1
    pub ansi_user_name: PrintableString,
    /// 8 or 9; 9 means the document has PowerPoint 2000+ extensions
    pub rel_version: u32,
    pub unicode_user_name: Option<PrintableString>,
}

impl CurrentUserAtom {
    #[inline]
    pub fn is_encrypted(&self) -> bool {
        self.header_token == CURRENT_USER_TOKEN_ENCRYPTED
    }

    /// Best available user name.
    pub fn user_name(&self) -> &str {
        self.unicode_user_name
            .as_ref()
            .unwrap_or(&self.ansi_user_name)
            .as_str()
    }
}

impl Record for CurrentUserAtom {
    const SPEC: RecordSpec = RecordSpec::atom("CurrentUserAtom", RecordType::CurrentUserAtom);

    fn decode_payload(reader: &mut RecordReader<'_>, header: &RecordHeader) -> Result<Self> {
        let start = reader.position();
        let fixed = reader.read_struct::<CurrentUserFixed>()?;

        let size = fixed.size.get();
        if size != CURRENT_USER_SIZE {
            return Err(PptError::corrupted(start, format!("current user size {size:#x}")));
        }
        let header_token = fixed.header_token.get();
        if header_token != CURRENT_USER_TOKEN && header_token != CURRENT_USER_TOKEN_ENCRYPTED {
            return Err(PptError::corrupted(
                start + 4,
                format!("unknown current user token {header_token:#010x}"),
            ));
        }
        let len_user_name = fixed.len_user_name.get();
        if len_user_name > MAX_USER_NAME_LEN {
            return Err(PptError::corrupted(
                start + 12,
                format!("user name length {len_user_name} above {MAX_USER_NAME_LEN}"),
            ));
        }
        let doc_file_version = fixed.doc_file_version.get();
        if doc_file_version != DOC_FILE_VERSION {
            return Err(PptError::corrupted(
                start + 14,
                format!("document file version {doc_file_version:#06x}"),
            ));
        }
        if fixed.major_version != 3 || fixed.minor_version != 0 {
            return Err(PptError::corrupted(
                start + 16,
                format!(
                    "current user file version {}.{}, expected 3.0",
                    fixed.major_version, fixed.minor_version
                ),
            ));
        }

        let name_offset = reader.position();
        let ansi = reader.read_bytes(usize::from(len_user_name))?;
        let ansi_user_name =
            PrintableString::validated(decode_latin1(ansi).into_owned(), name_offset)?;

        let version_offset = reader.position();
        let rel_version = reader.read_u32()?;
        if rel_version != 8 && rel_version != 9 {
            return Err(PptError::corrupted(
                version_offset,
                format!("release version {rel_version}, expected 8 or 9"),
            ));
        }

        let unicode_user_name = reader.read_trailing(|r| {
            PrintableString::decode(r, usize::from(len_user_name) * 2)
        })?;

        Ok(Self {
            header: *header,
            size,
            header_token,
            offset_to_current_edit: fixed.offset_to_current_edit.get(),
            len_user_name,
            doc_file_version,
            major_version: fixed.major_version,
            minor_version: fixed.minor_version,
            unused: fixed.unused.get(),
            ansi_user_name,
            rel_version,
            unicode_user_name,
        })
    }
}
