//! Whole-presentation loading.
//!
//! Loading follows the same path PowerPoint takes when opening a file:
//!
//! 1. The `Current User` stream names the most recent `UserEditAtom`.
//! 2. Each user edit points at its persist directory and at the previous edit;
//!    walking the chain back to the first edit and merging the directories
//!    gives the stream offset of every persisted object.
//! 3. The document container is the object with the edit's
//!    `doc_persist_id_ref`; its slide lists name the masters, slides and
//!    notes pages by persist id.

use crate::common::error::{PptError, Result};
use crate::ppt::atoms::{CurrentUserAtom, SlidePersistAtom, UserEditAtom};
use crate::ppt::containers::{DocumentContainer, Master, NotesContainer, SlideContainer};
use crate::ppt::options::DecodeOptions;
use crate::ppt::persist::{PersistDirectory, PersistDirectoryAtom};
use crate::ppt::records::{DiagnosticSink, Record, RecordReader};
use std::collections::HashSet;

/// A fully decoded presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub current_user: CurrentUserAtom,
    /// The user edit chain, newest first
    pub user_edits: Vec<UserEditAtom>,
    /// Effective persist directory of the newest edit
    pub persist_directory: PersistDirectory,
    pub document: DocumentContainer,
    /// Masters in master list order
    pub masters: Vec<Master>,
    /// Slides in presentation order
    pub slides: Vec<SlideContainer>,
    pub notes: Vec<NotesContainer>,
}

impl Presentation {
    /// Decode a presentation from its `Current User` and `PowerPoint Document`
    /// streams. Unknown records are reported to the log.
    pub fn load(current_user: &[u8], document: &[u8], options: DecodeOptions) -> Result<Self> {
        let current_user =
            CurrentUserAtom::decode(&mut RecordReader::with_options(current_user, options))?;
        let mut reader = RecordReader::with_options(document, options);
        Self::load_document(current_user, &mut reader)
    }

    /// Like [`load`](Self::load), but hands diagnostics to `sink`.
    pub fn load_with_sink(
        current_user: &[u8],
        document: &[u8],
        options: DecodeOptions,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Self> {
        let current_user = {
            let mut reader =
                RecordReader::with_options(current_user, options).with_sink(&mut *sink);
            CurrentUserAtom::decode(&mut reader)?
        };
        let mut reader = RecordReader::with_options(document, options).with_sink(sink);
        Self::load_document(current_user, &mut reader)
    }

    fn load_document(current_user: CurrentUserAtom, reader: &mut RecordReader<'_>) -> Result<Self> {
        if current_user.is_encrypted() {
            return Err(PptError::corrupted(0, "encrypted documents are not supported"));
        }

        let (user_edits, directories) =
            read_edit_chain(reader, current_user.offset_to_current_edit)?;
        let persist_directory = PersistDirectory::from_newest_first(&directories);
        log::debug!(
            "{} user edits, {} persist objects",
            user_edits.len(),
            persist_directory.len()
        );

        let newest = &user_edits[0];
        let document_offset = persist_directory.resolve(
            newest.doc_persist_id_ref,
            current_user.offset_to_current_edit as usize,
        )? as usize;
        reader.seek(document_offset)?;
        let document = DocumentContainer::decode(reader)?;
        log::debug!("document container at {document_offset:#x}");

        let loader = ObjectLoader {
            directory: &persist_directory,
            referrer: document_offset,
        };
        let masters = loader.load_all(reader, &document.master_list.persists, Master::decode)?;
        let slides = match &document.slide_list {
            Some(list) => loader.load_all(reader, list.persists(), SlideContainer::decode)?,
            None => Vec::new(),
        };
        let notes = match &document.notes_list {
            Some(list) => loader.load_all(reader, &list.persists, NotesContainer::decode)?,
            None => Vec::new(),
        };
        log::debug!(
            "loaded {} masters, {} slides, {} notes pages",
            masters.len(),
            slides.len(),
            notes.len()
        );

        Ok(Self {
            current_user,
            user_edits,
            persist_directory,
            document,
            masters,
            slides,
            notes,
        })
    }

    /// The most recent user edit.
    #[inline]
    pub fn current_edit(&self) -> &UserEditAtom {
        &self.user_edits[0]
    }

    /// Placeholder text of each slide, in presentation order.
    pub fn slide_texts(&self) -> Vec<String> {
        self.document
            .slide_list
            .as_ref()
            .map(|list| list.atom_sets().iter().map(|set| set.text()).collect())
            .unwrap_or_default()
    }
}

/// Walk the user edit chain from `start`, newest first.
///
/// Returns each edit with the persist directory it wrote.
fn read_edit_chain(
    reader: &mut RecordReader<'_>,
    start: u32,
) -> Result<(Vec<UserEditAtom>, Vec<PersistDirectoryAtom>)> {
    let mut visited = HashSet::new();
    let mut edits = Vec::new();
    let mut directories = Vec::new();
    let mut offset = start;

    loop {
        if !visited.insert(offset) {
            return Err(PptError::corrupted(
                offset as usize,
                "user edit chain returns to an edit already visited",
            ));
        }
        reader.seek(offset as usize)?;
        let edit = UserEditAtom::decode(reader)?;
        if edit.encrypt_session_persist_id_ref.is_some() {
            return Err(PptError::corrupted(
                offset as usize,
                "encrypted documents are not supported",
            ));
        }

        reader.seek(edit.offset_persist_directory as usize)?;
        directories.push(PersistDirectoryAtom::decode(reader)?);
        log::debug!(
            "user edit at {offset:#x}, persist directory at {:#x}",
            edit.offset_persist_directory
        );

        let previous = edit.offset_last_edit;
        let first = edit.is_first_edit();
        edits.push(edit);
        if first {
            return Ok((edits, directories));
        }
        offset = previous;
    }
}

/// Decodes persisted objects by persist id.
struct ObjectLoader<'d> {
    directory: &'d PersistDirectory,
    /// Offset reported when a persist id cannot be resolved
    referrer: usize,
}

impl ObjectLoader<'_> {
    fn load_all<'p, T, I, F>(
        &self,
        reader: &mut RecordReader<'_>,
        persists: I,
        decode: F,
    ) -> Result<Vec<T>>
    where
        I: IntoIterator<Item = &'p SlidePersistAtom>,
        F: Fn(&mut RecordReader<'_>) -> Result<T>,
    {
        persists
            .into_iter()
            .map(|persist| {
                let offset = self.directory.resolve(persist.persist_id_ref, self.referrer)?;
                reader.seek(offset as usize)?;
                decode(reader)
            })
            .collect()
    }
}
