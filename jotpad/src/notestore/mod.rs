//! Storage backends of notes.
use crate::errors::NoteStoreError;
use crate::note::{Note, NoteID, NoteUpdate};
use futures::future::BoxFuture;

mod in_memory;
pub mod util;


pub use in_memory::InMemoryStore;

pub type BoxedNoteStore = Box<dyn NoteStore + Send + Sync>;

/// Filter predicates for listing notes.
///
/// Both predicates match case-insensitively, and both must hold when both
/// are present.
#[derive(Debug, Clone, Default)]
pub struct NoteFilter {
    /// Substring match against any of a note's tags.
    pub tag: Option<String>,
    /// Substring match against a note's title or content.
    pub search: Option<String>,
}

/// An abstraction for storage backends.
pub trait NoteStore {
    /// Create a new note.
    ///
    /// The storage backend assigns a fresh [`NoteID`] and sets both
    /// timestamps. The fields are stored as given: the caller is expected
    /// to have validated and normalized them.
    fn new_note(
        &self,
        title: String,
        content: String,
        tags: Vec<String>,
    ) -> BoxFuture<Result<Note, NoteStoreError>>;
    /// List notes matching `filter`, most recently created first.
    ///
    /// `updated_at` never affects the ordering. The full result set is
    /// returned; there is no pagination.
    fn list_notes<'a>(
        &'a self,
        filter: &'a NoteFilter,
    ) -> BoxFuture<'a, Result<Vec<Note>, NoteStoreError>>;
    /// Get a note by ID.
    fn get_note<'a>(&'a self, id: &'a NoteID) -> BoxFuture<'a, Result<Note, NoteStoreError>>;
    /// Apply a partial update to a note and refresh its `updated_at`.
    ///
    /// Fields absent from the update are left unchanged. Returns the
    /// updated note.
    fn update_note<'a>(
        &'a self,
        id: &'a NoteID,
        update: NoteUpdate,
    ) -> BoxFuture<'a, Result<Note, NoteStoreError>>;
    /// Delete a note by ID.
    fn delete_note<'a>(&'a self, id: &'a NoteID) -> BoxFuture<'a, Result<(), NoteStoreError>>;
    /// All distinct tags across stored notes, sorted.
    fn tags(&self) -> BoxFuture<Result<Vec<String>, NoteStoreError>>;
}
