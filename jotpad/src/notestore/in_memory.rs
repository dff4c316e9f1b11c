//! In-memory storage of notes
use crate::errors::NoteStoreError;
use crate::note::{Note, NoteUpdate};
use crate::{NoteFilter, NoteID, NoteStore};
use futures::future::BoxFuture;
use std::collections::BTreeSet;
use tokio::sync::RwLock;

fn filter_matches(note: &Note, filter: &NoteFilter) -> bool {
    if let Some(ref tag) = filter.tag {
        let needle = tag.to_lowercase();
        if !note.tags.iter().any(|t| t.to_lowercase().contains(&needle)) {
            return false;
        }
    }
    if let Some(ref search) = filter.search {
        let needle = search.to_lowercase();
        if !note.title.to_lowercase().contains(&needle)
            && !note.content.to_lowercase().contains(&needle)
        {
            return false;
        }
    }
    true
}

/// In-memory storage.
///
/// Notes are kept in insertion order and all ID lookups are linear scans.
/// There is no persistence layer: the collection lives and dies with the
/// process.
#[derive(Debug, Default)]
struct InMemoryStoreInner {
    notes: Vec<Note>,
}

impl InMemoryStoreInner {
    pub fn new() -> Self {
        Default::default()
    }

    fn new_note(
        &mut self,
        title: String,
        content: String,
        tags: Vec<String>,
    ) -> Result<Note, NoteStoreError> {
        let note = Note::new(title, content, tags);
        // Freshly generated UUIDs don't collide in practice
        if self.notes.iter().any(|n| n.id == note.id) {
            return Err(NoteStoreError::NoteIDConflict(note.id));
        }
        self.notes.push(note.clone());
        Ok(note)
    }

    fn list_notes(&self, filter: &NoteFilter) -> Vec<Note> {
        let mut notes: Vec<Note> = self
            .notes
            .iter()
            .filter(|n| filter_matches(n, filter))
            .cloned()
            .collect();
        // Newer to older. In other words, larger timestamps to smaller timestamps
        notes.sort_by_key(|n| std::cmp::Reverse(n.created_at));
        notes
    }

    fn get_note(&self, id: &NoteID) -> Result<Note, NoteStoreError> {
        self.notes
            .iter()
            .find(|n| &n.id == id)
            .cloned()
            .ok_or_else(|| NoteStoreError::NoteNotExist(id.clone()))
    }

    fn update_note(&mut self, id: &NoteID, update: NoteUpdate) -> Result<Note, NoteStoreError> {
        let note = self
            .notes
            .iter_mut()
            .find(|n| &n.id == id)
            .ok_or_else(|| NoteStoreError::NoteNotExist(id.clone()))?;
        note.apply(update);
        Ok(note.clone())
    }

    fn delete_note(&mut self, id: &NoteID) -> Result<(), NoteStoreError> {
        let index = self
            .notes
            .iter()
            .position(|n| &n.id == id)
            .ok_or_else(|| NoteStoreError::NoteNotExist(id.clone()))?;
        self.notes.remove(index);
        Ok(())
    }

    fn tags(&self) -> Vec<String> {
        let tags: BTreeSet<String> = self
            .notes
            .iter()
            .flat_map(|n| n.tags.iter().cloned())
            .collect();
        tags.into_iter().collect()
    }
}

pub struct InMemoryStore {
    ims: RwLock<InMemoryStoreInner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        InMemoryStore {
            ims: RwLock::new(InMemoryStoreInner::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore for InMemoryStore {
    fn new_note(
        &self,
        title: String,
        content: String,
        tags: Vec<String>,
    ) -> BoxFuture<Result<Note, NoteStoreError>> {
        Box::pin(async move {
            let mut ims = self.ims.write().await;
            ims.new_note(title, content, tags)
        })
    }

    fn list_notes<'a>(
        &'a self,
        filter: &'a NoteFilter,
    ) -> BoxFuture<'a, Result<Vec<Note>, NoteStoreError>> {
        Box::pin(async move {
            let ims = self.ims.read().await;
            Ok(ims.list_notes(filter))
        })
    }

    fn get_note<'a>(&'a self, id: &'a NoteID) -> BoxFuture<'a, Result<Note, NoteStoreError>> {
        Box::pin(async move {
            let ims = self.ims.read().await;
            ims.get_note(id)
        })
    }

    fn update_note<'a>(
        &'a self,
        id: &'a NoteID,
        update: NoteUpdate,
    ) -> BoxFuture<'a, Result<Note, NoteStoreError>> {
        Box::pin(async move {
            let mut ims = self.ims.write().await;
            ims.update_note(id, update)
        })
    }

    fn delete_note<'a>(&'a self, id: &'a NoteID) -> BoxFuture<'a, Result<(), NoteStoreError>> {
        Box::pin(async move {
            let mut ims = self.ims.write().await;
            ims.delete_note(id)
        })
    }

    fn tags(&self) -> BoxFuture<Result<Vec<String>, NoteStoreError>> {
        Box::pin(async move {
            let ims = self.ims.read().await;
            Ok(ims.tags())
        })
    }
}
