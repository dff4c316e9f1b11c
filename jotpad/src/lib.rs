//! Jotpad: a personal note-taking application.
pub mod errors;
pub mod note;
pub mod notestore;

pub use note::{Note, NoteID, NoteUpdate};
pub use notestore::{InMemoryStore, NoteFilter, NoteStore};
