use thiserror::Error;

use crate::NoteID;

#[derive(Error, Debug)]
pub enum NoteStoreError {
    #[error("note `{0}` doesn't exist")]
    NoteNotExist(NoteID),
    #[error("note `{0}` already exists")]
    NoteIDConflict(NoteID),
}

/// Error type for rejected note fields.
///
/// The messages are part of the API contract: they are returned verbatim in
/// error responses.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title is required and must be a string")]
    TitleRequired,
    #[error("Title must be less than 200 characters")]
    TitleTooLong,
    #[error("Content is required and must be a string")]
    ContentRequired,
    #[error("Content must be less than 10,000 characters")]
    ContentTooLong,
}
