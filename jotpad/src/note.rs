//! Core types of Jotpad.
use crate::errors::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::{self, Display};
use uuid::Uuid;

/// Longest accepted title, in characters, after trimming.
pub const MAX_TITLE_CHARS: usize = 200;
/// Longest accepted content, in characters, after trimming.
pub const MAX_CONTENT_CHARS: usize = 10_000;

/// ID of notes.
///
/// In a given note store ([`crate::notestore`]),
/// [`NoteID`] should uniquely identify a note.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Hash)]
#[serde(into = "String", from = "String")]
pub struct NoteID {
    id: String,
}

impl From<NoteID> for String {
    fn from(id: NoteID) -> String {
        id.id
    }
}

impl From<String> for NoteID {
    fn from(id: String) -> NoteID {
        NoteID::new(id)
    }
}

impl From<&str> for NoteID {
    fn from(id: &str) -> NoteID {
        NoteID::new(id.to_owned())
    }
}

impl NoteID {
    pub fn new(id: String) -> Self {
        NoteID { id }
    }

    /// Generate a fresh [`NoteID`].
    ///
    /// We use the UUID V4 scheme.
    pub fn random() -> Self {
        NoteID::new(Uuid::new_v4().to_string())
    }
}

impl Display for NoteID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl AsRef<str> for NoteID {
    fn as_ref(&self) -> &str {
        &self.id
    }
}

/// A single user-authored note.
///
/// The struct doubles as the wire representation: it serializes to exactly
/// the JSON object the API returns, with camelCase timestamp fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteID,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Construct a note with a fresh ID and timestamps.
    ///
    /// Construction does not validate: callers run [`validate_note`] and
    /// [`normalize_tags`] on the raw fields first.
    pub fn new(title: String, content: String, tags: Vec<String>) -> Self {
        let now = Utc::now();
        Note {
            id: NoteID::random(),
            title,
            content,
            tags,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the fields present in `update` and refresh `updated_at`.
    ///
    /// Fields absent from the update keep their prior value. `id` and
    /// `created_at` are never touched.
    pub fn apply(&mut self, update: NoteUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        self.updated_at = Utc::now();
    }
}

/// A partial update of a note.
///
/// Each field is independently present-or-absent, so a caller can touch any
/// subset of the mutable fields in one operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Check raw title and content against the field rules.
///
/// The first failing rule wins: title presence, title length, content
/// presence, content length. Length limits apply to the trimmed field.
pub fn validate_note(title: Option<&str>, content: Option<&str>) -> Result<(), ValidationError> {
    let title = title.map(str::trim).unwrap_or_default();
    if title.is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(ValidationError::TitleTooLong);
    }
    let content = content.map(str::trim).unwrap_or_default();
    if content.is_empty() {
        return Err(ValidationError::ContentRequired);
    }
    if content.chars().count() > MAX_CONTENT_CHARS {
        return Err(ValidationError::ContentTooLong);
    }
    Ok(())
}

/// Normalize raw tags: trim, lowercase, drop empties, dedup.
///
/// First-occurrence order is preserved.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut normalized = Vec::new();
    for tag in tags {
        let tag = tag.trim().to_lowercase();
        if tag.is_empty() || !seen.insert(tag.clone()) {
            continue;
        }
        normalized.push(tag);
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_fields_within_limits() {
        assert!(validate_note(Some("Groceries"), Some("milk, eggs")).is_ok());
        let title: String = "a".repeat(MAX_TITLE_CHARS);
        let content: String = "b".repeat(MAX_CONTENT_CHARS);
        assert!(validate_note(Some(&title), Some(&content)).is_ok());
    }

    #[test]
    fn validate_rejects_missing_or_blank_title() {
        assert_eq!(
            validate_note(None, Some("body")),
            Err(ValidationError::TitleRequired)
        );
        assert_eq!(
            validate_note(Some(""), Some("body")),
            Err(ValidationError::TitleRequired)
        );
        assert_eq!(
            validate_note(Some("   "), Some("body")),
            Err(ValidationError::TitleRequired)
        );
    }

    #[test]
    fn validate_rejects_missing_or_blank_content() {
        assert_eq!(
            validate_note(Some("title"), None),
            Err(ValidationError::ContentRequired)
        );
        assert_eq!(
            validate_note(Some("title"), Some(" \n ")),
            Err(ValidationError::ContentRequired)
        );
    }

    #[test]
    fn validate_rejects_oversized_fields() {
        let long_title: String = "a".repeat(MAX_TITLE_CHARS + 1);
        assert_eq!(
            validate_note(Some(&long_title), Some("body")),
            Err(ValidationError::TitleTooLong)
        );
        let long_content: String = "b".repeat(MAX_CONTENT_CHARS + 1);
        assert_eq!(
            validate_note(Some("title"), Some(&long_content)),
            Err(ValidationError::ContentTooLong)
        );
    }

    #[test]
    fn validate_checks_title_before_content() {
        assert_eq!(
            validate_note(Some(""), Some("")),
            Err(ValidationError::TitleRequired)
        );
        let long_title: String = "a".repeat(MAX_TITLE_CHARS + 1);
        assert_eq!(
            validate_note(Some(&long_title), None),
            Err(ValidationError::TitleTooLong)
        );
    }

    #[test]
    fn validate_measures_trimmed_length() {
        // 200 title characters plus surrounding whitespace is still valid
        let padded = format!("  {}  ", "a".repeat(MAX_TITLE_CHARS));
        assert!(validate_note(Some(&padded), Some("body")).is_ok());
    }

    #[test]
    fn normalize_tags_lowercases_and_dedups() {
        let tags = vec!["A".to_owned(), " a ".to_owned(), "b".to_owned(), "b".to_owned()];
        assert_eq!(normalize_tags(tags), vec!["a".to_owned(), "b".to_owned()]);
    }

    #[test]
    fn normalize_tags_drops_empties_and_keeps_order() {
        let tags = vec!["x".to_owned(), "X".to_owned(), " y ".to_owned(), "  ".to_owned()];
        assert_eq!(normalize_tags(tags), vec!["x".to_owned(), "y".to_owned()]);
    }

    #[test]
    fn apply_touches_only_supplied_fields() {
        let mut note = Note::new(
            "title".to_owned(),
            "content".to_owned(),
            vec!["tag".to_owned()],
        );
        let created = note.created_at;
        note.apply(NoteUpdate {
            content: Some("new content".to_owned()),
            ..Default::default()
        });
        assert_eq!(note.title, "title");
        assert_eq!(note.content, "new content");
        assert_eq!(note.tags, vec!["tag".to_owned()]);
        assert_eq!(note.created_at, created);
        assert!(note.updated_at >= created);
    }
}
