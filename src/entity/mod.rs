mod status;

pub use status::NoteStatus;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A titled todo note.
///
/// Notes are only created and mutated by [`NoteStore`](crate::storage::NoteStore),
/// so fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
    pub(crate) status: NoteStatus,
    pub(crate) requires_confirmation: bool,
}

impl Note {
    pub(crate) fn new(
        id: String,
        title: String,
        content: String,
        now: DateTime<Utc>,
        requires_confirmation: bool,
    ) -> Self {
        Self {
            id,
            title,
            content,
            created_at: now,
            updated_at: now,
            status: NoteStatus::default(),
            requires_confirmation,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn status(&self) -> NoteStatus {
        self.status
    }

    pub fn requires_confirmation(&self) -> bool {
        self.requires_confirmation
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == NoteStatus::InProgress
    }
}
