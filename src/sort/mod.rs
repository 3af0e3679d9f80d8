//! In-place, stable reordering of a note store.

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::entity::Note;
use crate::error::{Result, TodoError};
use crate::storage::NoteStore;

/// Field a store can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    /// Ascending numeric status: in progress before completed
    #[serde(rename = "status")]
    Status,
    /// Ascending creation time: oldest first
    #[serde(rename = "createdAt")]
    CreatedAt,
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortField::Status => write!(f, "status"),
            SortField::CreatedAt => write!(f, "createdAt"),
        }
    }
}

impl std::str::FromStr for SortField {
    type Err = TodoError;

    /// Field names are matched exactly.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "status" => Ok(SortField::Status),
            "createdAt" => Ok(SortField::CreatedAt),
            _ => Err(TodoError::UnknownSortField(s.to_string())),
        }
    }
}

/// A [`NoteStore`] whose collection can be reordered.
///
/// Every base operation is reachable through `Deref`.
#[derive(Debug, Default)]
pub struct SortableNoteStore {
    store: NoteStore,
}

impl SortableNoteStore {
    pub fn new(store: NoteStore) -> Self {
        Self { store }
    }

    pub fn into_inner(self) -> NoteStore {
        self.store
    }

    /// Sort the store in place by a field name (`"status"` or `"createdAt"`)
    /// and return the new order. Unknown names leave the order untouched.
    pub fn order_notes_by(&mut self, field_name: &str) -> Result<&[Note]> {
        let field = match field_name.parse::<SortField>() {
            Ok(field) => field,
            Err(e) => {
                warn!(field = field_name, "rejected sort field");
                return Err(e);
            }
        };
        Ok(self.order_notes_by_field(field))
    }

    /// Sort the store in place by `field`. Ties keep their prior order.
    pub fn order_notes_by_field(&mut self, field: SortField) -> &[Note] {
        let notes = &mut self.store.notes;
        match field {
            SortField::Status => notes.sort_by_key(|n| n.status().as_u8()),
            SortField::CreatedAt => notes.sort_by_key(|n| n.created_at()),
        }

        debug!(field = %field, count = notes.len(), "ordered notes");
        &notes[..]
    }
}

impl From<NoteStore> for SortableNoteStore {
    fn from(store: NoteStore) -> Self {
        Self::new(store)
    }
}

impl Deref for SortableNoteStore {
    type Target = NoteStore;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}

impl DerefMut for SortableNoteStore {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.store
    }
}
