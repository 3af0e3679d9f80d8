use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::host::{
    Clock, ConfirmPrompt, IdGenerator, SequentialIdGenerator, StdinPrompt, SystemClock,
    UuidIdGenerator,
};
use crate::config::{IdStrategy, StoreConfig};
use crate::entity::{Note, NoteStatus};
use crate::error::{Result, TodoError};

/// Input for a new note. Only these fields are honored; anything else in a
/// deserialized payload is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewNote {
    pub title: Option<String>,
    pub content: Option<String>,
    pub requires_confirmation: Option<bool>,
}

impl NewNote {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
            requires_confirmation: None,
        }
    }

    pub fn requires_confirmation(mut self, value: bool) -> Self {
        self.requires_confirmation = Some(value);
        self
    }
}

/// Update payload for a note.
///
/// `None`, empty and whitespace-only strings all mean "leave unchanged".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<NoteStatus>,
}

impl NoteUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn status(mut self, status: NoteStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Ordered, in-memory collection of notes.
pub struct NoteStore {
    pub(crate) notes: Vec<Note>,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
    prompt: Box<dyn ConfirmPrompt>,
    confirmation_message: String,
}

impl fmt::Debug for NoteStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoteStore")
            .field("notes", &self.notes)
            .field("confirmation_message", &self.confirmation_message)
            .finish_non_exhaustive()
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::from_config(&StoreConfig::default())
    }
}

impl NoteStore {
    /// Create a store with explicit collaborators and default configuration.
    pub fn new(
        ids: impl IdGenerator + 'static,
        clock: impl Clock + 'static,
        prompt: impl ConfirmPrompt + 'static,
    ) -> Self {
        Self::with_config(ids, clock, prompt, &StoreConfig::default())
    }

    /// Create a store with explicit collaborators; only the confirmation
    /// message is taken from `config`.
    pub fn with_config(
        ids: impl IdGenerator + 'static,
        clock: impl Clock + 'static,
        prompt: impl ConfirmPrompt + 'static,
        config: &StoreConfig,
    ) -> Self {
        Self {
            notes: Vec::new(),
            ids: Box::new(ids),
            clock: Box::new(clock),
            prompt: Box::new(prompt),
            confirmation_message: config.confirmation_message.clone(),
        }
    }

    /// Create a store wired to the system clock and an interactive stdin prompt.
    pub fn from_config(config: &StoreConfig) -> Self {
        let prompt = StdinPrompt::new(config.non_interactive_answer);
        match config.id_strategy {
            IdStrategy::Uuid => Self::with_config(UuidIdGenerator, SystemClock, prompt, config),
            IdStrategy::Sequential => {
                Self::with_config(SequentialIdGenerator::new(), SystemClock, prompt, config)
            }
        }
    }

    pub fn all_notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn all_notes_count(&self) -> usize {
        self.notes.len()
    }

    pub fn in_progress_notes_count(&self) -> usize {
        self.notes.iter().filter(|n| n.is_in_progress()).count()
    }

    /// Validate and append a new note.
    pub fn create_note(&mut self, input: NewNote) -> Result<&Note> {
        let (title, content) = match validate_new_note(input.title, input.content) {
            Ok(fields) => fields,
            Err(e) => {
                warn!(error = %e, "rejected new note");
                return Err(e);
            }
        };

        let id = self.ids.next_id();
        let now = self.clock.now();
        let note = Note::new(
            id,
            title,
            content,
            now,
            input.requires_confirmation.unwrap_or(false),
        );

        debug!(note_id = %note.id, requires_confirmation = note.requires_confirmation, "created note");
        self.notes.push(note);

        let index = self.notes.len() - 1;
        Ok(&self.notes[index])
    }

    pub fn read_note(&self, id: &str) -> Result<&Note> {
        let index = self.position(id)?;
        Ok(&self.notes[index])
    }

    /// Apply `update` to a note, asking for confirmation first when the note
    /// requires it. A declined confirmation returns the note untouched.
    pub fn update_note(&mut self, id: &str, update: NoteUpdate) -> Result<&Note> {
        let index = self.position(id)?;

        if self.notes[index].requires_confirmation
            && !self.prompt.confirm(&self.confirmation_message)
        {
            debug!(note_id = %id, "update cancelled by user");
            return Ok(&self.notes[index]);
        }

        let now = self.clock.now();
        let note = &mut self.notes[index];

        if let Some(title) = non_blank(update.title) {
            note.title = title;
        }

        if let Some(content) = non_blank(update.content) {
            note.content = content;
        }

        if let Some(status) = update.status {
            note.status = status;
        }

        // A clock that steps backwards must not break created_at <= updated_at.
        note.updated_at = now.max(note.created_at);

        debug!(note_id = %note.id, status = %note.status, "updated note");
        Ok(&*note)
    }

    /// Remove a note. Returns `false` when no note has this id.
    pub fn delete_note(&mut self, id: &str) -> bool {
        match self.notes.iter().position(|n| n.id == id) {
            Some(index) => {
                self.notes.remove(index);
                debug!(note_id = %id, "deleted note");
                true
            }
            None => {
                debug!(note_id = %id, "delete skipped, note not found");
                false
            }
        }
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.notes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| TodoError::NoteNotFound(id.to_string()))
    }
}

fn validate_new_note(title: Option<String>, content: Option<String>) -> Result<(String, String)> {
    let title = non_blank(title).ok_or(TodoError::TitleRequired)?;
    let content = non_blank(content).ok_or(TodoError::ContentRequired)?;
    Ok((title, content))
}

/// Keep a value only if it has non-whitespace characters. The value itself is
/// returned as given, not trimmed.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
