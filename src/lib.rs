//! In-memory todo notes with confirmation-gated updates.
//!
//! [`NoteStore`] owns the notes. [`SearchableNoteStore`] and
//! [`SortableNoteStore`] wrap a store and add substring search and in-place
//! sorting respectively.

pub mod config;
pub mod entity;
pub mod error;
pub mod logging;
pub mod search;
pub mod sort;
pub mod storage;

pub use config::{IdStrategy, StoreConfig};
pub use entity::{Note, NoteStatus};
pub use error::{ErrorKind, Result, TodoError};
pub use logging::init_logging;
pub use search::{parse_query, SearchQuery, SearchableNoteStore};
pub use sort::{SortField, SortableNoteStore};
pub use storage::{NewNote, NoteStore, NoteUpdate};
