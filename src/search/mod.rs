//! Substring search over note titles and contents.

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entity::Note;
use crate::storage::NoteStore;

/// Search criteria. Missing and empty needles are ignored; with none left,
/// every note matches.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    /// Case-insensitive substring of the title
    pub title: Option<String>,
    /// Case-insensitive substring of the content
    pub content: Option<String>,
}

impl SearchQuery {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, needle: impl Into<String>) -> Self {
        self.title = Some(needle.into());
        self
    }

    pub fn content(mut self, needle: impl Into<String>) -> Self {
        self.content = Some(needle.into());
        self
    }

    /// Check if the query has any criteria.
    pub fn is_empty(&self) -> bool {
        needle(&self.title).is_none() && needle(&self.content).is_none()
    }

    /// A note matches when a supplied title needle is in its title OR a
    /// supplied content needle is in its content. An absent criterion never
    /// matches on its own; a query with no criteria matches every note.
    pub fn matches(&self, note: &Note) -> bool {
        match (needle(&self.title), needle(&self.content)) {
            (None, None) => true,
            (title, content) => {
                title.map_or(false, |t| contains_ignore_ascii_case(note.title(), t))
                    || content.map_or(false, |c| contains_ignore_ascii_case(note.content(), c))
            }
        }
    }
}

fn needle(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    haystack
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}

/// Parse a raw query string into a [`SearchQuery`].
///
/// Tokens prefixed with `title:` or `content:` feed the matching needle; bare
/// words feed the title needle. Several words for one field are joined with a
/// single space.
///
/// # Examples
///
/// ```
/// use todonotes::search::parse_query;
///
/// let query = parse_query("title:alpha content:green");
/// assert_eq!(query.title.as_deref(), Some("alpha"));
/// assert_eq!(query.content.as_deref(), Some("green"));
/// ```
pub fn parse_query(raw: &str) -> SearchQuery {
    let mut title = Vec::new();
    let mut content = Vec::new();

    for token in raw.split_whitespace() {
        if let Some(value) = token.strip_prefix("title:") {
            title.push(value);
        } else if let Some(value) = token.strip_prefix("content:") {
            content.push(value);
        } else {
            title.push(token);
        }
    }

    let join = |words: Vec<&str>| {
        let joined = words.join(" ");
        (!joined.trim().is_empty()).then_some(joined)
    };

    SearchQuery {
        title: join(title),
        content: join(content),
    }
}

/// A [`NoteStore`] that can also be searched.
///
/// Every base operation is reachable through `Deref`.
#[derive(Debug, Default)]
pub struct SearchableNoteStore {
    store: NoteStore,
}

impl SearchableNoteStore {
    pub fn new(store: NoteStore) -> Self {
        Self { store }
    }

    pub fn into_inner(self) -> NoteStore {
        self.store
    }

    /// Notes matching `query`, in store order. The store is not modified.
    pub fn search_notes(&self, query: &SearchQuery) -> Vec<&Note> {
        let results: Vec<&Note> = self
            .store
            .all_notes()
            .iter()
            .filter(|note| query.matches(note))
            .collect();

        debug!(
            title = ?query.title,
            content = ?query.content,
            result_count = results.len(),
            "searched notes"
        );
        results
    }
}

impl From<NoteStore> for SearchableNoteStore {
    fn from(store: NoteStore) -> Self {
        Self::new(store)
    }
}

impl Deref for SearchableNoteStore {
    type Target = NoteStore;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}

impl DerefMut for SearchableNoteStore {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.store
    }
}
