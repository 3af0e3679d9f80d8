use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Title is required and cannot be empty.")]
    TitleRequired,

    #[error("Content is required and cannot be empty.")]
    ContentRequired,

    /// Carries the rejected field name for logging; not part of the message.
    #[error("Unknown field name to sort.")]
    UnknownSortField(String),

    /// Carries the requested id; not part of the message.
    #[error("Note not found.")]
    NoteNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Broad classification of a [`TodoError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected input: empty title or content, unknown sort field.
    Validation,
    /// The requested note does not exist.
    NotFound,
    /// Host setup problems: configuration, logging, serialization.
    Config,
}

impl TodoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TodoError::TitleRequired
            | TodoError::ContentRequired
            | TodoError::UnknownSortField(_) => ErrorKind::Validation,
            TodoError::NoteNotFound(_) => ErrorKind::NotFound,
            TodoError::Config(_) | TodoError::Logging(_) | TodoError::Json(_) => ErrorKind::Config,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

pub type Result<T> = std::result::Result<T, TodoError>;
