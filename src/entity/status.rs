use serde::{Deserialize, Serialize};

/// Lifecycle of a note.
///
/// Discriminants are spaced so intermediate states can be added later.
/// Ordering follows the numeric value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum NoteStatus {
    #[default]
    InProgress = 10,
    Completed = 20,
}

impl NoteStatus {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for NoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoteStatus::InProgress => write!(f, "in_progress"),
            NoteStatus::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for NoteStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "in_progress" | "inprogress" => Ok(NoteStatus::InProgress),
            "completed" | "done" => Ok(NoteStatus::Completed),
            _ => Err(format!("Invalid note status: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_values_keep_gap() {
        assert_eq!(NoteStatus::InProgress.as_u8(), 10);
        assert_eq!(NoteStatus::Completed.as_u8(), 20);
        assert!(NoteStatus::InProgress < NoteStatus::Completed);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("in_progress".parse::<NoteStatus>(), Ok(NoteStatus::InProgress));
        assert_eq!("inProgress".parse::<NoteStatus>(), Ok(NoteStatus::InProgress));
        assert_eq!("in-progress".parse::<NoteStatus>(), Ok(NoteStatus::InProgress));
        assert_eq!("Completed".parse::<NoteStatus>(), Ok(NoteStatus::Completed));
        assert!("archived".parse::<NoteStatus>().is_err());
        assert_eq!(NoteStatus::InProgress.to_string(), "in_progress");
        assert_eq!(NoteStatus::Completed.to_string(), "completed");
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&NoteStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        let parsed: NoteStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(parsed, NoteStatus::Completed);
    }
}
