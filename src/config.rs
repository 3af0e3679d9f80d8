use serde::{Deserialize, Serialize};

use crate::error::{Result, TodoError};

pub const DEFAULT_CONFIRMATION_MESSAGE: &str = "Are you sure about these changes?";

const ENV_ID_STRATEGY: &str = "TODONOTES_ID_STRATEGY";
const ENV_CONFIRM_MESSAGE: &str = "TODONOTES_CONFIRM_MESSAGE";
const ENV_NON_INTERACTIVE_ANSWER: &str = "TODONOTES_NON_INTERACTIVE_ANSWER";

/// How note identifiers are allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Random UUID v4 strings
    #[default]
    Uuid,
    /// Process-local counter: `note-1`, `note-2`, ...
    Sequential,
}

impl std::str::FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "uuid" => Ok(IdStrategy::Uuid),
            "sequential" | "counter" => Ok(IdStrategy::Sequential),
            _ => Err(format!("Invalid id strategy: {}", s)),
        }
    }
}

/// Configuration for a note store and its default collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Question shown before updating a note that requires confirmation
    pub confirmation_message: String,
    /// Identifier allocation for new notes
    pub id_strategy: IdStrategy,
    /// Answer given by the stdin prompt when stdin is not a terminal
    pub non_interactive_answer: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            confirmation_message: DEFAULT_CONFIRMATION_MESSAGE.to_string(),
            id_strategy: IdStrategy::default(),
            non_interactive_answer: false,
        }
    }
}

impl StoreConfig {
    /// Defaults overlaid with `TODONOTES_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::default().overlay(|key| std::env::var(key).ok())
    }

    /// Parse a JSON document; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    fn overlay(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(value) = lookup(ENV_ID_STRATEGY) {
            self.id_strategy = value.parse().map_err(TodoError::Config)?;
        }

        if let Some(value) = lookup(ENV_CONFIRM_MESSAGE) {
            if value.trim().is_empty() {
                return Err(TodoError::Config(format!(
                    "{} cannot be empty",
                    ENV_CONFIRM_MESSAGE
                )));
            }
            self.confirmation_message = value;
        }

        if let Some(value) = lookup(ENV_NON_INTERACTIVE_ANSWER) {
            self.non_interactive_answer = parse_bool(&value).ok_or_else(|| {
                TodoError::Config(format!(
                    "Invalid value '{}' for {}",
                    value, ENV_NON_INTERACTIVE_ANSWER
                ))
            })?;
        }

        Ok(self)
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}
