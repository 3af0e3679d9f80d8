//! Tracing subscriber setup for hosts embedding the note store.
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! is left to the host and is optional.

use tracing_subscriber::EnvFilter;

use crate::error::{Result, TodoError};

pub const DEFAULT_DIRECTIVE: &str = "todonotes=info";

/// Install a stderr `fmt` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_directive` (or
/// [`DEFAULT_DIRECTIVE`]) is used. Fails if a global subscriber already exists.
pub fn init_logging(default_directive: Option<&str>) -> Result<()> {
    let filter = build_filter(default_directive)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| TodoError::Logging(e.to_string()))
}

fn build_filter(default_directive: Option<&str>) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let directive = default_directive.unwrap_or(DEFAULT_DIRECTIVE);
    EnvFilter::try_new(directive)
        .map_err(|e| TodoError::Logging(format!("invalid directive '{}': {}", directive, e)))
}

