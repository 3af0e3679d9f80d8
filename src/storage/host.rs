//! Collaborators a host supplies to a [`NoteStore`](super::NoteStore):
//! identifiers, the clock, and the yes/no confirmation prompt.

use std::io::{self, BufRead, Write};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Source of note identifiers. Every returned id must be unique within the run.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Wall-clock source for note timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Interactive yes/no question asked before a gated update.
pub trait ConfirmPrompt {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F: FnMut() -> String> IdGenerator for F {
    fn next_id(&mut self) -> String {
        self()
    }
}

impl<F: Fn() -> DateTime<Utc>> Clock for F {
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}

impl<F: FnMut(&str) -> bool> ConfirmPrompt for F {
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// Random UUID v4 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Counter-based identifiers (`note-1`, `note-2`, ...), unique per generator.
#[derive(Debug, Default, Clone)]
pub struct SequentialIdGenerator {
    last: u64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        self.last += 1;
        format!("note-{}", self.last)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Prompt that always gives the same answer.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl ConfirmPrompt for AutoConfirm {
    fn confirm(&mut self, _message: &str) -> bool {
        self.0
    }
}

/// Asks on stderr and reads a `y`/`yes` answer from stdin.
///
/// When stdin is not a terminal nothing is read and `non_interactive_answer`
/// is returned.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinPrompt {
    pub non_interactive_answer: bool,
}

impl StdinPrompt {
    pub fn new(non_interactive_answer: bool) -> Self {
        Self {
            non_interactive_answer,
        }
    }
}

impl ConfirmPrompt for StdinPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        if !atty::is(atty::Stream::Stdin) {
            tracing::warn!(
                answer = self.non_interactive_answer,
                "stdin is not a terminal, using non-interactive answer"
            );
            return self.non_interactive_answer;
        }

        let mut stderr = io::stderr();
        let _ = write!(stderr, "{} [y/N] ", message);
        let _ = stderr.flush();

        let mut input = String::new();
        match io::stdin().lock().read_line(&mut input) {
            Ok(_) => is_affirmative(&input),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read confirmation answer");
                false
            }
        }
    }
}

fn is_affirmative(input: &str) -> bool {
    let answer = input.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
