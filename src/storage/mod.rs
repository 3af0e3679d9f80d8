pub mod host;
mod note_store;

pub use host::{
    AutoConfirm, Clock, ConfirmPrompt, IdGenerator, SequentialIdGenerator, StdinPrompt,
    SystemClock, UuidIdGenerator,
};
pub use note_store::{NewNote, NoteStore, NoteUpdate};
