use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;

use chrono::{DateTime, TimeZone, Utc};
use todonotes::storage::{AutoConfirm, SequentialIdGenerator, UuidIdGenerator};
use todonotes::{
    NewNote, Note, NoteStatus, NoteStore, NoteUpdate, SearchQuery, SearchableNoteStore,
    SortableNoteStore, StoreConfig, TodoError,
};

/// Clock that advances one second per call, starting at `t = 1`.
fn ticking_clock() -> impl Fn() -> DateTime<Utc> {
    let tick = Cell::new(1);
    move || {
        let t = tick.get();
        tick.set(t + 1);
        Utc.timestamp_opt(1_700_000_000 + t, 0).unwrap()
    }
}

fn store(answer: bool) -> NoteStore {
    NoteStore::new(SequentialIdGenerator::new(), ticking_clock(), AutoConfirm(answer))
}

fn assert_invariants(store: &NoteStore) {
    let notes = store.all_notes();
    assert_eq!(store.all_notes_count(), notes.len());
    assert_eq!(
        store.in_progress_notes_count(),
        notes
            .iter()
            .filter(|n| n.status() == NoteStatus::InProgress)
            .count()
    );

    let ids: HashSet<&str> = notes.iter().map(Note::id).collect();
    assert_eq!(ids.len(), notes.len());

    for note in notes {
        assert!(!note.title().trim().is_empty());
        assert!(!note.content().trim().is_empty());
        assert!(note.created_at() <= note.updated_at());
    }
}

#[test]
fn test_create_scenario() {
    let mut store = NoteStore::new(UuidIdGenerator, ticking_clock(), AutoConfirm(true));
    let note = store
        .create_note(NewNote::new("Buy milk", "2 liters"))
        .unwrap()
        .clone();

    assert_eq!(note.status(), NoteStatus::InProgress);
    assert!(!note.requires_confirmation());
    assert!(!note.id().is_empty());
    assert_eq!(note.created_at(), note.updated_at());
    assert_eq!(store.all_notes_count(), 1);
    assert_eq!(store.in_progress_notes_count(), 1);
    assert_eq!(store.read_note(note.id()).unwrap(), &note);
    assert_invariants(&store);
}

#[test]
fn test_validation_scenario() {
    let mut store = store(true);

    let err = store.create_note(NewNote::new("", "x")).unwrap_err();
    assert_eq!(err.to_string(), "Title is required and cannot be empty.");
    assert!(err.is_validation());

    let err = store.create_note(NewNote::new("x", "   ")).unwrap_err();
    assert_eq!(err.to_string(), "Content is required and cannot be empty.");
    assert!(err.is_validation());

    assert_eq!(store.all_notes_count(), 0);
}

#[test]
fn test_confirmation_refused_scenario() {
    let mut store = store(false);
    let original = store
        .create_note(NewNote::new("A", "B").requires_confirmation(true))
        .unwrap()
        .clone();

    let note = store
        .update_note(
            original.id(),
            NoteUpdate::new().title("A2").status(NoteStatus::Completed),
        )
        .unwrap();

    assert_eq!(note.title(), "A");
    assert_eq!(note.status(), NoteStatus::InProgress);
    assert_eq!(note.updated_at(), original.updated_at());
    assert_eq!(store.read_note(original.id()).unwrap(), &original);
}

#[test]
fn test_confirmation_follows_prompt_answers() {
    let answers = Rc::new(Cell::new(false));
    let answer = Rc::clone(&answers);
    let mut store = NoteStore::new(
        SequentialIdGenerator::new(),
        ticking_clock(),
        move |_: &str| answer.get(),
    );
    let id = store
        .create_note(NewNote::new("A", "B").requires_confirmation(true))
        .unwrap()
        .id()
        .to_string();

    store.update_note(&id, NoteUpdate::new().title("declined")).unwrap();
    assert_eq!(store.read_note(&id).unwrap().title(), "A");

    answers.set(true);
    store.update_note(&id, NoteUpdate::new().title("accepted")).unwrap();
    assert_eq!(store.read_note(&id).unwrap().title(), "accepted");
    assert!(store.read_note(&id).unwrap().requires_confirmation());
}

#[test]
fn test_partial_update_scenario() {
    let mut store = store(true);
    let original = store.create_note(NewNote::new("A", "B")).unwrap().clone();

    let note = store
        .update_note(
            original.id(),
            NoteUpdate::new().content("").status(NoteStatus::Completed),
        )
        .unwrap();

    assert_eq!(note.title(), "A");
    assert_eq!(note.content(), "B");
    assert_eq!(note.status(), NoteStatus::Completed);
    assert!(note.updated_at() > original.updated_at());
    assert_eq!(note.created_at(), original.created_at());
}

#[test]
fn test_create_delete_read_fails() {
    let mut store = store(true);
    let id = store.create_note(NewNote::new("A", "B")).unwrap().id().to_string();
    assert!(store.delete_note(&id));

    let err = store.read_note(&id).unwrap_err();
    assert!(matches!(err, TodoError::NoteNotFound(_)));
    assert_eq!(err.to_string(), "Note not found.");

    let err = store.update_note(&id, NoteUpdate::new()).unwrap_err();
    assert!(err.is_not_found());
    assert!(!store.delete_note(&id));
}

#[test]
fn test_search_scenario() {
    let mut store = SearchableNoteStore::new(store(true));
    store.create_note(NewNote::new("Alpha", "red")).unwrap();
    store.create_note(NewNote::new("Beta", "ALPHA tint")).unwrap();
    store.create_note(NewNote::new("Gamma", "green")).unwrap();

    let titles = |notes: Vec<&Note>| -> Vec<String> {
        notes.iter().map(|n| n.title().to_string()).collect()
    };

    assert_eq!(
        titles(store.search_notes(&SearchQuery::new().title("alpha"))),
        vec!["Alpha"]
    );
    assert_eq!(
        titles(store.search_notes(&SearchQuery::new().title("alpha").content("green"))),
        vec!["Alpha", "Gamma"]
    );
    assert_eq!(
        titles(store.search_notes(&SearchQuery::new())),
        vec!["Alpha", "Beta", "Gamma"]
    );
    assert_eq!(
        titles(store.search_notes(&todonotes::parse_query("content:tint"))),
        vec!["Beta"]
    );
    assert_eq!(store.all_notes_count(), 3);
}

#[test]
fn test_sort_scenario() {
    let mut store = SortableNoteStore::new(store(true));
    let n1 = store.create_note(NewNote::new("N1", "x")).unwrap().id().to_string();
    let n2 = store.create_note(NewNote::new("N2", "x")).unwrap().id().to_string();
    let n3 = store.create_note(NewNote::new("N3", "x")).unwrap().id().to_string();
    store
        .update_note(&n1, NoteUpdate::new().status(NoteStatus::Completed))
        .unwrap();

    let ids = |notes: &[Note]| -> Vec<String> { notes.iter().map(|n| n.id().to_string()).collect() };

    let by_status = ids(store.order_notes_by("status").unwrap());
    assert_eq!(by_status, vec![n2.clone(), n3.clone(), n1.clone()]);

    let by_created = ids(store.order_notes_by("createdAt").unwrap());
    assert_eq!(by_created, vec![n1.clone(), n2.clone(), n3.clone()]);

    let err = store.order_notes_by("other").unwrap_err();
    assert_eq!(err.to_string(), "Unknown field name to sort.");
    assert!(err.is_validation());
    assert_eq!(ids(store.all_notes()), vec![n1, n2, n3]);
}

#[test]
fn test_invariants_hold_across_operations() {
    let mut store = SortableNoteStore::new(store(true));
    let mut ids = Vec::new();

    for i in 0..12 {
        let input = NewNote::new(format!("title {}", i), format!("content {}", i))
            .requires_confirmation(i % 3 == 0);
        ids.push(store.create_note(input).unwrap().id().to_string());
        assert_invariants(&store);
    }

    for (i, id) in ids.iter().enumerate() {
        let update = match i % 4 {
            0 => NoteUpdate::new().status(NoteStatus::Completed),
            1 => NoteUpdate::new().title("  "),
            2 => NoteUpdate::new().content(format!("edited {}", i)),
            _ => NoteUpdate::new(),
        };
        store.update_note(id, update).unwrap();
        assert_invariants(&store);
    }

    for id in ids.iter().step_by(5) {
        assert!(store.delete_note(id));
        assert_invariants(&store);
    }

    store.order_notes_by("status").unwrap();
    assert_invariants(&store);
    store.order_notes_by("createdAt").unwrap();
    assert_invariants(&store);
    assert_eq!(store.all_notes_count(), 12 - 3);
}

#[test]
fn test_store_from_config() {
    let config = StoreConfig::from_json(r#"{"id_strategy": "sequential"}"#).unwrap();
    let mut store = NoteStore::from_config(&config);
    let first = store.create_note(NewNote::new("a", "b")).unwrap().id().to_string();
    let second = store.create_note(NewNote::new("c", "d")).unwrap().id().to_string();
    assert_eq!(first, "note-1");
    assert_eq!(second, "note-2");
}

#[test]
fn test_note_json_shape() {
    let mut store = store(true);
    let note = store.create_note(NewNote::new("A", "B")).unwrap();
    let json = serde_json::to_value(note).unwrap();
    assert_eq!(json["id"], "note-1");
    assert_eq!(json["status"], "in_progress");
    assert_eq!(json["requires_confirmation"], false);
}
