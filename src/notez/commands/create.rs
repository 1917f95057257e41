use crate::error::{ConflictReason, NotezError, Result, ValidationReason};
use crate::model::Note;
use crate::store::DataStore;
use log::{debug, info};

/// Creates a note with the next id. Empty `title` or `content` count as missing.
pub fn run<S: DataStore>(store: &mut S, title: &str, content: &str) -> Result<Note> {
    if title.is_empty() || content.is_empty() {
        return Err(NotezError::Validation(
            ValidationReason::TitleOrContentMissing,
        ));
    }

    let mut db = store.load_db()?;
    if db.title_taken(title, None) {
        debug!("Rejected create: title {:?} already exists", title);
        return Err(NotezError::Conflict(ConflictReason::TitleExists));
    }

    // Always lastId + 1, ids freed by deletes are never handed out again
    let id = db
        .last_id
        .checked_add(1)
        .ok_or_else(|| NotezError::Store("note id space exhausted".to_string()))?;
    let note = Note::new(id, title.to_string(), content.to_string());
    db.last_id = note.id;
    db.notes.push(note.clone());
    store.save_db(&db)?;

    info!("Note created ({}): {}", note.id, note.title);
    Ok(note)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{delete, get};
    use crate::error::ErrorKind;
    use crate::model::NotesDb;
    use crate::store::mem_backend::MemBackend;
    use crate::store::memory::InMemoryStore;
    use crate::store::note_store::NoteStore;

    #[test]
    fn assigns_sequential_ids() {
        let mut store = InMemoryStore::new();
        for i in 1..=5u64 {
            let note = run(&mut store, &format!("Note {}", i), "body").unwrap();
            assert_eq!(note.id, i);
        }

        let db = store.load_db().unwrap();
        assert_eq!(db.last_id, 5);
        let ids: Vec<u64> = db.notes.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn new_note_has_equal_timestamps() {
        let mut store = InMemoryStore::new();
        let note = run(&mut store, "A", "x").unwrap();
        assert_eq!(note.created, note.changed);
        assert_eq!(note.title, "A");
        assert_eq!(note.content, "x");
    }

    #[test]
    fn missing_title_or_content_is_rejected() {
        let mut store = InMemoryStore::new();
        for (title, content) in [("", "x"), ("A", ""), ("", "")] {
            let err = run(&mut store, title, content).unwrap_err();
            assert!(matches!(
                err,
                NotezError::Validation(ValidationReason::TitleOrContentMissing)
            ));
        }
        // Validation happens before the store is touched
        assert_eq!(store.backend().saves(), 0);
    }

    #[test]
    fn duplicate_title_is_rejected_regardless_of_content() {
        let mut store = InMemoryStore::new();
        run(&mut store, "A", "x").unwrap();

        for content in ["x", "something else"] {
            let err = run(&mut store, "A", content).unwrap_err();
            assert!(matches!(
                err,
                NotezError::Conflict(ConflictReason::TitleExists)
            ));
        }
        assert_eq!(store.load_db().unwrap().last_id, 1);
    }

    #[test]
    fn titles_are_case_sensitive() {
        let mut store = InMemoryStore::new();
        run(&mut store, "Groceries", "milk").unwrap();
        let note = run(&mut store, "groceries", "eggs").unwrap();
        assert_eq!(note.id, 2);
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let mut store = InMemoryStore::new();
        run(&mut store, "A", "x").unwrap();
        run(&mut store, "B", "y").unwrap();
        delete::run(&mut store, 2).unwrap();

        let note = run(&mut store, "C", "z").unwrap();
        assert_eq!(note.id, 3);
        assert!(get::by_id(&store, 2).unwrap().is_none());
    }

    #[test]
    fn save_failure_propagates_and_commits_nothing() {
        let mut store = InMemoryStore::new();
        run(&mut store, "A", "x").unwrap();

        store.backend().set_simulate_write_error(true);
        let err = run(&mut store, "B", "y").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);

        store.backend().set_simulate_write_error(false);
        let db = store.load_db().unwrap();
        assert_eq!(db.last_id, 1);
        assert_eq!(db.notes.len(), 1);
    }

    #[test]
    fn exhausted_id_space_is_an_error() {
        let full = NotesDb {
            last_id: u64::MAX,
            notes: vec![],
        };
        let mut store = NoteStore::with_backend(MemBackend::with_db(full.clone()));

        let err = run(&mut store, "A", "x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(store.backend().saves(), 0);
        assert_eq!(store.backend().persisted(), Some(full));
    }
}
