use crate::error::{NotezError, Result};
use crate::store::DataStore;
use log::{debug, info};

pub fn run<S: DataStore>(store: &mut S, id: u64) -> Result<()> {
    let mut db = store.load_db()?;
    let Some(index) = db.notes.iter().position(|n| n.id == id) else {
        debug!("Rejected delete: note {} not found", id);
        return Err(NotezError::NoteNotFound(id));
    };

    let note = db.notes.remove(index);
    store.save_db(&db)?;

    info!("Note deleted ({}): {}", note.id, note.title);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::get;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn removes_only_the_target() {
        let mut fixture = StoreFixture::new().with_notes(3);
        run(&mut fixture.store, 2).unwrap();

        let ids: Vec<u64> = get::all(&fixture.store)
            .unwrap()
            .iter()
            .map(|n| n.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(get::by_id(&fixture.store, 2).unwrap().is_none());
    }

    #[test]
    fn keeps_last_id() {
        let mut fixture = StoreFixture::new().with_notes(2);
        run(&mut fixture.store, 2).unwrap();
        assert_eq!(fixture.store.load_db().unwrap().last_id, 2);
    }

    #[test]
    fn frees_the_title() {
        let mut fixture = StoreFixture::new().with_note("A", "x");
        run(&mut fixture.store, 1).unwrap();
        assert!(get::by_title(&fixture.store, "A").unwrap().is_none());
    }

    #[test]
    fn missing_note_is_not_found() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, 1).unwrap_err();
        assert!(matches!(err, NotezError::NoteNotFound(1)));
    }

    #[test]
    fn deleting_twice_fails_the_second_time() {
        let mut fixture = StoreFixture::new().with_notes(1);
        run(&mut fixture.store, 1).unwrap();
        let err = run(&mut fixture.store, 1).unwrap_err();
        assert!(matches!(err, NotezError::NoteNotFound(1)));
    }
}
