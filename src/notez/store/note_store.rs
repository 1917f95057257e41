use super::backend::StorageBackend;
use super::DataStore;
use crate::error::Result;
use crate::model::NotesDb;
use log::info;
use std::path::PathBuf;

pub struct NoteStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> NoteStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: StorageBackend> DataStore for NoteStore<B> {
    fn load_db(&self) -> Result<NotesDb> {
        if let Some(db) = self.backend.load()? {
            return Ok(db);
        }

        // First access: persist the empty collection so the file exists from now on
        let db = NotesDb::default();
        self.backend.save(&db)?;
        info!(
            "Initialized empty note store at {}",
            self.backend.location().display()
        );
        Ok(db)
    }

    fn save_db(&mut self, db: &NotesDb) -> Result<()> {
        self.backend.save(db)
    }

    fn location(&self) -> PathBuf {
        self.backend.location()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Note;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn first_load_persists_empty_collection() {
        let store = NoteStore::with_backend(MemBackend::new());
        assert!(store.backend().persisted().is_none());

        let db = store.load_db().unwrap();
        assert_eq!(db, NotesDb::default());
        assert_eq!(store.backend().persisted(), Some(NotesDb::default()));
        assert_eq!(store.backend().saves(), 1);

        // Second load finds it and does not write again
        store.load_db().unwrap();
        assert_eq!(store.backend().saves(), 1);
    }

    #[test]
    fn existing_collection_is_loaded_as_is() {
        let db = NotesDb {
            last_id: 5,
            notes: vec![Note::new(3, "A".into(), "x".into())],
        };
        let store = NoteStore::with_backend(MemBackend::with_db(db.clone()));
        assert_eq!(store.load_db().unwrap(), db);
        assert_eq!(store.backend().saves(), 0);
    }

    #[test]
    fn initialization_write_error_propagates() {
        let store = NoteStore::with_backend(MemBackend::new());
        store.backend().set_simulate_write_error(true);
        assert!(store.load_db().is_err());
    }
}
