use super::backend::StorageBackend;
use crate::error::{NotezError, Result};
use crate::model::NotesDb;
use std::cell::{Cell, RefCell};
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability so the `StorageBackend` trait can keep `&self`
/// for all methods. Access from several threads goes through `SharedNotesApi`'s mutex.
#[derive(Default)]
pub struct MemBackend {
    db: RefCell<Option<NotesDb>>,
    simulate_write_error: Cell<bool>,
    saves: Cell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already persisted collection.
    pub fn with_db(db: NotesDb) -> Self {
        Self {
            db: RefCell::new(Some(db)),
            ..Self::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful saves so far.
    pub fn saves(&self) -> usize {
        self.saves.get()
    }

    /// The persisted record as a save left it, bypassing initialization.
    pub fn persisted(&self) -> Option<NotesDb> {
        self.db.borrow().clone()
    }
}

impl StorageBackend for MemBackend {
    fn load(&self) -> Result<Option<NotesDb>> {
        Ok(self.db.borrow().clone())
    }

    fn save(&self, db: &NotesDb) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(NotezError::Store("Simulated write error".to_string()));
        }
        *self.db.borrow_mut() = Some(db.clone());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://notes.json")
    }
}
