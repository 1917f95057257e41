//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point for
//! every client (the HTTP server, tests, anything else).
//!
//! `NotesApi<S: DataStore>` is generic over the storage backend:
//! - Production: `NotesApi<FileStore>`
//! - Testing: `NotesApi<InMemoryStore>`
//!
//! ## Serialized Access
//!
//! Commands are read-modify-write over the whole collection, so two calls must never
//! overlap. [`SharedNotesApi`] owns the one `NotesApi` of a process behind a mutex; every
//! caller locks it for the duration of exactly one operation. Reads go through the same lock
//! so they never observe a half-finished save.
//!
//! Never hold the guard across an `.await`. Async callers go through [`SharedNotesApi::run`],
//! which takes the lock on tokio's blocking pool so store I/O never stalls a runtime worker.

use crate::commands;
use crate::error::{NotezError, Result};
use crate::model::{Note, NoteUpdate};
use crate::store::DataStore;
use parking_lot::{Mutex, MutexGuard};
use std::path::PathBuf;
use std::sync::Arc;

/// The main API facade for note operations.
pub struct NotesApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> NotesApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list_notes(&self) -> Result<Vec<Note>> {
        commands::get::all(&self.store)
    }

    pub fn get_note(&self, id: u64) -> Result<Option<Note>> {
        commands::get::by_id(&self.store, id)
    }

    pub fn get_note_by_title(&self, title: &str) -> Result<Option<Note>> {
        commands::get::by_title(&self.store, title)
    }

    pub fn create_note(&mut self, title: &str, content: &str) -> Result<Note> {
        commands::create::run(&mut self.store, title, content)
    }

    pub fn update_note(&mut self, id: u64, update: &NoteUpdate) -> Result<Note> {
        commands::update::run(&mut self.store, id, update)
    }

    pub fn delete_note(&mut self, id: u64) -> Result<()> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn location(&self) -> PathBuf {
        self.store.location()
    }
}

/// Process-wide handle to one [`NotesApi`]. Cloning shares the same store and lock.
pub struct SharedNotesApi<S: DataStore> {
    inner: Arc<Mutex<NotesApi<S>>>,
}

impl<S: DataStore> Clone for SharedNotesApi<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: DataStore> SharedNotesApi<S> {
    pub fn new(api: NotesApi<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(api)),
        }
    }

    /// Enters the critical section. Drop the guard as soon as the operation is done.
    pub fn lock(&self) -> MutexGuard<'_, NotesApi<S>> {
        self.inner.lock()
    }
}

impl<S: DataStore + Send + 'static> SharedNotesApi<S> {
    /// Runs one operation inside the critical section on a blocking thread.
    pub async fn run<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut NotesApi<S>) -> Result<T> + Send + 'static,
    {
        let shared = self.clone();
        let task = tokio::task::spawn_blocking(move || {
            let mut api = shared.lock();
            op(&mut api)
        });
        match task.await {
            Ok(result) => result,
            Err(e) => Err(NotezError::Store(format!("store task failed: {}", e))),
        }
    }
}
