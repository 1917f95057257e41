//! # Storage Layer
//!
//! The store persists one record, [`NotesDb`]: the `lastId` counter plus the ordered list of
//! notes. There are no per-note files and no indexes. Every operation loads the whole record
//! and every mutation writes the whole record back.
//!
//! ## Two Traits
//!
//! - [`backend::StorageBackend`] is raw I/O: load and save the record somewhere.
//! - [`DataStore`] is what commands talk to. [`note_store::NoteStore`] implements it over any
//!   backend and adds lazy initialization: the first load of a store with nothing persisted
//!   writes `{lastId: 0, notes: []}` and returns it.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: `NoteStore<FsBackend>`, a single pretty-printed JSON file, replaced
//!   atomically (temp file + rename) on each save.
//! - [`memory::InMemoryStore`]: `NoteStore<MemBackend>`, for tests.
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "lastId": 2,
//!   "notes": [
//!     { "id": 2, "title": "...", "content": "...",
//!       "created": "2024-05-01T10:00:00.123Z", "changed": "2024-05-01T10:00:00.123Z" }
//!   ]
//! }
//! ```
//!
//! The store is not safe to share between processes. Within a process, callers serialize
//! access (see [`crate::api::SharedNotesApi`]).

use crate::error::Result;
use crate::model::NotesDb;
use std::path::PathBuf;

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod note_store;

/// Abstract interface for note storage.
pub trait DataStore {
    /// Load the full collection, initializing it if nothing is persisted yet
    fn load_db(&self) -> Result<NotesDb>;

    /// Replace the persisted collection with `db`
    fn save_db(&mut self, db: &NotesDb) -> Result<()>;

    /// Where the collection lives (a file path, or a virtual path for memory stores)
    fn location(&self) -> PathBuf;
}
