use crate::error::Result;
use crate::model::NotesDb;
use std::path::PathBuf;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while NoteStore handles the "what" (initialization, the DataStore contract).
pub trait StorageBackend {
    /// Load the persisted collection.
    /// Returns Ok(None) if nothing has been persisted yet.
    /// Returns Err only on actual I/O or decoding errors.
    fn load(&self) -> Result<Option<NotesDb>>;

    /// Replace the persisted collection.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save(&self, db: &NotesDb) -> Result<()>;

    /// The "file path" of the collection.
    /// For FsBackend, this is the real path. For MemBackend, a virtual path.
    fn location(&self) -> PathBuf;
}
