use super::fs_backend::FsBackend;
use super::note_store::NoteStore;
use std::path::PathBuf;

pub type FileStore = NoteStore<FsBackend>;

impl FileStore {
    pub fn new(db_file: impl Into<PathBuf>) -> Self {
        NoteStore::with_backend(FsBackend::new(db_file))
    }
}
