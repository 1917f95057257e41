use super::backend::StorageBackend;
use crate::error::{NotezError, Result};
use crate::model::NotesDb;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FsBackend {
    db_file: PathBuf,
}

impl FsBackend {
    pub fn new(db_file: impl Into<PathBuf>) -> Self {
        Self {
            db_file: db_file.into(),
        }
    }

    /// Directory holding the db file. Empty for bare relative names like `notes.json`.
    fn db_dir(&self) -> &Path {
        self.db_file.parent().unwrap_or_else(|| Path::new(""))
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path).map_err(NotezError::Io)?;
        }
        Ok(())
    }

    fn tmp_file(&self) -> PathBuf {
        let name = self
            .db_file
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("notes.json");
        self.db_dir()
            .join(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

impl StorageBackend for FsBackend {
    fn load(&self) -> Result<Option<NotesDb>> {
        if !self.db_file.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.db_file).map_err(NotezError::Io)?;
        let db: NotesDb = serde_json::from_str(&content).map_err(NotezError::Serialization)?;
        Ok(Some(db))
    }

    fn save(&self, db: &NotesDb) -> Result<()> {
        self.ensure_dir(self.db_dir())?;

        let content = serde_json::to_string_pretty(db).map_err(NotezError::Serialization)?;

        // Atomic write: the tmp file is flushed to disk before it replaces the db file
        let tmp_file = self.tmp_file();
        let written = File::create(&tmp_file)
            .and_then(|mut file| {
                file.write_all(content.as_bytes())?;
                file.sync_all()
            })
            .and_then(|_| fs::rename(&tmp_file, &self.db_file));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_file);
            return Err(NotezError::Io(e));
        }

        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.db_file.clone()
    }
}
