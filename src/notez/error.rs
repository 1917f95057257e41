use std::fmt;
use thiserror::Error;

/// Why an input was rejected before touching the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    /// `create` needs both a title and a content.
    TitleOrContentMissing,
    /// `update` got neither a title nor a content.
    NothingToUpdate,
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationReason::TitleOrContentMissing => write!(f, "title and content are required"),
            ValidationReason::NothingToUpdate => write!(f, "nothing to update"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictReason {
    TitleExists,
}

impl fmt::Display for ConflictReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictReason::TitleExists => write!(f, "a note with this title already exists"),
        }
    }
}

/// Coarse error category, the only thing callers outside the library should branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Conflict,
    NotFound,
    Io,
}

#[derive(Error, Debug)]
pub enum NotezError {
    #[error("Validation error: {0}")]
    Validation(ValidationReason),

    #[error("Conflict: {0}")]
    Conflict(ConflictReason),

    #[error("Note not found: {0}")]
    NoteNotFound(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl NotezError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NotezError::Validation(_) => ErrorKind::Validation,
            NotezError::Conflict(_) => ErrorKind::Conflict,
            NotezError::NoteNotFound(_) => ErrorKind::NotFound,
            NotezError::Io(_) | NotezError::Serialization(_) | NotezError::Store(_) => {
                ErrorKind::Io
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, NotezError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persistence_failures_are_io_kind() {
        let err = NotezError::Store("disk full".to_string());
        assert_eq!(err.kind(), ErrorKind::Io);

        let err: NotezError = serde_json::from_str::<u64>("nope").unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn display_includes_reason() {
        let err = NotezError::Conflict(ConflictReason::TitleExists);
        assert_eq!(
            err.to_string(),
            "Conflict: a note with this title already exists"
        );
        assert_eq!(
            NotezError::NoteNotFound(7).to_string(),
            "Note not found: 7"
        );
    }
}
