use crate::error::{ConflictReason, NotezError, Result, ValidationReason};
use crate::model::{Note, NoteUpdate};
use crate::store::DataStore;
use log::{debug, info};

/// Applies the provided fields of `update` to note `id` and refreshes `changed`.
pub fn run<S: DataStore>(store: &mut S, id: u64, update: &NoteUpdate) -> Result<Note> {
    if update.is_empty() {
        return Err(NotezError::Validation(ValidationReason::NothingToUpdate));
    }

    let mut db = store.load_db()?;

    // Check the new title against the snapshot before borrowing the note mutably
    let current_title = match db.find(id) {
        Some(note) => note.title.clone(),
        None => {
            debug!("Rejected update: note {} not found", id);
            return Err(NotezError::NoteNotFound(id));
        }
    };
    let new_title = update
        .provided_title()
        .filter(|title| *title != current_title);
    if let Some(title) = new_title {
        if db.title_taken(title, Some(id)) {
            debug!("Rejected update of {}: title {:?} already exists", id, title);
            return Err(NotezError::Conflict(ConflictReason::TitleExists));
        }
    }

    let note = db.find_mut(id).ok_or(NotezError::NoteNotFound(id))?;
    if let Some(title) = new_title {
        note.title = title.to_string();
    }
    if let Some(content) = update.provided_content() {
        note.content = content.to_string();
    }
    note.touch();
    let note = note.clone();

    store.save_db(&db)?;

    info!("Note updated ({}): {}", note.id, note.title);
    Ok(note)
}
