use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// RFC 3339 with exactly three fractional digits, e.g. `2024-05-01T10:00:00.120Z`.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        DateTime::<Utc>::deserialize(d)
    }
}

/// Current time at the precision notes are persisted with (milliseconds).
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: u64,
    pub title: String,
    pub content: String,
    #[serde(with = "iso_millis")]
    pub created: DateTime<Utc>,
    #[serde(with = "iso_millis")]
    pub changed: DateTime<Utc>,
}

impl Note {
    pub fn new(id: u64, title: String, content: String) -> Self {
        let now = now();
        Self {
            id,
            title,
            content,
            created: now,
            changed: now,
        }
    }

    /// Refreshes `changed`. Never moves it backwards, so `changed >= created` holds
    /// even if the wall clock jumps back.
    pub fn touch(&mut self) {
        self.changed = now().max(self.changed);
    }
}

/// The whole persisted collection, written as a single record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesDb {
    /// Last id handed out. Only ever grows, deleted ids are not reused.
    pub last_id: u64,
    pub notes: Vec<Note>,
}

impl NotesDb {
    pub fn find(&self, id: u64) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn find_mut(&mut self, id: u64) -> Option<&mut Note> {
        self.notes.iter_mut().find(|n| n.id == id)
    }

    pub fn find_by_title(&self, title: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.title == title)
    }

    /// True if a note other than `except` already uses `title`.
    pub fn title_taken(&self, title: &str, except: Option<u64>) -> bool {
        self.notes
            .iter()
            .any(|n| n.title == title && Some(n.id) != except)
    }
}

/// Fields to change on a note. Empty strings count as not provided.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NoteUpdate {
    pub fn new(title: Option<String>, content: Option<String>) -> Self {
        Self { title, content }
    }

    pub fn title(title: impl Into<String>) -> Self {
        Self::new(Some(title.into()), None)
    }

    pub fn content(content: impl Into<String>) -> Self {
        Self::new(None, Some(content.into()))
    }

    pub fn provided_title(&self) -> Option<&str> {
        provided(&self.title)
    }

    pub fn provided_content(&self) -> Option<&str> {
        provided(&self.content)
    }

    pub fn is_empty(&self) -> bool {
        self.provided_title().is_none() && self.provided_content().is_none()
    }
}

fn provided(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
