use crate::error::Result;
use crate::model::Note;
use crate::store::DataStore;

/// All notes in insertion order.
pub fn all<S: DataStore>(store: &S) -> Result<Vec<Note>> {
    Ok(store.load_db()?.notes)
}

pub fn by_id<S: DataStore>(store: &S, id: u64) -> Result<Option<Note>> {
    Ok(store.load_db()?.find(id).cloned())
}

/// Exact, case-sensitive title match.
pub fn by_title<S: DataStore>(store: &S, title: &str) -> Result<Option<Note>> {
    Ok(store.load_db()?.find_by_title(title).cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_store_lists_nothing() {
        let store = InMemoryStore::new();
        assert!(all(&store).unwrap().is_empty());
    }

    #[test]
    fn lists_in_insertion_order() {
        let fixture = StoreFixture::new()
            .with_note("Zeta", "z")
            .with_note("Alpha", "a")
            .with_note("Mid", "m");
        let titles: Vec<String> = all(&fixture.store)
            .unwrap()
            .into_iter()
            .map(|n| n.title)
            .collect();
        assert_eq!(titles, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn by_id_returns_created_note() {
        let mut store = InMemoryStore::new();
        let created = create::run(&mut store, "A", "x").unwrap();
        assert_eq!(by_id(&store, created.id).unwrap(), Some(created));
    }

    #[test]
    fn by_id_missing_is_none() {
        let fixture = StoreFixture::new().with_notes(2);
        assert!(by_id(&fixture.store, 3).unwrap().is_none());
    }

    #[test]
    fn by_title_is_exact_match() {
        let fixture = StoreFixture::new().with_note("Shopping List", "milk");
        let note = by_title(&fixture.store, "Shopping List").unwrap().unwrap();
        assert_eq!(note.content, "milk");

        assert!(by_title(&fixture.store, "shopping list").unwrap().is_none());
        assert!(by_title(&fixture.store, "Shopping").unwrap().is_none());
        assert!(by_title(&fixture.store, " Shopping List").unwrap().is_none());
    }
}
