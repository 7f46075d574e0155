use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::application::{Clock, IdGenerator};
use crate::domain::Record;

use super::{SystemClock, UuidGenerator};

/// Insertion-ordered record collection shared by the in-memory repositories.
///
/// Each method holds the lock for its whole body, so a single call is atomic
/// with respect to every other call on the same store.
pub struct InMemoryStore<R: Record> {
    records: Mutex<Vec<R>>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl<R: Record> InMemoryStore<R> {
    pub fn new() -> Self {
        Self::with_sources(Arc::new(UuidGenerator), Arc::new(SystemClock))
    }

    pub fn with_sources(ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            ids,
            clock,
        }
    }

    /// Builds a record from a fresh identifier and the current time, then appends it.
    pub async fn insert_with<F>(&self, build: F) -> R
    where
        F: FnOnce(String, DateTime<Utc>) -> R,
    {
        let record = build(self.ids.next_id(), self.clock.now());
        let mut records = self.records.lock().await;
        records.push(record.clone());
        record
    }

    pub async fn get(&self, id: &str) -> Option<R> {
        let records = self.records.lock().await;
        records.iter().find(|r| r.id() == id).cloned()
    }

    pub async fn all(&self) -> Vec<R> {
        let records = self.records.lock().await;
        records.clone()
    }

    pub async fn find_first<P>(&self, predicate: P) -> Option<R>
    where
        P: Fn(&R) -> bool,
    {
        let records = self.records.lock().await;
        records.iter().find(|&r| predicate(r)).cloned()
    }

    pub async fn filter<P>(&self, predicate: P) -> Vec<R>
    where
        P: Fn(&R) -> bool,
    {
        let records = self.records.lock().await;
        records.iter().filter(|&r| predicate(r)).cloned().collect()
    }

    /// Replaces the record with its merge against `update`.
    pub async fn update(&self, id: &str, update: &R::Update) -> Option<R> {
        let mut records = self.records.lock().await;
        let slot = records.iter_mut().find(|r| r.id() == id)?;
        *slot = slot.merged(update);
        Some(slot.clone())
    }

    /// Removes the record, keeping the order of the rest.
    pub async fn remove(&self, id: &str) -> bool {
        let mut records = self.records.lock().await;
        match records.iter().position(|r| r.id() == id) {
            Some(index) => {
                records.remove(index);
                true
            }
            None => false,
        }
    }

    pub async fn count(&self) -> usize {
        self.records.lock().await.len()
    }
}

impl<R: Record> Default for InMemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU64, Ordering};

    use super::*;
    use crate::domain::FieldUpdate;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: String,
        text: String,
        pinned: bool,
    }

    #[derive(Default)]
    struct NoteUpdate {
        text: FieldUpdate<String>,
        pinned: FieldUpdate<bool>,
    }

    impl Record for Note {
        type Update = NoteUpdate;

        fn id(&self) -> &str {
            &self.id
        }

        fn merged(&self, update: &NoteUpdate) -> Self {
            Self {
                id: self.id.clone(),
                text: update.text.resolve(&self.text),
                pinned: update.pinned.resolve(&self.pinned),
            }
        }
    }

    struct Sequential(AtomicU64);

    impl IdGenerator for Sequential {
        fn next_id(&self) -> String {
            format!("n-{}", self.0.fetch_add(1, Ordering::SeqCst))
        }
    }

    fn store() -> InMemoryStore<Note> {
        InMemoryStore::with_sources(Arc::new(Sequential(AtomicU64::new(1))), Arc::new(SystemClock))
    }

    async fn add(store: &InMemoryStore<Note>, text: &str) -> Note {
        store
            .insert_with(|id, _| Note {
                id,
                text: text.to_string(),
                pinned: false,
            })
            .await
    }

    #[tokio::test]
    async fn test_insert_assigns_ids_and_keeps_order() {
        let store = store();
        add(&store, "a").await;
        add(&store, "b").await;
        add(&store, "c").await;

        let ids: Vec<String> = store.all().await.into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["n-1", "n-2", "n-3"]);
    }

    #[tokio::test]
    async fn test_update_merges_present_fields() {
        let store = store();
        let note = add(&store, "a").await;

        let update = NoteUpdate {
            pinned: FieldUpdate::Set(true),
            ..NoteUpdate::default()
        };
        let updated = store.update(&note.id, &update).await.unwrap();

        assert!(updated.pinned);
        assert_eq!(updated.text, "a");
        assert_eq!(store.get(&note.id).await, Some(updated));
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let store = store();
        assert!(store.update("nope", &NoteUpdate::default()).await.is_none());
    }

    #[tokio::test]
    async fn test_remove_preserves_order_and_is_idempotent() {
        let store = store();
        add(&store, "a").await;
        let middle = add(&store, "b").await;
        add(&store, "c").await;

        assert!(store.remove(&middle.id).await);
        assert!(!store.remove(&middle.id).await);

        let texts: Vec<String> = store.all().await.into_iter().map(|n| n.text).collect();
        assert_eq!(texts, vec!["a", "c"]);
        assert_eq!(store.count().await, 2);
    }

    #[tokio::test]
    async fn test_filter_and_find_first() {
        let store = store();
        add(&store, "apple").await;
        add(&store, "banana").await;
        add(&store, "avocado").await;

        let starts_with_a = store.filter(|n| n.text.starts_with('a')).await;
        assert_eq!(starts_with_a.len(), 2);

        let banana = store.find_first(|n| n.text == "banana").await;
        assert_eq!(banana.map(|n| n.id), Some("n-2".to_string()));
    }
}
