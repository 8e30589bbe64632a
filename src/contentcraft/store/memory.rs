use super::ContentStore;
use crate::error::{ContentError, Result};
use crate::model::{Category, ContentFields, ContentRecord, ContentStatus};
use chrono::NaiveDate;
use uuid::Uuid;

/// In-memory content collection. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Vec<ContentRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store holding `records` in the given order.
    pub fn with_records(records: Vec<ContentRecord>) -> Self {
        Self { records }
    }

    /// Builds a store holding the two sample records a fresh workspace starts with.
    pub fn with_samples(author: &str) -> Self {
        let getting_started = ContentRecord {
            id: Uuid::new_v4(),
            fields: ContentFields {
                title: "Getting Started with ContentCraft".to_string(),
                slug: "getting-started".to_string(),
                status: ContentStatus::Published,
                category: Some(Category::Tutorial),
                ..Default::default()
            },
            published_at: NaiveDate::from_ymd_opt(2024, 1, 15),
            author: author.to_string(),
        };
        let advanced = ContentRecord {
            id: Uuid::new_v4(),
            fields: ContentFields {
                title: "Advanced Content Management".to_string(),
                slug: "advanced-content".to_string(),
                status: ContentStatus::Draft,
                category: Some(Category::Guide),
                ..Default::default()
            },
            published_at: None,
            author: author.to_string(),
        };
        Self::with_records(vec![getting_started, advanced])
    }

    fn position(&self, id: &Uuid) -> Option<usize> {
        self.records.iter().position(|r| &r.id == id)
    }
}

impl ContentStore for InMemoryStore {
    fn insert_front(&mut self, record: ContentRecord) -> Result<()> {
        if self.position(&record.id).is_some() {
            return Err(ContentError::Validation(format!(
                "Duplicate content id: {}",
                record.id
            )));
        }
        self.records.insert(0, record);
        Ok(())
    }

    fn get(&self, id: &Uuid) -> Result<ContentRecord> {
        self.records
            .iter()
            .find(|r| &r.id == id)
            .cloned()
            .ok_or(ContentError::NotFound(*id))
    }

    fn replace(&mut self, record: ContentRecord) -> Result<()> {
        let pos = self
            .position(&record.id)
            .ok_or(ContentError::NotFound(record.id))?;
        self.records[pos] = record;
        Ok(())
    }

    fn remove(&mut self, id: &Uuid) -> Result<Option<ContentRecord>> {
        Ok(self.position(id).map(|pos| self.records.remove(pos)))
    }

    fn list(&self) -> Result<Vec<ContentRecord>> {
        Ok(self.records.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds a record on top, the way a fresh commit would.
        pub fn with_record(
            mut self,
            title: &str,
            status: ContentStatus,
            category: Option<Category>,
        ) -> Self {
            let fields = ContentFields {
                title: title.to_string(),
                slug: crate::slug::derive_slug(title),
                status,
                category,
                ..Default::default()
            };
            self.store
                .insert_front(ContentRecord::new(fields, "Admin"))
                .unwrap();
            self
        }

        pub fn with_records(mut self, count: usize) -> Self {
            for i in 0..count {
                self = self.with_record(
                    &format!("Test Content {}", i + 1),
                    ContentStatus::Draft,
                    None,
                );
            }
            self
        }

        pub fn ids(&self) -> Vec<Uuid> {
            self.store.list().unwrap().iter().map(|r| r.id).collect()
        }
    }
}
