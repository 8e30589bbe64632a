//! # Storage Layer
//!
//! The [`ContentStore`] trait is the collection of committed content records.
//! Commands talk to the trait, never to a concrete store, so the same command
//! logic works against any backend.
//!
//! ## Ordering
//!
//! A store keeps records in display order, most recent first. New records go to
//! the head; replacing a record keeps its position; nothing ever re-sorts.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: a plain `Vec`, gone when the process exits.
//!   Records are never persisted.

use crate::error::Result;
use crate::model::ContentRecord;
use uuid::Uuid;

pub mod memory;

/// Abstract interface for the content collection.
pub trait ContentStore {
    /// Insert a new record at the head of the collection
    fn insert_front(&mut self, record: ContentRecord) -> Result<()>;

    /// Get a record by ID
    fn get(&self, id: &Uuid) -> Result<ContentRecord>;

    /// Replace the record with the same ID, keeping its position
    fn replace(&mut self, record: ContentRecord) -> Result<()>;

    /// Remove a record, returning it if it existed
    fn remove(&mut self, id: &Uuid) -> Result<Option<ContentRecord>>;

    /// All records in collection order
    fn list(&self) -> Result<Vec<ContentRecord>>;
}
