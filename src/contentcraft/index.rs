//! # Record Selection
//!
//! Record ids are UUIDs, which are stable but tedious to type. Front ends refer
//! to records either by a short **display index** or by an **id prefix**.
//!
//! ## Canonical Indexes
//!
//! The display index is the 1-based position of a record in the collection
//! (most recent first). It is computed against the whole collection, never
//! against a filtered view, so record `3` stays record `3` whether or not a
//! search is active. Filtered listings therefore show gaps:
//!
//! ```text
//! 1. Release notes        published
//! 3. Writing a guide      draft
//! ```
//!
//! ## Id Prefixes
//!
//! Any input that is not a plain positive number is treated as a prefix of the
//! hyphenated UUID. A prefix must match exactly one record.

use crate::error::{ContentError, Result};
use crate::model::ContentRecord;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A user input that identifies one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSelector {
    Index(usize),
    IdPrefix(String),
}

impl fmt::Display for RecordSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordSelector::Index(i) => write!(f, "{}", i),
            RecordSelector::IdPrefix(p) => write!(f, "{}", p),
        }
    }
}

impl FromStr for RecordSelector {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty selector".to_string());
        }
        if let Ok(n) = s.parse::<usize>() {
            if n == 0 {
                return Err("Indexes start at 1".to_string());
            }
            return Ok(RecordSelector::Index(n));
        }
        Ok(RecordSelector::IdPrefix(s.to_lowercase()))
    }
}

/// A record paired with its canonical display index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub index: usize,
    pub record: ContentRecord,
}

/// Assigns canonical display indexes, preserving collection order.
pub fn index_records(records: Vec<ContentRecord>) -> Vec<DisplayRecord> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| DisplayRecord {
            index: i + 1,
            record,
        })
        .collect()
}

/// Resolves a selector against the collection to a record id.
pub fn resolve(records: &[ContentRecord], selector: &RecordSelector) -> Result<Uuid> {
    match selector {
        RecordSelector::Index(n) => n
            .checked_sub(1)
            .and_then(|i| records.get(i))
            .map(|r| r.id)
            .ok_or_else(|| ContentError::Selector(format!("Index {} not found", n))),
        RecordSelector::IdPrefix(prefix) => {
            let mut matches = records
                .iter()
                .filter(|r| r.id.to_string().starts_with(prefix.as_str()));
            match (matches.next(), matches.next()) {
                (Some(record), None) => Ok(record.id),
                (None, _) => Err(ContentError::Selector(format!(
                    "No content with id starting with {}",
                    prefix
                ))),
                (Some(_), Some(_)) => Err(ContentError::Selector(format!(
                    "Id prefix {} is ambiguous",
                    prefix
                ))),
            }
        }
    }
}
