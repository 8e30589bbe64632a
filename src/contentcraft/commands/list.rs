//! Filtered listing of the collection.
//!
//! Filtering is a pure query over the current records. Nothing is cached, so a
//! listing is always consistent with the collection it was computed from.

use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_records;
use crate::model::{ContentRecord, ContentStatus};
use crate::store::ContentStore;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ContentStatus),
}

impl StatusFilter {
    pub fn accepts(&self, status: ContentStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

/// Search text plus status filter, as typed into the list panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub status: StatusFilter,
}

impl FilterState {
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.status != StatusFilter::All
    }
}

/// True when the record passes both the text query and the status filter.
///
/// The query is a case-insensitive substring match against the title or the
/// category label. An empty query matches everything.
pub fn matches(record: &ContentRecord, query: &str, status: StatusFilter) -> bool {
    if !status.accepts(record.status()) {
        return false;
    }
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record.title().to_lowercase().contains(&needle)
        || record
            .fields
            .category_label()
            .to_lowercase()
            .contains(&needle)
}

/// Returns the records passing the filter, in collection order.
pub fn apply(records: &[ContentRecord], query: &str, status: StatusFilter) -> Vec<ContentRecord> {
    records
        .iter()
        .filter(|r| matches(r, query, status))
        .cloned()
        .collect()
}

/// Lists the collection through `filter`, keeping canonical display indexes.
pub fn run<S: ContentStore>(store: &S, filter: &FilterState) -> Result<CmdResult> {
    let records = store.list()?;
    // `apply` keeps collection order, so one pass over the index finds each kept record
    let mut indexed = index_records(records.clone()).into_iter();
    let listed = apply(&records, &filter.query, filter.status)
        .into_iter()
        .filter_map(|kept| indexed.find(|dr| dr.record.id == kept.id))
        .collect();
    Ok(CmdResult::default().with_listed_records(listed))
}
