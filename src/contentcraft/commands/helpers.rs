use crate::error::{ContentError, Result};
use crate::index::{self, RecordSelector};
use crate::model::ContentFields;
use crate::store::ContentStore;
use uuid::Uuid;

/// Rejects drafts whose title is empty or only whitespace.
pub fn validate_title(fields: &ContentFields) -> Result<()> {
    if fields.title.trim().is_empty() {
        return Err(ContentError::Validation(
            "Please enter a content title".to_string(),
        ));
    }
    Ok(())
}

pub fn resolve_selector<S: ContentStore>(store: &S, selector: &RecordSelector) -> Result<Uuid> {
    let records = store.list()?;
    index::resolve(&records, selector)
}
