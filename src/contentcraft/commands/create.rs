use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{ContentFields, ContentRecord};
use crate::store::ContentStore;
use tracing::debug;

use super::helpers::validate_title;

pub fn run<S: ContentStore>(
    store: &mut S,
    fields: &ContentFields,
    author: &str,
) -> Result<CmdResult> {
    validate_title(fields)?;

    let record = ContentRecord::new(fields.clone(), author);
    store.insert_front(record.clone())?;
    debug!(id = %record.id, status = %record.status(), "content created");

    Ok(CmdResult::default()
        .with_affected_records(vec![record])
        .with_message(CmdMessage::success("Content created successfully!")))
}
