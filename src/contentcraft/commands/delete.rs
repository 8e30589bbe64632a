use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ContentStore;
use tracing::debug;
use uuid::Uuid;

/// Removes a record. Deleting an id that is not in the collection is a no-op.
pub fn run<S: ContentStore>(store: &mut S, id: &Uuid) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match store.remove(id)? {
        Some(record) => {
            debug!(id = %record.id, "content deleted");
            result.add_message(CmdMessage::success("Content deleted successfully!"));
            result.affected_records.push(record);
        }
        None => {
            debug!(%id, "delete skipped, no such content");
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_exactly_one_and_keeps_order() {
        let fixture = StoreFixture::new().with_records(4);
        let ids = fixture.ids();
        let mut store = fixture.store;

        let result = run(&mut store, &ids[1]).unwrap();
        assert_eq!(result.affected_records.len(), 1);
        assert_eq!(result.affected_records[0].id, ids[1]);

        let remaining: Vec<_> = store.list().unwrap().iter().map(|r| r.id).collect();
        assert_eq!(remaining, vec![ids[0], ids[2], ids[3]]);
    }

    #[test]
    fn missing_id_is_a_noop() {
        let fixture = StoreFixture::new().with_records(2);
        let ids = fixture.ids();
        let mut store = fixture.store;

        let result = run(&mut store, &Uuid::new_v4()).unwrap();
        assert!(result.affected_records.is_empty());
        assert!(result.messages.is_empty());

        let remaining: Vec<_> = store.list().unwrap().iter().map(|r| r.id).collect();
        assert_eq!(remaining, ids);
    }
}
