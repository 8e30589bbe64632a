use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ContentFields;
use crate::store::ContentStore;
use tracing::debug;
use uuid::Uuid;

use super::helpers::validate_title;

/// Replaces every editable field of the record. The id, author and
/// `published_at` are left as they were, even when the status moves to
/// published.
pub fn run<S: ContentStore>(
    store: &mut S,
    id: &Uuid,
    fields: &ContentFields,
) -> Result<CmdResult> {
    validate_title(fields)?;

    let mut record = store.get(id)?;
    record.fields = fields.clone();
    store.replace(record.clone())?;
    debug!(id = %record.id, status = %record.status(), "content updated");

    Ok(CmdResult::default()
        .with_affected_records(vec![record])
        .with_message(CmdMessage::success("Content updated successfully!")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContentError;
    use crate::model::{Category, ContentStatus};
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn replaces_fields_and_keeps_identity() {
        let fixture = StoreFixture::new()
            .with_record("Old", ContentStatus::Draft, Some(Category::News))
            .with_record("Other", ContentStatus::Draft, None);
        let ids = fixture.ids();
        let mut store = fixture.store;

        let fields = ContentFields {
            title: "New".into(),
            slug: "new".into(),
            body: "Body".into(),
            tags: vec!["a".into()],
            ..Default::default()
        };
        let result = run(&mut store, &ids[1], &fields).unwrap();
        assert_eq!(result.affected_records[0].id, ids[1]);

        let listed = store.list().unwrap();
        assert_eq!(listed[1].id, ids[1]);
        assert_eq!(listed[1].fields, fields);
        assert_eq!(listed[1].author, "Admin");
        assert_eq!(listed[0].fields.title, "Other");
    }

    #[test]
    fn publishing_later_does_not_stamp_date() {
        let fixture = StoreFixture::new().with_record("Post", ContentStatus::Draft, None);
        let id = fixture.ids()[0];
        let mut store = fixture.store;

        let fields = ContentFields {
            title: "Post".into(),
            status: ContentStatus::Published,
            ..Default::default()
        };
        run(&mut store, &id, &fields).unwrap();

        let record = store.get(&id).unwrap();
        assert_eq!(record.status(), ContentStatus::Published);
        assert_eq!(record.published_at, None);
    }

    #[test]
    fn keeps_existing_published_date() {
        let fixture = StoreFixture::new().with_record("Post", ContentStatus::Published, None);
        let id = fixture.ids()[0];
        let mut store = fixture.store;
        let original = store.get(&id).unwrap().published_at;

        let fields = ContentFields {
            title: "Post".into(),
            status: ContentStatus::Draft,
            ..Default::default()
        };
        run(&mut store, &id, &fields).unwrap();
        assert_eq!(store.get(&id).unwrap().published_at, original);
    }

    #[test]
    fn missing_id_is_not_found() {
        let mut store = StoreFixture::new().with_records(2).store;
        let before = store.list().unwrap();

        let fields = ContentFields {
            title: "Anything".into(),
            ..Default::default()
        };
        let missing = Uuid::new_v4();
        match run(&mut store, &missing, &fields) {
            Err(ContentError::NotFound(id)) => assert_eq!(id, missing),
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert_eq!(store.list().unwrap(), before);
    }

    #[test]
    fn blank_title_is_rejected() {
        let fixture = StoreFixture::new().with_records(1);
        let id = fixture.ids()[0];
        let mut store = fixture.store;
        let before = store.list().unwrap();

        let err = run(&mut store, &id, &ContentFields::default()).unwrap_err();
        assert!(matches!(err, ContentError::Validation(_)));
        assert_eq!(store.list().unwrap(), before);
    }
}
