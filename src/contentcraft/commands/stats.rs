use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::ContentStatus;
use crate::store::ContentStore;

/// Dashboard counters for the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentStats {
    pub content_items: usize,
    pub media_assets: usize,
    pub published: usize,
    pub by_status: Vec<(ContentStatus, usize)>,
}

pub fn run<S: ContentStore>(store: &S, media_assets: usize) -> Result<CmdResult> {
    let records = store.list()?;
    let by_status: Vec<_> = ContentStatus::ALL
        .into_iter()
        .map(|status| {
            let count = records.iter().filter(|r| r.status() == status).count();
            (status, count)
        })
        .collect();
    let published = records
        .iter()
        .filter(|r| r.status() == ContentStatus::Published)
        .count();

    Ok(CmdResult::default().with_stats(ContentStats {
        content_items: records.len(),
        media_assets,
        published,
        by_status,
    }))
}
