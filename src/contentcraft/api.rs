//! # Content Workspace
//!
//! [`ContentWorkspace`] is the view-model every front end drives. It owns all
//! workspace state and exposes one method per user action:
//!
//! - the **draft** being composed or edited ([`Draft`])
//! - the **collection** of committed records (any [`ContentStore`])
//! - the active **panel** (editor, list or media)
//! - the **filter state** applied to the list panel
//! - the **media library**
//!
//! Rendering is not its business: methods return `Result<CmdResult>`, and the
//! front end decides how to show the records and notifications inside.
//!
//! ## Edit Mode
//!
//! ```text
//!              load_for_edit(sel)
//!   Creating ───────────────────────▶ Editing(id)
//!      ▲  │                               │
//!      │  └─ save: create ─┐              │ save: update
//!      │                   │              │ cancel_edit
//!      └───────────────────┴──────────────┘ delete(id)
//! ```
//!
//! Every successful save resets the draft. Deleting the record that is being
//! edited also resets the draft and goes back to `Creating`, so an update can
//! never target a record that no longer exists.
//!
//! Business rules for each commit live in `commands/*.rs`; this layer only
//! sequences them and keeps the draft, mode and panel consistent.

use crate::commands;
use crate::config::WorkspaceConfig;
use crate::draft::Draft;
use crate::error::Result;
use crate::index::RecordSelector;
use crate::media::{MediaFile, MediaLibrary};
use crate::model::{ContentRecord, Panel};
use crate::store::memory::InMemoryStore;
use crate::store::ContentStore;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Creating,
    Editing(Uuid),
}

pub struct ContentWorkspace<S: ContentStore> {
    store: S,
    config: WorkspaceConfig,
    draft: Draft,
    mode: EditMode,
    panel: Panel,
    filter: FilterState,
    media: MediaLibrary,
}

impl ContentWorkspace<InMemoryStore> {
    /// Builds an in-memory workspace, seeded with the sample records when the
    /// config asks for them.
    pub fn in_memory(config: WorkspaceConfig) -> Self {
        let store = if config.seed_samples {
            InMemoryStore::with_samples(&config.author)
        } else {
            InMemoryStore::new()
        };
        Self::new(store, config)
    }
}

impl<S: ContentStore> ContentWorkspace<S> {
    pub fn new(store: S, config: WorkspaceConfig) -> Self {
        let draft = Draft::new(config.slug_policy());
        let media = MediaLibrary::with_remote(config.media_library.iter().cloned());
        info!(author = %config.author, "workspace ready");
        Self {
            store,
            config,
            draft,
            mode: EditMode::Creating,
            panel: Panel::Editor,
            filter: FilterState::default(),
            media,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Field-level access to the draft. Edits stay in the draft until [`save`].
    ///
    /// [`save`]: ContentWorkspace::save
    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn media(&self) -> &MediaLibrary {
        &self.media
    }

    /// Switches panels. Has no effect on the draft or the collection.
    pub fn set_panel(&mut self, panel: Panel) {
        debug!(from = %self.panel, to = %panel, "panel switched");
        self.panel = panel;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.filter.status = status;
    }

    pub fn clear_filter(&mut self) {
        self.filter = FilterState::default();
    }

    /// Every record in collection order, ignoring the filter.
    pub fn records(&self) -> Result<Vec<ContentRecord>> {
        self.store.list()
    }

    /// The collection as seen through the current filter state.
    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.store, &self.filter)
    }

    pub fn stats(&self) -> Result<CmdResult> {
        commands::stats::run(&self.store, self.media.len())
    }

    /// Commits the draft: creates a record in `Creating` mode, replaces the
    /// target record in `Editing` mode. On success the draft is reset and the
    /// workspace is back in `Creating` mode; on failure nothing changes.
    pub fn save(&mut self) -> Result<CmdResult> {
        let result = match self.mode {
            EditMode::Creating => commands::create::run(
                &mut self.store,
                self.draft.fields(),
                &self.config.author,
            )?,
            EditMode::Editing(id) => {
                commands::update::run(&mut self.store, &id, self.draft.fields())?
            }
        };
        self.draft.reset();
        self.mode = EditMode::Creating;
        Ok(result)
    }

    /// Copies a record into the draft, enters `Editing` mode and shows the editor.
    pub fn load_for_edit(&mut self, selector: &RecordSelector) -> Result<CmdResult> {
        let id = commands::helpers::resolve_selector(&self.store, selector)?;
        self.edit_record(&id)
    }

    pub fn edit_record(&mut self, id: &Uuid) -> Result<CmdResult> {
        let record = self.store.get(id)?;
        self.draft.load(record.fields.clone());
        self.mode = EditMode::Editing(record.id);
        self.set_panel(Panel::Editor);
        debug!(id = %record.id, "editing content");

        Ok(CmdResult::default()
            .with_affected_records(vec![record])
            .with_message(CmdMessage::info("Content loaded for editing")))
    }

    /// Leaves `Editing` mode and discards the draft.
    pub fn cancel_edit(&mut self) -> CmdResult {
        let mut result = CmdResult::default();
        if let EditMode::Editing(id) = self.mode {
            debug!(%id, "edit abandoned");
            result.add_message(CmdMessage::info("Editing cancelled"));
        }
        self.draft.reset();
        self.mode = EditMode::Creating;
        result
    }

    pub fn delete(&mut self, selector: &RecordSelector) -> Result<CmdResult> {
        let id = commands::helpers::resolve_selector(&self.store, selector)?;
        self.delete_record(&id)
    }

    /// Deletes a record by id (a no-op when it is already gone). If it was the
    /// record being edited, the draft is reset as well.
    pub fn delete_record(&mut self, id: &Uuid) -> Result<CmdResult> {
        let mut result = commands::delete::run(&mut self.store, id)?;
        if self.mode == EditMode::Editing(*id) {
            self.draft.reset();
            self.mode = EditMode::Creating;
            result.add_message(CmdMessage::warning(
                "The content being edited was deleted; the editor has been cleared",
            ));
        }
        Ok(result)
    }

    /// Adds the given text as a tag on the draft.
    pub fn add_tag(&mut self, text: &str) -> CmdResult {
        let added = self.draft.add_tag(text);
        tag_added(text, added)
    }

    /// Adds whatever is in the draft's tag input, clearing it on success.
    pub fn commit_tag_input(&mut self) -> CmdResult {
        let text = self.draft.tag_input().to_string();
        let added = self.draft.commit_tag_input();
        tag_added(&text, added)
    }

    pub fn remove_tag(&mut self, tag: &str) -> CmdResult {
        if self.draft.remove_tag(tag) {
            CmdResult::default().with_message(CmdMessage::success(format!(
                "Tag removed: {}",
                tag
            )))
        } else {
            CmdResult::default()
                .with_message(CmdMessage::info(format!("Tag not found: {}", tag)))
        }
    }

    /// Takes an image file into the media library and makes it the draft's
    /// featured image.
    pub fn upload_image(&mut self, file: &MediaFile) -> Result<CmdResult> {
        let image = self.media.upload(file)?;
        debug!(image = %image, "image uploaded");
        self.draft.set_featured_image(image);
        Ok(CmdResult::default()
            .with_message(CmdMessage::success("Image uploaded successfully!")))
    }

    /// Makes the n-th media library item (1-based) the featured image.
    pub fn use_media(&mut self, position: usize) -> Result<CmdResult> {
        let asset = self.media.get(position)?.clone();
        self.draft.set_featured_image(asset.image);
        Ok(CmdResult::default().with_message(CmdMessage::success(format!(
            "Featured image set: {}",
            asset.label
        ))))
    }

    pub fn clear_featured_image(&mut self) -> CmdResult {
        match self.draft.clear_featured_image() {
            Some(_) => {
                CmdResult::default().with_message(CmdMessage::info("Featured image removed"))
            }
            None => CmdResult::default(),
        }
    }
}

fn tag_added(text: &str, added: Option<String>) -> CmdResult {
    let message = match added {
        Some(tag) => CmdMessage::success(format!("Tag added: {}", tag)),
        None if text.trim().is_empty() => CmdMessage::info("Tag is empty"),
        None => CmdMessage::info(format!("Tag already present: {}", text.trim())),
    };
    CmdResult::default().with_message(message)
}

pub use crate::commands::list::{FilterState, StatusFilter};
pub use crate::commands::{CmdMessage, CmdResult, ContentStats, MessageLevel};
