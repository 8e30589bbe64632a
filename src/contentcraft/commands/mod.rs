use crate::error::ContentError;
use crate::index::DisplayRecord;
use crate::model::ContentRecord;

pub mod create;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod stats;
pub mod update;

pub use stats::ContentStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A transient notification for the user. The core never presents these; it
/// only hands them to whichever front end is driving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A failed workspace call, shown as an error notification.
impl From<&ContentError> for CmdMessage {
    fn from(err: &ContentError) -> Self {
        CmdMessage::error(format!("Error: {}", err))
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<ContentRecord>,
    pub listed_records: Vec<DisplayRecord>,
    pub stats: Option<ContentStats>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_records(mut self, records: Vec<ContentRecord>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<DisplayRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_stats(mut self, stats: ContentStats) -> Self {
        self.stats = Some(stats);
        self
    }
}
