use crate::draft::SlugPolicy;
use crate::error::{ContentError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_AUTHOR: &str = "Admin";

/// Workspace settings, read from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkspaceConfig {
    /// Label stamped as the author of every committed record
    #[serde(default = "default_author")]
    pub author: String,

    /// Start the session with the sample content records
    #[serde(default = "default_true")]
    pub seed_samples: bool,

    /// Keep a hand-written slug when the title changes
    #[serde(default)]
    pub preserve_manual_slug: bool,

    /// Remote images offered in the media panel
    #[serde(default = "default_media_library")]
    pub media_library: Vec<String>,
}

fn default_author() -> String {
    DEFAULT_AUTHOR.to_string()
}

fn default_true() -> bool {
    true
}

fn default_media_library() -> Vec<String> {
    vec![
        "https://images.unsplash.com/photo-1499750310107-5fef28a66643?w=300".to_string(),
        "https://images.unsplash.com/photo-1486312338219-ce68d2c6f44d?w=300".to_string(),
        "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=300".to_string(),
        "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=300".to_string(),
    ]
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            author: default_author(),
            seed_samples: true,
            preserve_manual_slug: false,
            media_library: default_media_library(),
        }
    }
}

impl WorkspaceConfig {
    /// Load config from the given file, or return defaults if it does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(ContentError::Io)?;
        let config: WorkspaceConfig =
            serde_json::from_str(&content).map_err(ContentError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given file, creating parent directories as needed
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ContentError::Io)?;
            }
        }

        let content = serde_json::to_string_pretty(self).map_err(ContentError::Serialization)?;
        fs::write(path, content).map_err(ContentError::Io)?;
        Ok(())
    }

    pub fn slug_policy(&self) -> SlugPolicy {
        if self.preserve_manual_slug {
            SlugPolicy::PreserveManual
        } else {
            SlugPolicy::AlwaysDerive
        }
    }
}
