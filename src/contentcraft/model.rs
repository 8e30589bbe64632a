use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    #[default]
    Draft,
    Published,
    Scheduled,
}

impl ContentStatus {
    pub const ALL: [ContentStatus; 3] = [
        ContentStatus::Draft,
        ContentStatus::Published,
        ContentStatus::Scheduled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentStatus::Draft => "draft",
            ContentStatus::Published => "published",
            ContentStatus::Scheduled => "scheduled",
        }
    }
}

impl fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(ContentStatus::Draft),
            "published" => Ok(ContentStatus::Published),
            "scheduled" => Ok(ContentStatus::Scheduled),
            other => Err(format!(
                "Unknown status '{}' (expected draft, published or scheduled)",
                other
            )),
        }
    }
}

/// The fixed set of content categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Tutorial,
    Guide,
    News,
    Blog,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Tutorial,
        Category::Guide,
        Category::News,
        Category::Blog,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Tutorial => "Tutorial",
            Category::Guide => "Guide",
            Category::News => "News",
            Category::Blog => "Blog",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// A reference to an image: either a remote URL or a session-local upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ImageRef {
    Remote { url: String },
    Local { token: Uuid, file_name: String },
}

impl ImageRef {
    pub fn remote(url: impl Into<String>) -> Self {
        ImageRef::Remote { url: url.into() }
    }

    /// Mints a fresh local reference. Local references live as long as the
    /// process and are never released.
    pub fn local(file_name: impl Into<String>) -> Self {
        ImageRef::Local {
            token: Uuid::new_v4(),
            file_name: file_name.into(),
        }
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageRef::Remote { url } => f.write_str(url),
            ImageRef::Local { token, file_name } => write!(f, "local://{}/{}", token, file_name),
        }
    }
}

/// The three mutually exclusive workspace panels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    #[default]
    Editor,
    List,
    Media,
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Panel::Editor => f.write_str("editor"),
            Panel::List => f.write_str("list"),
            Panel::Media => f.write_str("media"),
        }
    }
}

impl FromStr for Panel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "editor" => Ok(Panel::Editor),
            "list" => Ok(Panel::List),
            "media" => Ok(Panel::Media),
            other => Err(format!(
                "Unknown panel '{}' (expected editor, list or media)",
                other
            )),
        }
    }
}

/// The user-editable part of a content record. A draft is exactly this set
/// of fields; committing copies them into a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentFields {
    pub title: String,
    pub slug: String,
    pub body: String,
    pub status: ContentStatus,
    pub category: Option<Category>,
    pub tags: Vec<String>,
    pub seo_title: String,
    pub seo_description: String,
    pub featured_image: Option<ImageRef>,
}

impl ContentFields {
    pub fn category_label(&self) -> &'static str {
        self.category.map(|c| c.label()).unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: Uuid,
    #[serde(flatten)]
    pub fields: ContentFields,
    pub published_at: Option<NaiveDate>,
    pub author: String,
}

impl ContentRecord {
    /// Builds a new record with a fresh id. `published_at` is stamped with
    /// today's date only when the record is created as published.
    pub fn new(fields: ContentFields, author: impl Into<String>) -> Self {
        let published_at = match fields.status {
            ContentStatus::Published => Some(Utc::now().date_naive()),
            _ => None,
        };
        Self {
            id: Uuid::new_v4(),
            fields,
            published_at,
            author: author.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.fields.title
    }

    pub fn status(&self) -> ContentStatus {
        self.fields.status
    }
}
