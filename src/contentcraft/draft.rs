//! # Draft Editor
//!
//! A [`Draft`] is the scratch copy of a content record being composed or edited.
//! It owns its fields outright: loading a record for editing copies the record's
//! fields in, and nothing is written back to the collection until the workspace
//! commits the draft.
//!
//! ## Slug Handling
//!
//! Setting the title recomputes the slug with [`derive_slug`]. What happens to a
//! slug the user typed by hand depends on the [`SlugPolicy`]:
//! - `AlwaysDerive` (default): every title change overwrites the slug.
//! - `PreserveManual`: once the slug has been set directly, title changes leave
//!   it alone until the draft is reset.
//!
//! ## Tags
//!
//! Tags are a small ordered set. The draft also holds the text currently typed
//! into the tag input, which is cleared only when a tag is actually added.

use crate::model::{Category, ContentFields, ContentStatus, ImageRef};
use crate::slug::derive_slug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SlugPolicy {
    #[default]
    AlwaysDerive,
    PreserveManual,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    fields: ContentFields,
    tag_input: String,
    slug_overridden: bool,
    slug_policy: SlugPolicy,
}

impl Draft {
    pub fn new(slug_policy: SlugPolicy) -> Self {
        Self {
            slug_policy,
            ..Default::default()
        }
    }

    pub fn fields(&self) -> &ContentFields {
        &self.fields
    }

    pub fn tag_input(&self) -> &str {
        &self.tag_input
    }

    pub fn slug_overridden(&self) -> bool {
        self.slug_overridden
    }

    /// Replaces the draft with a copy of an existing record's fields.
    pub fn load(&mut self, fields: ContentFields) {
        self.slug_overridden = fields.slug != derive_slug(&fields.title);
        self.fields = fields;
        self.tag_input.clear();
    }

    /// Restores the blank template. The slug policy survives a reset.
    pub fn reset(&mut self) {
        *self = Self::new(self.slug_policy);
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.fields.title = title.into();
        let keep_manual =
            self.slug_policy == SlugPolicy::PreserveManual && self.slug_overridden;
        if !keep_manual {
            self.fields.slug = derive_slug(&self.fields.title);
            self.slug_overridden = false;
        }
    }

    pub fn set_slug(&mut self, slug: impl Into<String>) {
        self.fields.slug = slug.into();
        self.slug_overridden = true;
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.fields.body = body.into();
    }

    pub fn set_status(&mut self, status: ContentStatus) {
        self.fields.status = status;
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.fields.category = category;
    }

    pub fn set_seo_title(&mut self, seo_title: impl Into<String>) {
        self.fields.seo_title = seo_title.into();
    }

    pub fn set_seo_description(&mut self, seo_description: impl Into<String>) {
        self.fields.seo_description = seo_description.into();
    }

    pub fn set_tag_input(&mut self, text: impl Into<String>) {
        self.tag_input = text.into();
    }

    /// Adds a tag after trimming it. Returns the tag that was added, or `None`
    /// when the input was blank or the tag is already present (exact match).
    pub fn add_tag(&mut self, text: &str) -> Option<String> {
        let tag = text.trim();
        if tag.is_empty() || self.fields.tags.iter().any(|t| t == tag) {
            return None;
        }
        self.fields.tags.push(tag.to_string());
        self.tag_input.clear();
        Some(tag.to_string())
    }

    /// Adds whatever is currently in the tag input.
    pub fn commit_tag_input(&mut self) -> Option<String> {
        let text = self.tag_input.clone();
        self.add_tag(&text)
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.fields.tags.len();
        self.fields.tags.retain(|t| t != tag);
        self.fields.tags.len() != before
    }

    pub fn set_featured_image(&mut self, image: ImageRef) {
        self.fields.featured_image = Some(image);
    }

    pub fn clear_featured_image(&mut self) -> Option<ImageRef> {
        self.fields.featured_image.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_drives_slug() {
        let mut draft = Draft::default();
        draft.set_title("Getting Started with ContentCraft!");
        assert_eq!(draft.fields().slug, "getting-started-with-contentcraft");
    }

    #[test]
    fn title_overwrites_manual_slug_by_default() {
        let mut draft = Draft::default();
        draft.set_title("First");
        draft.set_slug("custom");
        assert_eq!(draft.fields().slug, "custom");

        draft.set_title("Second Title");
        assert_eq!(draft.fields().slug, "second-title");
    }

    #[test]
    fn preserve_manual_keeps_hand_written_slug() {
        let mut draft = Draft::new(SlugPolicy::PreserveManual);
        draft.set_title("First");
        assert_eq!(draft.fields().slug, "first");

        draft.set_slug("my-slug");
        draft.set_title("Second Title");
        assert_eq!(draft.fields().slug, "my-slug");

        draft.reset();
        draft.set_title("Third");
        assert_eq!(draft.fields().slug, "third");
    }

    #[test]
    fn loading_a_record_detects_manual_slug() {
        let mut draft = Draft::new(SlugPolicy::PreserveManual);
        draft.load(ContentFields {
            title: "Getting Started with ContentCraft".into(),
            slug: "getting-started".into(),
            ..Default::default()
        });
        assert!(draft.slug_overridden());

        draft.set_title("Getting Started, Revised");
        assert_eq!(draft.fields().slug, "getting-started");
    }

    #[test]
    fn add_tag_twice_keeps_one() {
        let mut draft = Draft::default();
        assert_eq!(draft.add_tag("x"), Some("x".to_string()));
        assert_eq!(draft.add_tag("x"), None);
        assert_eq!(draft.fields().tags, vec!["x".to_string()]);
    }

    #[test]
    fn add_tag_trims_and_ignores_blank() {
        let mut draft = Draft::default();
        assert_eq!(draft.add_tag("   "), None);
        assert_eq!(draft.add_tag("  rust  "), Some("rust".to_string()));
        assert_eq!(draft.add_tag("rust "), None);
        assert_eq!(draft.fields().tags, vec!["rust".to_string()]);
    }

    #[test]
    fn tags_are_case_sensitive_and_ordered() {
        let mut draft = Draft::default();
        draft.add_tag("b");
        draft.add_tag("a");
        draft.add_tag("A");
        assert_eq!(draft.fields().tags, vec!["b", "a", "A"]);
    }

    #[test]
    fn tag_input_cleared_only_on_add() {
        let mut draft = Draft::default();
        draft.set_tag_input("news");
        assert_eq!(draft.commit_tag_input(), Some("news".to_string()));
        assert_eq!(draft.tag_input(), "");

        draft.set_tag_input("news");
        assert_eq!(draft.commit_tag_input(), None);
        assert_eq!(draft.tag_input(), "news");
    }

    #[test]
    fn remove_tag_exact_match() {
        let mut draft = Draft::default();
        draft.add_tag("Rust");
        draft.add_tag("web");
        assert!(!draft.remove_tag("rust"));
        assert!(draft.remove_tag("Rust"));
        assert_eq!(draft.fields().tags, vec!["web"]);
    }

    #[test]
    fn featured_image_set_and_clear() {
        let mut draft = Draft::default();
        let image = ImageRef::remote("https://example.com/a.png");
        draft.set_featured_image(image.clone());
        assert_eq!(draft.fields().featured_image, Some(image.clone()));
        assert_eq!(draft.clear_featured_image(), Some(image));
        assert_eq!(draft.fields().featured_image, None);
    }

    #[test]
    fn reset_restores_blank_template() {
        let mut draft = Draft::default();
        draft.set_title("Something");
        draft.set_body("Body");
        draft.set_status(ContentStatus::Published);
        draft.set_category(Some(Category::Blog));
        draft.set_seo_title("SEO");
        draft.set_seo_description("Desc");
        draft.add_tag("t");
        draft.set_tag_input("pending");
        draft.set_featured_image(ImageRef::local("a.png"));

        draft.reset();
        assert_eq!(draft, Draft::default());
        assert_eq!(draft.fields().status, ContentStatus::Draft);
    }
}
