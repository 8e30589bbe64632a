//! URL slug derivation.
//!
//! A slug keeps only lowercase ASCII letters, digits and single hyphens:
//! - The title is lower-cased first
//! - Anything outside `[a-z0-9 -]` is dropped (tabs and newlines included)
//! - Runs of spaces and hyphens become one hyphen
//! - No leading or trailing hyphen

/// Derives a URL-safe slug from a title.
///
/// # Examples
/// ```
/// use contentcraft::slug::derive_slug;
///
/// assert_eq!(
///     derive_slug("Getting Started with ContentCraft!"),
///     "getting-started-with-contentcraft"
/// );
/// assert_eq!(derive_slug("  -- Hello,   World --  "), "hello-world");
/// assert_eq!(derive_slug("!!!"), "");
/// ```
pub fn derive_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());

    for ch in title.to_lowercase().chars() {
        match ch {
            'a'..='z' | '0'..='9' => slug.push(ch),
            ' ' | '-' => {
                if !slug.is_empty() && !slug.ends_with('-') {
                    slug.push('-');
                }
            }
            _ => {}
        }
    }

    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}
