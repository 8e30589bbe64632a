//! Media library and image intake.
//!
//! The library lists the sample remote images from the configuration followed by
//! every image uploaded during the session. An "upload" never transfers bytes
//! anywhere: it only mints a local [`ImageRef`] for the chosen file.

use crate::error::{ContentError, Result};
use crate::model::ImageRef;
use std::path::Path;

/// A file picked for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub name: String,
    pub mime_type: String,
}

impl MediaFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Builds a media file from a path, guessing the MIME type from the
    /// extension. Unknown extensions get `application/octet-stream`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        Self::new(name, mime_for_extension(&ext))
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.trim().to_lowercase().starts_with("image/")
    }
}

fn mime_for_extension(ext: &str) -> &'static str {
    match ext {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        "bmp" => "image/bmp",
        "txt" | "md" => "text/plain",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaAsset {
    pub image: ImageRef,
    pub label: String,
}

#[derive(Debug, Clone, Default)]
pub struct MediaLibrary {
    assets: Vec<MediaAsset>,
}

impl MediaLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_remote<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let assets = urls
            .into_iter()
            .enumerate()
            .map(|(i, url)| MediaAsset {
                image: ImageRef::remote(url),
                label: format!("Media {}", i + 1),
            })
            .collect();
        Self { assets }
    }

    pub fn assets(&self) -> &[MediaAsset] {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Accepts an image file, appends it to the library and returns its reference.
    pub fn upload(&mut self, file: &MediaFile) -> Result<ImageRef> {
        if !file.is_image() {
            return Err(ContentError::Media(format!(
                "{} is not an image ({})",
                file.name, file.mime_type
            )));
        }
        let image = ImageRef::local(file.name.clone());
        self.assets.push(MediaAsset {
            image: image.clone(),
            label: file.name.clone(),
        });
        Ok(image)
    }

    /// Looks up an asset by its 1-based position.
    pub fn get(&self, position: usize) -> Result<&MediaAsset> {
        position
            .checked_sub(1)
            .and_then(|i| self.assets.get(i))
            .ok_or_else(|| {
                ContentError::Selector(format!("Media item {} not found", position))
            })
    }
}
