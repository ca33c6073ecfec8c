use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length of a gallery record name, in characters.
pub const MAX_NAME_LEN: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GalleryId(i64);

impl From<i64> for GalleryId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<GalleryId> for i64 {
    fn from(value: GalleryId) -> Self {
        value.0
    }
}

impl fmt::Display for GalleryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        };
        write!(f, "{s}")
    }
}

/// Reference to one stored blob.
///
/// `object_id` addresses the blob for deletion; `url` is what clients fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef {
    pub url: String,
    pub object_id: String,
    pub kind: MediaKind,
}

/// Display name of a record, trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GalleryName(String);

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum GalleryNameError {
    #[error("name is required")]
    Empty,

    #[error("name must be at most {} characters", MAX_NAME_LEN)]
    TooLong,
}

impl GalleryName {
    pub fn try_new(raw: &str) -> Result<Self, GalleryNameError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(GalleryNameError::Empty);
        }
        if trimmed.chars().count() > MAX_NAME_LEN {
            return Err(GalleryNameError::TooLong);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for GalleryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryRecord {
    pub id: GalleryId,
    pub name: String,
    pub image: MediaRef,
    pub video: Option<MediaRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GalleryRecord {
    /// Current reference held in the given slot.
    pub fn media(&self, kind: MediaKind) -> Option<&MediaRef> {
        match kind {
            MediaKind::Image => Some(&self.image),
            MediaKind::Video => self.video.as_ref(),
        }
    }
}

/// One inbound binary payload, as extracted by the web shell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaInput {
    pub bytes: Vec<u8>,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
}

impl MediaInput {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            ..Default::default()
        }
    }

    #[cfg(test)]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    #[cfg(test)]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_name_trims_input() {
        let name = GalleryName::try_new("  Sunset  ").unwrap();
        assert_eq!(name.as_str(), "Sunset");
    }

    #[test]
    fn test_gallery_name_rejects_blank() {
        assert_eq!(GalleryName::try_new(" \t\n"), Err(GalleryNameError::Empty));
        assert_eq!(GalleryName::try_new(""), Err(GalleryNameError::Empty));
    }

    #[test]
    fn test_gallery_name_rejects_too_long() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert_eq!(GalleryName::try_new(&long), Err(GalleryNameError::TooLong));

        let exact = "x".repeat(MAX_NAME_LEN);
        assert!(GalleryName::try_new(&exact).is_ok());
    }

    #[test]
    fn test_media_kind_display_and_serde() {
        assert_eq!(MediaKind::Image.to_string(), "image");
        assert_eq!(MediaKind::Video.to_string(), "video");
        assert_eq!(
            serde_json::to_string(&MediaKind::Video).unwrap(),
            "\"video\""
        );
    }

    #[test]
    fn test_record_media_slot_lookup() {
        let image = MediaRef {
            url: "https://cdn/img.png".to_string(),
            object_id: "gallery/thumbs/img.png".to_string(),
            kind: MediaKind::Image,
        };
        let record = GalleryRecord {
            id: GalleryId::from(7),
            name: "Sunset".to_string(),
            image: image.clone(),
            video: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        assert_eq!(record.media(MediaKind::Image), Some(&image));
        assert_eq!(record.media(MediaKind::Video), None);
    }

    #[test]
    fn test_media_input_emptiness() {
        assert!(MediaInput::default().is_empty());
        let input = MediaInput::new(vec![1, 2, 3]).with_file_name("a.png");
        assert!(!input.is_empty());
        assert_eq!(input.len(), 3);
        assert_eq!(input.file_name.as_deref(), Some("a.png"));
    }
}
