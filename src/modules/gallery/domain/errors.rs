use serde::Serialize;
use std::fmt;

use crate::modules::gallery::application::ports::outgoing::blob_store::BlobStoreError;
use crate::modules::gallery::domain::entities::MediaKind;

/// Stable classification of every failure a gallery operation can report.
///
/// The web shell maps each kind to one status code; nothing else about an
/// error is needed to pick the transport response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GalleryErrorKind {
    Validation,
    NotFound,
    Upload,
    StorageWrite,
    StorageRead,
}

impl GalleryErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            GalleryErrorKind::Validation => "VALIDATION_ERROR",
            GalleryErrorKind::NotFound => "NOT_FOUND",
            GalleryErrorKind::Upload => "UPLOAD_ERROR",
            GalleryErrorKind::StorageWrite => "STORAGE_WRITE_ERROR",
            GalleryErrorKind::StorageRead => "STORAGE_READ_ERROR",
        }
    }
}

impl fmt::Display for GalleryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Upload failure for one media slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotUploadFailure {
    pub kind: MediaKind,
    pub error: BlobStoreError,
}

impl fmt::Display for SlotUploadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} upload failed: {}", self.kind, self.error)
    }
}

/// Joins slot failures into one human-readable line.
pub fn describe_failures(failures: &[SlotUploadFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
