use async_trait::async_trait;

use crate::modules::gallery::domain::entities::{MediaInput, MediaKind, MediaRef};

// ============================================================================
// Domain Types
// ============================================================================

/// Payload handed to the blob store for one upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobUpload {
    /// Folder-like prefix the object is stored under.
    pub namespace: String,
    pub kind: MediaKind,
    pub input: MediaInput,
}

/// Namespaces reserved for each media kind.
///
/// Create and replace both resolve through this, so a slot always lands
/// in the same prefix regardless of which operation stored it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaNamespaces {
    pub image: String,
    pub video: String,
}

impl MediaNamespaces {
    pub fn for_kind(&self, kind: MediaKind) -> &str {
        match kind {
            MediaKind::Image => &self.image,
            MediaKind::Video => &self.video,
        }
    }

    /// Builds the upload request for `input` in the namespace of `kind`.
    pub fn upload_for(&self, kind: MediaKind, input: MediaInput) -> BlobUpload {
        BlobUpload {
            namespace: self.for_kind(kind).to_string(),
            kind,
            input,
        }
    }
}

impl Default for MediaNamespaces {
    fn default() -> Self {
        Self {
            image: "gallery/thumbs".to_string(),
            video: "gallery/videos".to_string(),
        }
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum BlobStoreError {
    /// The store refused the request (permissions, invalid payload).
    #[error("blob store rejected the request: {0}")]
    Rejected(String),

    /// No object exists under the given identifier.
    #[error("blob not found: {0}")]
    NotFound(String),

    #[error("blob store unavailable: {0}")]
    Unavailable(String),
}

// ============================================================================
// Port Interface
// ============================================================================

/// Port for the remote object store holding gallery media.
///
/// Implementations must not leave a partial object visible when `upload`
/// fails, and must hand out an `object_id` that is never reused by a later
/// upload.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn upload(&self, upload: BlobUpload) -> Result<MediaRef, BlobStoreError>;

    /// Deleting an object that no longer exists may return `NotFound`.
    async fn delete(&self, media: MediaRef) -> Result<(), BlobStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_namespaces() {
        let ns = MediaNamespaces::default();
        assert_eq!(ns.for_kind(MediaKind::Image), "gallery/thumbs");
        assert_eq!(ns.for_kind(MediaKind::Video), "gallery/videos");
    }

    #[test]
    fn test_custom_namespaces_resolve_per_kind() {
        let ns = MediaNamespaces {
            image: "img".to_string(),
            video: "vid".to_string(),
        };
        assert_eq!(ns.for_kind(MediaKind::Image), "img");
        assert_eq!(ns.for_kind(MediaKind::Video), "vid");
    }
}
