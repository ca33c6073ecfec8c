use async_trait::async_trait;

use crate::modules::gallery::application::ports::outgoing::blob_store::BlobStoreError;
use crate::modules::gallery::application::sync::CleanupWarning;
use crate::modules::gallery::domain::entities::{GalleryRecord, MediaInput, MediaKind};
use crate::modules::gallery::domain::errors::GalleryErrorKind;

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default)]
pub struct CreateGalleryRecordCommand {
    pub name: String,
    pub image: Option<MediaInput>,
    pub video: Option<MediaInput>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateGalleryRecordError {
    #[error("{0}")]
    Validation(String),

    /// A blob upload failed before anything was written to the record store.
    #[error("{kind} upload failed: {error}")]
    Upload {
        kind: MediaKind,
        error: BlobStoreError,
        cleanup: Vec<CleanupWarning>,
    },

    /// The insert failed after uploads succeeded; the uploads were discarded.
    #[error("storage write failed: {message}")]
    StorageWrite {
        message: String,
        cleanup: Vec<CleanupWarning>,
    },
}

impl CreateGalleryRecordError {
    pub fn kind(&self) -> GalleryErrorKind {
        match self {
            CreateGalleryRecordError::Validation(_) => GalleryErrorKind::Validation,
            CreateGalleryRecordError::Upload { .. } => GalleryErrorKind::Upload,
            CreateGalleryRecordError::StorageWrite { .. } => GalleryErrorKind::StorageWrite,
        }
    }

    /// Cleanup steps that failed while compensating for this error.
    pub fn cleanup_warnings(&self) -> &[CleanupWarning] {
        match self {
            CreateGalleryRecordError::Validation(_) => &[],
            CreateGalleryRecordError::Upload { cleanup, .. }
            | CreateGalleryRecordError::StorageWrite { cleanup, .. } => cleanup,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateGalleryRecordUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateGalleryRecordCommand,
    ) -> Result<GalleryRecord, CreateGalleryRecordError>;
}
