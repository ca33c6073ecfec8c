use async_trait::async_trait;

use crate::modules::gallery::application::sync::CleanupWarning;
use crate::modules::gallery::domain::entities::{GalleryId, GalleryRecord, MediaInput};
use crate::modules::gallery::domain::errors::{
    describe_failures, GalleryErrorKind, SlotUploadFailure,
};

//
// ──────────────────────────────────────────────────────────
// Command / Outcome
// ──────────────────────────────────────────────────────────
//

/// Every field is optional: absent slots keep their current blob.
#[derive(Debug, Clone)]
pub struct ReplaceGalleryRecordCommand {
    pub id: GalleryId,
    pub name: Option<String>,
    pub image: Option<MediaInput>,
    pub video: Option<MediaInput>,
}

impl ReplaceGalleryRecordCommand {
    pub fn new(id: GalleryId) -> Self {
        Self {
            id,
            name: None,
            image: None,
            video: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReplaceGalleryRecordOutcome {
    pub record: GalleryRecord,
    /// Old blobs that could not be released after the swap was committed.
    pub cleanup: Vec<CleanupWarning>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReplaceGalleryRecordError {
    #[error("{0}")]
    Validation(String),

    /// The record is gone. When it vanished after new uploads, those were
    /// discarded and `cleanup` lists the ones that could not be.
    #[error("Gallery record not found")]
    NotFound { cleanup: Vec<CleanupWarning> },

    /// One or more slot uploads failed. Slots are isolated: when another
    /// slot succeeded it was committed and `committed` holds the new state.
    #[error("{}", describe_failures(failures))]
    Upload {
        failures: Vec<SlotUploadFailure>,
        committed: Option<GalleryRecord>,
        cleanup: Vec<CleanupWarning>,
    },

    /// The relational update failed; any new uploads were discarded and the
    /// record still points at its previous blobs.
    #[error("storage write failed: {message}")]
    StorageWrite {
        message: String,
        cleanup: Vec<CleanupWarning>,
    },
}

impl ReplaceGalleryRecordError {
    pub fn kind(&self) -> GalleryErrorKind {
        match self {
            ReplaceGalleryRecordError::Validation(_) => GalleryErrorKind::Validation,
            ReplaceGalleryRecordError::NotFound { .. } => GalleryErrorKind::NotFound,
            ReplaceGalleryRecordError::Upload { .. } => GalleryErrorKind::Upload,
            ReplaceGalleryRecordError::StorageWrite { .. } => GalleryErrorKind::StorageWrite,
        }
    }

    pub fn cleanup_warnings(&self) -> &[CleanupWarning] {
        match self {
            ReplaceGalleryRecordError::Validation(_) => &[],
            ReplaceGalleryRecordError::NotFound { cleanup }
            | ReplaceGalleryRecordError::Upload { cleanup, .. }
            | ReplaceGalleryRecordError::StorageWrite { cleanup, .. } => cleanup,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ReplaceGalleryRecordUseCase: Send + Sync {
    async fn execute(
        &self,
        command: ReplaceGalleryRecordCommand,
    ) -> Result<ReplaceGalleryRecordOutcome, ReplaceGalleryRecordError>;
}
