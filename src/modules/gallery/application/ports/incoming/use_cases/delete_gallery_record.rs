use async_trait::async_trait;

use crate::modules::gallery::application::sync::CleanupWarning;
use crate::modules::gallery::domain::entities::GalleryId;
use crate::modules::gallery::domain::errors::GalleryErrorKind;

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteGalleryRecordOutcome {
    pub id: GalleryId,
    /// Blobs whose deletion failed; the row was removed regardless.
    pub cleanup: Vec<CleanupWarning>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteGalleryRecordError {
    #[error("Gallery record not found")]
    NotFound,

    #[error("storage write failed: {0}")]
    StorageWrite(String),
}

impl DeleteGalleryRecordError {
    pub fn kind(&self) -> GalleryErrorKind {
        match self {
            DeleteGalleryRecordError::NotFound => GalleryErrorKind::NotFound,
            DeleteGalleryRecordError::StorageWrite(_) => GalleryErrorKind::StorageWrite,
        }
    }
}

#[async_trait]
pub trait DeleteGalleryRecordUseCase: Send + Sync {
    async fn execute(
        &self,
        id: GalleryId,
    ) -> Result<DeleteGalleryRecordOutcome, DeleteGalleryRecordError>;
}
