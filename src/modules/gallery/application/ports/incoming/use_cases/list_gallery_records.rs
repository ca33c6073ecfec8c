use async_trait::async_trait;

use crate::modules::gallery::domain::entities::GalleryRecord;
use crate::modules::gallery::domain::errors::GalleryErrorKind;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListGalleryRecordsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl ListGalleryRecordsError {
    pub fn kind(&self) -> GalleryErrorKind {
        GalleryErrorKind::StorageRead
    }
}

#[async_trait]
pub trait ListGalleryRecordsUseCase: Send + Sync {
    /// Newest-first snapshot taken at call time.
    async fn execute(&self) -> Result<Vec<GalleryRecord>, ListGalleryRecordsError>;
}
