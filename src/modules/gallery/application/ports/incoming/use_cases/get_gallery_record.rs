use async_trait::async_trait;

use crate::modules::gallery::domain::entities::{GalleryId, GalleryRecord};
use crate::modules::gallery::domain::errors::GalleryErrorKind;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetGalleryRecordError {
    #[error("Gallery record not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl GetGalleryRecordError {
    pub fn kind(&self) -> GalleryErrorKind {
        match self {
            GetGalleryRecordError::NotFound => GalleryErrorKind::NotFound,
            GetGalleryRecordError::RepositoryError(_) => GalleryErrorKind::StorageRead,
        }
    }
}

#[async_trait]
pub trait GetGalleryRecordUseCase: Send + Sync {
    async fn execute(&self, id: GalleryId) -> Result<GalleryRecord, GetGalleryRecordError>;
}
