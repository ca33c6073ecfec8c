use async_trait::async_trait;

use crate::modules::gallery::application::ports::incoming::use_cases::{
    GetGalleryRecordError, GetGalleryRecordUseCase,
};
use crate::modules::gallery::application::ports::outgoing::{
    GalleryRepository, GalleryRepositoryError,
};
use crate::modules::gallery::domain::entities::{GalleryId, GalleryRecord};

pub struct GetGalleryRecordService<R>
where
    R: GalleryRepository,
{
    repository: R,
}

impl<R> GetGalleryRecordService<R>
where
    R: GalleryRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetGalleryRecordUseCase for GetGalleryRecordService<R>
where
    R: GalleryRepository,
{
    async fn execute(&self, id: GalleryId) -> Result<GalleryRecord, GetGalleryRecordError> {
        self.repository
            .select_by_id(id)
            .await
            .map_err(|e| match e {
                GalleryRepositoryError::NotFound => GetGalleryRecordError::NotFound,
                GalleryRepositoryError::DatabaseError(msg) => {
                    GetGalleryRecordError::RepositoryError(msg)
                }
            })
    }
}
