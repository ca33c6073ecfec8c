use async_trait::async_trait;

use crate::modules::gallery::application::ports::incoming::use_cases::{
    ListGalleryRecordsError, ListGalleryRecordsUseCase,
};
use crate::modules::gallery::application::ports::outgoing::{
    GalleryRepository, GalleryRepositoryError,
};
use crate::modules::gallery::domain::entities::GalleryRecord;

pub struct ListGalleryRecordsService<R>
where
    R: GalleryRepository,
{
    repository: R,
}

impl<R> ListGalleryRecordsService<R>
where
    R: GalleryRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListGalleryRecordsUseCase for ListGalleryRecordsService<R>
where
    R: GalleryRepository,
{
    async fn execute(&self) -> Result<Vec<GalleryRecord>, ListGalleryRecordsError> {
        self.repository.select_all().await.map_err(|e| match e {
            GalleryRepositoryError::DatabaseError(msg) => {
                ListGalleryRecordsError::RepositoryError(msg)
            }
            GalleryRepositoryError::NotFound => {
                ListGalleryRecordsError::RepositoryError("unexpected not found".to_string())
            }
        })
    }
}
