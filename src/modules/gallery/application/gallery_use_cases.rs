use std::sync::Arc;

use crate::modules::gallery::application::ports::incoming::use_cases::{
    CreateGalleryRecordUseCase, DeleteGalleryRecordUseCase, GetGalleryRecordUseCase,
    ListGalleryRecordsUseCase, ReplaceGalleryRecordUseCase,
};

#[derive(Clone)]
pub struct GalleryUseCases {
    pub create: Arc<dyn CreateGalleryRecordUseCase + Send + Sync>,
    pub replace: Arc<dyn ReplaceGalleryRecordUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteGalleryRecordUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetGalleryRecordUseCase + Send + Sync>,
    pub get_list: Arc<dyn ListGalleryRecordsUseCase + Send + Sync>,
}
