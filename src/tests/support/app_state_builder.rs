use std::sync::Arc;

use actix_web::web;

use crate::modules::gallery::application::ports::incoming::use_cases::{
    CreateGalleryRecordError, CreateGalleryRecordUseCase, DeleteGalleryRecordUseCase,
    GetGalleryRecordUseCase, ListGalleryRecordsUseCase, ReplaceGalleryRecordError,
    ReplaceGalleryRecordUseCase,
};
use crate::modules::gallery::application::GalleryUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Per-file limit used by handler tests unless overridden.
pub const TEST_MAX_UPLOAD_BYTES: usize = 1024 * 1024;

pub struct TestAppStateBuilder {
    gallery: GalleryUseCases,
    max_upload_bytes: usize,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            gallery: GalleryUseCases {
                create: Arc::new(StubCreateGalleryRecordUseCase::error(
                    CreateGalleryRecordError::Validation("not used in this test".to_string()),
                )),
                replace: Arc::new(StubReplaceGalleryRecordUseCase::error(
                    ReplaceGalleryRecordError::Validation("not used in this test".to_string()),
                )),
                delete: Arc::new(StubDeleteGalleryRecordUseCase::not_found()),
                get_single: Arc::new(StubGetGalleryRecordUseCase::not_found()),
                get_list: Arc::new(StubListGalleryRecordsUseCase::success(vec![])),
            },
            max_upload_bytes: TEST_MAX_UPLOAD_BYTES,
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create_gallery_record(
        mut self,
        uc: impl CreateGalleryRecordUseCase + Send + Sync + 'static,
    ) -> Self {
        self.gallery.create = Arc::new(uc);
        self
    }

    pub fn with_replace_gallery_record(
        mut self,
        uc: impl ReplaceGalleryRecordUseCase + Send + Sync + 'static,
    ) -> Self {
        self.gallery.replace = Arc::new(uc);
        self
    }

    pub fn with_delete_gallery_record(
        mut self,
        uc: impl DeleteGalleryRecordUseCase + Send + Sync + 'static,
    ) -> Self {
        self.gallery.delete = Arc::new(uc);
        self
    }

    pub fn with_get_gallery_record(
        mut self,
        uc: impl GetGalleryRecordUseCase + Send + Sync + 'static,
    ) -> Self {
        self.gallery.get_single = Arc::new(uc);
        self
    }

    pub fn with_list_gallery_records(
        mut self,
        uc: impl ListGalleryRecordsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.gallery.get_list = Arc::new(uc);
        self
    }

    pub fn with_max_upload_bytes(mut self, limit: usize) -> Self {
        self.max_upload_bytes = limit;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            gallery: self.gallery,
            max_upload_bytes: self.max_upload_bytes,
        })
    }
}
