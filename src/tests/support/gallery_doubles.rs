use async_trait::async_trait;
use mockall::mock;

use crate::modules::gallery::application::ports::outgoing::{
    BlobStore, BlobStoreError, BlobUpload, GalleryRepository, GalleryRepositoryError,
    NewGalleryRecord, UpdateGalleryRecord,
};
use crate::modules::gallery::domain::entities::{GalleryId, GalleryRecord, MediaRef};

mock! {
    pub GalleryRepositoryMock {}
    #[async_trait]
    impl GalleryRepository for GalleryRepositoryMock {
        async fn insert(&self, data: NewGalleryRecord) -> Result<GalleryRecord, GalleryRepositoryError>;
        async fn select_by_id(&self, id: GalleryId) -> Result<GalleryRecord, GalleryRepositoryError>;
        async fn select_all(&self) -> Result<Vec<GalleryRecord>, GalleryRepositoryError>;
        async fn update(
            &self,
            id: GalleryId,
            data: UpdateGalleryRecord,
        ) -> Result<GalleryRecord, GalleryRepositoryError>;
        async fn delete_by_id(&self, id: GalleryId) -> Result<(), GalleryRepositoryError>;
    }
}

mock! {
    pub BlobStoreMock {}
    #[async_trait]
    impl BlobStore for BlobStoreMock {
        async fn upload(&self, upload: BlobUpload) -> Result<MediaRef, BlobStoreError>;
        async fn delete(&self, media: MediaRef) -> Result<(), BlobStoreError>;
    }
}

/// Mock store whose uploads succeed with an object id derived from the
/// namespace and `tag`.
pub fn accepting_blob_store(tag: &'static str) -> MockBlobStoreMock {
    let mut store = MockBlobStoreMock::new();
    store
        .expect_upload()
        .returning(move |upload| Ok(uploaded_ref(&upload, tag)));
    store
}

pub fn uploaded_ref(upload: &BlobUpload, tag: &str) -> MediaRef {
    let object_id = format!("{}/{}-{}", upload.namespace, tag, upload.kind);
    MediaRef {
        url: format!("https://cdn.test/{object_id}"),
        object_id,
        kind: upload.kind,
    }
}
