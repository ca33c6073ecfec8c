use async_trait::async_trait;
use tracing::{error, info};

use crate::modules::gallery::application::ports::incoming::use_cases::{
    DeleteGalleryRecordError, DeleteGalleryRecordOutcome, DeleteGalleryRecordUseCase,
};
use crate::modules::gallery::application::ports::outgoing::{
    BlobStore, GalleryRepository, GalleryRepositoryError,
};
use crate::modules::gallery::application::sync::{CleanupPlan, CleanupStep, RecordLocks};
use crate::modules::gallery::domain::entities::GalleryId;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

/// Reclaims both blobs first, then removes the row whatever the blob
/// deletions returned. A row whose blobs are gone stays discoverable by a
/// reconciliation pass; live blobs without a row would not.
pub struct DeleteGalleryRecordService<R, B>
where
    R: GalleryRepository,
    B: BlobStore,
{
    repository: R,
    blob_store: B,
    locks: RecordLocks,
}

impl<R, B> DeleteGalleryRecordService<R, B>
where
    R: GalleryRepository,
    B: BlobStore,
{
    pub fn new(repository: R, blob_store: B, locks: RecordLocks) -> Self {
        Self {
            repository,
            blob_store,
            locks,
        }
    }
}

fn map_repository_error(e: GalleryRepositoryError) -> DeleteGalleryRecordError {
    match e {
        GalleryRepositoryError::NotFound => DeleteGalleryRecordError::NotFound,
        GalleryRepositoryError::DatabaseError(msg) => DeleteGalleryRecordError::StorageWrite(msg),
    }
}

#[async_trait]
impl<R, B> DeleteGalleryRecordUseCase for DeleteGalleryRecordService<R, B>
where
    R: GalleryRepository,
    B: BlobStore,
{
    async fn execute(
        &self,
        id: GalleryId,
    ) -> Result<DeleteGalleryRecordOutcome, DeleteGalleryRecordError> {
        let _guard = self.locks.acquire(id).await;

        let record = self
            .repository
            .select_by_id(id)
            .await
            .map_err(map_repository_error)?;

        let mut reclaim = CleanupPlan::new();
        reclaim.push(CleanupStep::ReclaimDeleted(record.image));
        if let Some(video) = record.video {
            reclaim.push(CleanupStep::ReclaimDeleted(video));
        }
        let cleanup = reclaim.run(&self.blob_store).await;

        self.repository.delete_by_id(id).await.map_err(|e| {
            error!(id = %id, error = %e, "gallery row delete failed after blob reclamation");
            map_repository_error(e)
        })?;

        info!(id = %id, stale_blobs = cleanup.len(), "gallery record deleted");
        Ok(DeleteGalleryRecordOutcome { id, cleanup })
    }
}
