use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::modules::gallery::application::ports::incoming::use_cases::{
    ReplaceGalleryRecordCommand, ReplaceGalleryRecordError, ReplaceGalleryRecordOutcome,
    ReplaceGalleryRecordUseCase,
};
use crate::modules::gallery::application::ports::outgoing::{
    BlobStore, BlobStoreError, GalleryRepository, GalleryRepositoryError, MediaNamespaces,
    UpdateGalleryRecord,
};
use crate::modules::gallery::application::sync::{
    CleanupPlan, CleanupStep, CleanupWarning, RecordLocks,
};
use crate::modules::gallery::domain::entities::{
    GalleryId, GalleryName, GalleryRecord, MediaInput, MediaKind, MediaRef,
};
use crate::modules::gallery::domain::errors::SlotUploadFailure;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

/// Swaps media slots new-before-old: upload, update the row, then release
/// the replaced blobs. Runs under the record's lock.
pub struct ReplaceGalleryRecordService<R, B>
where
    R: GalleryRepository,
    B: BlobStore,
{
    repository: R,
    blob_store: B,
    namespaces: MediaNamespaces,
    locks: RecordLocks,
}

impl<R, B> ReplaceGalleryRecordService<R, B>
where
    R: GalleryRepository,
    B: BlobStore,
{
    pub fn new(
        repository: R,
        blob_store: B,
        namespaces: MediaNamespaces,
        locks: RecordLocks,
    ) -> Self {
        Self {
            repository,
            blob_store,
            namespaces,
            locks,
        }
    }

    async fn upload_slot(
        &self,
        kind: MediaKind,
        input: Option<MediaInput>,
    ) -> Option<Result<MediaRef, BlobStoreError>> {
        let input = input?;
        Some(
            self.blob_store
                .upload(self.namespaces.upload_for(kind, input))
                .await,
        )
    }

    async fn load(&self, id: GalleryId) -> Result<GalleryRecord, ReplaceGalleryRecordError> {
        self.repository
            .select_by_id(id)
            .await
            .map_err(|e| map_repository_error(e, Vec::new()))
    }
}

fn map_repository_error(
    e: GalleryRepositoryError,
    cleanup: Vec<CleanupWarning>,
) -> ReplaceGalleryRecordError {
    match e {
        GalleryRepositoryError::NotFound => ReplaceGalleryRecordError::NotFound { cleanup },
        GalleryRepositoryError::DatabaseError(message) => {
            ReplaceGalleryRecordError::StorageWrite { message, cleanup }
        }
    }
}

#[async_trait]
impl<R, B> ReplaceGalleryRecordUseCase for ReplaceGalleryRecordService<R, B>
where
    R: GalleryRepository,
    B: BlobStore,
{
    async fn execute(
        &self,
        command: ReplaceGalleryRecordCommand,
    ) -> Result<ReplaceGalleryRecordOutcome, ReplaceGalleryRecordError> {
        let id = command.id;
        let name = command
            .name
            .as_deref()
            .map(GalleryName::try_new)
            .transpose()
            .map_err(|e| ReplaceGalleryRecordError::Validation(e.to_string()))?;
        let image = command.image.filter(|input| !input.is_empty());
        let video = command.video.filter(|input| !input.is_empty());

        let _guard = self.locks.acquire(id).await;
        let current = self.load(id).await?;

        // Name-only or empty replace: no blob traffic at all.
        if image.is_none() && video.is_none() {
            if name.is_none() {
                return Ok(ReplaceGalleryRecordOutcome {
                    record: current,
                    cleanup: Vec::new(),
                });
            }

            let changes = UpdateGalleryRecord {
                name,
                ..Default::default()
            };
            let record = self
                .repository
                .update(id, changes)
                .await
                .map_err(|e| map_repository_error(e, Vec::new()))?;

            info!(id = %id, "gallery record renamed");
            return Ok(ReplaceGalleryRecordOutcome {
                record,
                cleanup: Vec::new(),
            });
        }

        // Slots are independent, so both uploads run together.
        let (image_result, video_result) = tokio::join!(
            self.upload_slot(MediaKind::Image, image),
            self.upload_slot(MediaKind::Video, video),
        );

        let mut changes = UpdateGalleryRecord {
            name,
            ..Default::default()
        };
        let mut failures = Vec::new();
        let mut discard = CleanupPlan::new();
        let mut release = CleanupPlan::new();

        for (kind, result) in [
            (MediaKind::Image, image_result),
            (MediaKind::Video, video_result),
        ] {
            match result {
                None => {}
                Some(Ok(media)) => {
                    discard.push(CleanupStep::DiscardUpload(media.clone()));
                    if let Some(old) = current.media(kind) {
                        release.push(CleanupStep::ReleaseReplaced(old.clone()));
                    }
                    match kind {
                        MediaKind::Image => changes.image = Some(media),
                        MediaKind::Video => changes.video = Some(media),
                    }
                }
                Some(Err(error)) => {
                    warn!(id = %id, kind = %kind, error = %error, "replacement upload failed, slot unchanged");
                    failures.push(SlotUploadFailure { kind, error });
                }
            }
        }

        if changes.image.is_none() && changes.video.is_none() {
            return Err(ReplaceGalleryRecordError::Upload {
                failures,
                committed: None,
                cleanup: Vec::new(),
            });
        }

        let record = match self.repository.update(id, changes).await {
            Ok(record) => record,
            Err(e) => {
                error!(id = %id, error = %e, "gallery update failed, discarding new uploads");
                let cleanup = discard.run(&self.blob_store).await;
                return Err(map_repository_error(e, cleanup));
            }
        };

        info!(id = %id, "gallery record media replaced");
        let cleanup = release.run(&self.blob_store).await;

        if failures.is_empty() {
            Ok(ReplaceGalleryRecordOutcome { record, cleanup })
        } else {
            Err(ReplaceGalleryRecordError::Upload {
                failures,
                committed: Some(record),
                cleanup,
            })
        }
    }
}
