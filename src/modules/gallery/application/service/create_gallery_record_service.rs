use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::modules::gallery::application::ports::incoming::use_cases::{
    CreateGalleryRecordCommand, CreateGalleryRecordError, CreateGalleryRecordUseCase,
};
use crate::modules::gallery::application::ports::outgoing::{
    BlobStore, GalleryRepository, MediaNamespaces, NewGalleryRecord,
};
use crate::modules::gallery::application::sync::{CleanupPlan, CleanupStep};
use crate::modules::gallery::domain::entities::{GalleryName, GalleryRecord, MediaKind};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

/// Upload image, then video, then insert. Uploads that end up unreferenced
/// because a later step failed are discarded before the error is returned.
pub struct CreateGalleryRecordService<R, B>
where
    R: GalleryRepository,
    B: BlobStore,
{
    repository: R,
    blob_store: B,
    namespaces: MediaNamespaces,
}

impl<R, B> CreateGalleryRecordService<R, B>
where
    R: GalleryRepository,
    B: BlobStore,
{
    pub fn new(repository: R, blob_store: B, namespaces: MediaNamespaces) -> Self {
        Self {
            repository,
            blob_store,
            namespaces,
        }
    }
}

#[async_trait]
impl<R, B> CreateGalleryRecordUseCase for CreateGalleryRecordService<R, B>
where
    R: GalleryRepository,
    B: BlobStore,
{
    async fn execute(
        &self,
        command: CreateGalleryRecordCommand,
    ) -> Result<GalleryRecord, CreateGalleryRecordError> {
        let image = command
            .image
            .filter(|input| !input.is_empty())
            .ok_or_else(|| CreateGalleryRecordError::Validation("image is required".to_string()))?;

        let name = GalleryName::try_new(&command.name)
            .map_err(|e| CreateGalleryRecordError::Validation(e.to_string()))?;

        let video = command.video.filter(|input| !input.is_empty());

        let image_ref = self
            .blob_store
            .upload(self.namespaces.upload_for(MediaKind::Image, image))
            .await
            .map_err(|error| {
                warn!(error = %error, "image upload failed, nothing written");
                CreateGalleryRecordError::Upload {
                    kind: MediaKind::Image,
                    error,
                    cleanup: Vec::new(),
                }
            })?;

        let mut discard = CleanupPlan::new();
        discard.push(CleanupStep::DiscardUpload(image_ref.clone()));

        let video_ref = match video {
            Some(input) => {
                match self
                    .blob_store
                    .upload(self.namespaces.upload_for(MediaKind::Video, input))
                    .await
                {
                    Ok(media) => {
                        discard.push(CleanupStep::DiscardUpload(media.clone()));
                        Some(media)
                    }
                    Err(error) => {
                        warn!(error = %error, "video upload failed, discarding uploaded image");
                        let cleanup = discard.run(&self.blob_store).await;
                        return Err(CreateGalleryRecordError::Upload {
                            kind: MediaKind::Video,
                            error,
                            cleanup,
                        });
                    }
                }
            }
            None => None,
        };

        let data = NewGalleryRecord {
            name,
            image: image_ref,
            video: video_ref,
        };

        match self.repository.insert(data).await {
            Ok(record) => {
                info!(id = %record.id, has_video = record.video.is_some(), "gallery record created");
                Ok(record)
            }
            Err(e) => {
                error!(error = %e, "gallery insert failed, discarding uploads");
                let cleanup = discard.run(&self.blob_store).await;
                Err(CreateGalleryRecordError::StorageWrite {
                    message: e.to_string(),
                    cleanup,
                })
            }
        }
    }
}
