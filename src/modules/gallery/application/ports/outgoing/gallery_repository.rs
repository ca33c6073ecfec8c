use async_trait::async_trait;

use crate::modules::gallery::domain::entities::{GalleryId, GalleryName, GalleryRecord, MediaRef};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct NewGalleryRecord {
    pub name: GalleryName,
    pub image: MediaRef,
    pub video: Option<MediaRef>,
}

/// Patch semantics: `None` keeps the stored value, `Some` replaces it.
/// A stored video can be swapped but never cleared through an update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateGalleryRecord {
    pub name: Option<GalleryName>,
    pub image: Option<MediaRef>,
    pub video: Option<MediaRef>,
}

impl UpdateGalleryRecord {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.image.is_none() && self.video.is_none()
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum GalleryRepositoryError {
    #[error("Gallery record not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GalleryRepository: Send + Sync {
    /// Inserts a row; the store assigns the id and timestamps.
    async fn insert(&self, data: NewGalleryRecord) -> Result<GalleryRecord, GalleryRepositoryError>;

    async fn select_by_id(&self, id: GalleryId) -> Result<GalleryRecord, GalleryRepositoryError>;

    /// Newest-first snapshot of every record.
    async fn select_all(&self) -> Result<Vec<GalleryRecord>, GalleryRepositoryError>;

    async fn update(
        &self,
        id: GalleryId,
        data: UpdateGalleryRecord,
    ) -> Result<GalleryRecord, GalleryRepositoryError>;

    async fn delete_by_id(&self, id: GalleryId) -> Result<(), GalleryRepositoryError>;
}
