use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;

use crate::modules::gallery::adapter::outgoing::sea_orm_entity::gallery::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::gallery::application::ports::outgoing::{
    GalleryRepository, GalleryRepositoryError, NewGalleryRecord, UpdateGalleryRecord,
};
use crate::modules::gallery::domain::entities::{GalleryId, GalleryRecord, MediaKind, MediaRef};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct GalleryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl GalleryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GalleryRepository for GalleryRepositoryPostgres {
    async fn insert(&self, data: NewGalleryRecord) -> Result<GalleryRecord, GalleryRepositoryError> {
        let now = Utc::now().fixed_offset();
        let (video_url, video_public_id) = split_video(data.video);

        let model = ActiveModel {
            id: NotSet,
            name: Set(data.name.into_inner()),
            image_url: Set(data.image.url),
            image_public_id: Set(data.image.object_id),
            video_url: Set(video_url),
            video_public_id: Set(video_public_id),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_record(result))
    }

    async fn select_by_id(&self, id: GalleryId) -> Result<GalleryRecord, GalleryRepositoryError> {
        Entity::find_by_id(i64::from(id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_record)
            .ok_or(GalleryRepositoryError::NotFound)
    }

    async fn select_all(&self) -> Result<Vec<GalleryRecord>, GalleryRepositoryError> {
        let models = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_record).collect())
    }

    async fn update(
        &self,
        id: GalleryId,
        data: UpdateGalleryRecord,
    ) -> Result<GalleryRecord, GalleryRepositoryError> {
        if data.is_empty() {
            return self.select_by_id(id).await;
        }

        let mut model = <ActiveModel as Default>::default();

        if let Some(name) = data.name {
            model.name = Set(name.into_inner());
        }

        if let Some(image) = data.image {
            model.image_url = Set(image.url);
            model.image_public_id = Set(image.object_id);
        }

        // Both video columns move together to satisfy the pair constraint.
        if let Some(video) = data.video {
            model.video_url = Set(Some(video.url));
            model.video_public_id = Set(Some(video.object_id));
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(i64::from(id)))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        results
            .into_iter()
            .next()
            .map(model_to_record)
            .ok_or(GalleryRepositoryError::NotFound)
    }

    async fn delete_by_id(&self, id: GalleryId) -> Result<(), GalleryRepositoryError> {
        let res = Entity::delete_by_id(i64::from(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(GalleryRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn split_video(video: Option<MediaRef>) -> (Option<String>, Option<String>) {
    match video {
        Some(media) => (Some(media.url), Some(media.object_id)),
        None => (None, None),
    }
}

fn model_to_record(model: gallery::Model) -> GalleryRecord {
    let video = match (model.video_url, model.video_public_id) {
        (Some(url), Some(object_id)) => Some(MediaRef {
            url,
            object_id,
            kind: MediaKind::Video,
        }),
        _ => None,
    };

    GalleryRecord {
        id: GalleryId::from(model.id),
        name: model.name,
        image: MediaRef {
            url: model.image_url,
            object_id: model.image_public_id,
            kind: MediaKind::Image,
        },
        video,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> GalleryRepositoryError {
    GalleryRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
