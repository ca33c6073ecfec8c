//! # Gallery Table Migration
//!
//! One row per gallery record. Each row points at an image blob (always)
//! and a video blob (optionally) stored in the object store. The
//! `*_public_id` columns hold the object identifiers needed to delete the
//! blobs; the `*_url` columns hold the retrieval addresses handed to clients.
//!
//! `id` is a `BIGSERIAL`, so newest-first listing can fall back to id order
//! when two rows share a `created_at`.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create gallery table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Gallery::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Gallery::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Gallery::Name).string_len(255).not_null())
                    // =========================================
                    // Blob references
                    // =========================================
                    // Image is mandatory; video columns are either both set or both NULL.
                    .col(ColumnDef::new(Gallery::ImageUrl).text().not_null())
                    .col(
                        ColumnDef::new(Gallery::ImagePublicId)
                            .string_len(1024)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Gallery::VideoUrl).text())
                    .col(ColumnDef::new(Gallery::VideoPublicId).string_len(1024))
                    // =========================================
                    // Audit timestamps
                    // =========================================
                    .col(
                        ColumnDef::new(Gallery::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Gallery::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Constraints & indexes
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE gallery
                ADD CONSTRAINT chk_gallery_video_pair
                CHECK ((video_url IS NULL) = (video_public_id IS NULL));
                "#,
            )
            .await?;

        // Newest-first listing
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_gallery_created_at
                ON gallery (created_at DESC, id DESC);
                "#,
            )
            .await?;

        // An object id may back at most one active reference
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_gallery_image_public_id_unique
                ON gallery (image_public_id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_gallery_video_public_id_unique
                ON gallery (video_public_id)
                WHERE video_public_id IS NOT NULL;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_gallery_created_at;
                DROP INDEX IF EXISTS idx_gallery_image_public_id_unique;
                DROP INDEX IF EXISTS idx_gallery_video_public_id_unique;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Gallery::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Gallery {
    Table,
    Id,
    Name,
    ImageUrl,
    ImagePublicId,
    VideoUrl,
    VideoPublicId,
    CreatedAt,
    UpdatedAt,
}
