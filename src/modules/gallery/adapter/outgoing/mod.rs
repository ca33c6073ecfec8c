mod blob_store_gcs;
mod gallery_repository_postgres;
pub mod sea_orm_entity;

pub use blob_store_gcs::{GcsBlobStore, GcsBlobStoreConfig};
pub use gallery_repository_postgres::GalleryRepositoryPostgres;
