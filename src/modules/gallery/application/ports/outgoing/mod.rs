pub mod blob_store;
pub mod gallery_repository;

pub use blob_store::{BlobStore, BlobStoreError, BlobUpload, MediaNamespaces};
pub use gallery_repository::{
    GalleryRepository, GalleryRepositoryError, NewGalleryRecord, UpdateGalleryRecord,
};
