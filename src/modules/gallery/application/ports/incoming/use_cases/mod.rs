mod create_gallery_record;
mod delete_gallery_record;
mod get_gallery_record;
mod list_gallery_records;
mod replace_gallery_record;

pub use create_gallery_record::{
    CreateGalleryRecordCommand, CreateGalleryRecordError, CreateGalleryRecordUseCase,
};
pub use delete_gallery_record::{
    DeleteGalleryRecordError, DeleteGalleryRecordOutcome, DeleteGalleryRecordUseCase,
};
pub use get_gallery_record::{GetGalleryRecordError, GetGalleryRecordUseCase};
pub use list_gallery_records::{ListGalleryRecordsError, ListGalleryRecordsUseCase};
pub use replace_gallery_record::{
    ReplaceGalleryRecordCommand, ReplaceGalleryRecordError, ReplaceGalleryRecordOutcome,
    ReplaceGalleryRecordUseCase,
};
