mod create_gallery_record_service;
mod delete_gallery_record_service;
mod get_gallery_record_service;
mod list_gallery_records_service;
mod replace_gallery_record_service;

pub use create_gallery_record_service::CreateGalleryRecordService;
pub use delete_gallery_record_service::DeleteGalleryRecordService;
pub use get_gallery_record_service::GetGalleryRecordService;
pub use list_gallery_records_service::ListGalleryRecordsService;
pub use replace_gallery_record_service::ReplaceGalleryRecordService;
