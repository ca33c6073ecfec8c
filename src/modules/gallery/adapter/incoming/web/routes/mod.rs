mod create_gallery_record;
mod delete_gallery_record;
mod get_gallery_record;
mod list_gallery_records;
mod replace_gallery_record;

pub use create_gallery_record::*;
pub use delete_gallery_record::*;
pub use get_gallery_record::*;
pub use list_gallery_records::*;
pub use replace_gallery_record::*;
