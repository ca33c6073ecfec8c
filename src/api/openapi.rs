use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::modules::gallery::adapter::incoming::web::multipart::GalleryUploadForm;
use crate::modules::gallery::adapter::incoming::web::response::GalleryRecordResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gallery API",
        version = "1.0.0",
        description = "Product gallery records backed by a relational store and a blob store"
    ),
    paths(
        crate::modules::gallery::adapter::incoming::web::routes::list_gallery_records_handler,
        crate::modules::gallery::adapter::incoming::web::routes::get_gallery_record_handler,
        crate::modules::gallery::adapter::incoming::web::routes::create_gallery_record_handler,
        crate::modules::gallery::adapter::incoming::web::routes::replace_gallery_record_handler,
        crate::modules::gallery::adapter::incoming::web::routes::delete_gallery_record_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            GalleryRecordResponse,
            GalleryUploadForm
        )
    ),
    tags(
        (name = "products", description = "Gallery record endpoints"),
    )
)]
pub struct ApiDoc;
