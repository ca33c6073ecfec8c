use actix_web::{get, web, Responder};
use std::sync::Arc;
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::gallery::adapter::incoming::web::response::{
    gallery_error, run_detached, GalleryRecordResponse,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "products",
    responses(
        (status = 200, description = "All records, newest first", body = inline(SuccessResponse<Vec<GalleryRecordResponse>>)),
        (status = 500, description = "Record store unavailable", body = ErrorResponse)
    )
)]
#[get("/api/products")]
pub async fn list_gallery_records_handler(data: web::Data<AppState>) -> impl Responder {
    let use_case = Arc::clone(&data.gallery.get_list);

    match run_detached(async move { use_case.execute().await }).await {
        Ok(Ok(records)) => ApiResponse::success(
            records
                .into_iter()
                .map(GalleryRecordResponse::from)
                .collect::<Vec<_>>(),
        ),

        Ok(Err(e)) => {
            error!(error = %e, "Failed to list gallery records");
            gallery_error(e.kind(), &e.to_string())
        }

        Err(e) => {
            error!(error = %e, "List task aborted");
            ApiResponse::internal_error()
        }
    }
}
