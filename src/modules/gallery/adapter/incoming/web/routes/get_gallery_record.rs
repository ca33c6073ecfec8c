use actix_web::{get, web, Responder};
use std::sync::Arc;
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::gallery::adapter::incoming::web::response::{
    gallery_error, run_detached, GalleryRecordResponse,
};
use crate::modules::gallery::application::ports::incoming::use_cases::GetGalleryRecordError;
use crate::modules::gallery::domain::entities::GalleryId;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Gallery record id")),
    responses(
        (status = 200, description = "Record found", body = inline(SuccessResponse<GalleryRecordResponse>)),
        (status = 404, description = "No record with this id", body = ErrorResponse),
        (status = 500, description = "Record store unavailable", body = ErrorResponse)
    )
)]
#[get("/api/products/{id}")]
pub async fn get_gallery_record_handler(
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = GalleryId::from(path.into_inner());
    let use_case = Arc::clone(&data.gallery.get_single);

    match run_detached(async move { use_case.execute(id).await }).await {
        Ok(Ok(record)) => ApiResponse::success(GalleryRecordResponse::from(record)),

        Ok(Err(e @ GetGalleryRecordError::NotFound)) => {
            warn!(%id, "Gallery record not found");
            gallery_error(e.kind(), "Gallery record not found")
        }

        Ok(Err(e)) => {
            error!(%id, error = %e, "Failed to fetch gallery record");
            gallery_error(e.kind(), &e.to_string())
        }

        Err(e) => {
            error!(%id, error = %e, "Get task aborted");
            ApiResponse::internal_error()
        }
    }
}
