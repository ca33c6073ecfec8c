use actix_web::{delete, web, Responder};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::api::schemas::ErrorResponse;
use crate::modules::gallery::adapter::incoming::web::response::{gallery_error, run_detached};
use crate::modules::gallery::application::ports::incoming::use_cases::DeleteGalleryRecordError;
use crate::modules::gallery::domain::entities::GalleryId;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Gallery record id")),
    responses(
        (status = 204, description = "Record and its blobs removed"),
        (status = 404, description = "No record with this id", body = ErrorResponse),
        (status = 500, description = "Record store write failed", body = ErrorResponse)
    )
)]
#[delete("/api/products/{id}")]
pub async fn delete_gallery_record_handler(
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = GalleryId::from(path.into_inner());
    let use_case = Arc::clone(&data.gallery.delete);

    match run_detached(async move { use_case.execute(id).await }).await {
        Ok(Ok(outcome)) => {
            if !outcome.cleanup.is_empty() {
                warn!(
                    %id,
                    leaked = outcome.cleanup.len(),
                    "Gallery record deleted with unreclaimed blobs"
                );
            }
            info!(%id, "Gallery record deleted");
            ApiResponse::no_content()
        }

        Ok(Err(e @ DeleteGalleryRecordError::NotFound)) => {
            warn!(%id, "Gallery record not found for delete");
            gallery_error(e.kind(), &e.to_string())
        }

        Ok(Err(e)) => {
            error!(%id, error = %e, "Failed to delete gallery record");
            gallery_error(e.kind(), &e.to_string())
        }

        Err(e) => {
            error!(%id, error = %e, "Delete task aborted");
            ApiResponse::internal_error()
        }
    }
}
