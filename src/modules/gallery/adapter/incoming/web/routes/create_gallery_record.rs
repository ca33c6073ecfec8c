use actix_multipart::Multipart;
use actix_web::{post, web, Responder};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::gallery::adapter::incoming::web::multipart::{
    read_gallery_form, GalleryUploadForm,
};
use crate::modules::gallery::adapter::incoming::web::response::{
    form_error, gallery_error, run_detached, GalleryRecordResponse,
};
use crate::modules::gallery::application::ports::incoming::use_cases::{
    CreateGalleryRecordCommand, CreateGalleryRecordError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/products",
    tag = "products",
    request_body(content = GalleryUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Record created", body = inline(SuccessResponse<GalleryRecordResponse>)),
        (status = 400, description = "Missing image, blank name or malformed body", body = ErrorResponse),
        (status = 413, description = "A file part exceeds the upload limit", body = ErrorResponse),
        (status = 502, description = "Blob store rejected an upload", body = ErrorResponse),
        (status = 500, description = "Record store write failed", body = ErrorResponse)
    )
)]
#[post("/api/products")]
pub async fn create_gallery_record_handler(
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let form = match read_gallery_form(payload, data.max_upload_bytes).await {
        Ok(form) => form,
        Err(e) => {
            warn!(error = %e, "Rejected gallery create form");
            return form_error(&e);
        }
    };

    let command = CreateGalleryRecordCommand {
        name: form.name.unwrap_or_default(),
        image: form.image,
        video: form.video,
    };
    let use_case = Arc::clone(&data.gallery.create);

    match run_detached(async move { use_case.execute(command).await }).await {
        Ok(Ok(record)) => {
            info!(id = %record.id, "Gallery record created");
            ApiResponse::created(GalleryRecordResponse::from(record))
        }

        Ok(Err(e @ CreateGalleryRecordError::Validation(_))) => {
            warn!(error = %e, "Invalid gallery create request");
            gallery_error(e.kind(), &e.to_string())
        }

        Ok(Err(e)) => {
            error!(
                error = %e,
                cleanup_warnings = e.cleanup_warnings().len(),
                "Failed to create gallery record"
            );
            gallery_error(e.kind(), &e.to_string())
        }

        Err(e) => {
            error!(error = %e, "Create task aborted");
            ApiResponse::internal_error()
        }
    }
}
