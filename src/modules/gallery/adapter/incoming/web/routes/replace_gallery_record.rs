use actix_multipart::Multipart;
use actix_web::{put, web, Responder};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::gallery::adapter::incoming::web::multipart::{
    read_gallery_form, GalleryUploadForm,
};
use crate::modules::gallery::adapter::incoming::web::response::{
    form_error, gallery_error, partial_gallery_error, run_detached, GalleryRecordResponse,
};
use crate::modules::gallery::application::ports::incoming::use_cases::{
    ReplaceGalleryRecordCommand, ReplaceGalleryRecordError,
};
use crate::modules::gallery::domain::entities::GalleryId;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Gallery record id")),
    request_body(content = GalleryUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Record updated; absent parts are left unchanged", body = inline(SuccessResponse<GalleryRecordResponse>)),
        (status = 400, description = "Blank name or malformed body", body = ErrorResponse),
        (status = 404, description = "No record with this id", body = ErrorResponse),
        (status = 413, description = "A file part exceeds the upload limit", body = ErrorResponse),
        (status = 502, description = "One or more slot uploads failed; when other parts were committed, `data` holds the updated record", body = ErrorResponse),
        (status = 500, description = "Record store write failed", body = ErrorResponse)
    )
)]
#[put("/api/products/{id}")]
pub async fn replace_gallery_record_handler(
    path: web::Path<i64>,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = GalleryId::from(path.into_inner());

    let form = match read_gallery_form(payload, data.max_upload_bytes).await {
        Ok(form) => form,
        Err(e) => {
            warn!(%id, error = %e, "Rejected gallery replace form");
            return form_error(&e);
        }
    };

    let command = ReplaceGalleryRecordCommand {
        id,
        name: form.name,
        image: form.image,
        video: form.video,
    };
    let use_case = Arc::clone(&data.gallery.replace);

    match run_detached(async move { use_case.execute(command).await }).await {
        Ok(Ok(outcome)) => {
            if !outcome.cleanup.is_empty() {
                warn!(
                    %id,
                    leaked = outcome.cleanup.len(),
                    "Gallery record updated with unreleased blobs"
                );
            }
            info!(%id, "Gallery record updated");
            ApiResponse::success(GalleryRecordResponse::from(outcome.record))
        }

        Ok(Err(e @ ReplaceGalleryRecordError::Validation(_))) => {
            warn!(%id, error = %e, "Gallery replace rejected");
            gallery_error(e.kind(), &e.to_string())
        }

        Ok(Err(e)) => {
            let committed = matches!(
                &e,
                ReplaceGalleryRecordError::Upload {
                    committed: Some(_),
                    ..
                }
            );
            error!(
                %id,
                error = %e,
                committed,
                cleanup_warnings = e.cleanup_warnings().len(),
                "Failed to replace gallery record"
            );

            let kind = e.kind();
            match e {
                ReplaceGalleryRecordError::Upload {
                    committed: Some(record),
                    ..
                } => partial_gallery_error(kind, record),
                e => gallery_error(kind, &e.to_string()),
            }
        }

        Err(e) => {
            error!(%id, error = %e, "Replace task aborted");
            ApiResponse::internal_error()
        }
    }
}
