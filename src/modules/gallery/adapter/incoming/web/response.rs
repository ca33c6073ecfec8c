use actix_web::{http::StatusCode, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::future::Future;
use tokio::task::JoinError;
use utoipa::ToSchema;

use crate::modules::gallery::adapter::incoming::web::multipart::GalleryFormError;
use crate::modules::gallery::domain::entities::GalleryRecord;
use crate::modules::gallery::domain::errors::GalleryErrorKind;
use crate::shared::api::ApiResponse;

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

/// Gallery record as served to clients; mirrors the table columns.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct GalleryRecordResponse {
    #[schema(example = 42)]
    pub id: i64,
    #[schema(example = "Desk Lamp")]
    pub name: String,
    pub image_url: String,
    pub image_public_id: String,
    pub video_url: Option<String>,
    pub video_public_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<GalleryRecord> for GalleryRecordResponse {
    fn from(record: GalleryRecord) -> Self {
        let (video_url, video_public_id) = match record.video {
            Some(video) => (Some(video.url), Some(video.object_id)),
            None => (None, None),
        };

        Self {
            id: record.id.into(),
            name: record.name,
            image_url: record.image.url,
            image_public_id: record.image.object_id,
            video_url,
            video_public_id,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Error mapping
// ──────────────────────────────────────────────────────────
//

pub fn status_for(kind: GalleryErrorKind) -> StatusCode {
    match kind {
        GalleryErrorKind::Validation => StatusCode::BAD_REQUEST,
        GalleryErrorKind::NotFound => StatusCode::NOT_FOUND,
        GalleryErrorKind::Upload => StatusCode::BAD_GATEWAY,
        GalleryErrorKind::StorageWrite | GalleryErrorKind::StorageRead => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Storage and upload details stay in the logs; clients get a fixed message.
fn client_message(kind: GalleryErrorKind, message: &str) -> &str {
    match kind {
        GalleryErrorKind::Upload => "Failed to upload media",
        GalleryErrorKind::StorageWrite => "Failed to save gallery record",
        GalleryErrorKind::StorageRead => "Failed to read gallery records",
        GalleryErrorKind::Validation | GalleryErrorKind::NotFound => message,
    }
}

pub fn gallery_error(kind: GalleryErrorKind, message: &str) -> HttpResponse {
    ApiResponse::error(status_for(kind), kind.code(), client_message(kind, message))
}

/// Error response for a write that committed part of the request; `data`
/// holds the record as it now stands.
pub fn partial_gallery_error(kind: GalleryErrorKind, record: GalleryRecord) -> HttpResponse {
    ApiResponse::error_with_data(
        status_for(kind),
        kind.code(),
        client_message(kind, ""),
        GalleryRecordResponse::from(record),
    )
}

pub fn form_error(err: &GalleryFormError) -> HttpResponse {
    match err {
        GalleryFormError::TooLarge { .. } => ApiResponse::error(
            StatusCode::PAYLOAD_TOO_LARGE,
            "PAYLOAD_TOO_LARGE",
            &err.to_string(),
        ),
        GalleryFormError::Malformed(_) | GalleryFormError::InvalidText(_) => {
            ApiResponse::bad_request("INVALID_MULTIPART", &err.to_string())
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Detached execution
// ──────────────────────────────────────────────────────────
//

/// Runs a workflow on its own task. Dropping the returned future (client
/// went away) leaves the task running to completion.
pub async fn run_detached<F>(workflow: F) -> Result<F::Output, JoinError>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    tokio::spawn(workflow).await
}
