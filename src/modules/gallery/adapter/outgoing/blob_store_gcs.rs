use async_trait::async_trait;
use google_cloud_gax::error::rpc::Code;
use std::sync::Arc;
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::modules::gallery::application::ports::outgoing::{
    BlobStore, BlobStoreError, BlobUpload,
};
use crate::modules::gallery::domain::entities::MediaRef;

const DEFAULT_PUBLIC_BASE_URL: &str = "https://storage.googleapis.com";
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";
const MAX_EXTENSION_LEN: usize = 8;

/// google-cloud-storage uses a bucket resource name format:
/// `projects/_/buckets/{bucket}`
fn bucket_resource(bucket: &str) -> String {
    format!("projects/_/buckets/{}", bucket)
}

/// `{namespace}/{uuid}` plus the lowercased extension of the original file
/// name, when it has a plausible one. A fresh uuid per upload keeps object
/// names from ever being reused.
fn object_name(namespace: &str, file_name: Option<&str>) -> String {
    let namespace = namespace.trim_matches('/');
    let id = Uuid::new_v4();

    let ext = file_name
        .and_then(|name| std::path::Path::new(name).extension())
        .and_then(|s| s.to_str())
        .map(|s| s.trim().to_ascii_lowercase())
        .filter(|s| {
            !s.is_empty()
                && s.len() <= MAX_EXTENSION_LEN
                && s.chars().all(|c| c.is_ascii_alphanumeric())
        });

    match ext {
        Some(ext) => format!("{}/{}.{}", namespace, id, ext),
        None => format!("{}/{}", namespace, id),
    }
}

/// How a failed GCS call ended, read from its status and never from its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GcsFailure {
    /// The service answered that the bucket or object does not exist.
    Missing,
    /// The service answered and refused the request.
    Refused,
    /// No usable answer: transport error, timeout, throttling, 5xx.
    Unreachable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct GcsError {
    failure: GcsFailure,
    message: String,
}

impl GcsError {
    fn new(failure: GcsFailure, message: impl Into<String>) -> Self {
        Self {
            failure,
            message: message.into(),
        }
    }
}

impl From<google_cloud_gax::error::Error> for GcsError {
    fn from(err: google_cloud_gax::error::Error) -> Self {
        let failure = match (err.status(), err.http_status_code()) {
            (Some(status), _) => failure_for_rpc_code(status.code),
            (None, Some(http)) => failure_for_http_status(http),
            (None, None) => GcsFailure::Unreachable,
        };

        Self::new(failure, err.to_string())
    }
}

fn failure_for_rpc_code(code: Code) -> GcsFailure {
    match code {
        Code::NotFound => GcsFailure::Missing,
        Code::InvalidArgument
        | Code::PermissionDenied
        | Code::Unauthenticated
        | Code::FailedPrecondition
        | Code::AlreadyExists
        | Code::OutOfRange => GcsFailure::Refused,
        _ => GcsFailure::Unreachable,
    }
}

fn failure_for_http_status(status: u16) -> GcsFailure {
    match status {
        404 => GcsFailure::Missing,
        400 | 401 | 403 | 409 | 411 | 412 | 413 => GcsFailure::Refused,
        _ => GcsFailure::Unreachable,
    }
}

/// A missing target on upload means the bucket itself is gone, which no
/// retry fixes.
fn map_upload_error(err: GcsError) -> BlobStoreError {
    match err.failure {
        GcsFailure::Missing | GcsFailure::Refused => BlobStoreError::Rejected(err.message),
        GcsFailure::Unreachable => BlobStoreError::Unavailable(err.message),
    }
}

fn map_delete_error(err: GcsError) -> BlobStoreError {
    match err.failure {
        GcsFailure::Missing => BlobStoreError::NotFound(err.message),
        GcsFailure::Refused => BlobStoreError::Rejected(err.message),
        GcsFailure::Unreachable => BlobStoreError::Unavailable(err.message),
    }
}

/// Internal seam to make the adapter testable without mocking google-cloud-storage types.
///
/// Tests will implement this trait with a fake client.
#[async_trait]
trait GcsClient: Send + Sync {
    async fn write_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), GcsError>;

    async fn delete_object(&self, bucket_resource: &str, object_name: &str)
        -> Result<(), GcsError>;
}

#[cfg(test)]
struct ArcGcsClient(Arc<dyn GcsClient>);

#[cfg(test)]
#[async_trait]
impl GcsClient for ArcGcsClient {
    async fn write_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), GcsError> {
        self.0
            .write_object(bucket_resource, object_name, content_type, bytes)
            .await
    }

    async fn delete_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
    ) -> Result<(), GcsError> {
        self.0.delete_object(bucket_resource, object_name).await
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GcsBlobStoreConfig {
    pub bucket: String,
    /// Prefix of retrieval URLs; the bucket and object name are appended.
    pub public_base_url: String,
}

impl GcsBlobStoreConfig {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            public_base_url: DEFAULT_PUBLIC_BASE_URL.to_string(),
        }
    }

    fn public_url(&self, object_name: &str) -> String {
        format!(
            "{}/{}/{}",
            self.public_base_url.trim_end_matches('/'),
            self.bucket,
            object_name
        )
    }
}

/// Production adapter: implements the BlobStore port on a GCS bucket.
#[derive(Clone)]
pub struct GcsBlobStore {
    client: Arc<OnceCell<Box<dyn GcsClient>>>,
    config: GcsBlobStoreConfig,
}

impl GcsBlobStore {
    /// Synchronous constructor - client is initialized lazily on first use.
    pub fn new(config: GcsBlobStoreConfig) -> Self {
        Self {
            client: Arc::new(OnceCell::new()),
            config,
        }
    }

    /// Get or initialize the GCS client.
    async fn get_client(&self) -> Result<&dyn GcsClient, BlobStoreError> {
        self.client
            .get_or_try_init(|| async {
                let real_client = RealGcsClient::new().await?;
                Ok::<_, Box<dyn std::error::Error + Send + Sync>>(
                    Box::new(real_client) as Box<dyn GcsClient>
                )
            })
            .await
            .map(|boxed| &**boxed)
            .map_err(|e| BlobStoreError::Unavailable(e.to_string()))
    }

    /// Test-friendly constructor with pre-initialized client.
    #[cfg(test)]
    fn with_client(client: Arc<dyn GcsClient>, config: GcsBlobStoreConfig) -> Self {
        let once = OnceCell::new();
        let _ = once.set(Box::new(ArcGcsClient(client)) as Box<dyn GcsClient>);

        Self {
            client: Arc::new(once),
            config,
        }
    }
}

#[async_trait]
impl BlobStore for GcsBlobStore {
    async fn upload(&self, upload: BlobUpload) -> Result<MediaRef, BlobStoreError> {
        if upload.input.is_empty() {
            return Err(BlobStoreError::Rejected("empty payload".to_string()));
        }

        let client = self.get_client().await?;

        let bucket = bucket_resource(&self.config.bucket);
        let object = object_name(&upload.namespace, upload.input.file_name.as_deref());
        let content_type = upload
            .input
            .content_type
            .as_deref()
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();
        let size = upload.input.len();

        client
            .write_object(&bucket, &object, &content_type, upload.input.bytes)
            .await
            .map_err(map_upload_error)?;

        tracing::debug!(object = %object, kind = %upload.kind, size, "blob uploaded");

        Ok(MediaRef {
            url: self.config.public_url(&object),
            object_id: object,
            kind: upload.kind,
        })
    }

    async fn delete(&self, media: MediaRef) -> Result<(), BlobStoreError> {
        let client = self.get_client().await?;
        let bucket = bucket_resource(&self.config.bucket);

        client
            .delete_object(&bucket, &media.object_id)
            .await
            .map_err(map_delete_error)
    }
}

// ============================================================================
// Real Google Cloud Storage client (google-cloud-storage)
// ============================================================================

struct RealGcsClient {
    storage: google_cloud_storage::client::Storage,
    control: google_cloud_storage::client::StorageControl,
}

impl RealGcsClient {
    async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!("Initializing GCS client...");

        let storage = google_cloud_storage::client::Storage::builder()
            .build()
            .await
            .map_err(|e| {
                tracing::error!("Failed to build GCS storage client: {:?}", e);
                e
            })?;

        let control = google_cloud_storage::client::StorageControl::builder()
            .build()
            .await
            .map_err(|e| {
                tracing::error!("Failed to build GCS control client: {:?}", e);
                e
            })?;

        tracing::info!("GCS clients created");

        Ok(Self { storage, control })
    }
}

#[async_trait]
impl GcsClient for RealGcsClient {
    async fn write_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), GcsError> {
        self.storage
            .write_object(
                bucket_resource.to_string(),
                object_name.to_string(),
                bytes::Bytes::from(bytes),
            )
            .set_content_type(content_type.to_string())
            .send_buffered()
            .await
            .map_err(GcsError::from)?;

        Ok(())
    }

    async fn delete_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
    ) -> Result<(), GcsError> {
        self.control
            .delete_object()
            .set_bucket(bucket_resource.to_string())
            .set_object(object_name.to_string())
            .send()
            .await
            .map_err(GcsError::from)
    }
}

// ============================================================================
// Tests
// ============================================================================
