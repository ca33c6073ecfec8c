use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::modules::gallery::application::ports::incoming::use_cases::{
    CreateGalleryRecordCommand, CreateGalleryRecordError, CreateGalleryRecordUseCase,
    DeleteGalleryRecordError, DeleteGalleryRecordOutcome, DeleteGalleryRecordUseCase,
    GetGalleryRecordError, GetGalleryRecordUseCase, ListGalleryRecordsError,
    ListGalleryRecordsUseCase, ReplaceGalleryRecordCommand, ReplaceGalleryRecordError,
    ReplaceGalleryRecordOutcome, ReplaceGalleryRecordUseCase,
};
use crate::modules::gallery::domain::entities::{GalleryId, GalleryRecord};

// ============================================================================
// Create
// ============================================================================

#[derive(Clone)]
pub struct StubCreateGalleryRecordUseCase {
    result: Result<GalleryRecord, CreateGalleryRecordError>,
    received: Arc<Mutex<Option<CreateGalleryRecordCommand>>>,
}

impl StubCreateGalleryRecordUseCase {
    pub fn success(record: GalleryRecord) -> Self {
        Self {
            result: Ok(record),
            received: Arc::default(),
        }
    }

    pub fn error(err: CreateGalleryRecordError) -> Self {
        Self {
            result: Err(err),
            received: Arc::default(),
        }
    }

    /// Shared handle to the last command, readable after the stub is moved
    /// into app state.
    pub fn received(&self) -> Arc<Mutex<Option<CreateGalleryRecordCommand>>> {
        Arc::clone(&self.received)
    }
}

#[async_trait]
impl CreateGalleryRecordUseCase for StubCreateGalleryRecordUseCase {
    async fn execute(
        &self,
        command: CreateGalleryRecordCommand,
    ) -> Result<GalleryRecord, CreateGalleryRecordError> {
        *self.received.lock().unwrap() = Some(command);
        self.result.clone()
    }
}

// ============================================================================
// Replace
// ============================================================================

#[derive(Clone)]
pub struct StubReplaceGalleryRecordUseCase {
    result: Result<ReplaceGalleryRecordOutcome, ReplaceGalleryRecordError>,
    received: Arc<Mutex<Option<ReplaceGalleryRecordCommand>>>,
}

impl StubReplaceGalleryRecordUseCase {
    pub fn success(record: GalleryRecord) -> Self {
        Self {
            result: Ok(ReplaceGalleryRecordOutcome {
                record,
                cleanup: vec![],
            }),
            received: Arc::default(),
        }
    }

    pub fn error(err: ReplaceGalleryRecordError) -> Self {
        Self {
            result: Err(err),
            received: Arc::default(),
        }
    }

    pub fn received(&self) -> Arc<Mutex<Option<ReplaceGalleryRecordCommand>>> {
        Arc::clone(&self.received)
    }
}

#[async_trait]
impl ReplaceGalleryRecordUseCase for StubReplaceGalleryRecordUseCase {
    async fn execute(
        &self,
        command: ReplaceGalleryRecordCommand,
    ) -> Result<ReplaceGalleryRecordOutcome, ReplaceGalleryRecordError> {
        *self.received.lock().unwrap() = Some(command);
        self.result.clone()
    }
}

// ============================================================================
// Delete
// ============================================================================

#[derive(Clone)]
pub struct StubDeleteGalleryRecordUseCase {
    result: Result<(), DeleteGalleryRecordError>,
}

impl StubDeleteGalleryRecordUseCase {
    pub fn success() -> Self {
        Self { result: Ok(()) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(DeleteGalleryRecordError::NotFound),
        }
    }

    pub fn storage_error(msg: &str) -> Self {
        Self {
            result: Err(DeleteGalleryRecordError::StorageWrite(msg.to_string())),
        }
    }
}

#[async_trait]
impl DeleteGalleryRecordUseCase for StubDeleteGalleryRecordUseCase {
    async fn execute(
        &self,
        id: GalleryId,
    ) -> Result<DeleteGalleryRecordOutcome, DeleteGalleryRecordError> {
        self.result.clone().map(|()| DeleteGalleryRecordOutcome {
            id,
            cleanup: vec![],
        })
    }
}

// ============================================================================
// Get / List
// ============================================================================

#[derive(Clone)]
pub struct StubGetGalleryRecordUseCase {
    result: Result<GalleryRecord, GetGalleryRecordError>,
}

impl StubGetGalleryRecordUseCase {
    pub fn found(record: GalleryRecord) -> Self {
        Self { result: Ok(record) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetGalleryRecordError::NotFound),
        }
    }

    pub fn repo_error(msg: &str) -> Self {
        Self {
            result: Err(GetGalleryRecordError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetGalleryRecordUseCase for StubGetGalleryRecordUseCase {
    async fn execute(&self, _id: GalleryId) -> Result<GalleryRecord, GetGalleryRecordError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubListGalleryRecordsUseCase {
    result: Result<Vec<GalleryRecord>, ListGalleryRecordsError>,
}

impl StubListGalleryRecordsUseCase {
    pub fn success(records: Vec<GalleryRecord>) -> Self {
        Self {
            result: Ok(records),
        }
    }

    pub fn repo_error(msg: &str) -> Self {
        Self {
            result: Err(ListGalleryRecordsError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl ListGalleryRecordsUseCase for StubListGalleryRecordsUseCase {
    async fn execute(&self) -> Result<Vec<GalleryRecord>, ListGalleryRecordsError> {
        self.result.clone()
    }
}
