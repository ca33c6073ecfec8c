use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Duration;

use crate::modules::gallery::application::ports::outgoing::{
    BlobStore, BlobStoreError, BlobUpload, GalleryRepository, GalleryRepositoryError,
    NewGalleryRecord, UpdateGalleryRecord,
};
use crate::modules::gallery::domain::entities::{GalleryId, GalleryRecord, MediaKind, MediaRef};
use crate::tests::support::gallery_fixtures::fixed_time;

// ============================================================================
// Call log
// ============================================================================

/// One side effect observed by the fakes, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Upload(String),
    DeleteBlob(String),
    Insert(i64),
    Select(i64),
    SelectAll,
    Update(i64),
    DeleteRow(i64),
}

#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    fn push(&self, call: Call) {
        self.0.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().unwrap().clone()
    }

    pub fn position(&self, call: &Call) -> Option<usize> {
        self.calls().iter().position(|c| c == call)
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

// ============================================================================
// Blob store
// ============================================================================

#[derive(Clone)]
pub struct InMemoryBlobStore {
    objects: Arc<Mutex<HashMap<String, MediaRef>>>,
    failing_kinds: Arc<Mutex<HashSet<MediaKind>>>,
    failing_deletes: Arc<AtomicBool>,
    counter: Arc<AtomicU64>,
    log: CallLog,
}

impl InMemoryBlobStore {
    pub fn new(log: CallLog) -> Self {
        Self {
            objects: Arc::default(),
            failing_kinds: Arc::default(),
            failing_deletes: Arc::default(),
            counter: Arc::default(),
            log,
        }
    }

    pub fn contains(&self, object_id: &str) -> bool {
        self.objects.lock().unwrap().contains_key(object_id)
    }

    pub fn object_ids(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.objects.lock().unwrap().keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn fail_uploads_of(&self, kind: MediaKind) {
        self.failing_kinds.lock().unwrap().insert(kind);
    }

    pub fn fail_deletes(&self) {
        self.failing_deletes.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn upload(&self, upload: BlobUpload) -> Result<MediaRef, BlobStoreError> {
        if self.failing_kinds.lock().unwrap().contains(&upload.kind) {
            return Err(BlobStoreError::Unavailable("injected".to_string()));
        }

        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let object_id = format!("{}/{n:04}", upload.namespace);
        let media = MediaRef {
            url: format!("https://cdn.test/{object_id}"),
            object_id: object_id.clone(),
            kind: upload.kind,
        };

        self.log.push(Call::Upload(object_id.clone()));
        self.objects.lock().unwrap().insert(object_id, media.clone());
        Ok(media)
    }

    async fn delete(&self, media: MediaRef) -> Result<(), BlobStoreError> {
        self.log.push(Call::DeleteBlob(media.object_id.clone()));

        if self.failing_deletes.load(Ordering::SeqCst) {
            return Err(BlobStoreError::Unavailable("injected".to_string()));
        }

        match self.objects.lock().unwrap().remove(&media.object_id) {
            Some(_) => Ok(()),
            None => Err(BlobStoreError::NotFound(media.object_id)),
        }
    }
}

// ============================================================================
// Record store
// ============================================================================

#[derive(Clone)]
pub struct InMemoryGalleryRepository {
    rows: Arc<Mutex<BTreeMap<i64, GalleryRecord>>>,
    next_id: Arc<AtomicU64>,
    failing_writes: Arc<AtomicBool>,
    log: CallLog,
}

impl InMemoryGalleryRepository {
    pub fn new(log: CallLog) -> Self {
        Self {
            rows: Arc::default(),
            next_id: Arc::default(),
            failing_writes: Arc::default(),
            log,
        }
    }

    pub fn fail_writes(&self) {
        self.failing_writes.store(true, Ordering::SeqCst);
    }

    pub fn row(&self, id: GalleryId) -> Option<GalleryRecord> {
        self.rows.lock().unwrap().get(&i64::from(id)).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check_writable(&self) -> Result<(), GalleryRepositoryError> {
        if self.failing_writes.load(Ordering::SeqCst) {
            return Err(GalleryRepositoryError::DatabaseError("injected".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl GalleryRepository for InMemoryGalleryRepository {
    async fn insert(&self, data: NewGalleryRecord) -> Result<GalleryRecord, GalleryRepositoryError> {
        self.check_writable()?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1;
        let now = fixed_time(0) + Duration::seconds(id);
        let record = GalleryRecord {
            id: GalleryId::from(id),
            name: data.name.into_inner(),
            image: data.image,
            video: data.video,
            created_at: now,
            updated_at: now,
        };

        self.log.push(Call::Insert(id));
        self.rows.lock().unwrap().insert(id, record.clone());
        Ok(record)
    }

    async fn select_by_id(&self, id: GalleryId) -> Result<GalleryRecord, GalleryRepositoryError> {
        self.log.push(Call::Select(id.into()));
        self.row(id).ok_or(GalleryRepositoryError::NotFound)
    }

    async fn select_all(&self) -> Result<Vec<GalleryRecord>, GalleryRepositoryError> {
        self.log.push(Call::SelectAll);
        let mut records: Vec<_> = self.rows.lock().unwrap().values().cloned().collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(records)
    }

    async fn update(
        &self,
        id: GalleryId,
        data: UpdateGalleryRecord,
    ) -> Result<GalleryRecord, GalleryRepositoryError> {
        self.check_writable()?;

        let mut rows = self.rows.lock().unwrap();
        let record = rows
            .get_mut(&i64::from(id))
            .ok_or(GalleryRepositoryError::NotFound)?;

        if let Some(name) = data.name {
            record.name = name.into_inner();
        }
        if let Some(image) = data.image {
            record.image = image;
        }
        if let Some(video) = data.video {
            record.video = Some(video);
        }
        record.updated_at = record.updated_at + Duration::seconds(1);

        self.log.push(Call::Update(id.into()));
        Ok(record.clone())
    }

    async fn delete_by_id(&self, id: GalleryId) -> Result<(), GalleryRepositoryError> {
        self.check_writable()?;

        self.log.push(Call::DeleteRow(id.into()));
        self.rows
            .lock()
            .unwrap()
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or(GalleryRepositoryError::NotFound)
    }
}
