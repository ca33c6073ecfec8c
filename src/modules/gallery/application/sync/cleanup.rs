use futures::future::join_all;
use std::fmt;
use tracing::{debug, error, warn};

use crate::modules::gallery::application::ports::outgoing::blob_store::{
    BlobStore, BlobStoreError,
};
use crate::modules::gallery::domain::entities::MediaRef;

/// One compensating blob deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupStep {
    /// Blob uploaded by an operation whose relational write never landed.
    DiscardUpload(MediaRef),
    /// Blob that a committed replace swapped out of its record.
    ReleaseReplaced(MediaRef),
    /// Blob that belonged to a record being deleted.
    ReclaimDeleted(MediaRef),
}

impl CleanupStep {
    pub fn media(&self) -> &MediaRef {
        match self {
            CleanupStep::DiscardUpload(media)
            | CleanupStep::ReleaseReplaced(media)
            | CleanupStep::ReclaimDeleted(media) => media,
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            CleanupStep::DiscardUpload(_) => "discard_upload",
            CleanupStep::ReleaseReplaced(_) => "release_replaced",
            CleanupStep::ReclaimDeleted(_) => "reclaim_deleted",
        }
    }
}

/// A cleanup step that failed. Never changes the outcome reported to the
/// caller; it is surfaced so callers and tests can see what was left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupWarning {
    pub step: CleanupStep,
    pub error: BlobStoreError,
}

impl CleanupWarning {
    pub fn media(&self) -> &MediaRef {
        self.step.media()
    }
}

impl fmt::Display for CleanupWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let media = self.step.media();
        write!(
            f,
            "{} of {} blob {} failed: {}",
            self.step.reason(),
            media.kind,
            media.object_id,
            self.error
        )
    }
}

/// Ordered list of blob deletions queued by a workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupPlan {
    steps: Vec<CleanupStep>,
}

impl CleanupPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: CleanupStep) {
        self.steps.push(step);
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Attempts every step, even when earlier ones fail.
    ///
    /// A `NotFound` from the store means the blob is already gone and is not
    /// reported. Every other failure is logged and returned as a warning.
    pub async fn run<B>(self, blob_store: &B) -> Vec<CleanupWarning>
    where
        B: BlobStore + ?Sized,
    {
        if self.steps.is_empty() {
            return Vec::new();
        }

        let attempts = self.steps.into_iter().map(|step| async move {
            let result = blob_store.delete(step.media().clone()).await;
            (step, result)
        });

        join_all(attempts)
            .await
            .into_iter()
            .filter_map(|(step, result)| settle(step, result))
            .collect()
    }
}

fn settle(step: CleanupStep, result: Result<(), BlobStoreError>) -> Option<CleanupWarning> {
    let media = step.media();

    match result {
        Ok(()) => {
            debug!(
                object_id = %media.object_id,
                kind = %media.kind,
                reason = step.reason(),
                "blob deleted"
            );
            None
        }
        Err(BlobStoreError::NotFound(_)) => {
            debug!(
                object_id = %media.object_id,
                kind = %media.kind,
                reason = step.reason(),
                "blob already absent"
            );
            None
        }
        Err(error) => {
            match step {
                CleanupStep::DiscardUpload(_) => error!(
                    object_id = %media.object_id,
                    kind = %media.kind,
                    reason = step.reason(),
                    error = %error,
                    "orphaned blob left behind by a failed operation"
                ),
                CleanupStep::ReleaseReplaced(_) | CleanupStep::ReclaimDeleted(_) => warn!(
                    object_id = %media.object_id,
                    kind = %media.kind,
                    reason = step.reason(),
                    error = %error,
                    "stale blob left for reconciliation"
                ),
            }
            Some(CleanupWarning { step, error })
        }
    }
}
