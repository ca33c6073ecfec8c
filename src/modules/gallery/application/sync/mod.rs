pub mod cleanup;
pub mod record_locks;

pub use cleanup::{CleanupPlan, CleanupStep, CleanupWarning};
pub use record_locks::{RecordGuard, RecordLocks};
