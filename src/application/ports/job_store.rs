use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{Job, JobId};

/// TTL-backed key-value store for job records.
///
/// The store is the only shared mutable resource in the system. Each record
/// is created once by submission and finalized once by the worker; expiry is
/// the store's responsibility, so an expired record reads back as `None`.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Write the record under its id with the given expiry, replacing any
    /// existing value.
    async fn put(&self, job: &Job, ttl: Duration) -> Result<(), JobStoreError>;

    async fn get(&self, id: &JobId) -> Result<Option<Job>, JobStoreError>;

    /// Remaining lifetime of the record, `None` if it is missing or carries
    /// no expiry.
    async fn remaining_ttl(&self, id: &JobId) -> Result<Option<Duration>, JobStoreError>;

    /// All records still in `pending` state, for the sweep fallback.
    async fn list_pending(&self) -> Result<Vec<Job>, JobStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum JobStoreError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("command failed: {0}")]
    CommandFailed(String),
    #[error("corrupt record for {0}: {1}")]
    CorruptRecord(String, String),
}
