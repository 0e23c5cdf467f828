use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::application::ports::{JobStore, JobStoreError};
use crate::domain::{Job, JobId, JobStatus};

/// In-process job store with real TTL behavior, for tests and local runs
/// without a Redis server. Not suitable for deployment: state is invisible
/// to other instances and lost on restart.
#[derive(Default)]
pub struct MemoryJobStore {
    entries: Mutex<HashMap<String, Entry>>,
}

struct Entry {
    job: Job,
    expires_at: Instant,
}

impl MemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobStore for MemoryJobStore {
    async fn put(&self, job: &Job, ttl: Duration) -> Result<(), JobStoreError> {
        let mut entries = self.entries.lock().expect("job store lock poisoned");
        entries.insert(
            job.id.to_string(),
            Entry {
                job: job.clone(),
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }

    async fn get(&self, id: &JobId) -> Result<Option<Job>, JobStoreError> {
        let mut entries = self.entries.lock().expect("job store lock poisoned");
        match entries.get(id.as_str()) {
            Some(entry) if entry.expires_at > Instant::now() => Ok(Some(entry.job.clone())),
            Some(_) => {
                entries.remove(id.as_str());
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn remaining_ttl(&self, id: &JobId) -> Result<Option<Duration>, JobStoreError> {
        let entries = self.entries.lock().expect("job store lock poisoned");
        Ok(entries
            .get(id.as_str())
            .and_then(|entry| entry.expires_at.checked_duration_since(Instant::now())))
    }

    async fn list_pending(&self) -> Result<Vec<Job>, JobStoreError> {
        let entries = self.entries.lock().expect("job store lock poisoned");
        let now = Instant::now();
        Ok(entries
            .values()
            .filter(|entry| entry.expires_at > now && entry.job.status == JobStatus::Pending)
            .map(|entry| entry.job.clone())
            .collect())
    }
}
