use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};

use crate::application::ports::{JobStore, JobStoreError};
use crate::domain::{Job, JobId, JobStatus};

/// Pattern matching every job record key in the shared store.
const JOB_KEY_PATTERN: &str = "job-*";

/// Job store backed by a TTL-capable Redis-compatible server.
///
/// Records are JSON values keyed by the job id itself (already prefixed
/// `job-`), written with `SET EX`. A store opened against a read-only
/// replica URL works for `get`; writes will fail there, which is exactly
/// what the status endpoint wants.
#[derive(Clone)]
pub struct RedisJobStore {
    conn: ConnectionManager,
}

impl RedisJobStore {
    pub async fn connect(url: &str) -> Result<Self, JobStoreError> {
        tracing::info!(url = %mask_url(url), "Connecting to job store");
        let client = Client::open(url)
            .map_err(|e| JobStoreError::ConnectionFailed(e.to_string()))?;
        let conn = ConnectionManager::new(client)
            .await
            .map_err(|e| JobStoreError::ConnectionFailed(e.to_string()))?;
        Ok(Self { conn })
    }

    fn map_err(e: redis::RedisError) -> JobStoreError {
        JobStoreError::CommandFailed(e.to_string())
    }
}

#[async_trait]
impl JobStore for RedisJobStore {
    async fn put(&self, job: &Job, ttl: Duration) -> Result<(), JobStoreError> {
        let value = serde_json::to_string(job)
            .map_err(|e| JobStoreError::CorruptRecord(job.id.to_string(), e.to_string()))?;
        let mut conn = self.conn.clone();
        let _: () = conn
            .set_ex(job.id.as_str(), value, ttl.as_secs())
            .await
            .map_err(Self::map_err)?;
        Ok(())
    }

    async fn get(&self, id: &JobId) -> Result<Option<Job>, JobStoreError> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(id.as_str()).await.map_err(Self::map_err)?;
        match value {
            Some(raw) => {
                let job = serde_json::from_str(&raw)
                    .map_err(|e| JobStoreError::CorruptRecord(id.to_string(), e.to_string()))?;
                Ok(Some(job))
            }
            None => Ok(None),
        }
    }

    async fn remaining_ttl(&self, id: &JobId) -> Result<Option<Duration>, JobStoreError> {
        let mut conn = self.conn.clone();
        // TTL returns -2 for a missing key and -1 for a key with no expiry.
        let secs: i64 = conn.ttl(id.as_str()).await.map_err(Self::map_err)?;
        if secs > 0 {
            Ok(Some(Duration::from_secs(secs as u64)))
        } else {
            Ok(None)
        }
    }

    async fn list_pending(&self) -> Result<Vec<Job>, JobStoreError> {
        let mut conn = self.conn.clone();
        let keys: Vec<String> = {
            let mut iter = conn
                .scan_match::<_, String>(JOB_KEY_PATTERN)
                .await
                .map_err(Self::map_err)?;
            let mut keys = Vec::new();
            while let Some(key) = iter.next_item().await {
                keys.push(key);
            }
            keys
        };

        let mut pending = Vec::new();
        for key in keys {
            let Ok(id) = key.parse::<JobId>() else {
                continue;
            };
            match self.get(&id).await {
                Ok(Some(job)) if job.status == JobStatus::Pending => pending.push(job),
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "Skipping unreadable job record");
                }
            }
        }
        Ok(pending)
    }
}

/// Mask the password in a store URL for safe logging.
fn mask_url(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(scheme_end) = url.find("://") {
            let auth_start = scheme_end + 3;
            if auth_start >= at_pos {
                return url.to_string();
            }
            if let Some(colon_pos) = url[auth_start..at_pos].find(':') {
                return format!(
                    "{}:****@{}",
                    &url[..auth_start + colon_pos],
                    &url[at_pos + 1..]
                );
            }
        }
    }
    url.to_string()
}
