use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{JobId, JobStatus, Quiz};

/// One quiz-generation request and its lifecycle state.
///
/// Stored as a JSON value under its own id in the job store. Created
/// `pending` by the submission endpoint, finalized exactly once by the
/// worker to `completed` or `failed`, then left alone until TTL expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub paper_url: String,
    /// Credential used for the generation call. Persisted with the record
    /// so retries and sweeps can re-run the job; never exposed by the
    /// status endpoint.
    pub api_key: String,
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz_data: Option<Quiz>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    pub fn new(paper_url: String, api_key: String) -> Self {
        let now = Utc::now();
        Self {
            id: JobId::new(),
            paper_url,
            api_key,
            status: JobStatus::Pending,
            quiz_data: None,
            error: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstruct a pending record from a dispatch payload when the stored
    /// one has expired mid-flight. Timestamps restart; the original creation
    /// time is gone with the record.
    pub fn reconstruct(id: JobId, paper_url: String, api_key: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            paper_url,
            api_key,
            status: JobStatus::Pending,
            quiz_data: None,
            error: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn complete(&mut self, quiz: Quiz) {
        self.status = JobStatus::Completed;
        self.quiz_data = Some(quiz);
        self.error = None;
        self.updated_at = Utc::now();
    }

    pub fn fail(&mut self, message: String) {
        self.status = JobStatus::Failed;
        self.quiz_data = None;
        self.error = Some(message);
        self.updated_at = Utc::now();
    }
}
