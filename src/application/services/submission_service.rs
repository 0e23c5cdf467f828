use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{JobDispatcher, JobMessage, JobStore, JobStoreError};
use crate::domain::{Job, JobId};

/// Creates job records and enqueues them for processing.
///
/// Submission never waits on generation: the record is written `pending`
/// with a fixed TTL, a dispatch message is published, and the id is returned.
/// A failed dispatch is logged but does not fail the submission; the record
/// already exists and can be picked up by the sweep or expire on its own.
pub struct SubmissionService {
    store: Arc<dyn JobStore>,
    dispatcher: Arc<dyn JobDispatcher>,
    default_api_key: Option<String>,
    job_ttl: Duration,
}

impl SubmissionService {
    pub fn new(
        store: Arc<dyn JobStore>,
        dispatcher: Arc<dyn JobDispatcher>,
        default_api_key: Option<String>,
        job_ttl: Duration,
    ) -> Self {
        Self {
            store,
            dispatcher,
            default_api_key,
            job_ttl,
        }
    }

    pub async fn submit(
        &self,
        paper_url: String,
        api_key: Option<String>,
    ) -> Result<JobId, SubmissionError> {
        if paper_url.trim().is_empty() {
            return Err(SubmissionError::MissingPaperUrl);
        }

        let api_key = api_key
            .filter(|k| !k.is_empty())
            .or_else(|| self.default_api_key.clone())
            .ok_or(SubmissionError::MissingCredential)?;

        let job = Job::new(paper_url, api_key);
        self.store.put(&job, self.job_ttl).await?;

        let message = JobMessage {
            job_id: job.id.clone(),
            paper_url: job.paper_url.clone(),
            api_key: job.api_key.clone(),
        };

        // The record is durable at this point. A lost dispatch leaves the
        // job pending until the sweep re-runs it or the TTL expires, so the
        // caller still gets the id.
        if let Err(e) = self.dispatcher.dispatch(&message).await {
            tracing::warn!(
                job_id = %job.id,
                error = %e,
                "Failed to enqueue job; record remains pending"
            );
        } else {
            tracing::info!(
                job_id = %job.id,
                paper_url = %job.paper_url,
                "Quiz generation job enqueued"
            );
        }

        Ok(job.id)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("paper URL is required")]
    MissingPaperUrl,
    #[error("an API key is required; provide one or configure a server default")]
    MissingCredential,
    #[error("job store: {0}")]
    Store(#[from] JobStoreError),
}
