use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{JobMessage, JobStore, JobStoreError, QuizGenerator, QuizGeneratorError};
use crate::domain::Job;

/// Outcome of a webhook delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// Generation ran and the record was finalized `completed`.
    Completed,
    /// The record was already terminal; duplicate delivery skipped.
    AlreadyProcessed,
}

/// The worker: runs the document-understanding call for one delivered job
/// message and finalizes the record.
///
/// Finalization preserves the record's remaining TTL, falling back to the
/// configured default when the record has none. The status check before
/// generating is a best-effort idempotency guard against at-least-once
/// delivery, not a transactional one: two deliveries racing past the read
/// can both generate, and the second write wins.
pub struct ProcessingService {
    store: Arc<dyn JobStore>,
    generator: Arc<dyn QuizGenerator>,
    default_ttl: Duration,
}

impl ProcessingService {
    pub fn new(
        store: Arc<dyn JobStore>,
        generator: Arc<dyn QuizGenerator>,
        default_ttl: Duration,
    ) -> Self {
        Self {
            store,
            generator,
            default_ttl,
        }
    }

    pub async fn process(&self, message: &JobMessage) -> Result<ProcessOutcome, ProcessingError> {
        let mut job = match self.store.get(&message.job_id).await {
            Ok(Some(job)) => {
                if job.status.is_terminal() {
                    tracing::info!(
                        job_id = %job.id,
                        status = %job.status,
                        "Job already processed, skipping duplicate delivery"
                    );
                    return Ok(ProcessOutcome::AlreadyProcessed);
                }
                job
            }
            Ok(None) => {
                // The record may have expired while the message sat in the
                // queue. The work is still reachable from the payload, so
                // run it against a reconstructed record rather than dropping
                // it silently.
                tracing::warn!(
                    job_id = %message.job_id,
                    "Job record not found in store; proceeding from payload"
                );
                Job::reconstruct(
                    message.job_id.clone(),
                    message.paper_url.clone(),
                    message.api_key.clone(),
                )
            }
            Err(e) => {
                tracing::warn!(
                    job_id = %message.job_id,
                    error = %e,
                    "Failed to read job record; proceeding from payload"
                );
                Job::reconstruct(
                    message.job_id.clone(),
                    message.paper_url.clone(),
                    message.api_key.clone(),
                )
            }
        };

        match self
            .generator
            .generate(&message.paper_url, &message.api_key)
            .await
        {
            Ok(quiz) => {
                for issue in quiz.quality_issues() {
                    tracing::warn!(job_id = %job.id, issue = %issue, "Generated quiz quality issue");
                }
                job.complete(quiz);
                let ttl = self.finalize_ttl(&job).await;
                self.store.put(&job, ttl).await?;
                tracing::info!(job_id = %job.id, "Job completed");
                Ok(ProcessOutcome::Completed)
            }
            Err(e) => {
                job.fail(e.to_string());
                let ttl = self.finalize_ttl(&job).await;
                if let Err(store_err) = self.store.put(&job, ttl).await {
                    // The one unrecoverable condition: the job stays pending
                    // with no recorded reason until the TTL expires.
                    tracing::error!(
                        job_id = %job.id,
                        generation_error = %e,
                        store_error = %store_err,
                        "CRITICAL: failed to record job failure"
                    );
                    return Err(ProcessingError::FailureNotRecorded {
                        generation: e,
                        store: store_err,
                    });
                }
                tracing::warn!(job_id = %job.id, error = %e, "Job failed");
                Err(ProcessingError::Generation(e))
            }
        }
    }

    async fn finalize_ttl(&self, job: &Job) -> Duration {
        match self.store.remaining_ttl(&job.id).await {
            Ok(Some(ttl)) if ttl > Duration::ZERO => ttl,
            Ok(_) => self.default_ttl,
            Err(e) => {
                tracing::warn!(job_id = %job.id, error = %e, "TTL lookup failed, using default");
                self.default_ttl
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    /// Generation failed and the failure was recorded; the webhook responds
    /// 5xx so the queue retries.
    #[error("quiz generation failed: {0}")]
    Generation(QuizGeneratorError),
    /// Storing the completed record failed.
    #[error("job store: {0}")]
    Store(#[from] JobStoreError),
    /// Generation failed and recording the failure also failed.
    #[error("quiz generation failed ({generation}) and recording it failed ({store})")]
    FailureNotRecorded {
        generation: QuizGeneratorError,
        store: JobStoreError,
    },
}
