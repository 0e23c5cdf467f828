use std::sync::Arc;

use serde::Serialize;

use crate::application::ports::{JobMessage, JobStore, JobStoreError};
use crate::application::services::{ProcessingService, ProcessOutcome};

/// Scans the store for jobs still `pending` and runs each through the
/// worker. Fallback for jobs whose queue delivery was lost; invoked from a
/// secret-protected internal endpoint, typically on a schedule.
pub struct SweepService {
    store: Arc<dyn JobStore>,
    processing: Arc<ProcessingService>,
}

#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct SweepReport {
    pub found: usize,
    pub processed: usize,
    pub failed: usize,
}

impl SweepService {
    pub fn new(store: Arc<dyn JobStore>, processing: Arc<ProcessingService>) -> Self {
        Self { store, processing }
    }

    pub async fn run(&self) -> Result<SweepReport, JobStoreError> {
        let pending = self.store.list_pending().await?;
        let mut report = SweepReport {
            found: pending.len(),
            ..SweepReport::default()
        };
        tracing::info!(found = report.found, "Sweep found pending jobs");

        // One at a time; generation is minutes-long and the external API is
        // rate limited.
        for job in pending {
            let message = JobMessage {
                job_id: job.id.clone(),
                paper_url: job.paper_url,
                api_key: job.api_key,
            };
            match self.processing.process(&message).await {
                Ok(ProcessOutcome::Completed) => report.processed += 1,
                Ok(ProcessOutcome::AlreadyProcessed) => {}
                Err(e) => {
                    tracing::warn!(job_id = %message.job_id, error = %e, "Sweep job failed");
                    report.failed += 1;
                }
            }
        }

        tracing::info!(
            processed = report.processed,
            failed = report.failed,
            "Sweep finished"
        );
        Ok(report)
    }
}
