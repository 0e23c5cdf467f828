use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::JobId;

/// Payload published to the queue and delivered back to the webhook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMessage {
    pub job_id: JobId,
    pub paper_url: String,
    pub api_key: String,
}

/// Hands a job message to the queue/dispatch service for at-least-once
/// delivery to the processing webhook.
#[async_trait]
pub trait JobDispatcher: Send + Sync {
    async fn dispatch(&self, message: &JobMessage) -> Result<(), DispatchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("publish request failed: {0}")]
    PublishFailed(String),
    #[error("queue rejected message: HTTP {0}: {1}")]
    Rejected(u16, String),
}
