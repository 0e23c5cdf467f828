use async_trait::async_trait;
use reqwest::Client;

use crate::application::ports::{DispatchError, JobDispatcher, JobMessage};

/// Publishes job messages to a QStash-compatible queue service.
///
/// The queue delivers each message to the webhook URL at least once,
/// retrying on non-2xx responses, and signs every delivery.
pub struct QstashDispatcher {
    client: Client,
    publish_url: String,
    token: String,
    webhook_url: String,
}

impl QstashDispatcher {
    pub fn new(publish_url: String, token: String, webhook_url: String) -> Self {
        Self {
            client: Client::new(),
            publish_url: publish_url.trim_end_matches('/').to_string(),
            token,
            webhook_url,
        }
    }
}

#[async_trait]
impl JobDispatcher for QstashDispatcher {
    async fn dispatch(&self, message: &JobMessage) -> Result<(), DispatchError> {
        let url = format!("{}/v2/publish/{}", self.publish_url, self.webhook_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(message)
            .send()
            .await
            .map_err(|e| DispatchError::PublishFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DispatchError::Rejected(status.as_u16(), body));
        }

        tracing::debug!(job_id = %message.job_id, "Job message published");
        Ok(())
    }
}
