mod health;
mod job_status;
mod process_webhook;
mod submit_job;
mod sweep;

pub use health::health_handler;
pub use job_status::job_status_handler;
pub use process_webhook::process_webhook_handler;
pub use submit_job::submit_job_handler;
pub use sweep::sweep_handler;

use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
