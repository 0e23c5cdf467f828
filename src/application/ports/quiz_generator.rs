use async_trait::async_trait;

use crate::domain::Quiz;

/// Document-understanding call: hand the external API a paper URL and get
/// back a generated quiz.
///
/// This call runs for tens of seconds to minutes and must only be invoked
/// from the worker path, never inline in a synchronous request.
#[async_trait]
pub trait QuizGenerator: Send + Sync {
    async fn generate(&self, paper_url: &str, api_key: &str) -> Result<Quiz, QuizGeneratorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum QuizGeneratorError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("no JSON object found in model response")]
    ExtractionFailed,
    #[error("model response JSON did not parse: {0}")]
    ParseFailed(String),
}
