use async_trait::async_trait;

use crate::application::ports::{QuizGenerator, QuizGeneratorError};
use crate::domain::{Quiz, QuizQuestion};

/// Canned quiz generator for tests and scaffold runs.
pub struct MockQuizGenerator {
    fail_with: Option<String>,
}

impl MockQuizGenerator {
    /// Generator that always succeeds with [`MockQuizGenerator::sample_quiz`].
    pub fn succeeding() -> Self {
        Self { fail_with: None }
    }

    /// Generator that always fails with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
        }
    }

    pub fn sample_quiz() -> Quiz {
        Quiz {
            title: "Sample Paper Quiz".to_string(),
            description: "Tests intuitions about a sample paper.".to_string(),
            author: Some("Doe et al.".to_string()),
            published_date: Some("2025".to_string()),
            methodology_summary: "The authors ran a controlled experiment.".to_string(),
            questions: vec![QuizQuestion {
                id: 1,
                question: "What did the experiment find?".to_string(),
                options: vec![
                    "Effect A".to_string(),
                    "Effect B".to_string(),
                    "No effect".to_string(),
                    "Inconclusive".to_string(),
                ],
                correct_answer: "Effect B".to_string(),
                explanation: "The paper reports effect B across all conditions.".to_string(),
                context: Some("Participants were split into two groups.".to_string()),
            }],
        }
    }
}

#[async_trait]
impl QuizGenerator for MockQuizGenerator {
    async fn generate(&self, _paper_url: &str, _api_key: &str) -> Result<Quiz, QuizGeneratorError> {
        match &self.fail_with {
            Some(message) => Err(QuizGeneratorError::ApiRequestFailed(message.clone())),
            None => Ok(Self::sample_quiz()),
        }
    }
}
