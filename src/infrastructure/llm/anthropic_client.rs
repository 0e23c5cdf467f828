use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{QuizGenerator, QuizGeneratorError};
use crate::domain::Quiz;
use crate::presentation::config::GenerationSettings;

use super::response_json::parse_quiz_response;

const ANTHROPIC_VERSION: &str = "2023-06-01";

const SYSTEM_PROMPT: &str =
    "You are an expert at creating educational quizzes based on academic papers. \
     Respond only with the requested JSON object.";

const QUIZ_PROMPT: &str = r#"
You are an expert at creating educational quizzes. I want you to create a quiz about a research paper that tests the reader's intuitions about the findings BEFORE they've read the paper. The use case here is geared towards understanding and testing intuitions about how AI models work, specifically for safety, and so predicting the outcome of concrete experiments.

Please analyze the attached PDF document and create:
1. A brief methodology summary (2-3 paragraphs) that explains the paper's approach without revealing specific findings.
2. 8-10 multiple-choice questions that test intuitions about the paper's findings.
   - Each question should have 4-8 options with 1 correct answer.
   - Questions should focus on the core findings from the paper.
   - Include additional context about the question, e.g. outlining the specifics of the experiment. This will be shown to the user BEFORE they answer the questions.
   - Include an explanation for why the correct answer is correct.

Return your response in this JSON format only:
{
  "title": "Title of the Quiz Based on Paper",
  "description": "Brief description of what the quiz covers (1-2 sentences)",
  "author": "Authors of the paper",
  "publishedDate": "Year of publication",
  "methodologySummary": "Overview of the methodology used in the paper",
  "questions": [
    {
      "id": 1,
      "question": "Question text?",
      "options": ["Option A", "Option B", "Option C", "Option D"],
      "correctAnswer": "The correct option exactly as written in options",
      "explanation": "Explanation of why the correct answer is right",
      "context": "Optional context paragraph (can be omitted if not needed)"
    }
  ]
}

Important:
- Make sure your output is valid JSON.
- Don't include any additional explanations or comments in your response, just the JSON object.
- Ensure proper escaping of special characters in the strings.
"#;

/// Document-understanding client backed by the Anthropic Messages API.
///
/// Builds one request per job: a `document` content block referencing the
/// paper URL plus the fixed quiz instruction. The call runs for tens of
/// seconds to minutes, so the HTTP timeout is generous and the client is
/// only ever invoked from the worker path.
pub struct AnthropicQuizGenerator {
    client: Client,
    base_url: String,
    model: String,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: usize,
    temperature: f32,
    system: &'a str,
    messages: Vec<RequestMessage<'a>>,
}

#[derive(Serialize)]
struct RequestMessage<'a> {
    role: &'a str,
    content: Vec<ContentBlock<'a>>,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ContentBlock<'a> {
    Document { source: DocumentSource<'a> },
    Text { text: &'a str },
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum DocumentSource<'a> {
    Url { url: &'a str },
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ResponseBlock>,
}

#[derive(Deserialize)]
struct ResponseBlock {
    #[serde(default)]
    text: Option<String>,
}

impl AnthropicQuizGenerator {
    pub fn new(settings: &GenerationSettings) -> Result<Self, QuizGeneratorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_seconds))
            .build()
            .map_err(|e| QuizGeneratorError::ApiRequestFailed(e.to_string()))?;
        Ok(Self {
            client,
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
        })
    }
}

#[async_trait]
impl QuizGenerator for AnthropicQuizGenerator {
    async fn generate(&self, paper_url: &str, api_key: &str) -> Result<Quiz, QuizGeneratorError> {
        let request = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            system: SYSTEM_PROMPT,
            messages: vec![RequestMessage {
                role: "user",
                content: vec![
                    ContentBlock::Document {
                        source: DocumentSource::Url { url: paper_url },
                    },
                    ContentBlock::Text { text: QUIZ_PROMPT },
                ],
            }],
        };

        tracing::info!(paper_url = %paper_url, model = %self.model, "Requesting quiz generation");

        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| QuizGeneratorError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(QuizGeneratorError::RateLimited);
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(QuizGeneratorError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion: MessagesResponse = response
            .json()
            .await
            .map_err(|e| QuizGeneratorError::ApiRequestFailed(e.to_string()))?;

        let text = completion
            .content
            .into_iter()
            .find_map(|block| block.text)
            .ok_or(QuizGeneratorError::ExtractionFailed)?;

        tracing::debug!(paper_url = %paper_url, chars = text.len(), "Model response received");
        parse_quiz_response(&text)
    }
}
