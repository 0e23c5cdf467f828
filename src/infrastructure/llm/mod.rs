mod anthropic_client;
mod mock_quiz_generator;
mod response_json;

pub use anthropic_client::AnthropicQuizGenerator;
pub use mock_quiz_generator::MockQuizGenerator;
pub use response_json::parse_quiz_response;
