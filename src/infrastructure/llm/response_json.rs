use crate::application::ports::QuizGeneratorError;
use crate::domain::Quiz;

/// Extract and parse the quiz object embedded in free-form model output.
///
/// The model is instructed to answer with bare JSON but sometimes wraps it
/// in prose, so the object is taken as the substring from the first `{` to
/// the last `}`. The parsed shape is not validated beyond JSON syntax;
/// missing fields deserialize to their defaults and are the caller's
/// problem.
pub fn parse_quiz_response(text: &str) -> Result<Quiz, QuizGeneratorError> {
    let start = text.find('{').ok_or(QuizGeneratorError::ExtractionFailed)?;
    let end = text.rfind('}').ok_or(QuizGeneratorError::ExtractionFailed)?;
    if end < start {
        return Err(QuizGeneratorError::ExtractionFailed);
    }
    let candidate = &text[start..=end];
    serde_json::from_str(candidate).map_err(|e| QuizGeneratorError::ParseFailed(e.to_string()))
}
