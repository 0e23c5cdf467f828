use serde::{Deserialize, Serialize};

/// Generated quiz as returned by the document-understanding API.
///
/// Every field is serde-defaulted: the generation client deliberately does
/// not validate the shape of the model's JSON, so a record with a missing
/// title or an empty question list is representable. Consumers check
/// [`Quiz::quality_issues`] instead of trusting the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    #[serde(default)]
    pub methodology_summary: String,
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl Quiz {
    /// Data-quality violations of the generation contract. These are logged,
    /// never treated as processing failures.
    pub fn quality_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.title.is_empty() {
            issues.push("quiz has no title".to_string());
        }
        if self.questions.is_empty() {
            issues.push("quiz has no questions".to_string());
        }
        for question in &self.questions {
            if !question.options.iter().any(|o| o == &question.correct_answer) {
                issues.push(format!(
                    "question {} correct answer is not one of its options",
                    question.id
                ));
            }
        }
        issues
    }
}
