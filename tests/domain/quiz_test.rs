use paperquiz::domain::Quiz;

const FULL_QUIZ_JSON: &str = r#"{
    "title": "Quiz on Emergent Behavior",
    "description": "Tests intuitions about the paper's findings.",
    "author": "Doe et al.",
    "publishedDate": "2025",
    "methodologySummary": "The authors fine-tuned models on narrow tasks.",
    "questions": [
        {
            "id": 1,
            "question": "What happened?",
            "options": ["A", "B", "C", "D"],
            "correctAnswer": "B",
            "explanation": "Because B.",
            "context": "The setup was X."
        }
    ]
}"#;

#[test]
fn given_full_generation_output_when_deserialized_then_all_fields_populated() {
    let quiz: Quiz = serde_json::from_str(FULL_QUIZ_JSON).unwrap();

    assert_eq!(quiz.title, "Quiz on Emergent Behavior");
    assert_eq!(quiz.author.as_deref(), Some("Doe et al."));
    assert_eq!(quiz.published_date.as_deref(), Some("2025"));
    assert_eq!(quiz.questions.len(), 1);
    assert_eq!(quiz.questions[0].correct_answer, "B");
    assert_eq!(quiz.questions[0].context.as_deref(), Some("The setup was X."));
    assert!(quiz.quality_issues().is_empty());
}

#[test]
fn given_sparse_generation_output_when_deserialized_then_fields_default() {
    let quiz: Quiz = serde_json::from_str(r#"{"title": "T"}"#).unwrap();

    assert_eq!(quiz.title, "T");
    assert!(quiz.questions.is_empty());
    assert!(quiz.author.is_none());
}

#[test]
fn given_quiz_without_questions_when_checking_quality_then_flagged() {
    let quiz: Quiz = serde_json::from_str(r#"{"title": "T"}"#).unwrap();

    let issues = quiz.quality_issues();

    assert!(issues.iter().any(|i| i.contains("no questions")));
}

#[test]
fn given_correct_answer_outside_options_when_checking_quality_then_flagged() {
    let quiz: Quiz = serde_json::from_str(
        r#"{
            "title": "T",
            "questions": [
                {"id": 1, "question": "Q?", "options": ["A", "B"], "correctAnswer": "Z", "explanation": "E"}
            ]
        }"#,
    )
    .unwrap();

    let issues = quiz.quality_issues();

    assert!(issues.iter().any(|i| i.contains("question 1")));
}

#[test]
fn given_quiz_when_round_tripped_then_wire_names_preserved() {
    let quiz: Quiz = serde_json::from_str(FULL_QUIZ_JSON).unwrap();

    let value = serde_json::to_value(&quiz).unwrap();

    assert!(value.get("methodologySummary").is_some());
    assert!(value["questions"][0].get("correctAnswer").is_some());
    let reparsed: Quiz = serde_json::from_value(value).unwrap();
    assert_eq!(quiz, reparsed);
}
