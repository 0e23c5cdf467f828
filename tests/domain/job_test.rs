use paperquiz::domain::{Job, JobStatus, Quiz};

fn sample_job() -> Job {
    Job::new(
        "https://example.com/paper.pdf".to_string(),
        "test-key".to_string(),
    )
}

fn sample_quiz() -> Quiz {
    serde_json::from_str(r#"{"title": "T", "questions": []}"#).unwrap()
}

#[test]
fn given_new_job_when_created_then_pending_with_no_payload() {
    let job = sample_job();

    assert_eq!(job.status, JobStatus::Pending);
    assert!(job.quiz_data.is_none());
    assert!(job.error.is_none());
    assert_eq!(job.created_at, job.updated_at);
}

#[test]
fn given_pending_job_when_completed_then_quiz_attached_and_error_cleared() {
    let mut job = sample_job();
    job.error = Some("leftover".to_string());

    job.complete(sample_quiz());

    assert_eq!(job.status, JobStatus::Completed);
    assert!(job.quiz_data.is_some());
    assert!(job.error.is_none());
    assert!(job.updated_at >= job.created_at);
}

#[test]
fn given_pending_job_when_failed_then_error_attached_and_quiz_cleared() {
    let mut job = sample_job();

    job.fail("generation exploded".to_string());

    assert_eq!(job.status, JobStatus::Failed);
    assert!(job.quiz_data.is_none());
    assert_eq!(job.error.as_deref(), Some("generation exploded"));
}

#[test]
fn given_job_when_serialized_then_uses_camel_case_wire_names() {
    let job = sample_job();

    let value = serde_json::to_value(&job).unwrap();

    assert!(value.get("paperUrl").is_some());
    assert!(value.get("createdAt").is_some());
    assert!(value.get("updatedAt").is_some());
    // terminal payloads are absent while pending
    assert!(value.get("quizData").is_none());
    assert!(value.get("error").is_none());
}

#[test]
fn given_terminal_statuses_when_checked_then_terminal() {
    assert!(!JobStatus::Pending.is_terminal());
    assert!(JobStatus::Completed.is_terminal());
    assert!(JobStatus::Failed.is_terminal());
}
