use std::sync::Arc;
use std::time::Duration;

use paperquiz::application::ports::JobStore;
use paperquiz::application::services::{SubmissionError, SubmissionService};
use paperquiz::infrastructure::store::MemoryJobStore;
use paperquiz::domain::JobStatus;

use crate::helpers::{FailingDispatcher, RecordingDispatcher};

const TTL: Duration = Duration::from_secs(86_400);

#[tokio::test]
async fn given_valid_url_when_submitting_then_pending_record_and_message_match() {
    let store = Arc::new(MemoryJobStore::new());
    let dispatcher = Arc::new(RecordingDispatcher::default());
    let service = SubmissionService::new(store.clone(), dispatcher.clone(), None, TTL);

    let job_id = service
        .submit(
            "https://example.com/paper.pdf".to_string(),
            Some("caller-key".to_string()),
        )
        .await
        .unwrap();

    let job = store.get(&job_id).await.unwrap().unwrap();
    assert_eq!(job.status, JobStatus::Pending);
    assert_eq!(job.paper_url, "https://example.com/paper.pdf");
    assert_eq!(job.api_key, "caller-key");

    let messages = dispatcher.messages.lock().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].job_id, job_id);
    assert_eq!(messages[0].paper_url, job.paper_url);
    assert_eq!(messages[0].api_key, job.api_key);
}

#[tokio::test]
async fn given_blank_url_when_submitting_then_missing_paper_url() {
    let store = Arc::new(MemoryJobStore::new());
    let service = SubmissionService::new(
        store,
        Arc::new(RecordingDispatcher::default()),
        Some("default".to_string()),
        TTL,
    );

    let result = service.submit("   ".to_string(), None).await;

    assert!(matches!(result, Err(SubmissionError::MissingPaperUrl)));
}

#[tokio::test]
async fn given_no_key_anywhere_when_submitting_then_missing_credential() {
    let store = Arc::new(MemoryJobStore::new());
    let service =
        SubmissionService::new(store, Arc::new(RecordingDispatcher::default()), None, TTL);

    let result = service
        .submit("https://example.com/paper.pdf".to_string(), None)
        .await;

    assert!(matches!(result, Err(SubmissionError::MissingCredential)));
}

#[tokio::test]
async fn given_no_caller_key_when_submitting_then_server_default_used() {
    let store = Arc::new(MemoryJobStore::new());
    let service = SubmissionService::new(
        store.clone(),
        Arc::new(RecordingDispatcher::default()),
        Some("server-key".to_string()),
        TTL,
    );

    let job_id = service
        .submit("https://example.com/paper.pdf".to_string(), None)
        .await
        .unwrap();

    let job = store.get(&job_id).await.unwrap().unwrap();
    assert_eq!(job.api_key, "server-key");
}

#[tokio::test]
async fn given_empty_caller_key_when_submitting_then_treated_as_absent() {
    let store = Arc::new(MemoryJobStore::new());
    let service = SubmissionService::new(
        store.clone(),
        Arc::new(RecordingDispatcher::default()),
        Some("server-key".to_string()),
        TTL,
    );

    let job_id = service
        .submit(
            "https://example.com/paper.pdf".to_string(),
            Some(String::new()),
        )
        .await
        .unwrap();

    let job = store.get(&job_id).await.unwrap().unwrap();
    assert_eq!(job.api_key, "server-key");
}

#[tokio::test]
async fn given_failing_dispatcher_when_submitting_then_id_returned_and_record_pending() {
    let store = Arc::new(MemoryJobStore::new());
    let service = SubmissionService::new(
        store.clone(),
        Arc::new(FailingDispatcher),
        Some("server-key".to_string()),
        TTL,
    );

    let job_id = service
        .submit("https://example.com/paper.pdf".to_string(), None)
        .await
        .unwrap();

    let job = store.get(&job_id).await.unwrap().unwrap();
    assert_eq!(job.status, JobStatus::Pending);
}

#[tokio::test]
async fn given_submission_when_record_written_then_ttl_applied() {
    let store = Arc::new(MemoryJobStore::new());
    let service = SubmissionService::new(
        store.clone(),
        Arc::new(RecordingDispatcher::default()),
        Some("server-key".to_string()),
        TTL,
    );

    let job_id = service
        .submit("https://example.com/paper.pdf".to_string(), None)
        .await
        .unwrap();

    let remaining = store.remaining_ttl(&job_id).await.unwrap().unwrap();
    assert!(remaining <= TTL);
    assert!(remaining > TTL - Duration::from_secs(60));
}
