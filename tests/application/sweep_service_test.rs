use std::sync::Arc;
use std::time::Duration;

use paperquiz::application::ports::JobStore;
use paperquiz::application::services::{ProcessingService, SweepService};
use paperquiz::domain::{Job, JobStatus};
use paperquiz::infrastructure::llm::MockQuizGenerator;
use paperquiz::infrastructure::store::MemoryJobStore;

const TTL: Duration = Duration::from_secs(86_400);

fn pending_job() -> Job {
    Job::new(
        "https://example.com/paper.pdf".to_string(),
        "test-key".to_string(),
    )
}

fn sweep_with(
    store: Arc<MemoryJobStore>,
    generator: Arc<MockQuizGenerator>,
) -> SweepService {
    let processing = Arc::new(ProcessingService::new(store.clone(), generator, TTL));
    SweepService::new(store, processing)
}

#[tokio::test]
async fn given_empty_store_when_sweeping_then_nothing_found() {
    let store = Arc::new(MemoryJobStore::new());
    let sweep = sweep_with(store, Arc::new(MockQuizGenerator::succeeding()));

    let report = sweep.run().await.unwrap();

    assert_eq!(report.found, 0);
    assert_eq!(report.processed, 0);
    assert_eq!(report.failed, 0);
}

#[tokio::test]
async fn given_pending_jobs_when_sweeping_then_all_processed() {
    let store = Arc::new(MemoryJobStore::new());
    let first = pending_job();
    let second = pending_job();
    store.put(&first, TTL).await.unwrap();
    store.put(&second, TTL).await.unwrap();
    let sweep = sweep_with(store.clone(), Arc::new(MockQuizGenerator::succeeding()));

    let report = sweep.run().await.unwrap();

    assert_eq!(report.found, 2);
    assert_eq!(report.processed, 2);
    assert_eq!(report.failed, 0);
    for id in [&first.id, &second.id] {
        let job = store.get(id).await.unwrap().unwrap();
        assert_eq!(job.status, JobStatus::Completed);
    }
}

#[tokio::test]
async fn given_terminal_jobs_when_sweeping_then_ignored() {
    let store = Arc::new(MemoryJobStore::new());
    let mut completed = pending_job();
    completed.complete(MockQuizGenerator::sample_quiz());
    let mut failed = pending_job();
    failed.fail("broken".to_string());
    store.put(&completed, TTL).await.unwrap();
    store.put(&failed, TTL).await.unwrap();
    let sweep = sweep_with(store, Arc::new(MockQuizGenerator::succeeding()));

    let report = sweep.run().await.unwrap();

    assert_eq!(report.found, 0);
}

#[tokio::test]
async fn given_generation_failures_when_sweeping_then_counted_as_failed() {
    let store = Arc::new(MemoryJobStore::new());
    let job = pending_job();
    store.put(&job, TTL).await.unwrap();
    let sweep = sweep_with(store.clone(), Arc::new(MockQuizGenerator::failing("boom")));

    let report = sweep.run().await.unwrap();

    assert_eq!(report.found, 1);
    assert_eq!(report.processed, 0);
    assert_eq!(report.failed, 1);
    let stored = store.get(&job.id).await.unwrap().unwrap();
    assert_eq!(stored.status, JobStatus::Failed);
}
