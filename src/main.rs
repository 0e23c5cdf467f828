use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use paperquiz::application::ports::{JobDispatcher, JobStore, QuizGenerator, SignatureVerifier};
use paperquiz::application::services::{ProcessingService, SubmissionService, SweepService};
use paperquiz::infrastructure::llm::AnthropicQuizGenerator;
use paperquiz::infrastructure::observability::{TracingConfig, init_tracing};
use paperquiz::infrastructure::queue::{QstashDispatcher, QstashSignatureVerifier};
use paperquiz::infrastructure::store::RedisJobStore;
use paperquiz::presentation::router::PROCESS_WEBHOOK_PATH;
use paperquiz::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env().context("Failed to load settings")?;
    init_tracing(TracingConfig::default(), settings.server.port);

    let store: Arc<dyn JobStore> = Arc::new(
        RedisJobStore::connect(&settings.store.url)
            .await
            .context("Failed to connect to job store")?,
    );
    // Status lookups go through a read-scoped connection when one is
    // configured.
    let jobs_read: Arc<dyn JobStore> = match &settings.store.read_only_url {
        Some(url) => Arc::new(
            RedisJobStore::connect(url)
                .await
                .context("Failed to connect to read-only job store")?,
        ),
        None => Arc::clone(&store),
    };

    let webhook_url = format!(
        "{}{}",
        settings.queue.webhook_base_url.trim_end_matches('/'),
        PROCESS_WEBHOOK_PATH
    );
    let dispatcher: Arc<dyn JobDispatcher> = Arc::new(QstashDispatcher::new(
        settings.queue.publish_url.clone(),
        settings.queue.token.clone(),
        webhook_url,
    ));
    let verifier: Arc<dyn SignatureVerifier> = Arc::new(QstashSignatureVerifier::new(
        &settings.queue.current_signing_key,
        &settings.queue.next_signing_key,
    ));
    let generator: Arc<dyn QuizGenerator> = Arc::new(
        AnthropicQuizGenerator::new(&settings.generation)
            .context("Failed to build generation client")?,
    );

    let job_ttl = Duration::from_secs(settings.store.job_ttl_seconds);
    let submission = Arc::new(SubmissionService::new(
        Arc::clone(&store),
        dispatcher,
        settings.generation.default_api_key.clone(),
        job_ttl,
    ));
    let processing = Arc::new(ProcessingService::new(
        Arc::clone(&store),
        generator,
        job_ttl,
    ));
    let sweep = Arc::new(SweepService::new(
        Arc::clone(&store),
        Arc::clone(&processing),
    ));

    let state = AppState {
        submission,
        processing,
        sweep,
        jobs_read,
        verifier,
        sweep_secret: settings.queue.sweep_secret.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
