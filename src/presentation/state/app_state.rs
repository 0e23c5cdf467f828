use std::sync::Arc;

use crate::application::ports::{JobStore, SignatureVerifier};
use crate::application::services::{ProcessingService, SubmissionService, SweepService};

#[derive(Clone)]
pub struct AppState {
    pub submission: Arc<SubmissionService>,
    pub processing: Arc<ProcessingService>,
    pub sweep: Arc<SweepService>,
    /// Store connection used by the read-only status endpoint; may be a
    /// read-scoped replica of the main store.
    pub jobs_read: Arc<dyn JobStore>,
    pub verifier: Arc<dyn SignatureVerifier>,
    pub sweep_secret: Option<String>,
}
