mod processing_service;
mod submission_service;
mod sweep_service;

pub use processing_service::{ProcessOutcome, ProcessingError, ProcessingService};
pub use submission_service::{SubmissionError, SubmissionService};
pub use sweep_service::{SweepReport, SweepService};
