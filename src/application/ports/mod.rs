mod job_dispatcher;
mod job_store;
mod quiz_generator;
mod signature_verifier;

pub use job_dispatcher::{DispatchError, JobDispatcher, JobMessage};
pub use job_store::{JobStore, JobStoreError};
pub use quiz_generator::{QuizGenerator, QuizGeneratorError};
pub use signature_verifier::{SignatureError, SignatureVerifier};
