mod job;
mod job_id;
mod job_status;
mod quiz;

pub use job::Job;
pub use job_id::{JobId, JobIdError};
pub use job_status::JobStatus;
pub use quiz::{Quiz, QuizQuestion};
