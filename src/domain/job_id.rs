use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefix that namespaces job records from other keys in the shared store.
const JOB_KEY_PREFIX: &str = "job-";

/// Identifier of a quiz-generation job, of the form `job-<uuid>`.
///
/// The id doubles as the store key, so the prefix is part of the identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JobId(String);

impl JobId {
    pub fn new() -> Self {
        Self(format!("{}{}", JOB_KEY_PREFIX, Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for JobId {
    type Err = JobIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let suffix = s
            .strip_prefix(JOB_KEY_PREFIX)
            .ok_or_else(|| JobIdError::MissingPrefix(s.to_string()))?;
        Uuid::parse_str(suffix).map_err(|_| JobIdError::InvalidUuid(s.to_string()))?;
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for JobId {
    type Error = JobIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<JobId> for String {
    fn from(id: JobId) -> Self {
        id.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum JobIdError {
    #[error("job id missing 'job-' prefix: {0}")]
    MissingPrefix(String),
    #[error("job id suffix is not a uuid: {0}")]
    InvalidUuid(String),
}
