use std::str::FromStr;

use serde::Deserialize;

/// Runtime configuration, read from the environment at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub store: StoreSettings,
    pub queue: QueueSettings,
    pub generation: GenerationSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    /// Connection URL of the TTL-capable key-value store.
    pub url: String,
    /// Optional read-scoped URL, used by the status endpoint which has no
    /// reason to write.
    pub read_only_url: Option<String>,
    pub job_ttl_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueueSettings {
    pub publish_url: String,
    pub token: String,
    pub current_signing_key: String,
    pub next_signing_key: String,
    /// Externally reachable base URL of this server, used as the webhook
    /// destination for queue deliveries.
    pub webhook_base_url: String,
    /// Bearer secret protecting the internal sweep endpoint.
    pub sweep_secret: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationSettings {
    /// Server-default generation credential, used when the caller supplies
    /// none.
    pub default_api_key: Option<String>,
    pub api_base_url: String,
    pub model: String,
    pub max_tokens: usize,
    pub temperature: f32,
    pub request_timeout_seconds: u64,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Ok(Self {
            server: ServerSettings {
                host: optional("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: parsed_or("SERVER_PORT", 3000)?,
            },
            store: StoreSettings {
                url: required("REDIS_URL")?,
                read_only_url: optional("REDIS_READ_ONLY_URL"),
                job_ttl_seconds: parsed_or("JOB_TTL_SECONDS", 86_400)?,
            },
            queue: QueueSettings {
                publish_url: optional("QSTASH_URL")
                    .unwrap_or_else(|| "https://qstash.upstash.io".to_string()),
                token: required("QSTASH_TOKEN")?,
                current_signing_key: required("QSTASH_CURRENT_SIGNING_KEY")?,
                next_signing_key: required("QSTASH_NEXT_SIGNING_KEY")?,
                webhook_base_url: required("WEBHOOK_BASE_URL")?,
                sweep_secret: optional("SWEEP_SECRET"),
            },
            generation: GenerationSettings {
                default_api_key: optional("CLAUDE_API_KEY"),
                api_base_url: optional("ANTHROPIC_BASE_URL")
                    .unwrap_or_else(|| "https://api.anthropic.com".to_string()),
                model: optional("GENERATION_MODEL")
                    .unwrap_or_else(|| "claude-3-7-sonnet-20250219".to_string()),
                max_tokens: parsed_or("GENERATION_MAX_TOKENS", 4000)?,
                temperature: parsed_or("GENERATION_TEMPERATURE", 0.2)?,
                request_timeout_seconds: parsed_or("GENERATION_TIMEOUT_SECONDS", 300)?,
            },
        })
    }
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn required(name: &str) -> Result<String, SettingsError> {
    optional(name).ok_or_else(|| SettingsError::MissingVar(name.to_string()))
}

fn parsed_or<T: FromStr>(name: &str, default: T) -> Result<T, SettingsError> {
    match optional(name) {
        Some(raw) => raw
            .parse()
            .map_err(|_| SettingsError::InvalidVar(name.to_string(), raw)),
        None => Ok(default),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("missing required environment variable: {0}")]
    MissingVar(String),
    #[error("environment variable {0} has invalid value: {1}")]
    InvalidVar(String, String),
}
