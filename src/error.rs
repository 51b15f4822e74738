use std::time::Duration;

use thiserror::Error;

/// Error from a single executor call, classified for retry handling.
#[derive(Debug, Clone)]
pub enum ExecutorError {
    Timeout {
        duration_secs: u64,
    },
    RateLimited {
        retry_after_secs: Option<u64>,
    },
    AuthenticationFailed,
    Network(String),
    InvalidRequest(String),
    ContextOverflow {
        message: String,
    },
    /// 5xx responses from the API.
    Server(String),
    Parse(String),
}

impl ExecutorError {
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::RateLimited { .. } | Self::Network(_) | Self::Server(_)
        )
    }

    pub fn is_permanent(&self) -> bool {
        !self.is_transient()
    }

    /// Delay before the next attempt. Rate-limit responses that carry a
    /// retry-after hint win over the exponential backoff schedule.
    pub fn suggested_delay(&self, attempt: u32) -> Duration {
        if let Self::RateLimited {
            retry_after_secs: Some(secs),
        } = self
        {
            return Duration::from_secs(*secs);
        }
        Duration::from_secs(1 << attempt.min(5))
    }
}

impl std::fmt::Display for ExecutorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout { duration_secs } => {
                write!(f, "Request timed out after {}s", duration_secs)
            }
            Self::RateLimited { retry_after_secs } => {
                if let Some(secs) = retry_after_secs {
                    write!(f, "Rate limited, retry after {}s", secs)
                } else {
                    write!(f, "Rate limited")
                }
            }
            Self::AuthenticationFailed => write!(f, "Authentication failed (check API key)"),
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            Self::ContextOverflow { message } => write!(f, "Context overflow: {}", message),
            Self::Server(msg) => write!(f, "Server error: {}", msg),
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ExecutorError {}

#[derive(Error, Debug)]
pub enum CrewError {
    #[error("Unknown agent: {0}")]
    UnknownAgent(String),

    #[error("Unknown task preset: {0}")]
    UnknownPreset(String),

    #[error("Agent not found in crew: {0}")]
    AgentNotFound(String),

    #[error("Crew has no tasks")]
    EmptyCrew,

    #[error("Task description is empty")]
    EmptyTask,

    #[error("ANTHROPIC_API_KEY is not set. Export it or add it to a .env file.")]
    MissingApiKey,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid save path: {0}")]
    InvalidSavePath(String),

    #[error("Agent execution failed: {0}")]
    Execution(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, CrewError>;

impl From<ExecutorError> for CrewError {
    fn from(err: ExecutorError) -> Self {
        match err {
            ExecutorError::AuthenticationFailed => CrewError::MissingApiKey,
            other => CrewError::Execution(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(ExecutorError::Timeout { duration_secs: 30 }.is_transient());
        assert!(
            ExecutorError::RateLimited {
                retry_after_secs: None
            }
            .is_transient()
        );
        assert!(ExecutorError::Server("500".into()).is_transient());
        assert!(ExecutorError::AuthenticationFailed.is_permanent());
        assert!(ExecutorError::InvalidRequest("bad".into()).is_permanent());
    }

    #[test]
    fn test_retry_after_overrides_backoff() {
        let err = ExecutorError::RateLimited {
            retry_after_secs: Some(30),
        };
        assert_eq!(err.suggested_delay(0), Duration::from_secs(30));
    }

    #[test]
    fn test_backoff_is_exponential_and_capped() {
        let err = ExecutorError::Network("reset".into());
        assert_eq!(err.suggested_delay(0), Duration::from_secs(1));
        assert_eq!(err.suggested_delay(2), Duration::from_secs(4));
        assert_eq!(err.suggested_delay(10), Duration::from_secs(32));
    }

    #[test]
    fn test_auth_failure_maps_to_missing_key() {
        let err: CrewError = ExecutorError::AuthenticationFailed.into();
        assert!(matches!(err, CrewError::MissingApiKey));
    }
}
