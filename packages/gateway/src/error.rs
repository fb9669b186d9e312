use civic::ConfigStatus;
use thiserror::Error;

/// Startup configuration problems.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required configuration: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

impl ConfigError {
    /// What the client is told about this failure.
    pub fn status(&self) -> ConfigStatus {
        match self {
            ConfigError::Missing(keys) => ConfigStatus::missing(keys.iter().copied()),
            ConfigError::Load(_) => ConfigStatus::unavailable(),
        }
    }
}

/// A completion call that produced no usable text.
///
/// Callers only ever show the fixed fallback sentence; the cause is kept for
/// the server log.
#[derive(Debug, Error)]
#[error("completion request failed")]
pub struct RequestFailed {
    #[source]
    cause: FailureCause,
}

impl RequestFailed {
    pub fn cause(&self) -> &FailureCause {
        &self.cause
    }
}

impl From<FailureCause> for RequestFailed {
    fn from(cause: FailureCause) -> Self {
        Self { cause }
    }
}

impl From<reqwest::Error> for RequestFailed {
    fn from(err: reqwest::Error) -> Self {
        FailureCause::Transport(err).into()
    }
}

impl From<serde_json::Error> for RequestFailed {
    fn from(err: serde_json::Error) -> Self {
        FailureCause::Malformed(err).into()
    }
}

#[derive(Debug, Error)]
pub enum FailureCause {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("endpoint returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("response carried no text once markdown was stripped")]
    EmptyContent,
}

/// Storage backend failures.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("backend returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("insert into {table} returned no row")]
    NoRow { table: &'static str },
    #[error("row returned from {table} has no id")]
    NoId { table: &'static str },
}
