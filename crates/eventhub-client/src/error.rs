//! Client error types for the EventHub SDK

/// Error type for EventHub client operations
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request timeout")]
    Timeout,

    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("unauthorized (status {status})")]
    Unauthorized { status: u16 },

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("validation failed: {0}")]
    Validation(#[from] validator::ValidationError),

    #[error("auth failed: {0}")]
    AuthFailed(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else {
            ClientError::Http(err)
        }
    }
}

impl ClientError {
    /// True for 401/403 responses from protected endpoints
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized { .. })
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
