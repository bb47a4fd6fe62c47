/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository-specific errors with proper context
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("Invalid server URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Unauthorized - please login again")]
    Unauthorized,

    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Deserialization failed: {0}")]
    DeserializationError(String),
}

impl RepositoryError {
    /// Whether the failure came back from the server rather than the transport
    pub fn is_server_response(&self) -> bool {
        matches!(self, Self::Unauthorized | Self::Status { .. })
    }
}

impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RepositoryError::DeserializationError(err.to_string())
        } else {
            RepositoryError::RequestFailed(err.to_string())
        }
    }
}
