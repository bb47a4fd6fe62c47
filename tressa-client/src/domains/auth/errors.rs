//! Authentication error types

use thiserror::Error;

use crate::infrastructure::repository::RepositoryError;

/// Main authentication error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The server refused the username/password pair
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Network request failed
    #[error("Network error: {0}")]
    Network(#[from] RepositoryError),

    /// Not authenticated
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Map a login transport failure; a 401 from the login route means bad credentials
    pub fn from_login_failure(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Unauthorized => AuthError::InvalidCredentials,
            other => AuthError::Network(other),
        }
    }
}

/// Result type alias for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;
