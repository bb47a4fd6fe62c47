use thiserror::Error;

use crate::domains::auth::AuthError;
use crate::infrastructure::repository::RepositoryError;

/// Failure of a user store operation, as handed to the error reporter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserStoreError {
    /// The users endpoint failed
    #[error("User request failed: {0}")]
    Repository(#[from] RepositoryError),

    /// Registration went through but signing in as the new account did not
    #[error("Signing in after registration failed: {0}")]
    Login(#[from] AuthError),
}

impl UserStoreError {
    /// True when the account exists server-side but no local session was established
    pub fn is_post_registration_login(&self) -> bool {
        matches!(self, Self::Login(_))
    }
}
