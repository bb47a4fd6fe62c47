//! Error presentation for store operations
//!
//! Store flows never return their failures; they hand them to an
//! [`ErrorReporter`] and carry on.

use log::{error, warn};
use tokio::sync::mpsc;

use crate::domains::user::UserStoreError;
use crate::infrastructure::repository::RepositoryError;

pub trait ErrorReporter: Send + Sync {
    fn report(&self, error: &UserStoreError);
}

/// Logs every failure at `error` level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogErrorReporter;

impl ErrorReporter for LogErrorReporter {
    fn report(&self, err: &UserStoreError) {
        error!("{}", err);
    }
}

/// Toast-ready message for the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn from_error(err: &UserStoreError) -> Self {
        let title = match err {
            UserStoreError::Repository(RepositoryError::Unauthorized) => "Session expired",
            UserStoreError::Repository(_) => "Request failed",
            UserStoreError::Login(_) => "Sign-in failed",
        };
        let message = match err {
            UserStoreError::Repository(RepositoryError::Status { status, .. }) => {
                format!("The server answered with status {status}.")
            }
            UserStoreError::Login(_) => {
                "Your account was created, but we could not sign you in.".to_string()
            }
            other => other.to_string(),
        };
        Self {
            title: title.to_string(),
            message,
        }
    }
}

/// Forwards a [`Notice`] per failure to whoever renders toasts
#[derive(Debug, Clone)]
pub struct NoticeErrorReporter {
    sender: mpsc::UnboundedSender<Notice>,
}

impl NoticeErrorReporter {
    pub fn new(sender: mpsc::UnboundedSender<Notice>) -> Self {
        Self { sender }
    }

    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notice>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(sender), receiver)
    }
}

impl ErrorReporter for NoticeErrorReporter {
    fn report(&self, err: &UserStoreError) {
        error!("{}", err);
        if self.sender.send(Notice::from_error(err)).is_err() {
            warn!("Notice receiver dropped; toast not shown");
        }
    }
}
