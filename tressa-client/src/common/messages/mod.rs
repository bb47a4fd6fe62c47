//! Cross-domain session events
//!
//! The auth domain owns login/logout; other domains react to it only by
//! subscribing to the [`SessionEventBus`]. Nothing outside the auth adapters
//! publishes here.

use log::debug;
use tokio::sync::broadcast;

/// Number of unread events a slow subscriber may fall behind by
pub const SESSION_EVENT_CAPACITY: usize = 16;

/// Session lifecycle changes broadcast to every interested domain
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// A user signed in (username as submitted)
    LoggedIn { username: String },
    /// The session ended; user-scoped state must be dropped
    LoggedOut,
}

impl SessionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoggedIn { .. } => "Session::LoggedIn",
            Self::LoggedOut => "Session::LoggedOut",
        }
    }
}

/// Fan-out channel for [`SessionEvent`]s
#[derive(Clone, Debug)]
pub struct SessionEventBus {
    sender: broadcast::Sender<SessionEvent>,
}

impl SessionEventBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(SESSION_EVENT_CAPACITY);
        Self { sender }
    }

    /// Publish an event, returning how many subscribers will see it
    pub fn publish(&self, event: SessionEvent) -> usize {
        debug!("[SessionEventBus] Publishing {}", event.name());
        // No subscribers is not an error
        self.sender.send(event).unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for SessionEventBus {
    fn default() -> Self {
        Self::new()
    }
}
