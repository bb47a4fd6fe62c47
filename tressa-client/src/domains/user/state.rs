//! User state and its reducer
//!
//! [`UserState::apply`] is the only place the state changes. The store runs
//! the async flows and feeds their outcomes through here as [`Mutation`]s.

use std::fmt;

use log::debug;
use tressa_model::Profile;

use super::messages::Mutation;

/// Outcome of the most recent store operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Status {
    /// Nothing has run yet
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::Loading => "loading",
            Status::Success => "success",
            Status::Error => "error",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Status::Loading)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of the latest registration attempt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RegistrationOutcome {
    /// No attempt yet, or one is in flight
    #[default]
    Unknown,
    /// Account created and signed in
    Succeeded,
    Failed,
}

impl RegistrationOutcome {
    pub fn as_option(&self) -> Option<bool> {
        match self {
            RegistrationOutcome::Unknown => None,
            RegistrationOutcome::Succeeded => Some(true),
            RegistrationOutcome::Failed => Some(false),
        }
    }
}

/// Identity state for the signed-in user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserState {
    pub status: Status,
    pub profile: Profile,
    pub registration: RegistrationOutcome,
    /// Bumped on every logout. Profiles fetched under an earlier session
    /// are never committed.
    pub session: u64,
}

impl UserState {
    pub fn is_profile_loaded(&self) -> bool {
        self.profile.is_loaded()
    }

    /// Apply a committed change
    pub fn apply(&mut self, mutation: Mutation) {
        match mutation {
            Mutation::FetchStarted | Mutation::UpdateStarted => {
                self.status = Status::Loading;
            }
            Mutation::FetchSucceeded { profile, session }
            | Mutation::UpdateSucceeded { profile, session } => {
                self.status = Status::Success;
                self.adopt(profile, session);
            }
            Mutation::FetchFailed | Mutation::UpdateFailed => {
                self.status = Status::Error;
            }

            Mutation::RegisterStarted => {
                self.status = Status::Loading;
                self.registration = RegistrationOutcome::Unknown;
            }
            Mutation::RegisterSucceeded { profile, session } => {
                self.status = Status::Success;
                self.adopt(profile, session);
                self.registration = RegistrationOutcome::Succeeded;
            }
            Mutation::RegisterFailed => {
                self.status = Status::Error;
                self.registration = RegistrationOutcome::Failed;
            }

            Mutation::LoggedOut => {
                self.profile.clear();
                self.session += 1;
            }
        }
    }

    fn adopt(&mut self, profile: Profile, session: u64) {
        if session == self.session {
            self.profile = profile;
        } else {
            debug!(
                "Dropping profile from session {} after logout (now {})",
                session, self.session
            );
        }
    }
}
