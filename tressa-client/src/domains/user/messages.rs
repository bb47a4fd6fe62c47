use tressa_model::{Profile, Registration, UserId};

/// Operations the UI can ask the user store to run
#[derive(Clone, Debug)]
pub enum UserRequest {
    /// Load the signed-in user's profile
    FetchSelf,
    /// Create an account, then sign in as it
    Register(Registration),
    /// Merge `changes` into the current profile and save it
    UpdateProfile { id: UserId, changes: Profile },
}

impl UserRequest {
    /// Returns a display string with credentials removed, safe to log
    pub fn sanitized_display(&self) -> String {
        match self {
            Self::Register(registration) => {
                format!("Register(email: {}, password: ***)", registration.email)
            }
            Self::UpdateProfile { id, changes } => format!(
                "UpdateProfile(id: {}, fields: {:?})",
                id,
                changes.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>()
            ),
            Self::FetchSelf => "FetchSelf".to_string(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::FetchSelf => "User::FetchSelf",
            Self::Register(_) => "User::Register",
            Self::UpdateProfile { .. } => "User::UpdateProfile",
        }
    }
}

/// Committed state changes, applied in order by [`UserState::apply`](super::UserState::apply)
#[derive(Clone, Debug, PartialEq)]
pub enum Mutation {
    FetchStarted,
    /// `session` is the epoch the flow started in; see [`UserState::session`](super::UserState::session)
    FetchSucceeded { profile: Profile, session: u64 },
    FetchFailed,

    RegisterStarted,
    RegisterSucceeded { profile: Profile, session: u64 },
    RegisterFailed,

    UpdateStarted,
    UpdateSucceeded { profile: Profile, session: u64 },
    UpdateFailed,

    /// Session ended elsewhere
    LoggedOut,
}

impl Mutation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FetchStarted => "User::FetchStarted",
            Self::FetchSucceeded { .. } => "User::FetchSucceeded",
            Self::FetchFailed => "User::FetchFailed",
            Self::RegisterStarted => "User::RegisterStarted",
            Self::RegisterSucceeded { .. } => "User::RegisterSucceeded",
            Self::RegisterFailed => "User::RegisterFailed",
            Self::UpdateStarted => "User::UpdateStarted",
            Self::UpdateSucceeded { .. } => "User::UpdateSucceeded",
            Self::UpdateFailed => "User::UpdateFailed",
            Self::LoggedOut => "User::LoggedOut",
        }
    }
}
