//! User store
//!
//! Runs the async user flows against the injected services and commits
//! their outcomes through the reducer. Every flow follows the same shape:
//! commit a `*Started` mutation, await the service, then commit the matching
//! success or failure mutation. Failures go to the [`ErrorReporter`] and are
//! never returned to the caller.

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::{Mutex, broadcast, watch};
use tokio::task::JoinHandle;
use tressa_model::{Profile, Registration, UserId};

use super::errors::UserStoreError;
use super::messages::{Mutation, UserRequest};
use super::state::{RegistrationOutcome, Status, UserState};
use crate::common::messages::{SessionEvent, SessionEventBus};
use crate::infrastructure::services::auth::AuthService;
use crate::infrastructure::services::error_reporting::ErrorReporter;
use crate::infrastructure::services::users::UserRepository;

pub struct UserStore {
    state: watch::Sender<UserState>,
    /// Held for the whole of a flow so flows never interleave their commits
    operation_gate: Mutex<()>,
    repository: Arc<dyn UserRepository>,
    auth: Arc<dyn AuthService>,
    reporter: Arc<dyn ErrorReporter>,
}

impl std::fmt::Debug for UserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserStore")
            .field("state", &*self.state.borrow())
            .field("subscribers", &self.state.receiver_count())
            .finish()
    }
}

impl UserStore {
    pub fn new(
        repository: Arc<dyn UserRepository>,
        auth: Arc<dyn AuthService>,
        reporter: Arc<dyn ErrorReporter>,
    ) -> Self {
        let (state, _) = watch::channel(UserState::default());
        Self {
            state,
            operation_gate: Mutex::new(()),
            repository,
            auth,
            reporter,
        }
    }

    // Queries

    /// Snapshot of the whole state
    pub fn snapshot(&self) -> UserState {
        self.state.borrow().clone()
    }

    pub fn status(&self) -> Status {
        self.state.borrow().status
    }

    pub fn registration(&self) -> RegistrationOutcome {
        self.state.borrow().registration
    }

    pub fn is_profile_loaded(&self) -> bool {
        self.state.borrow().is_profile_loaded()
    }

    pub fn profile(&self) -> Profile {
        self.state.borrow().profile.clone()
    }

    /// Watch state changes, e.g. to re-render on every commit
    pub fn subscribe(&self) -> watch::Receiver<UserState> {
        self.state.subscribe()
    }

    // Operations

    pub async fn fetch_self(&self) {
        self.dispatch(UserRequest::FetchSelf).await;
    }

    pub async fn register(&self, registration: Registration) {
        self.dispatch(UserRequest::Register(registration)).await;
    }

    pub async fn update_profile(&self, id: UserId, changes: Profile) {
        self.dispatch(UserRequest::UpdateProfile { id, changes })
            .await;
    }

    /// Run one request to completion. Resolves after the terminal commit.
    pub async fn dispatch(&self, request: UserRequest) {
        let _gate = self.operation_gate.lock().await;
        debug!("User update: {}", request.sanitized_display());

        let name = request.name();
        let outcome = match request {
            UserRequest::FetchSelf => self.run_fetch_self().await,
            UserRequest::Register(registration) => self.run_register(registration).await,
            UserRequest::UpdateProfile { id, changes } => self.run_update(id, changes).await,
        };

        match outcome {
            Ok(()) => debug!("{} completed", name),
            Err(err) => {
                warn!("{} failed", name);
                self.reporter.report(&err);
            }
        }
    }

    async fn run_fetch_self(&self) -> Result<(), UserStoreError> {
        self.commit(Mutation::FetchStarted);
        let session = self.session();
        match self.repository.get_self().await {
            Ok(envelope) => {
                self.commit(Mutation::FetchSucceeded {
                    profile: envelope.into_inner(),
                    session,
                });
                Ok(())
            }
            Err(err) => {
                self.commit(Mutation::FetchFailed);
                Err(err.into())
            }
        }
    }

    async fn run_register(&self, registration: Registration) -> Result<(), UserStoreError> {
        self.commit(Mutation::RegisterStarted);
        let session = self.session();

        // The profile is only committed once the new account is signed in
        let result = async {
            let profile = self.repository.register(&registration).await?.into_inner();
            info!("Registered {}, signing in", registration.email);
            self.auth.login(registration.login_credentials()).await?;
            Ok::<_, UserStoreError>(profile)
        }
        .await;

        match result {
            Ok(profile) => {
                self.commit(Mutation::RegisterSucceeded { profile, session });
                Ok(())
            }
            Err(err) => {
                self.commit(Mutation::RegisterFailed);
                Err(err)
            }
        }
    }

    async fn run_update(&self, id: UserId, changes: Profile) -> Result<(), UserStoreError> {
        self.commit(Mutation::UpdateStarted);

        let (merged, session) = {
            let state = self.state.borrow();
            (state.profile.overlay(&changes), state.session)
        };
        match self.repository.update(id, &merged).await {
            Ok(envelope) => {
                let saved = merged.overlay(&envelope.into_inner());
                self.commit(Mutation::UpdateSucceeded {
                    profile: saved,
                    session,
                });
                Ok(())
            }
            Err(err) => {
                self.commit(Mutation::UpdateFailed);
                Err(err.into())
            }
        }
    }

    fn session(&self) -> u64 {
        self.state.borrow().session
    }

    fn commit(&self, mutation: Mutation) {
        debug!("Commit {}", mutation.name());
        self.state.send_modify(|state| state.apply(mutation));
    }

    // Session events

    /// React to a session event published by the auth domain
    ///
    /// Logout does not wait on the operation gate. A flow already in flight
    /// still finishes, but its profile is dropped by the reducer.
    pub fn handle_event(&self, event: &SessionEvent) {
        match event {
            SessionEvent::LoggedOut => {
                info!("Session ended, clearing profile");
                self.commit(Mutation::LoggedOut);
            }
            SessionEvent::LoggedIn { .. } => {}
        }
    }

    /// Apply session events until the bus closes
    pub async fn follow_session(&self, mut events: broadcast::Receiver<SessionEvent>) {
        loop {
            match events.recv().await {
                Ok(event) => self.handle_event(&event),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!("Session listener lagged, skipped {} events", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
        debug!("Session event bus closed");
    }

    /// Spawn [`follow_session`](Self::follow_session) on the current runtime
    pub fn spawn_session_listener(self: &Arc<Self>, bus: &SessionEventBus) -> JoinHandle<()> {
        let store = Arc::clone(self);
        let events = bus.subscribe();
        tokio::spawn(async move { store.follow_session(events).await })
    }
}
