//! Shared mocks for user store tests
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::{Notify, RwLock};
use tressa_client::domains::auth::{AuthError, AuthResult};
use tressa_client::domains::user::{UserStore, UserStoreError};
use tressa_client::infrastructure::repository::{RepositoryError, RepositoryResult};
use tressa_client::infrastructure::services::{AuthService, ErrorReporter, UserRepository};
use tressa_model::{DataEnvelope, LoginCredentials, Profile, Registration, UserId};

/// Repository returning canned responses and recording every call
pub struct MockUserRepository {
    pub self_response: RwLock<RepositoryResult<DataEnvelope<Profile>>>,
    pub register_response: RwLock<RepositoryResult<DataEnvelope<Profile>>>,
    pub update_response: RwLock<RepositoryResult<DataEnvelope<Profile>>>,
    pub get_self_calls: AtomicUsize,
    pub registrations: Arc<RwLock<Vec<Registration>>>,
    pub updates: Arc<RwLock<Vec<(UserId, Profile)>>>,
    /// When set, `get_self` parks until notified
    pub hold_get_self: Option<Arc<Notify>>,
    /// When set, `update` parks until notified
    pub hold_update: Option<Arc<Notify>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self {
            self_response: RwLock::new(Ok(DataEnvelope::new(Profile::new()))),
            register_response: RwLock::new(Ok(DataEnvelope::new(Profile::new()))),
            update_response: RwLock::new(Ok(DataEnvelope::new(Profile::new()))),
            get_self_calls: AtomicUsize::new(0),
            registrations: Arc::new(RwLock::new(Vec::new())),
            updates: Arc::new(RwLock::new(Vec::new())),
            hold_get_self: None,
            hold_update: None,
        }
    }

    pub fn with_self(self, response: RepositoryResult<Profile>) -> Self {
        *self.self_response.try_write().unwrap() = response.map(DataEnvelope::new);
        self
    }

    pub fn with_register(self, response: RepositoryResult<Profile>) -> Self {
        *self.register_response.try_write().unwrap() = response.map(DataEnvelope::new);
        self
    }

    pub fn with_update(self, response: RepositoryResult<Profile>) -> Self {
        *self.update_response.try_write().unwrap() = response.map(DataEnvelope::new);
        self
    }

    pub fn holding_get_self(mut self, gate: Arc<Notify>) -> Self {
        self.hold_get_self = Some(gate);
        self
    }

    pub fn holding_update(mut self, gate: Arc<Notify>) -> Self {
        self.hold_update = Some(gate);
        self
    }

    pub fn get_self_count(&self) -> usize {
        self.get_self_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn get_self(&self) -> RepositoryResult<DataEnvelope<Profile>> {
        self.get_self_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.hold_get_self {
            gate.notified().await;
        }
        self.self_response.read().await.clone()
    }

    async fn register(
        &self,
        registration: &Registration,
    ) -> RepositoryResult<DataEnvelope<Profile>> {
        self.registrations.write().await.push(registration.clone());
        self.register_response.read().await.clone()
    }

    async fn update(
        &self,
        id: UserId,
        profile: &Profile,
    ) -> RepositoryResult<DataEnvelope<Profile>> {
        self.updates.write().await.push((id, profile.clone()));
        if let Some(gate) = &self.hold_update {
            gate.notified().await;
        }
        self.update_response.read().await.clone()
    }
}

/// Auth service with a fixed login result
pub struct MockAuthService {
    pub login_result: AuthResult<()>,
    pub login_called: Arc<RwLock<Vec<LoginCredentials>>>,
}

impl MockAuthService {
    pub fn succeeding() -> Self {
        Self {
            login_result: Ok(()),
            login_called: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn failing(error: AuthError) -> Self {
        Self {
            login_result: Err(error),
            login_called: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl AuthService for MockAuthService {
    async fn login(&self, credentials: LoginCredentials) -> AuthResult<()> {
        self.login_called.write().await.push(credentials);
        self.login_result.clone()
    }

    async fn logout(&self) -> AuthResult<()> {
        Ok(())
    }
}

/// Collects every reported error
#[derive(Default)]
pub struct RecordingReporter {
    pub reports: StdMutex<Vec<UserStoreError>>,
}

impl RecordingReporter {
    pub fn reported(&self) -> Vec<UserStoreError> {
        self.reports.lock().unwrap().clone()
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, error: &UserStoreError) {
        self.reports.lock().unwrap().push(error.clone());
    }
}

pub struct Harness {
    pub store: Arc<UserStore>,
    pub repository: Arc<MockUserRepository>,
    pub auth: Arc<MockAuthService>,
    pub reporter: Arc<RecordingReporter>,
}

pub fn harness(repository: MockUserRepository, auth: MockAuthService) -> Harness {
    let repository = Arc::new(repository);
    let auth = Arc::new(auth);
    let reporter = Arc::new(RecordingReporter::default());
    let store = Arc::new(UserStore::new(
        repository.clone(),
        auth.clone(),
        reporter.clone(),
    ));
    Harness {
        store,
        repository,
        auth,
        reporter,
    }
}

pub fn network_down() -> RepositoryError {
    RepositoryError::RequestFailed("connection refused".into())
}
