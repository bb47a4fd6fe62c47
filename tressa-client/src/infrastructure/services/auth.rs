//! Authentication service trait and its HTTP implementation

use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;
use tressa_model::{DataEnvelope, LoginCredentials};

use crate::common::messages::{SessionEvent, SessionEventBus};
use crate::domains::auth::{AuthError, AuthResult};
use crate::infrastructure::api_client::{ApiClient, AuthToken};

pub const LOGIN_ROUTE: &str = "auth/login";

/// Authentication service trait for managing the user session
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Sign in; resolves once the session is established
    async fn login(&self, credentials: LoginCredentials) -> AuthResult<()>;

    /// End the current session
    async fn logout(&self) -> AuthResult<()>;
}

/// Signs in against the API and announces session changes on the bus
#[derive(Clone, Debug)]
pub struct AuthApiAdapter {
    client: Arc<ApiClient>,
    events: SessionEventBus,
}

impl AuthApiAdapter {
    pub fn new(client: Arc<ApiClient>, events: SessionEventBus) -> Self {
        Self { client, events }
    }
}

#[async_trait]
impl AuthService for AuthApiAdapter {
    async fn login(&self, credentials: LoginCredentials) -> AuthResult<()> {
        let envelope: DataEnvelope<AuthToken> = self
            .client
            .post(LOGIN_ROUTE, &credentials)
            .await
            .map_err(AuthError::from_login_failure)?;

        self.client.set_token(Some(envelope.into_inner())).await;
        info!("Signed in as {}", credentials.username);
        self.events.publish(SessionEvent::LoggedIn {
            username: credentials.username,
        });
        Ok(())
    }

    async fn logout(&self) -> AuthResult<()> {
        if self.client.get_token().await.is_none() {
            warn!("Logout requested without an active session");
        }
        self.client.set_token(None).await;
        self.events.publish(SessionEvent::LoggedOut);
        Ok(())
    }
}
