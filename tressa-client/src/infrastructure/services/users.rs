use async_trait::async_trait;
use std::sync::Arc;
use tressa_model::{DataEnvelope, Profile, Registration, UserId};

use crate::infrastructure::api_client::ApiClient;
use crate::infrastructure::repository::RepositoryResult;

pub mod routes {
    pub const SELF: &str = "users/me";
    pub const USERS: &str = "users";

    pub fn user_item(id: &tressa_model::UserId) -> String {
        format!("{USERS}/{id}")
    }
}

/// Users endpoint as seen by the user store
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch the signed-in user; the record sits under `data`
    async fn get_self(&self) -> RepositoryResult<DataEnvelope<Profile>>;

    /// Create an account; the new user record sits under `data`
    async fn register(&self, registration: &Registration)
    -> RepositoryResult<DataEnvelope<Profile>>;

    /// Save a full profile; the server's view of the changed fields sits under `data`
    async fn update(&self, id: UserId, profile: &Profile)
    -> RepositoryResult<DataEnvelope<Profile>>;
}

#[derive(Clone, Debug)]
pub struct UsersApiAdapter {
    client: Arc<ApiClient>,
}

impl UsersApiAdapter {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserRepository for UsersApiAdapter {
    async fn get_self(&self) -> RepositoryResult<DataEnvelope<Profile>> {
        self.client.get(routes::SELF).await
    }

    async fn register(
        &self,
        registration: &Registration,
    ) -> RepositoryResult<DataEnvelope<Profile>> {
        self.client.post(routes::USERS, registration).await
    }

    async fn update(
        &self,
        id: UserId,
        profile: &Profile,
    ) -> RepositoryResult<DataEnvelope<Profile>> {
        self.client.put(&routes::user_item(&id), profile).await
    }
}
