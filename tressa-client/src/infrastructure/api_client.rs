use log::{debug, info, warn};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::sync::Arc;
use tokio::sync::RwLock;
use url::Url;

use crate::app::bootstrap::ClientConfig;
use crate::infrastructure::repository::{RepositoryError, RepositoryResult};

/// Bearer token issued by the login endpoint
#[derive(Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct AuthToken {
    pub access_token: String,
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthToken")
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

/// API client with authentication support
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    api_version: String,
    token_store: Arc<RwLock<Option<AuthToken>>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field(
                "has_token",
                &self
                    .token_store
                    .try_read()
                    .map(|t| t.is_some())
                    .unwrap_or(false),
            )
            .finish()
    }
}

impl ApiClient {
    /// Create a new API client
    pub fn new(config: &ClientConfig) -> RepositoryResult<Self> {
        let parsed =
            Url::parse(config.server_url()).map_err(|e| RepositoryError::InvalidBaseUrl {
                url: config.server_url().to_string(),
                reason: e.to_string(),
            })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(RepositoryError::InvalidBaseUrl {
                url: config.server_url().to_string(),
                reason: format!("unsupported scheme {}", parsed.scheme()),
            });
        }

        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(RepositoryError::from)?;

        info!(
            "[ApiClient] Creating new API client with base URL: {}",
            config.server_url()
        );

        Ok(Self {
            client,
            base_url: config.server_url().trim_end_matches('/').to_string(),
            api_version: config.api_version().to_string(),
            token_store: Arc::new(RwLock::new(None)),
        })
    }

    /// Build a versioned API URL
    pub fn build_url(&self, path: impl AsRef<str>) -> String {
        let p = path.as_ref();
        if p.starts_with("http://") || p.starts_with("https://") {
            return p.to_string();
        }
        let path = p.trim_start_matches('/');
        format!("{}/api/{}/{}", self.base_url, self.api_version, path)
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set the authentication token
    pub async fn set_token(&self, token: Option<AuthToken>) {
        *self.token_store.write().await = token;
    }

    /// Get the current authentication token
    pub async fn get_token(&self) -> Option<AuthToken> {
        self.token_store.read().await.clone()
    }

    /// Build a request with authentication headers
    async fn build_request(&self, builder: RequestBuilder) -> RequestBuilder {
        if let Some(token) = self.token_store.read().await.as_ref() {
            builder.bearer_auth(&token.access_token)
        } else {
            builder
        }
    }

    /// Execute a request and map transport and status failures
    async fn execute_request<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> RepositoryResult<T> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            return serde_json::from_slice(&body)
                .map_err(|e| RepositoryError::DeserializationError(e.to_string()));
        }

        if status == StatusCode::UNAUTHORIZED {
            warn!("[ApiClient] Request rejected as unauthorized, clearing token");
            self.set_token(None).await;
            return Err(RepositoryError::Unauthorized);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(RepositoryError::Status {
            status: status.as_u16(),
            body,
        })
    }

    /// GET a JSON body
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> RepositoryResult<T> {
        let url = self.build_url(path);
        debug!("[ApiClient] GET {}", url);
        let request = self.build_request(self.client.get(&url)).await;
        self.execute_request(request).await
    }

    /// POST a JSON body and decode the JSON response
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> RepositoryResult<T> {
        let url = self.build_url(path);
        debug!("[ApiClient] POST {}", url);
        let request = self.build_request(self.client.post(&url).json(body)).await;
        self.execute_request(request).await
    }

    /// PUT a JSON body and decode the JSON response
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> RepositoryResult<T> {
        let url = self.build_url(path);
        debug!("[ApiClient] PUT {}", url);
        let request = self.build_request(self.client.put(&url).json(body)).await;
        self.execute_request(request).await
    }
}
