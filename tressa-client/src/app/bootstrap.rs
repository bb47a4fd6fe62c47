use std::sync::Arc;
use std::time::Duration;

use log::warn;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";
pub const DEFAULT_API_VERSION: &str = "v1";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the salon API
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub server_url: Arc<str>,
    pub api_version: Arc<str>,
    pub request_timeout: Duration,
}

impl ClientConfig {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: Arc::from(server_url.into()),
            api_version: Arc::from(DEFAULT_API_VERSION),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn from_environment() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. `from_environment` is this
    /// over `std::env::var`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let server_url = lookup("TRESSA_SERVER_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

        let api_version = lookup("TRESSA_API_VERSION")
            .map(|v| v.trim().trim_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        let request_timeout = match lookup("TRESSA_REQUEST_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!(
                        "Ignoring invalid TRESSA_REQUEST_TIMEOUT_SECS={:?}, using {}s",
                        raw,
                        DEFAULT_REQUEST_TIMEOUT.as_secs()
                    );
                    DEFAULT_REQUEST_TIMEOUT
                }
            },
            None => DEFAULT_REQUEST_TIMEOUT,
        };

        Self {
            server_url: Arc::from(server_url),
            api_version: Arc::from(api_version),
            request_timeout,
        }
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Arc::from(version.into());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config.server_url(), DEFAULT_SERVER_URL);
        assert_eq!(config.api_version(), "v1");
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
    }

    #[test]
    fn reads_overrides_and_normalizes_slashes() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("TRESSA_SERVER_URL", " https://api.tressa.test/ "),
            ("TRESSA_API_VERSION", "/v2/"),
            ("TRESSA_REQUEST_TIMEOUT_SECS", "5"),
        ]));

        assert_eq!(config.server_url(), "https://api.tressa.test");
        assert_eq!(config.api_version(), "v2");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn invalid_timeout_falls_back() {
        for raw in ["soon", "0", "-3"] {
            let config =
                ClientConfig::from_lookup(lookup_from(&[("TRESSA_REQUEST_TIMEOUT_SECS", raw)]));
            assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT, "input {raw}");
        }
    }
}
