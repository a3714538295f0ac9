//! Client configuration.

use std::time::Duration;

use crate::error::{AudioDbError, Result};

/// Public TheAudioDB v1 JSON endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.theaudiodb.com/api/v1/json";

/// Free test key accepted by TheAudioDB.
pub const DEFAULT_API_KEY: &str = "2";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for [`AudioDbApi`](crate::api::AudioDbApi).
///
/// The API key is a path segment, so requests go to
/// `<base_url>/<api_key>/<endpoint>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
    /// Honour `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    pub system_proxy: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            timeout: DEFAULT_TIMEOUT,
            system_proxy: true,
        }
    }
}

impl ApiConfig {
    /// Set the base URL (without the API key segment).
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn without_system_proxy(mut self) -> Self {
        self.system_proxy = false;
        self
    }

    /// Root URL all endpoints are joined onto, always ending in `/`.
    pub fn api_root(&self) -> Result<String> {
        let key = self.api_key.trim();
        if key.is_empty() || key.contains('/') {
            return Err(AudioDbError::ConfigError(format!(
                "invalid API key: {:?}",
                self.api_key
            )));
        }
        if self.timeout.is_zero() {
            return Err(AudioDbError::ConfigError(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(format!("{}/{}/", self.base_url.trim_end_matches('/'), key))
    }
}
