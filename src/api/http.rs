//! reqwest-backed implementation of [`FilingsApi`].

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::api::{ApiError, ApiResult, FilingsApi};
use crate::models::config::ServerConfig;

/// HTTP client for the filings backend.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Clone, Debug)]
pub struct HttpFilingsApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFilingsApi {
    /// Creates a client for `base_url` where every call is bounded by `timeout`.
    ///
    /// `base_url` should look like `http://localhost:8000`; a trailing slash
    /// is dropped.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url: String = base_url.into();

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client for the server-to-server base URL of the config.
    pub fn from_config(config: &ServerConfig) -> Result<Self, ApiError> {
        Self::new(
            config.api_base_url.clone(),
            Duration::from_secs(config.api_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self, endpoint: &str, params: &[(String, String)]) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut request = self.client.get(&url);
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl FilingsApi for HttpFilingsApi {
    async fn call(&self, endpoint: &str, params: &[(String, String)]) -> ApiResult<Value> {
        log::debug!("GET {}{endpoint} params={params:?}", self.base_url);
        ApiResult::from_outcome(endpoint, self.fetch(endpoint, params).await)
    }
}
