//! Configuration model loaded from external sources.

use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_api_timeout_secs() -> u64 {
    DEFAULT_API_TIMEOUT_SECS
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    /// Base URL used for server-to-server calls to the filings API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Base URL handed to templates for browser-side calls.
    #[serde(default = "default_api_base_url")]
    pub api_base_url_client: String,
    #[serde(default = "default_api_timeout_secs")]
    pub api_timeout_secs: u64,
}
