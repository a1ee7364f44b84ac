//! Access to the remote filings-data API.
//!
//! Every backend call goes through [`FilingsApi::call`], which never fails:
//! transport errors, non-2xx statuses and malformed bodies all collapse into
//! [`ApiResult::Absent`]. The cause is logged at the client boundary via
//! [`ApiError`] and is not visible to callers.

use async_trait::async_trait;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use errors::ApiError;
pub use http::HttpFilingsApi;

/// Ordered `(name, value)` query parameters sent with a backend call.
pub type QueryParams = Vec<(String, String)>;

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Encodes a caller-supplied identifier as exactly one endpoint path segment.
///
/// Returns `None` for `.` and `..`, which URL normalization would resolve
/// against the parent path.
pub fn path_segment(raw: &str) -> Option<String> {
    if raw == "." || raw == ".." {
        return None;
    }
    Some(utf8_percent_encode(raw, PATH_SEGMENT).to_string())
}

/// Outcome of a backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult<T> {
    Success(T),
    Absent,
}

impl<T> ApiResult<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, ApiResult::Absent)
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            ApiResult::Success(value) => Some(value),
            ApiResult::Absent => None,
        }
    }

    /// Returns the payload or the provided fallback when absent.
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            ApiResult::Success(value) => value,
            ApiResult::Absent => fallback(),
        }
    }

    /// Converts a client outcome, logging the diagnostic cause on failure.
    pub fn from_outcome(endpoint: &str, outcome: Result<T, ApiError>) -> Self {
        match outcome {
            Ok(value) => ApiResult::Success(value),
            Err(err) => {
                log::error!("API request to {endpoint} failed: {err}");
                ApiResult::Absent
            }
        }
    }
}

impl ApiResult<Value> {
    /// Validates a successful payload against a typed record.
    ///
    /// A payload that does not match the record is logged and treated as
    /// absent, the same way a malformed body is.
    pub fn decode<T>(self, endpoint: &str) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        match self {
            ApiResult::Success(value) => ApiResult::from_outcome(
                endpoint,
                serde_json::from_value(value).map_err(ApiError::from),
            ),
            ApiResult::Absent => ApiResult::Absent,
        }
    }
}

/// Read-only access to the filings backend.
///
/// `endpoint` is appended to the configured base URL as-is, so it may carry
/// its own query string. `params` are appended after it in order.
#[async_trait]
pub trait FilingsApi: Send + Sync {
    async fn call(&self, endpoint: &str, params: &[(String, String)]) -> ApiResult<Value>;
}
