//! DTOs used by the manager detail page.

use serde::Serialize;
use serde_json::{Map, Value};

/// Data required to render a manager and their filings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManagerPageData {
    /// Manager record, empty when the backend did not return one.
    pub manager: Map<String, Value>,
    pub filings: Vec<Value>,
}
