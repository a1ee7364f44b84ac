//! DTOs shaped for the filing detail template.

use serde::Serialize;
use serde_json::{Map, Value};

/// Aggregated data required to render a single filing with a page of its
/// holdings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilingPageData {
    /// Filing record, `None` when the backend did not return it.
    pub filing: Option<Value>,
    pub holdings: Vec<Value>,
    pub pagination: Map<String, Value>,
    pub page_links: Vec<Option<usize>>,
    pub current_page: i64,
    pub limit: i64,
}
