use serde::Serialize;
use serde_json::{Map, Value};

/// Data required to render the latest filings listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexPageData {
    /// Filings as returned by the backend, in backend order.
    pub filings: Vec<Value>,
    /// Backend pagination block passed through untouched.
    pub pagination: Map<String, Value>,
    /// Page-link strip derived from the backend total.
    pub page_links: Vec<Option<usize>>,
    pub current_page: i64,
    pub per_page: i64,
}

/// Data required to render the recent comparisons page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentComparisonsPageData {
    pub comparisons: Vec<Value>,
}
