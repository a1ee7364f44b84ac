//! Translation between the pagination dialects spoken by the browser and
//! the filings backend.
//!
//! Listing pages use `page`/`per_page`, the backend uses `limit`/`offset`
//! and the holdings table widget uses the DataTables server-side protocol.
//! Inputs are forwarded without range checks: the backend decides what a
//! zero or negative limit means.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::api::{ApiResult, QueryParams};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_ITEMS_PER_PAGE: i64 = 50;

/// Parses an integer query value, falling back to `default` when missing or
/// malformed.
pub fn parse_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

fn offset_for(page: i64, size: i64) -> i64 {
    page.saturating_sub(1).saturating_mul(size)
}

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page.saturating_add(1));
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = current_page
        .saturating_add(right_current)
        .saturating_add(1)
        .min(last_page.saturating_add(1));

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge).saturating_add(1));

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// Page-oriented request coming from a listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub per_page: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl PageRequest {
    pub fn new(page: i64, per_page: i64) -> Self {
        Self { page, per_page }
    }

    pub fn from_query(page: Option<&str>, per_page: Option<&str>) -> Self {
        Self {
            page: parse_or(page, DEFAULT_PAGE),
            per_page: parse_or(per_page, DEFAULT_ITEMS_PER_PAGE),
        }
    }

    pub fn offset(&self) -> i64 {
        offset_for(self.page, self.per_page)
    }

    /// Backend `limit`/`offset` parameters for this page.
    pub fn to_params(&self) -> QueryParams {
        vec![
            ("limit".to_string(), self.per_page.to_string()),
            ("offset".to_string(), self.offset().to_string()),
        ]
    }
}

/// Page request for a single filing's holdings listing.
///
/// The limit/offset pair is rendered straight into the endpoint path instead
/// of being sent as separate parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldingsPageRequest {
    pub page: i64,
    pub limit: i64,
}

impl Default for HoldingsPageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl HoldingsPageRequest {
    pub fn new(page: i64, limit: i64) -> Self {
        Self { page, limit }
    }

    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page: parse_or(page, DEFAULT_PAGE),
            limit: parse_or(limit, DEFAULT_ITEMS_PER_PAGE),
        }
    }

    pub fn offset(&self) -> i64 {
        offset_for(self.page, self.limit)
    }

    /// Appends `?limit=..&offset=..` to `path`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{path}?limit={}&offset={}", self.limit, self.offset())
    }
}

/// Server-side processing request sent by the DataTables widget.
///
/// Values are kept exactly as received; the backend interprets them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTablesRequest {
    pub draw: Option<String>,
    pub start: Option<String>,
    pub length: Option<String>,
    #[serde(rename = "search[value]")]
    pub search_value: Option<String>,
    #[serde(rename = "order[0][column]")]
    pub order_column: Option<String>,
    #[serde(rename = "order[0][dir]")]
    pub order_dir: Option<String>,
}

impl DataTablesRequest {
    /// Forwards the DataTables fields under their protocol names. Missing
    /// fields are omitted.
    pub fn to_params(&self) -> QueryParams {
        [
            ("draw", &self.draw),
            ("start", &self.start),
            ("length", &self.length),
            ("search[value]", &self.search_value),
            ("order[0][column]", &self.order_column),
            ("order[0][dir]", &self.order_dir),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_ref().map(|v| (name.to_string(), v.clone())))
        .collect()
    }

    /// Empty DataTables response echoing `draw`, used when the backend is
    /// unavailable.
    pub fn empty_response(&self) -> Value {
        json!({
            "draw": parse_or(self.draw.as_deref(), 0),
            "recordsTotal": 0,
            "recordsFiltered": 0,
            "data": [],
        })
    }

    /// Returns the backend body verbatim, or an empty response when absent.
    pub fn response_body(&self, response: ApiResult<Value>) -> Value {
        response.unwrap_or_else(|| self.empty_response())
    }
}

/// Backend listing re-keyed into the shape the templates expect.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageEnvelope {
    pub items: Vec<Value>,
    pub pagination: Map<String, Value>,
}

impl PageEnvelope {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds an envelope from a mapping body, reading items from
    /// `items_key`. Absent or non-mapping bodies yield an empty envelope; a
    /// mapping without the key yields no items.
    pub fn from_listing(response: ApiResult<Value>, items_key: &str) -> Self {
        match response {
            ApiResult::Success(Value::Object(body)) => Self::from_body(body, items_key),
            _ => Self::empty(),
        }
    }

    /// Like [`PageEnvelope::from_listing`] but the whole body is discarded
    /// unless it carries `items_key`.
    pub fn from_keyed(response: ApiResult<Value>, items_key: &str) -> Self {
        match response {
            ApiResult::Success(Value::Object(body)) if body.contains_key(items_key) => {
                Self::from_body(body, items_key)
            }
            _ => Self::empty(),
        }
    }

    fn from_body(mut body: Map<String, Value>, items_key: &str) -> Self {
        let items = match body.remove(items_key) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        };
        let pagination = match body.remove("pagination") {
            Some(Value::Object(pagination)) => pagination,
            _ => Map::new(),
        };

        Self { items, pagination }
    }

    /// Total number of records reported by the backend, when present.
    pub fn total(&self) -> Option<u64> {
        ["total", "total_count"]
            .iter()
            .find_map(|key| self.pagination.get(*key).and_then(Value::as_u64))
    }

    /// Page-link strip for rendering, e.g. `[1, 2, None, 6, 7, 8, None, 19, 20]`.
    ///
    /// Empty when the backend did not report a total or the page size is not
    /// positive.
    pub fn page_links(&self, current_page: i64, per_page: i64) -> Vec<Option<usize>> {
        let (Some(total), Ok(per_page)) = (self.total(), u64::try_from(per_page)) else {
            return vec![];
        };
        if per_page == 0 {
            return vec![];
        }

        let total_pages = usize::try_from(total.div_ceil(per_page)).unwrap_or(usize::MAX);
        let current_page = usize::try_from(current_page).unwrap_or(0).max(1);

        get_pages(total_pages, current_page, 2, 2, 4, 2)
    }
}
