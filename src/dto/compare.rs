//! DTOs used by the comparison pages.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Query parameters accepted by the compare page.
#[derive(Debug, Default, Deserialize)]
pub struct CompareQuery {
    pub prev: Option<String>,
    pub latest: Option<String>,
}

/// Data required to render a comparison between two filings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparePageData {
    /// Comparison payload, `None` when nothing was requested or the backend
    /// did not answer.
    pub comparison: Option<Value>,
    pub prev_accession: String,
    pub latest_accession: String,
    /// Amendment marker set when the backend compared an amendment instead
    /// of the requested filing.
    pub filing_swapped: Option<Value>,
    /// `true` when both accession numbers were supplied.
    pub requested: bool,
}

/// Data required to render the latest two filings of a company.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatestComparisonPageData {
    pub cik: u64,
    pub comparison: Option<Value>,
    pub prev_accession: Option<String>,
    pub latest_accession: Option<String>,
    pub filing_swapped: Option<Value>,
}
