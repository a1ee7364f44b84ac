//! Resolution of filing comparisons.
//!
//! The backend may compare an amendment in place of the filing that was
//! asked for. It reports this through `metadata.amendment_used`, which is
//! surfaced to templates as `filing_swapped` so the page can disclose it.

use serde_json::Value;

use crate::api::{ApiResult, FilingsApi, path_segment};
use crate::domain::filing::ComparisonMetadata;
use crate::dto::compare::{CompareQuery, ComparePageData, LatestComparisonPageData};

/// A comparison payload returned by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// Backend payload, forwarded to templates unchanged.
    pub payload: Value,
    pub metadata: ComparisonMetadata,
}

impl Comparison {
    pub fn new(payload: Value) -> Self {
        let metadata = ComparisonMetadata::from_payload(&payload);
        Self { payload, metadata }
    }

    pub fn filing_swapped(&self) -> Option<Value> {
        self.metadata.swapped_filing().cloned()
    }
}

/// Result of resolving a comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonOutcome {
    /// One of the accession numbers was missing, nothing was asked of the
    /// backend.
    NotRequested,
    /// The backend did not return a comparison. Unreachable backends and
    /// unknown filings are not told apart.
    Unavailable,
    Resolved(Comparison),
}

impl ComparisonOutcome {
    fn from_response(response: ApiResult<Value>) -> Self {
        match response {
            ApiResult::Success(payload) => ComparisonOutcome::Resolved(Comparison::new(payload)),
            ApiResult::Absent => ComparisonOutcome::Unavailable,
        }
    }

    pub fn comparison(&self) -> Option<&Comparison> {
        match self {
            ComparisonOutcome::Resolved(comparison) => Some(comparison),
            _ => None,
        }
    }

    pub fn filing_swapped(&self) -> Option<Value> {
        self.comparison().and_then(Comparison::filing_swapped)
    }

    pub fn into_payload(self) -> Option<Value> {
        match self {
            ComparisonOutcome::Resolved(comparison) => Some(comparison.payload),
            _ => None,
        }
    }
}

/// Compares two explicitly named filings.
///
/// No backend call is made unless both accession numbers are non-empty.
/// Each accession number is sent as a single path segment; dot segments are
/// reported as unavailable without a call.
pub async fn compare_filings<A>(api: &A, prev: &str, latest: &str) -> ComparisonOutcome
where
    A: FilingsApi + ?Sized,
{
    if prev.is_empty() || latest.is_empty() {
        return ComparisonOutcome::NotRequested;
    }

    let (Some(prev_segment), Some(latest_segment)) = (path_segment(prev), path_segment(latest))
    else {
        log::warn!("Rejected comparison of {prev:?} and {latest:?}");
        return ComparisonOutcome::Unavailable;
    };

    let response = api
        .call(&format!("/analysis/{prev_segment}/{latest_segment}"), &[])
        .await;
    ComparisonOutcome::from_response(response)
}

/// Compares the two most recent filings of a company.
pub async fn compare_latest<A>(api: &A, cik: u64) -> ComparisonOutcome
where
    A: FilingsApi + ?Sized,
{
    let response = api
        .call(&format!("/company/{cik}/compare/latest"), &[])
        .await;
    ComparisonOutcome::from_response(response)
}

fn normalize(value: Option<String>) -> String {
    value.map(|s| s.trim().to_string()).unwrap_or_default()
}

/// Loads the data for the explicit comparison page.
pub async fn load_compare_page<A>(api: &A, query: CompareQuery) -> ComparePageData
where
    A: FilingsApi + ?Sized,
{
    let prev_accession = normalize(query.prev);
    let latest_accession = normalize(query.latest);

    let outcome = compare_filings(api, &prev_accession, &latest_accession).await;
    let requested = outcome != ComparisonOutcome::NotRequested;
    let filing_swapped = outcome.filing_swapped();

    if let Some(swapped) = &filing_swapped {
        log::info!(
            "Comparison {prev_accession}..{latest_accession} used amendment {swapped}"
        );
    }

    ComparePageData {
        comparison: outcome.into_payload(),
        prev_accession,
        latest_accession,
        filing_swapped,
        requested,
    }
}

/// Loads the comparison of a company's latest two filings.
///
/// The accession numbers are read from the comparison metadata for display.
pub async fn load_latest_comparison_page<A>(api: &A, cik: u64) -> LatestComparisonPageData
where
    A: FilingsApi + ?Sized,
{
    let outcome = compare_latest(api, cik).await;

    let (prev_accession, latest_accession) = match outcome.comparison() {
        Some(comparison) => (
            comparison.metadata.previous_accession().map(str::to_string),
            comparison.metadata.latest_accession().map(str::to_string),
        ),
        None => (None, None),
    };
    let filing_swapped = outcome.filing_swapped();

    LatestComparisonPageData {
        cik,
        comparison: outcome.into_payload(),
        prev_accession,
        latest_accession,
        filing_swapped,
    }
}
