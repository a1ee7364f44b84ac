use serde_json::Value;

use crate::api::FilingsApi;
use crate::dto::main::{IndexPageData, RecentComparisonsPageData};
use crate::pagination::{PageEnvelope, PageRequest};

/// Loads the latest filings listing for the main index page.
///
/// An unavailable backend renders as an empty listing.
pub async fn load_index_page<A>(api: &A, request: PageRequest) -> IndexPageData
where
    A: FilingsApi + ?Sized,
{
    let response = api.call("/filings", &request.to_params()).await;
    let envelope = PageEnvelope::from_listing(response, "filings");
    let page_links = envelope.page_links(request.page, request.per_page);

    IndexPageData {
        filings: envelope.items,
        pagination: envelope.pagination,
        page_links,
        current_page: request.page,
        per_page: request.per_page,
    }
}

/// Loads the recently computed comparisons.
pub async fn load_recent_comparisons<A>(api: &A) -> RecentComparisonsPageData
where
    A: FilingsApi + ?Sized,
{
    let comparisons = api
        .call("/comparisons", &[])
        .await
        .decode::<Vec<Value>>("/comparisons")
        .unwrap_or_else(Vec::new);

    RecentComparisonsPageData { comparisons }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::ApiResult;
    use crate::api::mock::MockFilingsBackend;

    #[actix_web::test]
    async fn index_translates_page_to_offset() {
        let mut api = MockFilingsBackend::new();
        api.expect_endpoint(
            "/filings",
            &[("limit", "50"), ("offset", "100")],
            ApiResult::Success(json!({
                "filings": [{"accession_number": "0000950123-24-001234"}],
                "pagination": {"total": 151, "limit": 50, "offset": 100},
            })),
        );

        let data = load_index_page(&api, PageRequest::new(3, 50)).await;

        assert_eq!(data.filings.len(), 1);
        assert_eq!(data.pagination["offset"], 100);
        assert_eq!(data.current_page, 3);
        assert_eq!(data.per_page, 50);
        assert_eq!(data.page_links, vec![Some(1), Some(2), Some(3), Some(4)]);
    }

    #[actix_web::test]
    async fn index_renders_empty_listing_when_backend_is_absent() {
        let mut api = MockFilingsBackend::new();
        api.expect_endpoint(
            "/filings",
            &[("limit", "50"), ("offset", "0")],
            ApiResult::Absent,
        );

        let data = load_index_page(&api, PageRequest::default()).await;

        assert!(data.filings.is_empty());
        assert!(data.pagination.is_empty());
        assert!(data.page_links.is_empty());
    }

    #[actix_web::test]
    async fn index_is_idempotent_for_identical_requests() {
        let mut api = MockFilingsBackend::new();
        api.expect_call().times(2).returning(|_, _| {
            ApiResult::Success(json!({
                "filings": [{"accession_number": "a"}, {"accession_number": "b"}],
                "pagination": {"total": 2},
            }))
        });

        let first = load_index_page(&api, PageRequest::new(1, 10)).await;
        let second = load_index_page(&api, PageRequest::new(1, 10)).await;

        assert_eq!(first, second);
    }

    #[actix_web::test]
    async fn recent_comparisons_degrade_to_empty_list() {
        let mut api = MockFilingsBackend::new();
        api.expect_endpoint("/comparisons", &[], ApiResult::Absent);

        let data = load_recent_comparisons(&api).await;

        assert!(data.comparisons.is_empty());
    }

    #[actix_web::test]
    async fn recent_comparisons_pass_backend_list_through() {
        let mut api = MockFilingsBackend::new();
        api.expect_endpoint(
            "/comparisons",
            &[],
            ApiResult::Success(json!([{"id": 1}, {"id": 2}])),
        );

        let data = load_recent_comparisons(&api).await;

        assert_eq!(data.comparisons, vec![json!({"id": 1}), json!({"id": 2})]);
    }
}
