//! Services for a single filing and its holdings.

use serde_json::Value;

use crate::api::{FilingsApi, path_segment};
use crate::dto::filings::FilingPageData;
use crate::pagination::{DataTablesRequest, HoldingsPageRequest, PageEnvelope};

/// Loads a filing and one page of its holdings.
///
/// An accession number that cannot be sent as a single path segment renders
/// as a missing filing.
pub async fn load_filing_page<A>(
    api: &A,
    accession_number: &str,
    request: HoldingsPageRequest,
) -> FilingPageData
where
    A: FilingsApi + ?Sized,
{
    let (filing, envelope) = match path_segment(accession_number) {
        Some(segment) => {
            let filing = api
                .call(&format!("/filings/{segment}"), &[])
                .await
                .into_option();

            let holdings_endpoint = request.endpoint(&format!("/holdings/{segment}"));
            let response = api.call(&holdings_endpoint, &[]).await;
            (filing, PageEnvelope::from_keyed(response, "holdings"))
        }
        None => {
            log::warn!("Rejected filing accession number {accession_number:?}");
            (None, PageEnvelope::empty())
        }
    };
    let page_links = envelope.page_links(request.page, request.limit);

    FilingPageData {
        filing,
        holdings: envelope.items,
        pagination: envelope.pagination,
        page_links,
        current_page: request.page,
        limit: request.limit,
    }
}

/// Proxies a DataTables server-side request for a filing's holdings.
///
/// The backend body is returned untouched so the table widget receives the
/// exact DataTables response shape.
pub async fn load_holdings_table<A>(
    api: &A,
    accession_number: &str,
    request: &DataTablesRequest,
) -> Value
where
    A: FilingsApi + ?Sized,
{
    let Some(segment) = path_segment(accession_number) else {
        log::warn!("Rejected holdings accession number {accession_number:?}");
        return request.empty_response();
    };

    let response = api
        .call(&format!("/holdings/{segment}"), &request.to_params())
        .await;

    request.response_body(response)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::ApiResult;
    use crate::api::mock::MockFilingsBackend;

    const ACCESSION: &str = "0001067983-24-000006";

    #[actix_web::test]
    async fn filing_page_embeds_offset_in_holdings_path() {
        let mut api = MockFilingsBackend::new();
        api.expect_endpoint(
            format!("/filings/{ACCESSION}"),
            &[],
            ApiResult::Success(json!({"accession_number": ACCESSION, "total_value": 1000})),
        );
        api.expect_endpoint(
            format!("/holdings/{ACCESSION}?limit=25&offset=50"),
            &[],
            ApiResult::Success(json!({
                "holdings": [{"cusip": "037833100"}],
                "pagination": {"total": 60},
            })),
        );

        let data = load_filing_page(&api, ACCESSION, HoldingsPageRequest::new(3, 25)).await;

        assert_eq!(
            data.filing.as_ref().map(|filing| &filing["total_value"]),
            Some(&json!(1000))
        );
        assert_eq!(data.holdings, vec![json!({"cusip": "037833100"})]);
        assert_eq!(data.pagination["total"], 60);
        assert_eq!(data.page_links, vec![Some(1), Some(2), Some(3)]);
        assert_eq!(data.current_page, 3);
        assert_eq!(data.limit, 25);
    }

    #[actix_web::test]
    async fn filing_page_degrades_when_backend_is_absent() {
        let mut api = MockFilingsBackend::new();
        api.expect_endpoint(format!("/filings/{ACCESSION}"), &[], ApiResult::Absent);
        api.expect_endpoint(
            format!("/holdings/{ACCESSION}?limit=50&offset=0"),
            &[],
            ApiResult::Success(json!({"error": "not found"})),
        );

        let data = load_filing_page(&api, ACCESSION, HoldingsPageRequest::default()).await;

        assert_eq!(data.filing, None);
        assert!(data.holdings.is_empty());
        assert!(data.pagination.is_empty());
    }

    #[actix_web::test]
    async fn holdings_table_echoes_draw_from_backend() {
        let mut api = MockFilingsBackend::new();
        api.expect_endpoint(
            format!("/holdings/{ACCESSION}"),
            &[
                ("draw", "7"),
                ("start", "0"),
                ("length", "25"),
                ("search[value]", ""),
                ("order[0][column]", "2"),
                ("order[0][dir]", "asc"),
            ],
            ApiResult::Success(json!({
                "draw": 7,
                "recordsTotal": 40,
                "recordsFiltered": 40,
                "data": [],
            })),
        );
        let request = DataTablesRequest {
            draw: Some("7".to_string()),
            start: Some("0".to_string()),
            length: Some("25".to_string()),
            search_value: Some(String::new()),
            order_column: Some("2".to_string()),
            order_dir: Some("asc".to_string()),
        };

        let body = load_holdings_table(&api, ACCESSION, &request).await;

        assert_eq!(body["draw"], 7);
        assert_eq!(body["recordsTotal"], 40);
    }

    #[actix_web::test]
    async fn holdings_table_degrades_to_empty_datatables_payload() {
        let mut api = MockFilingsBackend::new();
        api.expect_endpoint(
            format!("/holdings/{ACCESSION}"),
            &[("draw", "3")],
            ApiResult::Absent,
        );
        let request = DataTablesRequest {
            draw: Some("3".to_string()),
            ..Default::default()
        };

        let body = load_holdings_table(&api, ACCESSION, &request).await;

        assert_eq!(
            body,
            json!({"draw": 3, "recordsTotal": 0, "recordsFiltered": 0, "data": []})
        );
    }

    #[actix_web::test]
    async fn filing_page_encodes_accession_number_as_one_segment() {
        let mut api = MockFilingsBackend::new();
        api.expect_endpoint("/filings/a%2Fb%3Fc", &[], ApiResult::Absent);
        api.expect_endpoint(
            "/holdings/a%2Fb%3Fc?limit=50&offset=0",
            &[],
            ApiResult::Absent,
        );

        let data = load_filing_page(&api, "a/b?c", HoldingsPageRequest::default()).await;

        assert_eq!(data.filing, None);
    }

    #[actix_web::test]
    async fn dot_accession_numbers_make_no_backend_call() {
        let mut api = MockFilingsBackend::new();
        api.expect_call().never();
        let request = DataTablesRequest {
            draw: Some("2".to_string()),
            ..Default::default()
        };

        let data = load_filing_page(&api, "..", HoldingsPageRequest::default()).await;
        let body = load_holdings_table(&api, ".", &request).await;

        assert_eq!(data.filing, None);
        assert!(data.holdings.is_empty());
        assert_eq!(body["draw"], 2);
        assert_eq!(body["recordsTotal"], 0);
    }
}
