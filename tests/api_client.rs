use std::time::Duration;

use filings_frontend::api::{ApiResult, FilingsApi, HttpFilingsApi};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(uri: &str) -> HttpFilingsApi {
    HttpFilingsApi::new(uri, Duration::from_secs(5)).expect("client should build")
}

fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

#[actix_web::test]
async fn success_returns_parsed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/filings"))
        .and(query_param("limit", "50"))
        .and(query_param("offset", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"filings": []})))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server.uri())
        .call("/filings", &params(&[("limit", "50"), ("offset", "100")]))
        .await;

    assert_eq!(result, ApiResult::Success(json!({"filings": []})));
}

#[actix_web::test]
async fn endpoint_query_string_is_sent_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/holdings/0001067983-24-000006"))
        .and(query_param("limit", "25"))
        .and(query_param("offset", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"holdings": []})))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server.uri())
        .call("/holdings/0001067983-24-000006?limit=25&offset=50", &[])
        .await;

    assert!(!result.is_absent());
}

#[actix_web::test]
async fn trailing_slash_in_base_url_is_ignored() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/comparisons"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&format!("{}/", server.uri()))
        .call("/comparisons", &[])
        .await;

    assert_eq!(result, ApiResult::Success(json!([])));
}

#[actix_web::test]
async fn server_error_is_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/managers/1"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "boom"})))
        .mount(&server)
        .await;

    let result = client(&server.uri()).call("/managers/1", &[]).await;

    assert_eq!(result, ApiResult::Absent);
}

#[actix_web::test]
async fn not_found_is_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/filings/unknown"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = client(&server.uri()).call("/filings/unknown", &[]).await;

    assert_eq!(result, ApiResult::Absent);
}

#[actix_web::test]
async fn invalid_json_is_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/filings"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = client(&server.uri()).call("/filings", &[]).await;

    assert_eq!(result, ApiResult::Absent);
}

#[actix_web::test]
async fn timeout_is_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/filings"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"filings": []}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let api = HttpFilingsApi::new(server.uri(), Duration::from_millis(200))
        .expect("client should build");
    let result = api.call("/filings", &[]).await;

    assert_eq!(result, ApiResult::Absent);
}

#[actix_web::test]
async fn unreachable_backend_is_absent() {
    let result = client("http://127.0.0.1:1").call("/filings", &[]).await;

    assert_eq!(result, ApiResult::Absent);
}

#[actix_web::test]
async fn failures_are_indistinguishable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/garbage"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let api = client(&server.uri());
    let status = api.call("/status", &[]).await;
    let garbage = api.call("/garbage", &[]).await;

    assert_eq!(status, garbage);
}
