//! Shared helpers for integration tests.
#![allow(dead_code)]

use actix_web::web;
use filings_frontend::api::HttpFilingsApi;
use filings_frontend::build_templates;
use filings_frontend::models::config::ServerConfig;
use tera::Tera;

pub const CLIENT_API_URL: &str = "https://filings.example.com";

/// Server config pointing at a stub backend.
pub fn test_config(backend_uri: &str) -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        templates_dir: "templates/**/*".to_string(),
        api_base_url: backend_uri.to_string(),
        api_base_url_client: CLIENT_API_URL.to_string(),
        api_timeout_secs: 5,
    }
}

/// App data expected by `filings_frontend::configure`.
pub fn app_data(
    backend_uri: &str,
) -> (
    web::Data<HttpFilingsApi>,
    web::Data<ServerConfig>,
    web::Data<Tera>,
) {
    let config = test_config(backend_uri);
    let api = HttpFilingsApi::from_config(&config).expect("client should build");
    let tera = build_templates(&config.templates_dir).expect("templates should parse");

    (
        web::Data::new(api),
        web::Data::new(config),
        web::Data::new(tera),
    )
}
