use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use tera::Tera;

use crate::api::HttpFilingsApi;
use crate::models::config::ServerConfig;
use crate::routes::api::api_holdings;
use crate::routes::compare::{show_compare, show_latest_comparison};
use crate::routes::filings::show_filing;
use crate::routes::main::{show_index, show_recent_comparisons};
use crate::routes::managers::show_manager;

pub mod api;
pub mod domain;
pub mod dto;
pub mod filters;
pub mod models;
pub mod pagination;
pub mod routes;
pub mod services;

/// Parses the templates matching `templates_dir` and registers the filters.
pub fn build_templates(templates_dir: &str) -> Result<Tera, tera::Error> {
    let mut tera = Tera::new(templates_dir)?;
    filters::register(&mut tera);
    Ok(tera)
}

/// Registers the page and API handlers.
///
/// Expects `HttpFilingsApi`, `ServerConfig` and `Tera` as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .wrap(Cors::permissive())
            .service(api_holdings),
    )
    .service(show_index)
    .service(show_manager)
    .service(show_filing)
    .service(show_compare)
    .service(show_latest_comparison)
    .service(show_recent_comparisons);
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let api = HttpFilingsApi::from_config(&server_config)
        .map_err(|e| std::io::Error::other(format!("Failed to build API client: {e}")))?;

    let tera = build_templates(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    log::info!(
        "Using filings API at {} (browser: {})",
        api.base_url(),
        server_config.api_base_url_client
    );

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .configure(configure)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(api.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
