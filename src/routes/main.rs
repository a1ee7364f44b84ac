use actix_web::{Responder, get, web};
use serde::Deserialize;
use tera::Tera;

use crate::api::HttpFilingsApi;
use crate::models::config::ServerConfig;
use crate::pagination::PageRequest;
use crate::routes::{base_context, render_template};
use crate::services::main as main_service;

#[derive(Deserialize)]
struct IndexQueryParams {
    page: Option<String>,
    per_page: Option<String>,
}

#[get("/")]
pub async fn show_index(
    params: web::Query<IndexQueryParams>,
    api: web::Data<HttpFilingsApi>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let request = PageRequest::from_query(params.page.as_deref(), params.per_page.as_deref());
    let data = main_service::load_index_page(api.get_ref(), request).await;

    let mut context = base_context("index", &server_config);
    context.insert("filings", &data.filings);
    context.insert("pagination", &data.pagination);
    context.insert("pages", &data.page_links);
    context.insert("current_page_number", &data.current_page);
    context.insert("per_page", &data.per_page);

    render_template(&tera, "main/index.html", &context)
}

#[get("/recent_comparisons")]
pub async fn show_recent_comparisons(
    api: web::Data<HttpFilingsApi>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = main_service::load_recent_comparisons(api.get_ref()).await;

    let mut context = base_context("recent_comparisons", &server_config);
    context.insert("comparisons", &data.comparisons);

    render_template(&tera, "main/recent_comparisons.html", &context)
}
