use actix_web::{Responder, get, web};
use serde::Deserialize;
use tera::Tera;

use crate::api::HttpFilingsApi;
use crate::models::config::ServerConfig;
use crate::pagination::HoldingsPageRequest;
use crate::routes::{base_context, render_template};
use crate::services::filings as filings_service;

#[derive(Deserialize)]
struct FilingQueryParams {
    page: Option<String>,
    limit: Option<String>,
}

#[get("/filing/{accession_number}")]
pub async fn show_filing(
    accession_number: web::Path<String>,
    params: web::Query<FilingQueryParams>,
    api: web::Data<HttpFilingsApi>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let accession_number = accession_number.into_inner();
    let request = HoldingsPageRequest::from_query(params.page.as_deref(), params.limit.as_deref());
    let data = filings_service::load_filing_page(api.get_ref(), &accession_number, request).await;

    let mut context = base_context("filing", &server_config);
    context.insert("accession_number", &accession_number);
    context.insert("filing", &data.filing);
    context.insert("holdings", &data.holdings);
    context.insert("pagination", &data.pagination);
    context.insert("pages", &data.page_links);
    context.insert("current_page_number", &data.current_page);
    context.insert("limit", &data.limit);

    render_template(&tera, "filings/show.html", &context)
}
