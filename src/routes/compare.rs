use actix_web::{Responder, get, web};
use tera::Tera;

use crate::api::HttpFilingsApi;
use crate::dto::compare::CompareQuery;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, render_template};
use crate::services::compare as compare_service;

#[get("/compare")]
pub async fn show_compare(
    params: web::Query<CompareQuery>,
    api: web::Data<HttpFilingsApi>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = compare_service::load_compare_page(api.get_ref(), params.into_inner()).await;

    let mut context = base_context("compare", &server_config);
    context.insert("comparison", &data.comparison);
    context.insert("prev_accession", &data.prev_accession);
    context.insert("latest_accession", &data.latest_accession);
    context.insert("filing_swapped", &data.filing_swapped);
    context.insert("requested", &data.requested);

    render_template(&tera, "compare/show.html", &context)
}

#[get("/company/latest/{cik}")]
pub async fn show_latest_comparison(
    cik: web::Path<u64>,
    api: web::Data<HttpFilingsApi>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = compare_service::load_latest_comparison_page(api.get_ref(), cik.into_inner()).await;

    let mut context = base_context("compare", &server_config);
    context.insert("cik", &data.cik);
    context.insert("comparison", &data.comparison);
    context.insert("prev_accession", &data.prev_accession);
    context.insert("latest_accession", &data.latest_accession);
    context.insert("filing_swapped", &data.filing_swapped);

    render_template(&tera, "compare/latest.html", &context)
}
