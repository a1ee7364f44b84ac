use actix_web::{HttpResponse, Responder, get, web};

use crate::api::HttpFilingsApi;
use crate::pagination::DataTablesRequest;
use crate::services::filings as filings_service;

/// DataTables data source for a filing's holdings table.
#[get("/holdings/{accession_number}")]
pub async fn api_holdings(
    accession_number: web::Path<String>,
    params: web::Query<DataTablesRequest>,
    api: web::Data<HttpFilingsApi>,
) -> impl Responder {
    let body =
        filings_service::load_holdings_table(api.get_ref(), &accession_number, &params).await;

    HttpResponse::Ok().json(body)
}
