use actix_web::{HttpResponse, Responder, get, web};
use tera::Tera;

use crate::api::HttpFilingsApi;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, render_template};
use crate::services::{ServiceError, managers as managers_service};

#[get("/manager/{cik}")]
pub async fn show_manager(
    cik: web::Path<u64>,
    api: web::Data<HttpFilingsApi>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match managers_service::load_manager_page(api.get_ref(), cik.into_inner()).await {
        Ok(data) => {
            let mut context = base_context("manager", &server_config);
            context.insert("manager", &data.manager);
            context.insert("filings", &data.filings);

            render_template(&tera, "managers/show.html", &context)
        }
        Err(ServiceError::Unavailable(what)) => {
            log::error!("Failed to load manager page: {what} unavailable");
            HttpResponse::InternalServerError().finish()
        }
    }
}
