//! HTTP handlers rendering the gateway pages.

use actix_web::HttpResponse;
use tera::{Context, Tera};

use crate::models::config::ServerConfig;

pub mod api;
pub mod compare;
pub mod filings;
pub mod main;
pub mod managers;

/// Context shared by every page template.
pub fn base_context(current_page: &str, server_config: &ServerConfig) -> Context {
    let mut context = Context::new();
    context.insert("current_page", current_page);
    context.insert("api_url", &server_config.api_base_url_client);
    context
}

/// Renders `template` or answers 500 when rendering fails.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
