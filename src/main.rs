use std::env;

use config::Config;
use dotenvy::dotenv;

use filings_frontend::models::config::ServerConfig;

/// Environment variables honoured for the backend URLs in addition to the
/// `APP_` prefixed ones.
const API_URL_OVERRIDES: [(&str, &str); 2] = [
    ("api_base_url", "API_BASE_URL"),
    ("api_base_url_client", "API_BASE_URL_CLIENT"),
];

fn load_config() -> Result<ServerConfig, config::ConfigError> {
    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let mut builder = Config::builder()
        // Add `./config/default.yaml`
        .add_source(config::File::with_name("config/default"))
        // Add environment-specific overrides
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        // Add settings from the environment (with a prefix of APP)
        .add_source(config::Environment::with_prefix("APP"));

    for (key, variable) in API_URL_OVERRIDES {
        builder = builder.set_override_option(key, env::var(variable).ok())?;
    }

    builder.build()?.try_deserialize::<ServerConfig>()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config = match load_config() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    filings_frontend::run(server_config).await
}
