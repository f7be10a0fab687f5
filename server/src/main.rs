// server/src/main.rs

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use anyhow::Context;

use catalog_server::config::{AppConfig, LogFormat};
use catalog_server::logging::init_tracing;
use catalog_server::state::AppState;
use catalog_server::web::configure_app_routes;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Configuration decides the log format, so it is loaded before tracing is up.
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => cfg,
    Err(e) => {
      init_tracing(LogFormat::Pretty);
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(e).context("configuration error");
    }
  };
  init_tracing(app_config.log_format);
  tracing::info!("Starting product catalog server...");
  // The database URL may carry credentials; it is never logged.
  tracing::info!(
    backend = ?app_config.store_backend,
    strict_updates = app_config.strict_updates,
    "Application configuration loaded successfully."
  );

  // The process does not serve requests without its store.
  let app_state = match AppState::initialize(app_config).await {
    Ok(state) => state,
    Err(e) => {
      tracing::error!(error = %e, "Failed to connect to the product store.");
      return Err(e).context("product store connection error");
    }
  };

  let server_address = app_state.config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("failed to bind {}", server_address))?
  .run()
  .await
  .context("server terminated with an error")
}
