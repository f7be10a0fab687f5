// server/src/web/routes.rs

use actix_web::{error, web, HttpRequest};

use crate::errors::AppError;
use crate::web::handlers::product_handlers;

// Liveness probe; does not touch the product store.
async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// JSON extractor settings: undecodable bodies answer with the failure envelope
/// instead of actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
  web::JsonConfig::default().error_handler(|err: error::JsonPayloadError, req: &HttpRequest| {
    tracing::warn!(path = %req.path(), error = %err, "Rejected request body.");
    AppError::InvalidBody(err.to_string()).into()
  })
}

// This function will be called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.app_data(json_config()).service(
    web::scope("/api")
      .route("/health", web::get().to(health_check_handler))
      .service(
        web::scope("/products")
          .route("", web::get().to(product_handlers::list_products_handler))
          .route("", web::post().to(product_handlers::create_product_handler))
          // Collection root answers with or without the trailing slash.
          .route("/", web::get().to(product_handlers::list_products_handler))
          .route("/", web::post().to(product_handlers::create_product_handler))
          .route("/{id}", web::put().to(product_handlers::update_product_handler))
          .route("/{id}", web::delete().to(product_handlers::delete_product_handler)),
      ),
  );
}
