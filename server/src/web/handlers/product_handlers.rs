// server/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use catalog::{Envelope, NewProduct, ProductPatch, DELETED_MESSAGE};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = app_state.products.list().await?;
  info!("Successfully fetched {} products.", products.len());
  Ok(HttpResponse::Ok().json(Envelope::data(products)))
}

#[instrument(name = "handler::create_product", skip(app_state, req_payload))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<NewProduct>,
) -> Result<HttpResponse, AppError> {
  let product = app_state.products.create(req_payload.into_inner()).await?;
  Ok(HttpResponse::Created().json(Envelope::data(product)))
}

/// A well-formed id that matches nothing still answers 200, with `data: null`.
#[instrument(name = "handler::update_product", skip(app_state, path, req_payload), fields(product_id = %path.as_str()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  req_payload: web::Json<ProductPatch>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let updated = app_state.products.update(&product_id, req_payload.into_inner()).await?;
  Ok(HttpResponse::Ok().json(Envelope::data(updated)))
}

/// Answers success whether or not a product was actually removed.
#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_str()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  app_state.products.delete(&product_id).await?;
  Ok(HttpResponse::Ok().json(Envelope::<()>::message(DELETED_MESSAGE)))
}
