// tests/client_store_http.rs
mod common;
use actix_web::{web, App, HttpServer};
use catalog::client::{HttpCatalogApi, ProductStore};
use catalog::{NewProduct, ProductPatch};
use catalog_server::web::configure_app_routes;
use common::*;

/// Serves the real routes on an ephemeral port and returns the products URL.
async fn spawn_server() -> (String, actix_web::dev::ServerHandle) {
  let state = memory_state();
  let server = HttpServer::new(move || {
    App::new()
      .app_data(web::Data::new(state.clone()))
      .configure(configure_app_routes)
  })
  .workers(1)
  .bind(("127.0.0.1", 0))
  .expect("bind ephemeral port");
  let addr = server.addrs()[0];
  let server = server.run();
  let handle = server.handle();
  actix_web::rt::spawn(server);
  (format!("http://{}/api/products", addr), handle)
}

#[actix_web::test]
async fn test_store_round_trip_over_http() {
  setup_tracing();
  let (base_url, handle) = spawn_server().await;
  let mut store = ProductStore::new(HttpCatalogApi::new(&base_url).unwrap());

  store.fetch_products().await.unwrap();
  assert!(store.products().is_empty());

  let created = store
    .create_product(NewProduct::new("Chair", 49.99, "http://x/img.png"))
    .await;
  assert!(created.success, "{:?}", created);
  assert_eq!(store.products().len(), 1);
  let id = store.products()[0].id.to_string();

  let updated = store.update_product(&id, ProductPatch::price(59.99)).await;
  assert!(updated.success);
  assert_eq!(store.products()[0].price, 59.99);

  let rejected = store.update_product("not-an-id", ProductPatch::price(1.0)).await;
  assert!(!rejected.success);
  assert_eq!(rejected.message, "Invalid Product ID");

  let deleted = store.delete_product(&id).await;
  assert!(deleted.success);
  assert_eq!(deleted.message, "Product deleted successfully");
  assert!(store.products().is_empty());

  // A fresh mirror agrees with the server.
  let mut second = ProductStore::new(HttpCatalogApi::new(&format!("{}/", base_url)).unwrap());
  second.fetch_products().await.unwrap();
  assert!(second.products().is_empty());

  handle.stop(true).await;
}

#[actix_web::test]
async fn test_unreachable_server_yields_failed_outcome() {
  setup_tracing();
  let (base_url, handle) = spawn_server().await;
  handle.stop(true).await;

  let mut store = ProductStore::new(HttpCatalogApi::new(&base_url).unwrap());
  let outcome = store
    .create_product(NewProduct::new("Chair", 49.99, "http://x/img.png"))
    .await;
  assert!(!outcome.success);
  assert!(store.products().is_empty());
}
