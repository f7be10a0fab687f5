// core/src/client/http.rs

//! `CatalogApi` over HTTP with `reqwest`.

use super::api::{CatalogApi, ClientError, ClientResult};
use crate::envelope::Envelope;
use crate::model::{NewProduct, Product, ProductPatch};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
  http: Client,
  base: Url,
}

impl HttpCatalogApi {
  /// `base_url` points at the products resource root, e.g.
  /// `http://localhost:5000/api/products`. A trailing slash is ignored.
  pub fn new(base_url: &str) -> ClientResult<Self> {
    Self::with_client(Client::new(), base_url)
  }

  pub fn with_client(http: Client, base_url: &str) -> ClientResult<Self> {
    let invalid = |reason: String| ClientError::InvalidBaseUrl {
      url: base_url.to_string(),
      reason,
    };

    let mut base = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    base
      .path_segments_mut()
      .map_err(|_| invalid("URL cannot be a base".to_string()))?
      .pop_if_empty();
    Ok(Self { http, base })
  }

  pub fn base_url(&self) -> &Url {
    &self.base
  }

  fn item_url(&self, id: &str) -> Url {
    let mut url = self.base.clone();
    // `new` already rejected cannot-be-a-base URLs.
    if let Ok(mut segments) = url.path_segments_mut() {
      segments.push(id);
    }
    url
  }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<Envelope<T>> {
  let status = response.status();
  let envelope = response.json::<Envelope<T>>().await?;
  debug!(%status, success = envelope.success, "Catalog responded.");
  Ok(envelope)
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
  #[instrument(name = "HttpCatalogApi::list", skip(self))]
  async fn list(&self) -> ClientResult<Envelope<Vec<Product>>> {
    let response = self.http.get(self.base.clone()).send().await?;
    decode(response).await
  }

  #[instrument(name = "HttpCatalogApi::create", skip_all)]
  async fn create(&self, candidate: &NewProduct) -> ClientResult<Envelope<Product>> {
    let response = self.http.post(self.base.clone()).json(candidate).send().await?;
    decode(response).await
  }

  #[instrument(name = "HttpCatalogApi::update", skip(self, patch))]
  async fn update(&self, id: &str, patch: &ProductPatch) -> ClientResult<Envelope<Option<Product>>> {
    let response = self.http.put(self.item_url(id)).json(patch).send().await?;
    decode(response).await
  }

  #[instrument(name = "HttpCatalogApi::delete", skip(self))]
  async fn delete(&self, id: &str) -> ClientResult<Envelope<()>> {
    let response = self.http.delete(self.item_url(id)).send().await?;
    decode(response).await
  }
}
