// core/src/model/product.rs

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

/// Response message for a create candidate with a missing or falsy field.
pub const MISSING_FIELDS_MESSAGE: &str = "Please provide all fields";

/// Store-generated product identifier.
///
/// Parsing is a purely syntactic check; a well-formed id says nothing about
/// whether a record with that id exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
  pub fn generate() -> Self {
    Self(Uuid::new_v4())
  }

  /// Returns `None` when `raw` does not have the store's identifier shape.
  pub fn parse(raw: &str) -> Option<Self> {
    Uuid::parse_str(raw).ok().map(Self)
  }
}

impl fmt::Display for ProductId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// A persisted product as the store returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
  #[serde(rename = "_id")]
  pub id: ProductId,
  pub name: String,
  pub price: f64,
  pub image: String,
  #[serde(rename = "createdAt")]
  pub created_at: DateTime<Utc>,
  #[serde(rename = "updatedAt")]
  pub updated_at: DateTime<Utc>,
}

/// Create candidate as received from a caller.
///
/// Every field is optional so that an incomplete body reaches validation
/// instead of failing to decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, deserialize_with = "deserialize_price", skip_serializing_if = "Option::is_none")]
  pub price: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image: Option<String>,
}

/// A create candidate that passed validation; the only input `insert` accepts.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
  pub name: String,
  pub price: f64,
  pub image: String,
}

impl NewProduct {
  pub fn new(name: impl Into<String>, price: f64, image: impl Into<String>) -> Self {
    Self {
      name: Some(name.into()),
      price: Some(price),
      image: Some(image.into()),
    }
  }

  /// Requires all three fields to be present and truthy: non-empty strings
  /// and a non-zero price. Negative prices pass.
  pub fn validate(&self) -> Result<ProductDraft, &'static str> {
    let name = self.name.as_deref().filter(|s| !s.is_empty());
    let price = self.price.filter(|p| *p != 0.0 && !p.is_nan());
    let image = self.image.as_deref().filter(|s| !s.is_empty());

    match (name, price, image) {
      (Some(name), Some(price), Some(image)) => Ok(ProductDraft {
        name: name.to_string(),
        price,
        image: image.to_string(),
      }),
      _ => Err(MISSING_FIELDS_MESSAGE),
    }
  }
}

/// Update candidate. Only the fields that are present get written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, deserialize_with = "deserialize_price", skip_serializing_if = "Option::is_none")]
  pub price: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image: Option<String>,
}

impl ProductPatch {
  pub fn price(price: f64) -> Self {
    Self {
      price: Some(price),
      ..Self::default()
    }
  }

  /// Rejects present-but-empty text fields. Only enforced when updates run in
  /// strict mode; by default a patch may blank out `name` or `image`.
  pub fn validate_present(&self) -> Result<(), &'static str> {
    let blank = |field: &Option<String>| field.as_deref().is_some_and(str::is_empty);
    if blank(&self.name) || blank(&self.image) {
      return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok(())
  }

  /// Writes the present fields onto `product`. Timestamps are the caller's job.
  pub fn apply_to(&self, product: &mut Product) {
    if let Some(name) = &self.name {
      product.name = name.clone();
    }
    if let Some(price) = self.price {
      product.price = price;
    }
    if let Some(image) = &self.image {
      product.image = image.clone();
    }
  }
}

/// Accepts a JSON number or a numeric string; forms submit prices as text.
/// A blank string is treated as absent.
fn deserialize_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
  D: Deserializer<'de>,
{
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum RawPrice {
    Number(f64),
    Text(String),
  }

  match Option::<RawPrice>::deserialize(deserializer)? {
    None => Ok(None),
    Some(RawPrice::Number(value)) => Ok(Some(value)),
    Some(RawPrice::Text(text)) => {
      let trimmed = text.trim();
      if trimmed.is_empty() {
        return Ok(None);
      }
      trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(Some)
        .ok_or_else(|| de::Error::custom(format!("invalid price `{}`", text)))
    }
  }
}
