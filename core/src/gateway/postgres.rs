// core/src/gateway/postgres.rs

//! PostgreSQL product store, using runtime-checked `sqlx` queries.

use super::{GatewayError, GatewayResult, ProductGateway};
use crate::model::{Product, ProductDraft, ProductId, ProductPatch};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{debug, info, instrument};

// Idempotent collection bootstrap. There are no versioned migrations.
const CREATE_PRODUCTS_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS products (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL,
    price DOUBLE PRECISION NOT NULL,
    image TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
)";

const PRODUCT_COLUMNS: &str = "id, name, price, image, created_at, updated_at";

#[derive(Clone)]
pub struct PgProductGateway {
  pool: PgPool,
}

impl PgProductGateway {
  /// Opens a pool against `database_url` and makes sure the `products` table exists.
  #[instrument(name = "PgProductGateway::connect", skip(database_url))]
  pub async fn connect(database_url: &str, max_connections: u32) -> GatewayResult<Self> {
    let pool = PgPoolOptions::new()
      .max_connections(max_connections)
      .connect(database_url)
      .await?;
    info!("Connected to PostgreSQL product store.");

    let gateway = Self::from_pool(pool);
    gateway.ensure_schema().await?;
    Ok(gateway)
  }

  pub fn from_pool(pool: PgPool) -> Self {
    Self { pool }
  }

  pub async fn ensure_schema(&self) -> GatewayResult<()> {
    sqlx::query(CREATE_PRODUCTS_TABLE_SQL).execute(&self.pool).await?;
    debug!("Ensured products table exists.");
    Ok(())
  }
}

#[async_trait]
impl ProductGateway for PgProductGateway {
  async fn insert(&self, draft: ProductDraft) -> GatewayResult<Product> {
    let sql = format!(
      "INSERT INTO products ({PRODUCT_COLUMNS}) VALUES ($1, $2, $3, $4, now(), now()) RETURNING {PRODUCT_COLUMNS}"
    );
    sqlx::query_as::<_, Product>(&sql)
      .bind(ProductId::generate())
      .bind(draft.name)
      .bind(draft.price)
      .bind(draft.image)
      .fetch_one(&self.pool)
      .await
      .map_err(GatewayError::from)
  }

  async fn find_all(&self) -> GatewayResult<Vec<Product>> {
    let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at ASC, id ASC");
    sqlx::query_as::<_, Product>(&sql)
      .fetch_all(&self.pool)
      .await
      .map_err(GatewayError::from)
  }

  async fn replace_by_id(&self, id: ProductId, patch: ProductPatch) -> GatewayResult<Option<Product>> {
    let sql = format!(
      "UPDATE products SET \
         name = COALESCE($2, name), \
         price = COALESCE($3, price), \
         image = COALESCE($4, image), \
         updated_at = now() \
       WHERE id = $1 RETURNING {PRODUCT_COLUMNS}"
    );
    sqlx::query_as::<_, Product>(&sql)
      .bind(id)
      .bind(patch.name)
      .bind(patch.price)
      .bind(patch.image)
      .fetch_optional(&self.pool)
      .await
      .map_err(GatewayError::from)
  }

  async fn delete_by_id(&self, id: ProductId) -> GatewayResult<bool> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await?;
    Ok(result.rows_affected() > 0)
  }
}
