//! Repository for the `products` table.

use async_trait::async_trait;
use catalog_core::types::DbId;
use sqlx::PgPool;

use super::ProductStore;
use crate::models::product::Product;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, price";

/// PostgreSQL-backed [`ProductStore`].
#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, product: &Product) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (name, description, price)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .fetch_one(&self.pool)
            .await
    }

    /// Fails with `RowNotFound` if the row vanished since the caller checked for it.
    async fn replace(&self, id: DbId, product: &Product) -> Result<Product, sqlx::Error> {
        let query = format!(
            "UPDATE products SET
                name = $2,
                description = $3,
                price = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .fetch_one(&self.pool)
            .await
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn find_all(&self) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY id");
        sqlx::query_as::<_, Product>(&query)
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn exists_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }

    async fn save(&self, product: Product) -> Result<Product, sqlx::Error> {
        match product.id {
            None => self.insert(&product).await,
            Some(id) => self.replace(id, &product).await,
        }
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        tracing::debug!(product_id = id, rows = result.rows_affected(), "Deleted product row");
        Ok(())
    }
}
