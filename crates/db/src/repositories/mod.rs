//! Product persistence behind the [`ProductStore`] trait.
//!
//! - [`PgProductStore`] -- PostgreSQL via `sqlx`.
//! - [`MemoryProductStore`] -- in-process map, used by tests and local runs.

use async_trait::async_trait;
use catalog_core::types::DbId;

use crate::models::product::Product;

pub mod memory_store;
pub mod product_repo;

pub use memory_store::MemoryProductStore;
pub use product_repo::PgProductStore;

/// CRUD operations against the product table.
///
/// Implementations perform no existence checks of their own: `save` with an
/// id replaces that row and `delete_by_id` on a missing id is a no-op.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All products ordered by id.
    async fn find_all(&self) -> Result<Vec<Product>, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, sqlx::Error>;

    async fn exists_by_id(&self, id: DbId) -> Result<bool, sqlx::Error>;

    /// Insert when `product.id` is `None` (assigning a fresh id), otherwise
    /// replace the row with that id. Returns the stored row.
    async fn save(&self, product: Product) -> Result<Product, sqlx::Error>;

    async fn delete_by_id(&self, id: DbId) -> Result<(), sqlx::Error>;
}
