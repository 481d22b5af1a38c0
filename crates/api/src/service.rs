//! Product use cases on top of a [`ProductStore`].
//!
//! The service maps between [`ProductDto`] and the stored [`Product`] and turns
//! missing ids into [`CoreError::NotFound`]. Existence checks run right before
//! the mutating store call; the pair is not atomic, so two concurrent callers
//! on the same id may see a lost update or a spurious not-found.

use std::sync::Arc;

use catalog_core::error::CoreError;
use catalog_core::types::DbId;
use catalog_db::models::product::{Product, ProductDto};
use catalog_db::repositories::ProductStore;

use crate::error::AppResult;

const ENTITY: &str = "Product";

#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> AppResult<Vec<ProductDto>> {
        let products = self.store.find_all().await?;
        tracing::debug!(count = products.len(), "Listed products");
        Ok(products.into_iter().map(ProductDto::from).collect())
    }

    pub async fn get_by_id(&self, id: DbId) -> AppResult<ProductDto> {
        let product = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
        Ok(product.into())
    }

    /// Persist a new product. Any id on `dto` is ignored.
    pub async fn create(&self, dto: ProductDto) -> AppResult<ProductDto> {
        let mut record = Product::try_from(dto)?;
        record.id = None;
        let saved = self.store.save(record).await?;
        tracing::info!(product_id = ?saved.id, "Product created");
        Ok(saved.into())
    }

    /// Replace name, description and price of the product stored under `id`.
    pub async fn update(&self, id: DbId, dto: ProductDto) -> AppResult<ProductDto> {
        let mut record = Product::try_from(dto)?;
        self.ensure_exists(id).await?;
        record.id = Some(id);
        let saved = self.store.save(record).await?;
        tracing::info!(product_id = id, "Product updated");
        Ok(saved.into())
    }

    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        self.ensure_exists(id).await?;
        self.store.delete_by_id(id).await?;
        tracing::info!(product_id = id, "Product deleted");
        Ok(())
    }

    async fn ensure_exists(&self, id: DbId) -> AppResult<()> {
        if self.store.exists_by_id(id).await? {
            Ok(())
        } else {
            Err(CoreError::NotFound { entity: ENTITY, id }.into())
        }
    }
}
