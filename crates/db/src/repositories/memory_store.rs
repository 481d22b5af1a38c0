//! In-process [`ProductStore`] backed by an ordered map.

use std::collections::BTreeMap;

use async_trait::async_trait;
use catalog_core::types::DbId;
use tokio::sync::RwLock;

use super::ProductStore;
use crate::models::product::Product;

#[derive(Debug, Default)]
struct Inner {
    rows: BTreeMap<DbId, Product>,
    last_id: DbId,
}

/// Memory-backed store. Ids start at 1 and are never reused.
///
/// Operations never fail. Saving with an id that has no row inserts it under
/// that id, mirroring a plain upsert.
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    inner: RwLock<Inner>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows.
    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn find_all(&self) -> Result<Vec<Product>, sqlx::Error> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        Ok(self.inner.read().await.rows.contains_key(&id))
    }

    async fn save(&self, mut product: Product) -> Result<Product, sqlx::Error> {
        let mut inner = self.inner.write().await;
        let id = match product.id {
            Some(id) => {
                inner.last_id = inner.last_id.max(id);
                id
            }
            None => {
                inner.last_id += 1;
                inner.last_id
            }
        };
        product.id = Some(id);
        inner.rows.insert(id, product.clone());
        Ok(product)
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), sqlx::Error> {
        self.inner.write().await.rows.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str) -> Product {
        Product {
            id: None,
            name: name.to_string(),
            description: format!("{name} description"),
            price: 1.5,
        }
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let store = MemoryProductStore::new();
        let first = store.save(product("Pencil")).await.unwrap();
        let second = store.save(product("Eraser")).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn save_with_id_replaces_row() {
        let store = MemoryProductStore::new();
        let created = store.save(product("Pencil")).await.unwrap();

        let mut changed = created.clone();
        changed.description = "Metal pencil".into();
        let saved = store.save(changed).await.unwrap();

        assert_eq!(saved.id, created.id);
        assert_eq!(store.len().await, 1);
        let found = store.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(found.description, "Metal pencil");
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryProductStore::new();
        store.save(product("A1")).await.unwrap();
        store.save(product("B2")).await.unwrap();
        store.delete_by_id(2).await.unwrap();

        let next = store.save(product("C3")).await.unwrap();
        assert_eq!(next.id, Some(3));
    }

    #[tokio::test]
    async fn delete_missing_id_is_noop() {
        let store = MemoryProductStore::new();
        store.delete_by_id(42).await.unwrap();
        assert!(store.is_empty().await);
        assert!(!store.exists_by_id(42).await.unwrap());
    }

    #[tokio::test]
    async fn find_all_is_ordered_by_id() {
        let store = MemoryProductStore::new();
        for name in ["Cc", "Aa", "Bb"] {
            store.save(product(name)).await.unwrap();
        }
        let ids: Vec<_> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id.unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
