//! Integration tests for `PgProductStore` against a real database.
//!
//! `#[sqlx::test]` creates a fresh database per test from `DATABASE_URL`
//! and applies the migrations before each run.

use catalog_db::models::product::Product;
use catalog_db::repositories::{PgProductStore, ProductStore};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_product(name: &str, description: &str, price: f64) -> Product {
    Product {
        id: None,
        name: name.to_string(),
        description: description.to_string(),
        price,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn save_without_id_inserts_and_assigns_id(pool: PgPool) {
    let store = PgProductStore::new(pool);
    let saved = store
        .save(new_product("Pencil", "Wooden pencil", 0.5))
        .await
        .unwrap();

    let id = saved.id.expect("store should assign an id");
    let found = store.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(found, saved);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn save_with_id_replaces_row(pool: PgPool) {
    let store = PgProductStore::new(pool);
    let created = store
        .save(new_product("Pencil", "Wooden pencil", 0.5))
        .await
        .unwrap();

    let replacement = Product {
        id: created.id,
        name: "Pencil 2.0".into(),
        description: "Metal pencil".into(),
        price: 3.4,
    };
    let updated = store.save(replacement.clone()).await.unwrap();

    assert_eq!(updated, replacement);
    assert_eq!(store.find_all().await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn save_with_unknown_id_is_row_not_found(pool: PgPool) {
    let store = PgProductStore::new(pool);
    let mut ghost = new_product("Ghost", "Never stored", 1.0);
    ghost.id = Some(999_999);

    let err = store.save(ghost).await.unwrap_err();
    assert!(matches!(err, sqlx::Error::RowNotFound));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn exists_and_delete(pool: PgPool) {
    let store = PgProductStore::new(pool);
    let created = store
        .save(new_product("Eraser", "Super eraser", 1.2))
        .await
        .unwrap();
    let id = created.id.unwrap();

    assert!(store.exists_by_id(id).await.unwrap());
    store.delete_by_id(id).await.unwrap();
    assert!(!store.exists_by_id(id).await.unwrap());

    // Deleting again is a no-op at the storage layer.
    store.delete_by_id(id).await.unwrap();
    assert!(store.find_by_id(id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_all_returns_rows_in_id_order(pool: PgPool) {
    let store = PgProductStore::new(pool);
    assert!(store.find_all().await.unwrap().is_empty());

    store.save(new_product("Pencil", "Wooden pencil", 0.5)).await.unwrap();
    store.save(new_product("Eraser", "Super eraser", 1.2)).await.unwrap();

    let names: Vec<_> = store
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Pencil", "Eraser"]);
}
