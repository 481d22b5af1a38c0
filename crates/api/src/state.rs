use std::sync::Arc;

use crate::config::ServerConfig;
use crate::service::ProductService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. `None` when running on the in-memory store.
    pub pool: Option<catalog_db::DbPool>,
    /// Server configuration (CORS origins, timeouts).
    pub config: Arc<ServerConfig>,
    /// Product use cases over the configured store.
    pub products: ProductService,
}
