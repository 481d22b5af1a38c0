//! Handlers for the `/products` resource.

use axum::extract::{OriginalUri, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::error::ensure_ids_match;
use catalog_core::types::DbId;
use catalog_db::models::product::ProductDto;

use crate::error::{AppError, AppResult};
use crate::middleware::accept::AcceptJson;
use crate::middleware::path::ApiPath;
use crate::middleware::validated_json::ValidatedJson;
use crate::state::AppState;

/// GET /api/products
pub async fn list(
    _: AcceptJson,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProductDto>>> {
    let products = state.products.list_all().await?;
    Ok(Json(products))
}

/// GET /api/products/{id}
pub async fn get_by_id(
    _: AcceptJson,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<ProductDto>> {
    let product = state.products.get_by_id(id).await?;
    Ok(Json(product))
}

/// POST /api/products
///
/// Responds with 201 and a `Location` header pointing at the new resource.
pub async fn create(
    _: AcceptJson,
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    ValidatedJson(input): ValidatedJson<ProductDto>,
) -> AppResult<impl IntoResponse> {
    let product = state.products.create(input).await?;
    let id = product
        .id
        .ok_or_else(|| AppError::InternalError("Stored product has no id".into()))?;

    let location = format!("{}/{id}", uri.path().trim_end_matches('/'));
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(product)))
}

/// PUT /api/products/{id}
///
/// The body `id` must equal the path `id`; otherwise the request is rejected
/// before the service is consulted.
pub async fn update(
    _: AcceptJson,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<ProductDto>,
) -> AppResult<Json<ProductDto>> {
    if let Err(err) = ensure_ids_match(id, input.id) {
        tracing::warn!(path_id = id, body_id = ?input.id, "Update rejected: ids in path and body differ");
        return Err(err.into());
    }

    let product = state.products.update(id, input).await?;
    Ok(Json(product))
}

/// DELETE /api/products/{id}
pub async fn delete(
    _: AcceptJson,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    state.products.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
