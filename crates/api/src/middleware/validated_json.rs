use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// An Axum extractor that deserializes JSON and validates it using `validator::Validate`.
///
/// Drop-in replacement for `Json<T>`. Every violated rule is reported, so a
/// body with three bad fields yields three entries in the `errors` array.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        catalog_core::validation::validate(&value)?;
        Ok(ValidatedJson(value))
    }
}
