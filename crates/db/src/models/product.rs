//! Product entity model, transfer object, and the mapping between them.

use catalog_core::error::CoreError;
use catalog_core::types::DbId;
use catalog_core::validation::{not_blank, FieldError, MSG_NOT_NEGATIVE, MSG_NOT_NULL};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Maximum length of `name` (characters).
pub const MAX_NAME_LENGTH: u64 = 100;
/// Maximum length of `description` (characters).
pub const MAX_DESCRIPTION_LENGTH: u64 = 1000;

/// A row from the `products` table.
///
/// `id` is `None` until the store has inserted the row.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Product {
    pub id: Option<DbId>,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// API-facing shape of a product, used for both requests and responses.
///
/// Missing or `null` `name`/`description` decode as empty strings so they
/// surface as field errors instead of a decode failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductDto {
    #[serde(default)]
    pub id: Option<DbId>,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        custom(function = "not_blank"),
        length(min = 2, max = MAX_NAME_LENGTH, message = "size must be between 2 and 100")
    )]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        custom(function = "not_blank"),
        length(min = 2, max = MAX_DESCRIPTION_LENGTH, message = "size must be between 2 and 1000")
    )]
    pub description: String,

    #[serde(default)]
    #[validate(
        required(message = "must not be null"),
        range(min = 0.0, message = "must be greater than or equal to 0")
    )]
    pub price: Option<f64>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ProductDto {
    pub fn new(
        id: Option<DbId>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price: Some(price),
        }
    }
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: Some(product.price),
        }
    }
}

impl TryFrom<ProductDto> for Product {
    type Error = CoreError;

    /// Fails only for a transfer object that skipped validation and has no price.
    fn try_from(dto: ProductDto) -> Result<Self, Self::Error> {
        let price = dto
            .price
            .ok_or_else(|| CoreError::Validation(vec![FieldError::new("price", MSG_NOT_NULL)]))?;
        if price < 0.0 {
            return Err(CoreError::Validation(vec![FieldError::new(
                "price",
                MSG_NOT_NEGATIVE,
            )]));
        }
        Ok(Self {
            id: dto.id,
            name: dto.name,
            description: dto.description,
            price,
        })
    }
}
