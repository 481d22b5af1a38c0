//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Serialize + Deserialize + Validate` transfer object exposed over HTTP
//! - Pure conversions between the two

pub mod product;
