//! Request handlers.
//!
//! Each submodule provides async handler functions (list, get_by_id, create,
//! update, delete) for a single resource. Handlers delegate to the service in
//! [`crate::state::AppState`] and map errors via [`crate::error::AppError`].

pub mod product;
