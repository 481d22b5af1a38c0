//! Product catalog API server library.
//!
//! Exposes the building blocks (config, state, service, error handling,
//! extractors, routes) so integration tests and the binary entrypoint can
//! both access them.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod service;
pub mod state;
