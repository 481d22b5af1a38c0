//! Request extractors that guard the JSON boundary.
//!
//! - [`accept::AcceptJson`] -- Rejects requests whose `Accept` header rules out JSON (406).
//! - [`path::ApiPath`] -- Parses path parameters, reporting failures as JSON (400).
//! - [`validated_json::ValidatedJson`] -- Decodes a JSON body and runs its `validator` rules (400).

pub mod accept;
pub mod path;
pub mod validated_json;
