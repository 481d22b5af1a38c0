//! Field-level validation helpers built on the `validator` crate.
//!
//! Transfer objects derive [`validator::Validate`]; the HTTP layer calls
//! [`validate`] and reports every violated rule as one [`FieldError`].

use std::borrow::Cow;

use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;

/// Message attached to blank text fields.
pub const MSG_NOT_BLANK: &str = "must not be blank";
/// Message attached to required fields that were absent.
pub const MSG_NOT_NULL: &str = "must not be null";
/// Message attached to numbers below zero.
pub const MSG_NOT_NEGATIVE: &str = "must be greater than or equal to 0";

/// A single violated constraint on a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Body returned for a failed validation: `{"errors": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}

/// Custom `validator` rule: the text must contain at least one non-whitespace character.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank").with_message(Cow::Borrowed(MSG_NOT_BLANK)));
    }
    Ok(())
}

/// Run all rules on `value`, collecting every violation into a [`CoreError::Validation`].
pub fn validate<T: Validate>(value: &T) -> Result<(), CoreError> {
    value
        .validate()
        .map_err(|errors| CoreError::Validation(collect_field_errors(&errors)))
}

/// Flatten `validator` output into one [`FieldError`] per violated rule.
///
/// Entries are grouped by field name; rule order within a field follows the
/// order the rules were declared in.
pub fn collect_field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut result = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Validation failed for field '{field}'"));
            result.push(FieldError::new(field.to_string(), message));
        }
    }
    result.sort_by(|a, b| a.field.cmp(&b.field));
    result
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(
            custom(function = "not_blank"),
            length(min = 2, max = 5, message = "size must be between 2 and 5")
        )]
        label: String,
        #[validate(range(min = 0, message = "must be greater than or equal to 0"))]
        count: i32,
    }

    #[test]
    fn not_blank_rejects_whitespace() {
        assert!(not_blank("   ").is_err());
        assert!(not_blank("").is_err());
        assert!(not_blank(" a ").is_ok());
    }

    #[test]
    fn valid_value_passes() {
        let sample = Sample {
            label: "ok".into(),
            count: 0,
        };
        assert!(validate(&sample).is_ok());
    }

    #[test]
    fn every_violation_is_reported() {
        let sample = Sample {
            label: String::new(),
            count: -1,
        };
        let errors = match validate(&sample) {
            Err(CoreError::Validation(errors)) => errors,
            other => panic!("expected validation error, got {other:?}"),
        };

        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&FieldError::new("label", MSG_NOT_BLANK)));
        assert!(errors.contains(&FieldError::new("label", "size must be between 2 and 5")));
        assert!(errors.contains(&FieldError::new("count", MSG_NOT_NEGATIVE)));
    }

    #[test]
    fn errors_are_grouped_by_field() {
        let sample = Sample {
            label: "toolong".into(),
            count: -3,
        };
        assert_matches!(validate(&sample), Err(CoreError::Validation(errors)) => {
            let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
            assert_eq!(fields, vec!["count", "label"]);
        });
    }

    #[test]
    fn response_serializes_as_errors_array() {
        let body = ValidationErrorResponse {
            errors: vec![
                FieldError::new("name", "is too long"),
                FieldError::new("description", "is too long"),
            ],
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(
            json,
            r#"{"errors":[{"field":"name","message":"is too long"},{"field":"description","message":"is too long"}]}"#
        );
    }
}
