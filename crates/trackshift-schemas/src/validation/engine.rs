//! Validation engine adapter
//!
//! Wraps the `jsonschema` crate behind a small trait so the conversion engine
//! never touches a validator implementation directly and an alternate engine
//! can be substituted without touching extraction logic.
//!
//! Copyright (c) 2025 Trackshift Team
//! Licensed under the Apache-2.0 license

use crate::reported::ReportedKey;
use crate::validation::error::ValidationIssue;
use jsonschema::error::ValidationErrorKind;
use serde_json::{json, Value};

/// Capability of checking a candidate object against a reported-object schema.
///
/// Implementations must be deterministic and must not mutate the candidate.
pub trait ValidationEngine {
    /// Validate `candidate` against the schema of `key`.
    ///
    /// Returns every violation found, not just the first one.
    fn validate(&self, key: ReportedKey, candidate: &Value) -> Result<(), Vec<ValidationIssue>>;
}

/// The default engine, backed by the compiled JSON Schema documents
/// shipped with this crate.
#[derive(Debug, Default)]
pub struct JsonSchemaEngine;

impl JsonSchemaEngine {
    /// Shared engine instance. The engine is stateless, so one is enough.
    pub fn global() -> &'static Self {
        static ENGINE: JsonSchemaEngine = JsonSchemaEngine;
        &ENGINE
    }
}

impl ValidationEngine for JsonSchemaEngine {
    fn validate(&self, key: ReportedKey, candidate: &Value) -> Result<(), Vec<ValidationIssue>> {
        let validator = key.schema().validator();
        let issues: Vec<ValidationIssue> = validator
            .iter_errors(candidate)
            .map(|error| {
                ValidationIssue::new(
                    error.instance_path.to_string(),
                    keyword_of(&error.kind),
                    error.to_string(),
                )
                .with_params(params_of(&error.kind))
            })
            .collect();

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}

/// The schema keyword a violation belongs to.
fn keyword_of(kind: &ValidationErrorKind) -> &'static str {
    match kind {
        ValidationErrorKind::AdditionalProperties { .. } => "additionalProperties",
        ValidationErrorKind::Enum { .. } => "enum",
        ValidationErrorKind::ExclusiveMaximum { .. } => "exclusiveMaximum",
        ValidationErrorKind::ExclusiveMinimum { .. } => "exclusiveMinimum",
        ValidationErrorKind::Format { .. } => "format",
        ValidationErrorKind::MaxItems { .. } => "maxItems",
        ValidationErrorKind::Maximum { .. } => "maximum",
        ValidationErrorKind::MaxLength { .. } => "maxLength",
        ValidationErrorKind::MinItems { .. } => "minItems",
        ValidationErrorKind::Minimum { .. } => "minimum",
        ValidationErrorKind::MinLength { .. } => "minLength",
        ValidationErrorKind::MultipleOf { .. } => "multipleOf",
        ValidationErrorKind::Pattern { .. } => "pattern",
        ValidationErrorKind::Required { .. } => "required",
        ValidationErrorKind::Type { .. } => "type",
        ValidationErrorKind::UniqueItems { .. } => "uniqueItems",
        _ => "schema",
    }
}

/// Keyword-specific details, where the violation carries any.
fn params_of(kind: &ValidationErrorKind) -> Value {
    match kind {
        ValidationErrorKind::Required { property } => {
            json!({ "missingProperty": property })
        }
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_valid_candidate_passes() {
        let candidate = json!({ "v": 2754.0, "ts": 1_675_874_731_000_i64 });
        assert!(JsonSchemaEngine::global()
            .validate(ReportedKey::Bat, &candidate)
            .is_ok());
    }

    #[test]
    fn a_missing_required_field_is_reported_with_its_keyword() {
        let candidate = json!({ "v": 2754.0 });
        let issues = JsonSchemaEngine::global()
            .validate(ReportedKey::Bat, &candidate)
            .unwrap_err();

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].keyword, "required");
        assert_eq!(issues[0].params, json!({ "missingProperty": "ts" }));
    }

    #[test]
    fn nested_violations_carry_a_json_pointer_path() {
        let candidate = json!({
            "v": { "temp": 27.18, "hum": "wet", "atmp": 10.0 },
            "ts": 1_675_874_731_000_i64,
        });
        let issues = JsonSchemaEngine::global()
            .validate(ReportedKey::Env, &candidate)
            .unwrap_err();

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].keyword, "type");
        assert_eq!(issues[0].path, "/v/hum");
    }

    #[test]
    fn every_violation_is_reported_not_just_the_first() {
        let candidate = json!({});
        let issues = JsonSchemaEngine::global()
            .validate(ReportedKey::Bat, &candidate)
            .unwrap_err();
        assert_eq!(issues.len(), 2);
    }

    #[test]
    fn validation_does_not_mutate_the_candidate() {
        let candidate = json!({ "v": 2754.0 });
        let before = candidate.clone();
        let _ = JsonSchemaEngine::global().validate(ReportedKey::Bat, &candidate);
        assert_eq!(candidate, before);
    }
}
