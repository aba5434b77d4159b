//! Outcome model of a single extraction

use crate::urn::{self, ObjectMeta};
use serde::{Deserialize, Serialize};
use std::fmt;
use trackshift_schemas::{ReportedKey, ValidationIssue};

/// Result of extracting one reported object from a source document.
///
/// Either the object is produced, or a required source object was absent,
/// or the candidate failed schema validation. The two failure shapes are
/// normal, anticipated states carried as data, not errors to propagate.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionOutcome<T> {
    Success(T),
    MissingDependency(MissingDependency),
    Invalid(InvalidObject),
}

impl<T> ConversionOutcome<T> {
    pub(crate) fn missing(source_urn: &str, not_created: ReportedKey) -> Self {
        ConversionOutcome::MissingDependency(MissingDependency::new(source_urn, not_created))
    }

    pub(crate) fn invalid(not_created: ReportedKey, issues: Vec<ValidationIssue>) -> Self {
        ConversionOutcome::Invalid(InvalidObject {
            not_created,
            issues,
        })
    }

    /// Unwrap the outcome, routing a failure to `on_failure`.
    pub fn settle<F>(self, on_failure: &mut F) -> Option<T>
    where
        F: FnMut(ConversionFailure),
    {
        match self {
            ConversionOutcome::Success(value) => Some(value),
            ConversionOutcome::MissingDependency(missing) => {
                log::debug!("{missing}");
                on_failure(ConversionFailure::MissingDependency(missing));
                None
            }
            ConversionOutcome::Invalid(invalid) => {
                log::debug!("{invalid}");
                on_failure(ConversionFailure::Invalid(invalid));
                None
            }
        }
    }
}

/// A required source object is absent from the input document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingDependency {
    /// Identity of the absent object
    pub object: ObjectMeta,
    /// The reported object that could not be produced
    pub not_created: ReportedKey,
}

impl MissingDependency {
    fn new(source_urn: &str, not_created: ReportedKey) -> Self {
        // Extractors only name the URN constants declared in `types`
        let object = urn::decode(source_urn).expect("document key URNs are well-formed");
        Self {
            object,
            not_created,
        }
    }
}

impl fmt::Display for MissingDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "`{}` could not be created: LwM2M object {} is not present in the document",
            self.not_created, self.object.object_id
        )
    }
}

/// The candidate for a reported object failed schema validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvalidObject {
    /// The reported object that could not be produced
    pub not_created: ReportedKey,
    /// Every violation found in the candidate
    pub issues: Vec<ValidationIssue>,
}

impl fmt::Display for InvalidObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` failed schema validation:", self.not_created)?;
        for issue in &self.issues {
            write!(f, "\n  - {issue}")?;
        }
        Ok(())
    }
}

/// A failed extraction, as delivered to the conversion callback.
///
/// Callers that care about the distinction match on the variant; both kinds
/// arrive through the same channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConversionFailure {
    MissingDependency(MissingDependency),
    Invalid(InvalidObject),
}

impl ConversionFailure {
    /// The reported object this failure prevented.
    pub fn not_created(&self) -> ReportedKey {
        match self {
            ConversionFailure::MissingDependency(missing) => missing.not_created,
            ConversionFailure::Invalid(invalid) => invalid.not_created,
        }
    }
}

impl fmt::Display for ConversionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionFailure::MissingDependency(missing) => fmt::Display::fmt(missing, f),
            ConversionFailure::Invalid(invalid) => fmt::Display::fmt(invalid, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEVICE_3_URN;

    #[test]
    fn settle_returns_the_value_and_skips_the_callback() {
        let mut called = false;
        let outcome = ConversionOutcome::Success(42);
        let value = outcome.settle(&mut |_| called = true);
        assert_eq!(value, Some(42));
        assert!(!called);
    }

    #[test]
    fn settle_routes_a_missing_dependency_to_the_callback() {
        let mut seen = Vec::new();
        let outcome: ConversionOutcome<i32> =
            ConversionOutcome::missing(DEVICE_3_URN, ReportedKey::Bat);
        let value = outcome.settle(&mut |failure| seen.push(failure));

        assert_eq!(value, None);
        assert_eq!(seen.len(), 1);
        match &seen[0] {
            ConversionFailure::MissingDependency(missing) => {
                assert_eq!(missing.object.object_id, 3);
                assert_eq!(missing.not_created, ReportedKey::Bat);
            }
            other => panic!("expected a missing dependency, got {other:?}"),
        }
    }

    #[test]
    fn failure_messages_name_the_reported_object() {
        let outcome: ConversionOutcome<i32> =
            ConversionOutcome::missing(DEVICE_3_URN, ReportedKey::Roam);
        match outcome {
            ConversionOutcome::MissingDependency(missing) => {
                assert_eq!(
                    missing.to_string(),
                    "`roam` could not be created: LwM2M object 3 is not present in the document",
                );
            }
            other => panic!("expected a missing dependency, got {other:?}"),
        }
    }
}
