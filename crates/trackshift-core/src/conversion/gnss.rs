//! GNSS extraction
//!
//! Builds the `gnss` object from Location (6). The heading field is declared
//! by the target schema but never reported by the tracker.
//!
//! Copyright (c) 2025 Trackshift Team
//! Licensed under the Apache-2.0 license

use super::outcome::ConversionOutcome;
use super::select::{to_millis, Candidate};
use super::validated;
use crate::types::{Location6, LOCATION_6_URN};
use trackshift_schemas::{Gnss, ReportedKey};

pub(crate) fn extract(location: Option<&Location6>) -> ConversionOutcome<Gnss> {
    let Some(location) = location else {
        return ConversionOutcome::missing(LOCATION_6_URN, ReportedKey::Gnss);
    };

    let value = Candidate::object()
        .field("lng", location.longitude)
        .field("lat", location.latitude)
        .field("acc", location.radius)
        .field("alt", location.altitude)
        .field("spd", location.speed)
        .into_value();

    let candidate = Candidate::object()
        .field("v", Some(value))
        .field("ts", to_millis(location.timestamp))
        .into_value();

    validated(ReportedKey::Gnss, candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location() -> Location6 {
        Location6 {
            latitude: Some(-43.5723),
            longitude: Some(153.2176),
            altitude: Some(2.0),
            radius: Some(24.798573),
            timestamp: Some(1_665_149_633),
            speed: Some(0.579327),
        }
    }

    #[test]
    fn builds_the_gnss_object() {
        match extract(Some(&location())) {
            ConversionOutcome::Success(gnss) => {
                assert_eq!(gnss.v.lng, 153.2176);
                assert_eq!(gnss.v.lat, -43.5723);
                assert_eq!(gnss.v.acc, 24.798573);
                assert_eq!(gnss.v.alt, 2.0);
                assert_eq!(gnss.v.spd, 0.579327);
                assert_eq!(gnss.ts, 1_665_149_633_000);
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn the_heading_is_never_populated() {
        match extract(Some(&location())) {
            ConversionOutcome::Success(gnss) => assert_eq!(gnss.v.hdg, None),
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn an_absent_location_object_is_a_missing_dependency() {
        match extract(None) {
            ConversionOutcome::MissingDependency(missing) => {
                assert_eq!(missing.object.object_id, 6);
                assert_eq!(missing.not_created, ReportedKey::Gnss);
            }
            other => panic!("expected a missing dependency, got {other:?}"),
        }
    }

    #[test]
    fn a_missing_fix_time_fails_validation() {
        let mut input = location();
        input.timestamp = None;
        match extract(Some(&input)) {
            ConversionOutcome::Invalid(invalid) => {
                assert_eq!(invalid.issues[0].keyword, "required");
            }
            other => panic!("expected invalid, got {other:?}"),
        }
    }
}
