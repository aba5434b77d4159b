//! Configuration extraction
//!
//! Builds the `cfg` object from Config (50009): eight scalar resources map
//! 1:1, and the `nod` list is derived from the GNSS and neighbor-cell enable
//! flags, checked in that order so the list order is deterministic. This is
//! the only reported object without a timestamp.
//!
//! Copyright (c) 2025 Trackshift Team
//! Licensed under the Apache-2.0 license

use super::outcome::ConversionOutcome;
use super::select::Candidate;
use super::validated;
use crate::types::{Config50009, CONFIG_50009_URN};
use trackshift_schemas::{Config, NoDataFlag, ReportedKey};

pub(crate) fn extract(config: Option<&Config50009>) -> ConversionOutcome<Config> {
    let Some(config) = config else {
        return ConversionOutcome::missing(CONFIG_50009_URN, ReportedKey::Cfg);
    };

    let mut nod = Vec::new();
    if config.gnss_enabled == Some(true) {
        nod.push(NoDataFlag::Gnss);
    }
    if config.neighbor_cell_enabled == Some(true) {
        nod.push(NoDataFlag::Ncell);
    }

    let candidate = Candidate::object()
        .field("act", config.active_mode)
        .field("actwt", config.active_wait_time)
        .field("loct", config.location_timeout)
        .field("mvres", config.movement_resolution)
        .field("mvt", config.movement_timeout)
        .field("accath", config.accelerometer_activity_threshold)
        .field("accith", config.accelerometer_inactivity_threshold)
        .field("accito", config.accelerometer_inactivity_timeout)
        .field("nod", Some(nod))
        .into_value();

    validated(ReportedKey::Cfg, candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config50009 {
        Config50009 {
            active_mode: Some(true),
            location_timeout: Some(120),
            active_wait_time: Some(120),
            movement_resolution: Some(600),
            movement_timeout: Some(7200),
            accelerometer_activity_threshold: Some(8.5),
            gnss_enabled: Some(false),
            neighbor_cell_enabled: Some(false),
            accelerometer_inactivity_threshold: Some(2.5),
            accelerometer_inactivity_timeout: Some(0.5),
        }
    }

    #[test]
    fn builds_the_config_object() {
        let outcome = extract(Some(&config()));
        assert_eq!(
            outcome,
            ConversionOutcome::Success(Config {
                act: true,
                actwt: 120,
                loct: 120,
                mvres: 600,
                mvt: 7200,
                accath: 8.5,
                accith: 2.5,
                accito: 0.5,
                nod: vec![],
            }),
        );
    }

    #[test]
    fn an_absent_config_object_is_a_missing_dependency() {
        match extract(None) {
            ConversionOutcome::MissingDependency(missing) => {
                assert_eq!(missing.object.object_id, 50009);
                assert_eq!(missing.not_created, ReportedKey::Cfg);
            }
            other => panic!("expected a missing dependency, got {other:?}"),
        }
    }

    #[test]
    fn gnss_alone_yields_a_single_flag() {
        let mut input = config();
        input.gnss_enabled = Some(true);
        match extract(Some(&input)) {
            ConversionOutcome::Success(cfg) => assert_eq!(cfg.nod, vec![NoDataFlag::Gnss]),
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn both_flags_keep_a_fixed_order() {
        let mut input = config();
        input.gnss_enabled = Some(true);
        input.neighbor_cell_enabled = Some(true);
        match extract(Some(&input)) {
            ConversionOutcome::Success(cfg) => {
                assert_eq!(cfg.nod, vec![NoDataFlag::Gnss, NoDataFlag::Ncell]);
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn a_missing_scalar_resource_fails_validation() {
        let mut input = config();
        input.movement_timeout = None;
        match extract(Some(&input)) {
            ConversionOutcome::Invalid(invalid) => {
                assert_eq!(invalid.not_created, ReportedKey::Cfg);
                assert_eq!(invalid.issues[0].keyword, "required");
            }
            other => panic!("expected invalid, got {other:?}"),
        }
    }
}
