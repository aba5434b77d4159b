//! Conversion pipeline
//!
//! Six independent extractions turn one source document into the reported
//! document. Each extraction checks its own dependencies, builds a candidate
//! object and hands it to the schema validator; the converter aggregates the
//! successes and routes every failure to an optional callback. One object's
//! absence never prevents attempting the others.
//!
//! Copyright (c) 2025 Trackshift Team
//! Licensed under the Apache-2.0 license

mod battery;
mod config;
mod device;
mod environment;
mod gnss;
mod outcome;
mod roaming;
mod select;

pub use outcome::{ConversionFailure, ConversionOutcome, InvalidObject, MissingDependency};

use crate::types::AssetTrackerV2;
use serde::de::DeserializeOwned;
use serde_json::Value;
use trackshift_schemas::{
    JsonSchemaEngine, Reported, ReportedKey, ValidationEngine, ValidationIssue,
};

/// Validate a candidate and decode it into its reported type.
fn validated<T: DeserializeOwned>(key: ReportedKey, candidate: Value) -> ConversionOutcome<T> {
    if let Err(issues) = JsonSchemaEngine::global().validate(key, &candidate) {
        return ConversionOutcome::invalid(key, issues);
    }
    match serde_json::from_value(candidate) {
        Ok(value) => ConversionOutcome::Success(value),
        // A validated candidate that does not fit its reported type means the
        // schema and the type drifted apart; surface it, don't panic.
        Err(decode) => ConversionOutcome::invalid(
            key,
            vec![ValidationIssue::new("", "type", decode.to_string())],
        ),
    }
}

/// Convert a source document into the reported document, discarding failure
/// details.
///
/// Equivalent to [`convert_with_report`] with a no-op callback.
pub fn convert(input: &AssetTrackerV2) -> Reported {
    convert_with_report(input, |_| {})
}

/// Convert a source document into the reported document.
///
/// All six extractions run unconditionally. Each failed extraction invokes
/// `on_failure` exactly once, in declaration order (`bat`, `dev`, `env`,
/// `gnss`, `roam`, `cfg`); successful ones populate their key in the returned
/// document. An empty document is a valid result: every extraction failed,
/// and every failure was reported.
///
/// ```
/// use trackshift_core::{convert_with_report, types::{AssetTrackerV2, Device3}};
///
/// let input = AssetTrackerV2 {
///     device: Some(Device3 {
///         manufacturer: Some("Nordic Semiconductor ASA".into()),
///         serial_number: Some("351358815340515".into()),
///         firmware_version: Some("22.8.1+0".into()),
///         power_source_voltage: Some(vec![2754.0]),
///         current_time: Some(1_675_874_731),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
///
/// let reported = convert_with_report(&input, |failure| eprintln!("{failure}"));
/// assert!(reported.bat.is_some());
/// assert!(reported.gnss.is_none());
/// ```
pub fn convert_with_report<F>(input: &AssetTrackerV2, mut on_failure: F) -> Reported
where
    F: FnMut(ConversionFailure),
{
    Reported {
        bat: battery::extract(input.device.as_ref()).settle(&mut on_failure),
        dev: device::extract(input.device.as_ref()).settle(&mut on_failure),
        env: environment::extract(
            input.temperature.as_deref(),
            input.humidity.as_deref(),
            input.pressure.as_deref(),
        )
        .settle(&mut on_failure),
        gnss: gnss::extract(input.location.as_ref()).settle(&mut on_failure),
        roam: roaming::extract(
            input.connectivity_monitoring.as_ref(),
            input.device.as_ref(),
        )
        .settle(&mut on_failure),
        cfg: config::extract(input.config.as_ref()).settle(&mut on_failure),
    }
}
