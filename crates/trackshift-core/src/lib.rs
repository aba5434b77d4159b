//! Trackshift Core - telemetry conversion engine for LwM2M asset trackers
//!
//! This crate converts a sparse LwM2M telemetry document (one optional block
//! per object, keyed by object URN) into the reported document the cloud
//! side consumes. The conversion is one-shot, synchronous and pure: six
//! independent per-object extractions, each validated against the schemas in
//! `trackshift-schemas`, aggregated into one output document with partial
//! failures reported through a callback instead of aborting.
//!
//! # Main Components
//!
//! - **Source model**: typed LwM2M objects with URN document keys ([`types`])
//! - **Conversion pipeline**: extractors, outcome model and the converter
//!   ([`conversion`])
//! - **URN decoding**: object identity for diagnostics ([`urn`])
//!
//! # Example
//!
//! ```no_run
//! use trackshift_core::{convert_with_report, types::AssetTrackerV2};
//!
//! let raw = std::fs::read_to_string("telemetry.json").unwrap();
//! let input: AssetTrackerV2 = serde_json::from_str(&raw).unwrap();
//! let reported = convert_with_report(&input, |failure| {
//!     eprintln!("dropped `{}`: {failure}", failure.not_created());
//! });
//! println!("{}", serde_json::to_string_pretty(&reported).unwrap());
//! ```
//!
//! Copyright (c) 2025 Trackshift Team
//! Licensed under the Apache-2.0 license

pub mod conversion;
pub mod types;
pub mod urn;

// Re-export the conversion surface for convenience
pub use conversion::{
    convert, convert_with_report, ConversionFailure, ConversionOutcome, InvalidObject,
    MissingDependency,
};
pub use urn::ObjectMeta;

// The target side lives in the schemas crate; re-export it so callers need
// only one dependency.
pub use trackshift_schemas::{
    Battery, Config, DeviceInfo, Environment, Gnss, NoDataFlag, Reported, ReportedKey,
    RoamingInfo, ValidationIssue,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn an_empty_document_converts_to_an_empty_document() {
        let reported = convert(&types::AssetTrackerV2::default());
        assert_eq!(reported, Reported::default());
    }
}
