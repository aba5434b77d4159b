//! Trackshift Schemas - schema definitions and validators for the reported document
//!
//! This crate owns the target side of the telemetry conversion: the typed data
//! model of the reported document, the JSON Schema (draft 2020-12) documents
//! describing each reported object, and the validation engine that checks
//! candidate objects against them.
//!
//! # Quick Start
//!
//! ```rust
//! use trackshift_schemas::{JsonSchemaEngine, ReportedKey, ValidationEngine};
//! use serde_json::json;
//!
//! let candidate = json!({ "v": 2754.0, "ts": 1675874731000_i64 });
//! assert!(JsonSchemaEngine::global()
//!     .validate(ReportedKey::Bat, &candidate)
//!     .is_ok());
//! ```
//!
//! Copyright (c) 2025 Trackshift Team
//! Licensed under the Apache-2.0 license

pub mod registry;
pub mod reported;
pub mod validation;

pub use registry::CompiledSchema;
pub use reported::{
    Battery, Config, DeviceInfo, DeviceValue, Environment, EnvironmentValue, Gnss, GnssValue,
    NoDataFlag, Reported, ReportedKey, RoamingInfo, RoamingValue,
};
pub use validation::{JsonSchemaEngine, ValidationEngine, ValidationIssue};
