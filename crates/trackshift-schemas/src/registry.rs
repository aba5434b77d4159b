//! Embedded JSON Schema documents for the reported objects
//!
//! The schema files live in `schemas/` next to this crate and are embedded at
//! compile time, so validation needs no filesystem access at runtime. Each
//! document is compiled once, on first use.
//!
//! Copyright (c) 2025 Trackshift Team
//! Licensed under the Apache-2.0 license

use crate::reported::ReportedKey;
use jsonschema::Validator;
use once_cell::sync::Lazy;
use serde_json::Value;

/// A schema document together with its compiled validator.
pub struct CompiledSchema {
    document: Value,
    validator: Validator,
}

impl CompiledSchema {
    fn embed(raw: &str) -> Self {
        let document: Value =
            serde_json::from_str(raw).expect("embedded schema is well-formed JSON");
        let validator =
            jsonschema::validator_for(&document).expect("embedded schema compiles");
        Self {
            document,
            validator,
        }
    }

    /// The raw schema document.
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// The compiled validator for this schema.
    pub fn validator(&self) -> &Validator {
        &self.validator
    }
}

static BATTERY: Lazy<CompiledSchema> =
    Lazy::new(|| CompiledSchema::embed(include_str!("../schemas/battery.schema.json")));
static DEVICE: Lazy<CompiledSchema> =
    Lazy::new(|| CompiledSchema::embed(include_str!("../schemas/device.schema.json")));
static ENVIRONMENT: Lazy<CompiledSchema> =
    Lazy::new(|| CompiledSchema::embed(include_str!("../schemas/environment.schema.json")));
static GNSS: Lazy<CompiledSchema> =
    Lazy::new(|| CompiledSchema::embed(include_str!("../schemas/gnss.schema.json")));
static ROAMING: Lazy<CompiledSchema> =
    Lazy::new(|| CompiledSchema::embed(include_str!("../schemas/roaming.schema.json")));
static CONFIG: Lazy<CompiledSchema> =
    Lazy::new(|| CompiledSchema::embed(include_str!("../schemas/config.schema.json")));

impl ReportedKey {
    /// The schema describing this reported object.
    pub fn schema(self) -> &'static CompiledSchema {
        match self {
            ReportedKey::Bat => &BATTERY,
            ReportedKey::Dev => &DEVICE,
            ReportedKey::Env => &ENVIRONMENT,
            ReportedKey::Gnss => &GNSS,
            ReportedKey::Roam => &ROAMING,
            ReportedKey::Cfg => &CONFIG,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_reported_object_has_a_compiling_schema() {
        for key in ReportedKey::ALL {
            let schema = key.schema();
            assert_eq!(
                schema.document()["type"],
                "object",
                "schema for `{key}` should describe an object",
            );
        }
    }

    #[test]
    fn schema_titles_match_their_objects() {
        assert_eq!(ReportedKey::Bat.schema().document()["title"], "Battery");
        assert_eq!(ReportedKey::Cfg.schema().document()["title"], "Config");
    }
}
