//! LwM2M object URN decoding
//!
//! Document keys identify objects by URN, either the bare form used on the
//! wire (`3:1.2@1.1`) or the registry form with the `urn:oma:lwm2m:` prefix.
//! Decoding is only needed to enrich diagnostics when a required object is
//! absent from a document.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identity of an LwM2M object as declared by its URN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    /// Numeric object id, e.g. `3` for Device
    pub object_id: u16,
    /// Version of the object definition
    pub object_version: String,
    /// Version of the LwM2M specification the object targets
    pub lwm2m_version: String,
}

/// Failure to decode an object URN.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrnError {
    #[error("`{0}` is not a valid LwM2M object URN")]
    Malformed(String),
}

static URN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:urn:oma:lwm2m:(?:oma|ext|x):)?(\d+)(?::(\d+\.\d+))?(?:@(\d+\.\d+))?$")
        .expect("URN pattern compiles")
});

/// Decode an object URN into its identity parts.
///
/// Objects that do not declare a version (vendor-specific ones like Config)
/// default both versions to `1.0`.
pub fn decode(urn: &str) -> Result<ObjectMeta, UrnError> {
    let captures = URN_PATTERN
        .captures(urn)
        .ok_or_else(|| UrnError::Malformed(urn.to_string()))?;
    let object_id = captures[1]
        .parse()
        .map_err(|_| UrnError::Malformed(urn.to_string()))?;

    Ok(ObjectMeta {
        object_id,
        object_version: captures.get(2).map_or("1.0", |m| m.as_str()).to_string(),
        lwm2m_version: captures.get(3).map_or("1.0", |m| m.as_str()).to_string(),
    })
}
