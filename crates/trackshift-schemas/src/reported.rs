//! Data model of the reported document
//!
//! These types mirror the JSON Schema definitions shipped in `schemas/` and
//! describe the document the conversion engine produces. Every top-level
//! object is optional; an object that could not be produced is absent from
//! the document, never null.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a reported object, the closed set of top-level keys
/// the reported document can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportedKey {
    Bat,
    Dev,
    Env,
    Gnss,
    Roam,
    Cfg,
}

impl ReportedKey {
    /// All reported object keys, in document declaration order.
    pub const ALL: [ReportedKey; 6] = [
        ReportedKey::Bat,
        ReportedKey::Dev,
        ReportedKey::Env,
        ReportedKey::Gnss,
        ReportedKey::Roam,
        ReportedKey::Cfg,
    ];

    /// The key as it appears in the reported document.
    pub fn as_str(self) -> &'static str {
        match self {
            ReportedKey::Bat => "bat",
            ReportedKey::Dev => "dev",
            ReportedKey::Env => "env",
            ReportedKey::Gnss => "gnss",
            ReportedKey::Roam => "roam",
            ReportedKey::Cfg => "cfg",
        }
    }
}

impl fmt::Display for ReportedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The reported document.
///
/// Keys are present only when the corresponding extraction succeeded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reported {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bat: Option<Battery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev: Option<DeviceInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<Environment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gnss: Option<Gnss>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roam: Option<RoamingInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cfg: Option<Config>,
}

/// Battery reading, in millivolts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Battery {
    pub v: f64,
    /// Unix timestamp in milliseconds
    pub ts: i64,
}

/// Static device information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub v: DeviceValue,
    /// Unix timestamp in milliseconds
    pub ts: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceValue {
    /// Board IMEI
    pub imei: String,
    /// SIM ICCID, not reported by the tracker
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iccid: Option<String>,
    /// Modem firmware version
    #[serde(rename = "modV")]
    pub mod_v: String,
    /// Board version
    #[serde(rename = "brdV")]
    pub brd_v: String,
}

/// Environment sensor readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    pub v: EnvironmentValue,
    /// Unix timestamp in milliseconds
    pub ts: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentValue {
    /// Temperature, in celsius
    pub temp: f64,
    /// Relative humidity, in percent
    pub hum: f64,
    /// Atmospheric pressure
    pub atmp: f64,
}

/// GNSS position fix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gnss {
    pub v: GnssValue,
    /// Unix timestamp in milliseconds
    pub ts: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GnssValue {
    /// Longitude, in degrees
    pub lng: f64,
    /// Latitude, in degrees
    pub lat: f64,
    /// Accuracy of the fix, in meters
    pub acc: f64,
    /// Altitude above sea level, in meters
    pub alt: f64,
    /// Horizontal speed, in meters per second
    pub spd: f64,
    /// Heading of movement, not reported by the tracker
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hdg: Option<f64>,
}

/// Roaming information of the modem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoamingInfo {
    pub v: RoamingValue,
    /// Unix timestamp in milliseconds
    pub ts: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoamingValue {
    /// Radio band, not reported by the tracker
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band: Option<i64>,
    /// Network mode, e.g. `"6"` for LTE-M
    pub nw: String,
    /// Reference signal received power, in dBm
    pub rsrp: f64,
    /// Tracking area code
    pub area: i64,
    /// Mobile country code concatenated with the mobile network code
    pub mccmnc: i64,
    /// Cell id the device is connected to
    pub cell: i64,
    /// IP address assigned to the device
    pub ip: String,
    /// Energy estimate of the current cell, not reported by the tracker
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eest: Option<i64>,
}

/// Runtime configuration reported by the tracker. Carries no timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Whether the device is in active mode
    pub act: bool,
    /// Active wait time, in seconds
    pub actwt: i64,
    /// Location search timeout, in seconds
    pub loct: i64,
    /// Movement resolution, in seconds
    pub mvres: i64,
    /// Movement timeout, in seconds
    pub mvt: i64,
    /// Accelerometer activity threshold
    pub accath: f64,
    /// Accelerometer inactivity threshold
    pub accith: f64,
    /// Accelerometer inactivity timeout
    pub accito: f64,
    /// Data sources the device does not sample
    pub nod: Vec<NoDataFlag>,
}

/// A data source a tracker can be configured not to sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoDataFlag {
    /// GNSS fixes
    Gnss,
    /// Neighbor cell measurements
    Ncell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_objects_are_omitted_from_the_document() {
        let reported = Reported {
            bat: Some(Battery {
                v: 2754.0,
                ts: 1_675_874_731_000,
            }),
            ..Default::default()
        };

        let document = serde_json::to_value(&reported).unwrap();
        assert_eq!(document, json!({ "bat": { "v": 2754.0, "ts": 1_675_874_731_000_i64 } }));
    }

    #[test]
    fn unpopulated_optional_fields_are_omitted() {
        let value = GnssValue {
            lng: 153.2176,
            lat: -43.5723,
            acc: 24.798573,
            alt: 2.0,
            spd: 0.579327,
            hdg: None,
        };

        let document = serde_json::to_value(&value).unwrap();
        assert!(document.get("hdg").is_none());
    }

    #[test]
    fn no_data_flags_serialize_to_short_names() {
        let flags = vec![NoDataFlag::Gnss, NoDataFlag::Ncell];
        assert_eq!(serde_json::to_value(&flags).unwrap(), json!(["gnss", "ncell"]));
    }

    #[test]
    fn reported_keys_render_as_document_keys() {
        let keys: Vec<&str> = ReportedKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["bat", "dev", "env", "gnss", "roam", "cfg"]);
    }
}
