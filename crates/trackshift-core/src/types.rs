//! Source document model
//!
//! The input to the conversion engine is a sparse telemetry document: one
//! optional block per LwM2M object, keyed by the object's URN. Every resource
//! is optional, a tracker reports what it has. Resource fields carry their
//! numeric index on the wire and a semantic name in code.
//!
//! Copyright (c) 2025 Trackshift Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};

/// Device (3), object version 1.2, LwM2M version 1.1
pub const DEVICE_3_URN: &str = "3:1.2@1.1";
/// Connectivity Monitoring (4), object version 1.3, LwM2M version 1.1
pub const CONNECTIVITY_MONITORING_4_URN: &str = "4:1.3@1.1";
/// Location (6), object version 1.0, LwM2M version 1.0
pub const LOCATION_6_URN: &str = "6:1.0@1.0";
/// Temperature (3303), object version 1.1, LwM2M version 1.0
pub const TEMPERATURE_3303_URN: &str = "3303:1.1@1.0";
/// Humidity (3304), object version 1.1, LwM2M version 1.0
pub const HUMIDITY_3304_URN: &str = "3304:1.1@1.0";
/// Pressure (3323), object version 1.1, LwM2M version 1.0
pub const PRESSURE_3323_URN: &str = "3323:1.1@1.0";
/// Config (50009), vendor-specific object with no published versions
pub const CONFIG_50009_URN: &str = "50009";

/// One telemetry document as reported by an asset tracker.
///
/// Absence of a field means the tracker did not report that object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetTrackerV2 {
    #[serde(rename = "3:1.2@1.1", skip_serializing_if = "Option::is_none")]
    pub device: Option<Device3>,
    #[serde(rename = "4:1.3@1.1", skip_serializing_if = "Option::is_none")]
    pub connectivity_monitoring: Option<ConnectivityMonitoring4>,
    #[serde(rename = "6:1.0@1.0", skip_serializing_if = "Option::is_none")]
    pub location: Option<Location6>,
    #[serde(rename = "3303:1.1@1.0", skip_serializing_if = "Option::is_none")]
    pub temperature: Option<Vec<IpsoSensorInstance>>,
    #[serde(rename = "3304:1.1@1.0", skip_serializing_if = "Option::is_none")]
    pub humidity: Option<Vec<IpsoSensorInstance>>,
    #[serde(rename = "3323:1.1@1.0", skip_serializing_if = "Option::is_none")]
    pub pressure: Option<Vec<IpsoSensorInstance>>,
    #[serde(rename = "50009", skip_serializing_if = "Option::is_none")]
    pub config: Option<Config50009>,
}

/// Device (3)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Device3 {
    #[serde(rename = "0", skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(rename = "1", skip_serializing_if = "Option::is_none")]
    pub model_number: Option<String>,
    #[serde(rename = "2", skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(rename = "3", skip_serializing_if = "Option::is_none")]
    pub firmware_version: Option<String>,
    /// Multi-valued resource, one reading per power source
    #[serde(rename = "7", skip_serializing_if = "Option::is_none")]
    pub power_source_voltage: Option<Vec<f64>>,
    #[serde(rename = "11", skip_serializing_if = "Option::is_none")]
    pub error_code: Option<Vec<i64>>,
    /// Current unix time of the device, in seconds
    #[serde(rename = "13", skip_serializing_if = "Option::is_none")]
    pub current_time: Option<i64>,
    #[serde(rename = "16", skip_serializing_if = "Option::is_none")]
    pub supported_binding: Option<String>,
    #[serde(rename = "19", skip_serializing_if = "Option::is_none")]
    pub software_version: Option<String>,
}

/// Connectivity Monitoring (4)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectivityMonitoring4 {
    #[serde(rename = "0", skip_serializing_if = "Option::is_none")]
    pub network_bearer: Option<i64>,
    #[serde(rename = "1", skip_serializing_if = "Option::is_none")]
    pub available_network_bearer: Option<Vec<i64>>,
    /// RSRP, in dBm
    #[serde(rename = "2", skip_serializing_if = "Option::is_none")]
    pub radio_signal_strength: Option<f64>,
    #[serde(rename = "3", skip_serializing_if = "Option::is_none")]
    pub link_quality: Option<i64>,
    /// Multi-valued resource, one entry per assigned address
    #[serde(rename = "4", skip_serializing_if = "Option::is_none")]
    pub ip_addresses: Option<Vec<String>>,
    #[serde(rename = "8", skip_serializing_if = "Option::is_none")]
    pub cell_id: Option<i64>,
    /// Serving mobile network code
    #[serde(rename = "9", skip_serializing_if = "Option::is_none")]
    pub smnc: Option<i64>,
    /// Serving mobile country code
    #[serde(rename = "10", skip_serializing_if = "Option::is_none")]
    pub smcc: Option<i64>,
    /// Tracking area code
    #[serde(rename = "12", skip_serializing_if = "Option::is_none")]
    pub lac: Option<i64>,
}

/// Location (6)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location6 {
    #[serde(rename = "0", skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(rename = "1", skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(rename = "2", skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
    /// Accuracy of the fix, in meters
    #[serde(rename = "3", skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    /// Time of the fix, in seconds
    #[serde(rename = "5", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(rename = "6", skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

/// One instance of an IPSO sensor object.
///
/// Temperature (3303), Humidity (3304) and Pressure (3323) all use the IPSO
/// reusable resource layout, so a single instance type covers the three.
/// The objects are multi-instance; they appear in the document as ordered
/// lists of instances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IpsoSensorInstance {
    #[serde(rename = "5601", skip_serializing_if = "Option::is_none")]
    pub min_measured_value: Option<f64>,
    #[serde(rename = "5602", skip_serializing_if = "Option::is_none")]
    pub max_measured_value: Option<f64>,
    #[serde(rename = "5700", skip_serializing_if = "Option::is_none")]
    pub sensor_value: Option<f64>,
    #[serde(rename = "5701", skip_serializing_if = "Option::is_none")]
    pub sensor_units: Option<String>,
    /// Time of the reading, in seconds
    #[serde(rename = "5518", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

/// Config (50009), vendor-specific tracker configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config50009 {
    #[serde(rename = "0", skip_serializing_if = "Option::is_none")]
    pub active_mode: Option<bool>,
    /// Location search timeout, in seconds
    #[serde(rename = "1", skip_serializing_if = "Option::is_none")]
    pub location_timeout: Option<i64>,
    /// Active wait time, in seconds
    #[serde(rename = "2", skip_serializing_if = "Option::is_none")]
    pub active_wait_time: Option<i64>,
    /// Movement resolution, in seconds
    #[serde(rename = "3", skip_serializing_if = "Option::is_none")]
    pub movement_resolution: Option<i64>,
    /// Movement timeout, in seconds
    #[serde(rename = "4", skip_serializing_if = "Option::is_none")]
    pub movement_timeout: Option<i64>,
    #[serde(rename = "5", skip_serializing_if = "Option::is_none")]
    pub accelerometer_activity_threshold: Option<f64>,
    /// Whether GNSS sampling is enabled
    #[serde(rename = "6", skip_serializing_if = "Option::is_none")]
    pub gnss_enabled: Option<bool>,
    /// Whether neighbor cell measurements are enabled
    #[serde(rename = "7", skip_serializing_if = "Option::is_none")]
    pub neighbor_cell_enabled: Option<bool>,
    #[serde(rename = "8", skip_serializing_if = "Option::is_none")]
    pub accelerometer_inactivity_threshold: Option<f64>,
    #[serde(rename = "9", skip_serializing_if = "Option::is_none")]
    pub accelerometer_inactivity_timeout: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn documents_are_keyed_by_object_urn() {
        let input = AssetTrackerV2 {
            device: Some(Device3::default()),
            config: Some(Config50009::default()),
            ..Default::default()
        };

        let document = serde_json::to_value(&input).unwrap();
        let keys: Vec<&String> = document.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec![DEVICE_3_URN, CONFIG_50009_URN]);
    }

    #[test]
    fn resources_are_keyed_by_numeric_index() {
        let device = Device3 {
            power_source_voltage: Some(vec![2754.0]),
            current_time: Some(1_675_874_731),
            ..Default::default()
        };

        let document = serde_json::to_value(&device).unwrap();
        assert_eq!(document, json!({ "7": [2754.0], "13": 1_675_874_731_i64 }));
    }

    #[test]
    fn unknown_resources_are_ignored_on_parse() {
        let device: Device3 = serde_json::from_value(json!({
            "13": 1675874731,
            "4": 1,
        }))
        .unwrap();
        assert_eq!(device.current_time, Some(1_675_874_731));
    }
}
