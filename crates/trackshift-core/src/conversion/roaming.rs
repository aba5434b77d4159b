//! Roaming extraction
//!
//! Builds the `roam` object from Connectivity Monitoring (4) and Device (3),
//! checked in that order. Connectivity Monitoring carries no timestamp
//! resource, so the reporting time is borrowed from the device object,
//! which makes the device a hard dependency. The radio band and energy estimate
//! fields are declared by the target schema but never reported.
//!
//! Copyright (c) 2025 Trackshift Team
//! Licensed under the Apache-2.0 license

use super::outcome::ConversionOutcome;
use super::select::{first_element, to_millis, Candidate};
use super::validated;
use crate::types::{
    ConnectivityMonitoring4, Device3, CONNECTIVITY_MONITORING_4_URN, DEVICE_3_URN,
};
use trackshift_schemas::{ReportedKey, RoamingInfo};

pub(crate) fn extract(
    connectivity: Option<&ConnectivityMonitoring4>,
    device: Option<&Device3>,
) -> ConversionOutcome<RoamingInfo> {
    let Some(connectivity) = connectivity else {
        return ConversionOutcome::missing(CONNECTIVITY_MONITORING_4_URN, ReportedKey::Roam);
    };
    let Some(device) = device else {
        return ConversionOutcome::missing(DEVICE_3_URN, ReportedKey::Roam);
    };

    let nw = connectivity.network_bearer.map(|bearer| bearer.to_string());
    let ip = connectivity
        .ip_addresses
        .as_deref()
        .and_then(first_element)
        .cloned();
    // Country code digits first, then the network code
    let mccmnc = match (connectivity.smcc, connectivity.smnc) {
        (Some(mcc), Some(mnc)) => format!("{mcc}{mnc}").parse::<i64>().ok(),
        _ => None,
    };

    let value = Candidate::object()
        .field("nw", nw)
        .field("rsrp", connectivity.radio_signal_strength)
        .field("area", connectivity.lac)
        .field("mccmnc", mccmnc)
        .field("cell", connectivity.cell_id)
        .field("ip", ip)
        .into_value();

    let candidate = Candidate::object()
        .field("v", Some(value))
        .field("ts", to_millis(device.current_time))
        .into_value();

    validated(ReportedKey::Roam, candidate)
}
