//! Device information extraction
//!
//! Builds the `dev` object from Device (3). The SIM ICCID is declared by the
//! target schema but never reported by the tracker, so it is left absent.
//!
//! Copyright (c) 2025 Trackshift Team
//! Licensed under the Apache-2.0 license

use super::outcome::ConversionOutcome;
use super::select::{to_millis, Candidate};
use super::validated;
use crate::types::{Device3, DEVICE_3_URN};
use trackshift_schemas::{DeviceInfo, ReportedKey};

pub(crate) fn extract(device: Option<&Device3>) -> ConversionOutcome<DeviceInfo> {
    let Some(device) = device else {
        return ConversionOutcome::missing(DEVICE_3_URN, ReportedKey::Dev);
    };

    let value = Candidate::object()
        .field("imei", device.serial_number.as_deref())
        .field("modV", device.firmware_version.as_deref())
        .field("brdV", device.manufacturer.as_deref())
        .into_value();

    let candidate = Candidate::object()
        .field("v", Some(value))
        .field("ts", to_millis(device.current_time))
        .into_value();

    validated(ReportedKey::Dev, candidate)
}
