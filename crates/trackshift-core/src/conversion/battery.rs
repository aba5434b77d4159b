//! Battery extraction
//!
//! Builds the `bat` object from Device (3): the reading is the first power
//! source voltage, the timestamp is the device reporting time.
//!
//! Copyright (c) 2025 Trackshift Team
//! Licensed under the Apache-2.0 license

use super::outcome::ConversionOutcome;
use super::select::{first_element, to_millis, Candidate};
use super::validated;
use crate::types::{Device3, DEVICE_3_URN};
use trackshift_schemas::{Battery, ReportedKey};

pub(crate) fn extract(device: Option<&Device3>) -> ConversionOutcome<Battery> {
    let Some(device) = device else {
        return ConversionOutcome::missing(DEVICE_3_URN, ReportedKey::Bat);
    };

    let voltage = device
        .power_source_voltage
        .as_deref()
        .and_then(first_element)
        .copied();

    let candidate = Candidate::object()
        .field("v", voltage)
        .field("ts", to_millis(device.current_time))
        .into_value();

    validated(ReportedKey::Bat, candidate)
}
