//! Environment extraction
//!
//! Builds the `env` object from Temperature (3303), Humidity (3304) and
//! Pressure (3323). All three objects are required, checked in that priority
//! order so a missing-dependency report always names the first unmet one.
//! Each reading comes from the first instance of its object; the timestamp is
//! the first per-instance reading time found, same priority order.
//!
//! Copyright (c) 2025 Trackshift Team
//! Licensed under the Apache-2.0 license

use super::outcome::ConversionOutcome;
use super::select::{first_element, to_millis, Candidate};
use super::validated;
use crate::types::{
    IpsoSensorInstance, HUMIDITY_3304_URN, PRESSURE_3323_URN, TEMPERATURE_3303_URN,
};
use trackshift_schemas::{Environment, ReportedKey};

pub(crate) fn extract(
    temperature: Option<&[IpsoSensorInstance]>,
    humidity: Option<&[IpsoSensorInstance]>,
    pressure: Option<&[IpsoSensorInstance]>,
) -> ConversionOutcome<Environment> {
    let Some(temperature) = temperature else {
        return ConversionOutcome::missing(TEMPERATURE_3303_URN, ReportedKey::Env);
    };
    let Some(humidity) = humidity else {
        return ConversionOutcome::missing(HUMIDITY_3304_URN, ReportedKey::Env);
    };
    let Some(pressure) = pressure else {
        return ConversionOutcome::missing(PRESSURE_3323_URN, ReportedKey::Env);
    };

    let temp = first_element(temperature).and_then(|i| i.sensor_value);
    let hum = first_element(humidity).and_then(|i| i.sensor_value);
    let atmp = first_element(pressure).and_then(|i| i.sensor_value);

    let ts = first_element(temperature)
        .and_then(|i| i.timestamp)
        .or_else(|| first_element(humidity).and_then(|i| i.timestamp))
        .or_else(|| first_element(pressure).and_then(|i| i.timestamp));

    let value = Candidate::object()
        .field("temp", temp)
        .field("hum", hum)
        .field("atmp", atmp)
        .into_value();

    let candidate = Candidate::object()
        .field("v", Some(value))
        .field("ts", to_millis(ts))
        .into_value();

    validated(ReportedKey::Env, candidate)
}
