//! Measurement Model for Decoded Advertisements
//!
//! This module provides the flat measurement record produced by the format
//! decoders. Every sensor reading is independently optional so that absence
//! is distinguishable from a genuine zero reading, and absent fields are
//! omitted from serialized output.

use serde::{Deserialize, Serialize};

/// Decoded sensor readings from a single RuuviTag advertisement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    // Format discriminator, always set on a successful decode
    pub data_format: u8,

    // Sensor readings (degrees Celsius, percent RH, pascals, g, volts)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceleration_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceleration_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceleration_z: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery_voltage: Option<f64>,

    // Format 5 only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_power: Option<i8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movement_counter: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_sequence_number: Option<u16>,

    // Identity and context, filled by an enrichment stage rather than
    // by the decoders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rssi: Option<i16>,

    // Derived metrics, reserved for post-processing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceleration_total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute_humidity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dew_point: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equilibrium_vapor_pressure: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub air_density: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceleration_angle_from_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceleration_angle_from_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceleration_angle_from_z: Option<f64>,
}

impl Measurement {
    /// Create an empty measurement for the given data format
    pub fn new(data_format: u8) -> Self {
        Self {
            data_format,
            temperature: None,
            humidity: None,
            pressure: None,
            acceleration_x: None,
            acceleration_y: None,
            acceleration_z: None,
            battery_voltage: None,
            tx_power: None,
            movement_counter: None,
            measurement_sequence_number: None,
            name: None,
            mac: None,
            timestamp: None,
            rssi: None,
            acceleration_total: None,
            absolute_humidity: None,
            dew_point: None,
            equilibrium_vapor_pressure: None,
            air_density: None,
            acceleration_angle_from_x: None,
            acceleration_angle_from_y: None,
            acceleration_angle_from_z: None,
        }
    }
}
