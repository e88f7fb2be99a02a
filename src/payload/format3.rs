//! Data Format 3 (RAWv1) Decoder
//!
//! Format 3 packs humidity, temperature, pressure, acceleration and battery
//! voltage into 14 payload bytes. Temperature uses a sign and magnitude
//! encoding: bit 7 of the integer byte carries the sign, and the fraction
//! byte holds signed hundredths of a degree applied to the magnitude before
//! negation.

use crate::advert;
use crate::constants::{DATA_FORMAT_3, FORMAT3_MIN_LENGTH, PRESSURE_OFFSET_PASCAL};
use crate::error::RuuviError;
use crate::measurement::Measurement;

/// Decode a data format 3 advertisement into a measurement.
pub fn decode(data: &[u8]) -> Result<Measurement, RuuviError> {
    let payload = advert::manufacturer_payload(data, FORMAT3_MIN_LENGTH, DATA_FORMAT_3)?;

    let mut measurement = Measurement::new(DATA_FORMAT_3);
    measurement.humidity = Some(f64::from(payload[1]) / 2.0);
    measurement.temperature = Some(temperature(payload[2], payload[3]));
    measurement.pressure =
        Some(f64::from(u16::from_be_bytes([payload[4], payload[5]])) + PRESSURE_OFFSET_PASCAL);
    measurement.acceleration_x =
        Some(f64::from(i16::from_be_bytes([payload[6], payload[7]])) / 1000.0);
    measurement.acceleration_y =
        Some(f64::from(i16::from_be_bytes([payload[8], payload[9]])) / 1000.0);
    measurement.acceleration_z =
        Some(f64::from(i16::from_be_bytes([payload[10], payload[11]])) / 1000.0);
    measurement.battery_voltage =
        Some(f64::from(u16::from_be_bytes([payload[12], payload[13]])) / 1000.0);

    Ok(measurement)
}

fn temperature(integral: u8, fraction: u8) -> f64 {
    let magnitude = f64::from(integral & 0x7F) + f64::from(fraction as i8) / 100.0;
    if integral & 0x80 != 0 {
        -magnitude
    } else {
        magnitude
    }
}
