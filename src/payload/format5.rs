//! Data Format 5 (RAWv2) Decoder
//!
//! Format 5 packs temperature, humidity, pressure, acceleration, a combined
//! power field, a movement counter and a measurement sequence number into
//! 17 payload bytes, followed by the tag MAC address which this decoder
//! leaves to an enrichment stage.

use crate::advert;
use crate::constants::{
    BATTERY_FLOOR_VOLTS, DATA_FORMAT_5, FORMAT5_MIN_LENGTH, PRESSURE_OFFSET_PASCAL,
};
use crate::error::RuuviError;
use crate::measurement::Measurement;

/// Decode a data format 5 advertisement into a measurement.
pub fn decode(data: &[u8]) -> Result<Measurement, RuuviError> {
    let payload = advert::manufacturer_payload(data, FORMAT5_MIN_LENGTH, DATA_FORMAT_5)?;

    let mut measurement = Measurement::new(DATA_FORMAT_5);
    measurement.temperature =
        Some(f64::from(i16::from_be_bytes([payload[1], payload[2]])) / 200.0);
    measurement.humidity = Some(f64::from(u16::from_be_bytes([payload[3], payload[4]])) / 400.0);
    measurement.pressure =
        Some(f64::from(u16::from_be_bytes([payload[5], payload[6]])) + PRESSURE_OFFSET_PASCAL);
    measurement.acceleration_x =
        Some(f64::from(i16::from_be_bytes([payload[7], payload[8]])) / 1000.0);
    measurement.acceleration_y =
        Some(f64::from(i16::from_be_bytes([payload[9], payload[10]])) / 1000.0);
    measurement.acceleration_z =
        Some(f64::from(i16::from_be_bytes([payload[11], payload[12]])) / 1000.0);

    let (battery_voltage, tx_power) = power_info(u16::from_be_bytes([payload[13], payload[14]]));
    measurement.battery_voltage = Some(battery_voltage);
    measurement.tx_power = Some(tx_power);

    measurement.movement_counter = Some(payload[15]);
    measurement.measurement_sequence_number = Some(u16::from_be_bytes([payload[16], payload[17]]));

    Ok(measurement)
}

/// Split the combined power field into battery voltage and TX power.
///
/// The top 11 bits carry the voltage above 1.6 V in millivolts, the low
/// 5 bits the TX power in 2 dBm steps from -40 dBm.
fn power_info(word: u16) -> (f64, i8) {
    let battery_voltage = f64::from(word >> 5) / 1000.0 + BATTERY_FLOOR_VOLTS;
    let tx_power = (word & 0b1_1111) as i8 * 2 - 40;
    (battery_voltage, tx_power)
}
