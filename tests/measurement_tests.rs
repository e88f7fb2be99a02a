//! Tests for the measurement record's serialized form: absent fields are
//! omitted so a zero reading is distinguishable from no reading.

use ruuvi_rs::{decode_format3, decode_format5, Measurement};
use serde_json::json;

#[test]
fn test_empty_measurement_serializes_to_format_only() {
    let measurement = Measurement::new(3);
    let value = serde_json::to_value(&measurement).unwrap();
    assert_eq!(value, json!({ "data_format": 3 }));
}

#[test]
fn test_format3_output_omits_format5_fields() {
    let measurement =
        decode_format3("02010011FF990403291A1ECE1EFC18F94202CA0B53").unwrap();
    let value = serde_json::to_value(&measurement).unwrap();
    assert_eq!(
        value,
        json!({
            "data_format": 3,
            "temperature": 26.3,
            "humidity": 20.5,
            "pressure": 102766.0,
            "acceleration_x": -1.0,
            "acceleration_y": -1.726,
            "acceleration_z": 0.714,
            "battery_voltage": 2.899,
        })
    );
}

#[test]
fn test_format5_output_carries_power_and_counters() {
    let measurement =
        decode_format5("02010011FF99040512FC5394C37C0004FFFC040CAC364200CDCBB8334C884F")
            .unwrap();
    let value = serde_json::to_value(&measurement).unwrap();
    assert_eq!(
        value,
        json!({
            "data_format": 5,
            "temperature": 24.3,
            "humidity": 53.49,
            "pressure": 100044.0,
            "acceleration_x": 0.004,
            "acceleration_y": -0.004,
            "acceleration_z": 1.036,
            "battery_voltage": 2.977,
            "tx_power": 4,
            "movement_counter": 66,
            "measurement_sequence_number": 205,
        })
    );
}

#[test]
fn test_missing_fields_deserialize_to_none() {
    let measurement: Measurement = serde_json::from_str(r#"{ "data_format": 3 }"#).unwrap();
    assert_eq!(measurement, Measurement::new(3));
}
