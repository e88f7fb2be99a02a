//! Integration tests for the data format 3 (RAWv1) decoder, driven by
//! captured RuuviTag advertisements.

use hex::FromHexError;
use ruuvi_rs::{decode_format3, Measurement, RuuviError};

const PREAMBLE: &str = "02010011FF9904";

#[test]
fn test_decodes_valid_data() {
    let got = decode_format3(&format!("{PREAMBLE}03291A1ECE1EFC18F94202CA0B53")).unwrap();
    let want = Measurement {
        temperature: Some(26.3),
        humidity: Some(20.5),
        pressure: Some(102766.0),
        acceleration_x: Some(-1.0),
        acceleration_y: Some(-1.726),
        acceleration_z: Some(0.714),
        battery_voltage: Some(2.899),
        ..Measurement::new(3)
    };
    assert_eq!(got, want);
}

#[test]
fn test_decodes_maximum_values() {
    let got = decode_format3(&format!("{PREAMBLE}03FF7F63FFFF7FFF7FFF7FFFFFFF")).unwrap();
    let want = Measurement {
        temperature: Some(127.99),
        humidity: Some(127.5),
        pressure: Some(115535.0),
        acceleration_x: Some(32.767),
        acceleration_y: Some(32.767),
        acceleration_z: Some(32.767),
        battery_voltage: Some(65.535),
        ..Measurement::new(3)
    };
    assert_eq!(got, want);
}

#[test]
fn test_decodes_minimum_values() {
    let got = decode_format3(&format!("{PREAMBLE}0300FF6300008001800180010000")).unwrap();
    let want = Measurement {
        temperature: Some(-127.99),
        humidity: Some(0.0),
        pressure: Some(50000.0),
        acceleration_x: Some(-32.767),
        acceleration_y: Some(-32.767),
        acceleration_z: Some(-32.767),
        battery_voltage: Some(0.0),
        ..Measurement::new(3)
    };
    assert_eq!(got, want);
}

#[test]
fn test_rejects_invalid_format() {
    let err = decode_format3(&format!("{PREAMBLE}0900FF6300008001800180010000")).unwrap_err();
    assert_eq!(
        err,
        RuuviError::UnsupportedFormat {
            expected: 3,
            actual: 9,
        }
    );
}

#[test]
fn test_rejects_wrong_company() {
    let err =
        decode_format3("02010011FF9F040300FF6300008001800180010000").unwrap_err();
    assert_eq!(
        err,
        RuuviError::WrongCompanyIdentifier {
            expected: [0x99, 0x04],
            actual: [0x9F, 0x04],
        }
    );
}

#[test]
fn test_rejects_missing_manufacturer_data() {
    let err =
        decode_format3("02010011F090040300FF6300008001800180010000").unwrap_err();
    assert_eq!(
        err,
        RuuviError::NotManufacturerSpecificData {
            expected: 0xFF,
            actual: 0xF0,
        }
    );
}

#[test]
fn test_rejects_short_message() {
    let err = decode_format3(&format!("{PREAMBLE}0900FF")).unwrap_err();
    assert_eq!(
        err,
        RuuviError::TooShort {
            expected: 21,
            actual: 10,
        }
    );
}

#[test]
fn test_rejects_invalid_hex() {
    let err = decode_format3(&format!("{PREAMBLE}(")).unwrap_err();
    assert_eq!(err, RuuviError::InvalidHex(FromHexError::OddLength));
}
