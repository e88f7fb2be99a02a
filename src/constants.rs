//! RuuviTag Advertisement Constants
//!
//! This module defines constants used when decoding RuuviTag BLE
//! advertisements, based on the Bluetooth Core Specification AD structure
//! layout and the Ruuvi data format documentation.

/// AD type for manufacturer specific data
pub const MANUFACTURER_SPECIFIC_DATA: u8 = 0xFF;

/// Ruuvi Innovations company identifier, least significant byte first
pub const RUUVI_COMPANY_IDENTIFIER: [u8; 2] = [0x99, 0x04];

/// Offset of the AD type byte within an advertisement
pub const AD_TYPE_OFFSET: usize = 4;

/// Offset of the company identifier within an advertisement
pub const COMPANY_ID_OFFSET: usize = 5;

/// Offset of the vendor payload within an advertisement
pub const PAYLOAD_OFFSET: usize = 7;

// ----------------------------------------------------------------------------
// Data format discriminators and lengths
// ----------------------------------------------------------------------------

/// Data format 3 (RAWv1) discriminator
pub const DATA_FORMAT_3: u8 = 3;

/// Data format 5 (RAWv2) discriminator
pub const DATA_FORMAT_5: u8 = 5;

/// Minimum advertisement length for data format 3
pub const FORMAT3_MIN_LENGTH: usize = 21;

/// Minimum advertisement length for data format 5
pub const FORMAT5_MIN_LENGTH: usize = 31;

// ----------------------------------------------------------------------------
// Decoding scale factors
// ----------------------------------------------------------------------------

/// Offset added to the raw pressure reading, in pascals
pub const PRESSURE_OFFSET_PASCAL: f64 = 50_000.0;

/// Lowest encodable battery voltage in data format 5, in volts
pub const BATTERY_FLOOR_VOLTS: f64 = 1.6;
