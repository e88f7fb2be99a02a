//! # Ruuvi Error Handling
//!
//! This module defines the RuuviError enum, which represents the different error
//! types that can occur while decoding RuuviTag advertisements.

use thiserror::Error;

/// Represents the different error types that can occur when decoding
/// a RuuviTag advertisement.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuuviError {
    /// Indicates the advertisement is shorter than the format requires.
    #[error("Advertisement too short: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },

    /// Indicates the AD structure is not manufacturer specific data.
    #[error("Not manufacturer specific data: expected AD type 0x{expected:02X}, got 0x{actual:02X}")]
    NotManufacturerSpecificData { expected: u8, actual: u8 },

    /// Indicates a company identifier other than Ruuvi's.
    #[error("Wrong company identifier: expected {expected:02X?}, got {actual:02X?}")]
    WrongCompanyIdentifier { expected: [u8; 2], actual: [u8; 2] },

    /// Indicates a data format other than the one the decoder handles.
    #[error("Unsupported data format: expected {expected}, got {actual}")]
    UnsupportedFormat { expected: u8, actual: u8 },

    /// Indicates a data format no decoder exists for.
    #[error("Unknown data format: {0}")]
    UnknownFormat(u8),

    /// Indicates an invalid hexadecimal string was provided.
    #[error(transparent)]
    InvalidHex(#[from] hex::FromHexError),
}
