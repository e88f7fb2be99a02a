//! # ruuvi-rs - A Rust Crate for Decoding RuuviTag BLE Advertisements
//!
//! The ruuvi-rs crate decodes the manufacturer specific data broadcast by
//! RuuviTag environmental sensors into typed measurements. Data formats 3
//! (RAWv1) and 5 (RAWv2) are supported.
//!
//! ## Features
//!
//! - Decode data format 3 (RAWv1) and data format 5 (RAWv2) advertisements
//! - Dispatch on the data format discriminator when the format is not known upfront
//! - Validate the advertisement prefix: length, AD type, company identifier
//! - Typed errors carrying expected/actual diagnostics for every failing check
//! - Serialize measurements with absent fields omitted
//! - Support for logging and error handling
//!
//! ## Usage
//!
//! To use the ruuvi-rs crate in your Rust project, add the following to your Cargo.toml file:
//!
//! ```toml
//! [dependencies]
//! ruuvi-rs = "0.1.0"
//! ```
//!
//! Then, in your Rust code, you can import the necessary modules and functions:
//!
//! ```rust
//! use ruuvi_rs::{
//!     decode, decode_format3, decode_format5,
//!     Measurement, RuuviError, init_logger,
//! };
//! ```

pub mod advert;
pub mod constants;
pub mod error;
pub mod logging;
pub mod measurement;
pub mod payload;

pub use crate::error::RuuviError;
pub use crate::logging::{init_logger, log_info};
pub use crate::measurement::Measurement;

// Per-format decoders for callers that work on raw bytes
pub use payload::{format3, format5};

/// Decode a hex-encoded advertisement, selecting the decoder by the data
/// format discriminator.
///
/// # Arguments
/// * `input_hex` - Advertisement bytes as a hex string, prefix included
///
/// # Returns
/// * `Ok(Measurement)` - Decoded sensor readings
/// * `Err(RuuviError)` - Hex decoding or a validation check failed
pub fn decode(input_hex: &str) -> Result<Measurement, RuuviError> {
    let data = hex::decode(input_hex)?;
    payload::decode(&data)
}

/// Decode a hex-encoded data format 3 (RAWv1) advertisement.
///
/// # Arguments
/// * `input_hex` - Advertisement bytes as a hex string, prefix included
///
/// # Returns
/// * `Ok(Measurement)` - Decoded sensor readings
/// * `Err(RuuviError)` - Hex decoding or a validation check failed
pub fn decode_format3(input_hex: &str) -> Result<Measurement, RuuviError> {
    let data = hex::decode(input_hex)?;
    format3::decode(&data)
}

/// Decode a hex-encoded data format 5 (RAWv2) advertisement.
///
/// # Arguments
/// * `input_hex` - Advertisement bytes as a hex string, prefix included
///
/// # Returns
/// * `Ok(Measurement)` - Decoded sensor readings
/// * `Err(RuuviError)` - Hex decoding or a validation check failed
pub fn decode_format5(input_hex: &str) -> Result<Measurement, RuuviError> {
    let data = hex::decode(input_hex)?;
    format5::decode(&data)
}
