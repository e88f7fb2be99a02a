//! The payload module contains the data format decoders and the dispatcher
//! that selects between them by peeking at the format discriminator.

pub mod format3;
pub mod format5;

use crate::constants::{DATA_FORMAT_3, DATA_FORMAT_5, PAYLOAD_OFFSET};
use crate::error::RuuviError;
use crate::measurement::Measurement;

/// Decode an advertisement by dispatching on the data format discriminator.
///
/// The discriminator is the first payload byte after the seven-byte
/// advertisement prefix. The selected decoder re-validates the whole
/// advertisement, prefix included.
pub fn decode(data: &[u8]) -> Result<Measurement, RuuviError> {
    match data.get(PAYLOAD_OFFSET) {
        Some(&DATA_FORMAT_3) => format3::decode(data),
        Some(&DATA_FORMAT_5) => format5::decode(data),
        Some(&format) => Err(RuuviError::UnknownFormat(format)),
        None => Err(RuuviError::TooShort {
            expected: PAYLOAD_OFFSET + 1,
            actual: data.len(),
        }),
    }
}
