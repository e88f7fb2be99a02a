//! Advertisement Prefix Validation
//!
//! A RuuviTag advertisement carries a flags AD structure followed by a
//! manufacturer specific AD structure. The decoders accept the raw
//! advertisement bytes and strip this prefix after validating it: AD type
//! 0xFF at offset 4, the Ruuvi company identifier at offsets 5 and 6
//! (least significant byte first), vendor payload from offset 7.

use crate::constants::{
    AD_TYPE_OFFSET, COMPANY_ID_OFFSET, MANUFACTURER_SPECIFIC_DATA, PAYLOAD_OFFSET,
    RUUVI_COMPANY_IDENTIFIER,
};
use crate::error::RuuviError;

/// Validate the advertisement prefix and return the vendor payload.
///
/// Checks run in a fixed order: total length, AD type, company identifier,
/// then the data format discriminator in the first payload byte.
/// `min_length` must cover the seven prefix bytes plus the discriminator.
pub fn manufacturer_payload(
    data: &[u8],
    min_length: usize,
    expected_format: u8,
) -> Result<&[u8], RuuviError> {
    if data.len() < min_length {
        return Err(RuuviError::TooShort {
            expected: min_length,
            actual: data.len(),
        });
    }

    if data[AD_TYPE_OFFSET] != MANUFACTURER_SPECIFIC_DATA {
        return Err(RuuviError::NotManufacturerSpecificData {
            expected: MANUFACTURER_SPECIFIC_DATA,
            actual: data[AD_TYPE_OFFSET],
        });
    }

    let company_id = [data[COMPANY_ID_OFFSET], data[COMPANY_ID_OFFSET + 1]];
    if company_id != RUUVI_COMPANY_IDENTIFIER {
        return Err(RuuviError::WrongCompanyIdentifier {
            expected: RUUVI_COMPANY_IDENTIFIER,
            actual: company_id,
        });
    }

    let payload = &data[PAYLOAD_OFFSET..];
    if payload[0] != expected_format {
        return Err(RuuviError::UnsupportedFormat {
            expected: expected_format,
            actual: payload[0],
        });
    }

    Ok(payload)
}
