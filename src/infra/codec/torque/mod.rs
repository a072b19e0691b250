//! Wire layout of the torque payload: the 12-bit sample stored as a big-endian
//! `u16` (high byte first) in exactly two bytes.
//!
//! ```text
//! byte 0 : 0000 hhhh   (bits 8-11 of the sample, upper nibble always zero)
//! byte 1 : llll llll   (bits 0-7 of the sample)
//! ```
use crate::core::{TorqueSample, TORQUE_PAYLOAD_LEN};
use crate::error::{DeserializationError, SerializationError};
use crate::infra::codec::traits::{FromPayload, ToPayload};

/// Encode a sample into its two payload bytes.
#[inline]
pub const fn encode_torque(sample: TorqueSample) -> [u8; TORQUE_PAYLOAD_LEN] {
    let value = sample.get();
    [((value >> 8) & 0xFF) as u8, (value & 0xFF) as u8]
}

/// Decode two payload bytes back into a sample.
///
/// Rejects values whose upper nibble is set, since they cannot come from a
/// 12-bit conversion.
#[inline]
pub fn decode_torque(bytes: [u8; TORQUE_PAYLOAD_LEN]) -> Result<TorqueSample, DeserializationError> {
    let raw = u16::from_be_bytes(bytes);
    Ok(TorqueSample::new(raw)?)
}

impl ToPayload for TorqueSample {
    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        if buffer.len() < TORQUE_PAYLOAD_LEN {
            return Err(SerializationError::BufferTooSmall {
                needed: TORQUE_PAYLOAD_LEN,
                available: buffer.len(),
            });
        }
        buffer[..TORQUE_PAYLOAD_LEN].copy_from_slice(&encode_torque(*self));
        Ok(TORQUE_PAYLOAD_LEN)
    }

    fn payload_len(&self) -> usize {
        TORQUE_PAYLOAD_LEN
    }
}

impl FromPayload for TorqueSample {
    fn from_payload(bytes_slice: &[u8]) -> Result<Self, DeserializationError> {
        let bytes: [u8; TORQUE_PAYLOAD_LEN] =
            bytes_slice
                .try_into()
                .map_err(|_| DeserializationError::InvalidDataLength {
                    expected: TORQUE_PAYLOAD_LEN,
                    actual: bytes_slice.len(),
                })?;
        decode_torque(bytes)
    }
}
