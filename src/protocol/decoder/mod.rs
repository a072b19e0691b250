//! Host-side decoding of the torque frame.
//!
//! The dyno host receives the node's status frame among the motor controller
//! traffic; these helpers recognise it and rebuild the sample, refusing
//! anything that does not match the fixed layout.
use embedded_can::{Frame, Id, StandardId};

use crate::core::TorqueSample;
use crate::error::ExtractionError;
use crate::infra::codec::traits::FromPayload;
use crate::protocol::transport::TORQUE_FRAME_ID;

/// Decode a frame sent with the default torque identifier.
pub fn decode_torque_frame<F: Frame>(frame: &F) -> Result<TorqueSample, ExtractionError> {
    decode_torque_frame_with_id(frame, TORQUE_FRAME_ID)
}

/// Decode a frame sent with `expected_id`.
///
/// Requirements: standard identifier equal to `expected_id`, data frame,
/// exactly two payload bytes, value within 12 bits.
pub fn decode_torque_frame_with_id<F: Frame>(
    frame: &F,
    expected_id: StandardId,
) -> Result<TorqueSample, ExtractionError> {
    match frame.id() {
        Id::Extended(_) => return Err(ExtractionError::ExtendedId),
        Id::Standard(id) if id != expected_id => {
            return Err(ExtractionError::UnexpectedId {
                id: id.as_raw() as u32,
            })
        }
        Id::Standard(_) => {}
    }

    if frame.is_remote_frame() {
        return Err(ExtractionError::RemoteFrame);
    }

    Ok(TorqueSample::from_payload(frame.data())?)
}

/// Whether `frame` carries the torque identifier (payload not checked).
pub fn is_torque_frame<F: Frame>(frame: &F) -> bool {
    frame.id() == Id::Standard(TORQUE_FRAME_ID)
}
