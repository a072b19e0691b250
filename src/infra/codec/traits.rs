//! Public traits exposed by the codec. They decouple the sample type from its
//! wire representation and give the transport layer a uniform API.
use crate::error::{DeserializationError, SerializationError};

//==================================================================================TO_PAYLOAD
/// Serialize a data structure into a sequence of bytes.
///
/// Used by the transmitter to turn a sample into a payload ready to transmit.
pub trait ToPayload {
    /// Serialize the structure into the provided buffer.
    ///
    /// * `buffer`: destination buffer for serialized bytes.
    ///
    /// Returns the number of bytes written on success.
    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError>;
    /// Serialized payload length for this structure.
    fn payload_len(&self) -> usize;
}
//==================================================================================FROM_PAYLOAD
/// Deserialize a sequence of bytes into a data structure.
///
/// Used by the frame decoder to rebuild a sample from an incoming payload.
pub trait FromPayload: Sized {
    /// Deserialize a byte slice to produce a new instance.
    fn from_payload(bytes_slice: &[u8]) -> Result<Self, DeserializationError>;
}
