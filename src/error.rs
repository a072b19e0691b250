//! Error definitions shared across library modules.
//! Each type models a specific failure scenario (sample range, payload codec,
//! frame extraction, transmission, node setup).
use embedded_hal::digital::ErrorKind;
use thiserror_no_std::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
/// Errors raised when a raw value does not fit the 12-bit sample range.
pub enum SampleError {
    /// Value is above 4095.
    #[error("Sample {value} is outside the 12-bit ADC range")]
    OutOfRange { value: u16 },
}

#[derive(Debug, Error, PartialEq, Eq)]
/// Failures while extracting a torque sample from a raw CAN frame.
pub enum ExtractionError {
    /// The frame carries an identifier other than the torque frame one.
    #[error("Unexpected frame identifier: {id:#X}")]
    UnexpectedId { id: u32 },
    /// The torque frame always uses a standard (11-bit) identifier.
    #[error("Extended identifier not expected")]
    ExtendedId,
    /// Remote frames carry no payload.
    #[error("Remote frame not expected")]
    RemoteFrame,
    /// Payload could not be decoded into a sample.
    #[error(transparent)]
    Payload(#[from] DeserializationError),
}

//================================================================================CODEC_ERROR

#[derive(Debug, Error, PartialEq, Eq)]
/// Issues encountered while serializing a sample into a buffer.
pub enum SerializationError {
    /// Provided buffer is too small for the payload.
    #[error("Buffer too small -> needed: {needed}, available: {available}")]
    BufferTooSmall { needed: usize, available: usize },
}

#[derive(Error, Debug, PartialEq, Eq)]
/// Errors raised while deserializing a CAN payload into a sample.
pub enum DeserializationError {
    /// Payload size does not match the two-byte layout.
    #[error("Invalid data length -> expected: {expected}, actual: {actual}")]
    InvalidDataLength { expected: usize, actual: usize },
    /// Decoded value does not fit the 12-bit range.
    #[error(transparent)]
    Sample(#[from] SampleError),
}

//==================================================================================SEND_ERROR
#[derive(Debug, Error)]
/// Errors encountered when sending the torque frame.
pub enum SendTorqueError<E: core::fmt::Debug> {
    /// Sample could not be written into the frame payload.
    #[error("Payload serialization failed: {0}")]
    Serialization(#[from] SerializationError),
    /// CAN layer refused or failed to send the frame.
    #[error("Error sending message: {0:?}")]
    Transmission(E),
}

//==================================================================================SETUP_ERROR
#[derive(Debug, Error)]
/// Errors raised by the one-time node initialization.
pub enum SetupError<E: core::fmt::Debug> {
    /// CAN peripheral could not be started at the requested bitrate.
    #[error("CAN bus start error: {0:?}")]
    Bus(E),
    /// Transceiver enable line could not be driven high.
    #[error("Transceiver enable pin error: {0:?}")]
    EnablePin(ErrorKind),
}
