//! In-memory representation of a classic CAN 2.0 frame.
//!
//! Implements [`embedded_can::Frame`] so the same value can be handed to any
//! HAL driver and decoded by host tooling built on the `embedded-can` traits.
use crate::core::TORQUE_PAYLOAD_LEN;
use embedded_can::{Frame, Id, StandardId};

/// Classic CAN frames never carry more than eight payload bytes.
pub const MAX_CAN_DATA_LEN: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Raw CAN frame as written to (or read from) the bus.
pub struct CanFrame {
    /// Standard or extended identifier. The `Id` variant is the extended flag.
    pub id: Id,
    /// Remote transmission request flag.
    pub remote: bool,
    /// Payload buffer. Classic CAN frames always provide eight bytes.
    pub data: [u8; MAX_CAN_DATA_LEN],
    /// Number of valid payload bytes (Data Length Code, 0 to 8).
    pub len: usize,
}

impl CanFrame {
    /// Frame with the static fields of the torque frame already set:
    /// standard identifier, data frame, DLC 2, zeroed payload.
    pub const fn torque(id: StandardId) -> Self {
        Self {
            id: Id::Standard(id),
            remote: false,
            data: [0; MAX_CAN_DATA_LEN],
            len: TORQUE_PAYLOAD_LEN,
        }
    }

    /// Identifier as a raw integer (11 or 29 significant bits).
    pub fn raw_id(&self) -> u32 {
        match self.id {
            Id::Standard(id) => id.as_raw() as u32,
            Id::Extended(id) => id.as_raw(),
        }
    }

    /// Populated payload bytes.
    pub fn payload(&self) -> &[u8] {
        &self.data[..self.len]
    }
}

impl Frame for CanFrame {
    fn new(id: impl Into<Id>, data: &[u8]) -> Option<Self> {
        if data.len() > MAX_CAN_DATA_LEN {
            return None;
        }
        let mut buffer = [0; MAX_CAN_DATA_LEN];
        buffer[..data.len()].copy_from_slice(data);
        Some(Self {
            id: id.into(),
            remote: false,
            data: buffer,
            len: data.len(),
        })
    }

    fn new_remote(id: impl Into<Id>, dlc: usize) -> Option<Self> {
        if dlc > MAX_CAN_DATA_LEN {
            return None;
        }
        Some(Self {
            id: id.into(),
            remote: true,
            data: [0; MAX_CAN_DATA_LEN],
            len: dlc,
        })
    }

    fn is_extended(&self) -> bool {
        matches!(self.id, Id::Extended(_))
    }

    fn is_remote_frame(&self) -> bool {
        self.remote
    }

    fn id(&self) -> Id {
        self.id
    }

    fn dlc(&self) -> usize {
        self.len
    }

    fn data(&self) -> &[u8] {
        // A remote frame advertises a DLC but transports no bytes.
        if self.remote {
            &[]
        } else {
            self.payload()
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CanFrame {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "CanFrame {{ id: {=u32:#X}, extended: {=bool}, remote: {=bool}, data: {=[u8]:#X} }}",
            self.raw_id(),
            self.is_extended(),
            self.remote,
            self.payload()
        )
    }
}
