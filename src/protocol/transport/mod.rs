//! Torque node transport layer: CAN frame representation, the fixed frame
//! identifier, and the hardware abstraction traits.
//!
//! ## Timing Constants
//!
//! The node runs a fixed schedule: one settle delay after the bus starts, then
//! one transmission every [`TRANSMIT_PERIOD_MS`].

use embedded_can::StandardId;

pub mod can_frame;
pub mod traits;

/// Standard (11-bit) identifier of the torque status frame.
///
/// The dyno host looks the value up under this identifier, so it must not
/// collide with the motor controllers sharing the bus.
pub const TORQUE_FRAME_ID: StandardId = match StandardId::new(25) {
    Some(id) => id,
    None => panic!("25 fits in 11 bits"),
};

/// Bus bitrate expected by every node on the dyno bus (bit/s).
pub const TORQUE_BITRATE: u32 = 500_000;

/// Delay between starting the CAN peripheral and enabling the transceiver (ms).
///
/// Gives the transceiver and the rest of the bus time to power up before the
/// first frame leaves the node.
pub const TRANSCEIVER_SETTLE_DELAY_MS: u32 = 2_000;

/// Pause after each transmission attempt (ms).
///
/// Processing time is not subtracted, so the spacing between two frames is at
/// least this value (about 50 frames per second).
pub const TRANSMIT_PERIOD_MS: u32 = 20;
