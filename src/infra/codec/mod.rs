//! Payload codec: traits plus the big-endian torque layout.
pub mod torque;
pub mod traits;
