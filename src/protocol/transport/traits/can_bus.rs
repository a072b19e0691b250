//! Minimal abstraction for an asynchronous CAN bus peripheral. Allows the node
//! to plug into various implementations (embedded HAL, desktop driver, test mock).
use crate::protocol::transport::can_frame::CanFrame;
use futures_util::Future;

/// Contract to start a CAN peripheral and transmit frames asynchronously.
pub trait CanBus {
    type Error: core::fmt::Debug;
    /// Start the peripheral at `bitrate` bit/s. Called once before any `send`.
    fn begin<'a>(&'a mut self, bitrate: u32)
        -> impl Future<Output = Result<(), Self::Error>> + 'a;
    /// Emit a frame on the bus. Resolves once the driver accepted or refused it;
    /// implementations should not wait indefinitely for bus arbitration.
    fn send<'a>(
        &'a mut self,
        frame: &'a CanFrame,
    ) -> impl Future<Output = Result<(), Self::Error>> + 'a;
}
