//! High-level components of the torque node: CAN transport, sensor reader,
//! frame transmitter, diagnostic output, host-side decoder, and the control loop.
pub mod decoder;
pub mod diagnostics;
pub mod node;
pub mod sensor;
pub mod transmitter;
pub mod transport;
