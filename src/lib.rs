//! `torque-can` library: the firmware core of a torque sensor node. It samples
//! a potentiometer through a 12-bit ADC and broadcasts the value in a fixed
//! two-byte CAN frame every 20 ms. Hardware is reached through traits so the
//! same code runs on a microcontroller and inside host tests, in a `no_std`
//! environment.
#![no_std]
//==================================================================================
/// Bounded torque sample and the fixed sizes shared by every layer.
pub mod core;
/// Node configuration (identifier, bitrate, delays, diagnostics switch).
pub mod config;
/// Domain and low-level errors (sample range, payload codec, transmission, setup).
pub mod error;
/// Payload codec for the torque frame.
pub mod infra;
/// Torque node implementation: CAN transport, sensor reader, transmitter,
/// diagnostics, and the control loop.
pub mod protocol;
//==================================================================================
