//! # Quickstart Example
//!
//! Runs the torque node on the host:
//! - a simulated potentiometer sweeps the 12-bit range
//! - a console CAN bus prints every frame and refuses one in five
//! - diagnostics are written to stdout, as a serial console would show them
//! - the host-side decoder reads each frame back
//!
//! ```bash
//! cargo run --example quickstart
//! ```

use std::fmt;

use embedded_hal::digital::{ErrorType, OutputPin};
use tokio::time::{sleep, Duration};
use torque_can::config::NodeConfig;
use torque_can::protocol::decoder::decode_torque_frame;
use torque_can::protocol::diagnostics::FmtSink;
use torque_can::protocol::node::TorqueNode;
use torque_can::protocol::transport::{
    can_frame::CanFrame,
    traits::{analog_input::AnalogInput, can_bus::CanBus, delay_timer::DelayTimer},
};

/// Potentiometer moving back and forth across the range.
struct SweepAdc {
    value: u16,
    rising: bool,
    resolution: u8,
}

impl AnalogInput for SweepAdc {
    fn set_resolution(&mut self, bits: u8) {
        self.resolution = bits;
    }

    fn read(&mut self) -> u16 {
        let top = (1u16 << self.resolution) - 1;
        if self.rising {
            self.value = self.value.saturating_add(700).min(top);
            self.rising = self.value < top;
        } else {
            self.value = self.value.saturating_sub(700);
            self.rising = self.value == 0;
        }
        self.value
    }
}

/// Bus printing frames instead of driving a transceiver.
struct ConsoleBus {
    sent: u32,
}

impl CanBus for ConsoleBus {
    type Error = &'static str;

    async fn begin(&mut self, bitrate: u32) -> Result<(), Self::Error> {
        println!("   CAN bus started at {} bit/s", bitrate);
        Ok(())
    }

    async fn send<'a>(&'a mut self, frame: &'a CanFrame) -> Result<(), Self::Error> {
        self.sent += 1;
        if self.sent.is_multiple_of(5) {
            return Err("TX mailbox full");
        }

        let value = decode_torque_frame(frame).map(|s| s.get());
        println!(
            "   ID: 0x{:03X}  DLC: {}  Payload: {:02X?}  Decoded: {:?}",
            frame.raw_id(),
            frame.len,
            frame.payload(),
            value
        );
        Ok(())
    }
}

/// Transceiver enable line.
struct EnablePin;

impl ErrorType for EnablePin {
    type Error = core::convert::Infallible;
}

impl OutputPin for EnablePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        println!("   Transceiver enabled");
        Ok(())
    }
}

struct TokioTimer;

impl DelayTimer for TokioTimer {
    async fn delay_ms(&mut self, millis: u32) {
        sleep(Duration::from_millis(millis as u64)).await;
    }
}

/// Serial console stand-in.
struct Stdout;

impl fmt::Write for Stdout {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        print!("{}", s);
        Ok(())
    }
}

#[tokio::main]
async fn main() {
    println!("=== torque-can Quickstart ===\n");

    let config = NodeConfig::DEFAULT
        .with_settle_delay_ms(200)
        .with_diagnostics(true);

    let mut node = TorqueNode::new(
        config,
        ConsoleBus { sent: 0 },
        SweepAdc {
            value: 0,
            rising: true,
            resolution: 10,
        },
        EnablePin,
        TokioTimer,
        FmtSink::new(Stdout),
    );

    println!("1. Setup");
    if let Err(e) = node.setup().await {
        eprintln!("   Setup error: {}", e);
        return;
    }

    println!("\n2. Transmitting (20 ms period)");
    for _ in 0..15 {
        if let Err(e) = node.tick().await {
            println!("   (loop continues after: {})", e);
        }
    }

    println!("\nQuickstart complete.");
}
