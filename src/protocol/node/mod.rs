//! Torque node: one-time initialization followed by the endless
//! read-then-send cycle.
//!
//! All state (bus, frame, sensor, pins, timer, diagnostics) is owned by
//! [`TorqueNode`] and handed explicitly to the sensor and the transmitter.
//!
//! # Example
//!
//! ```rust,ignore
//! use torque_can::config::NodeConfig;
//! use torque_can::protocol::diagnostics::NullSink;
//! use torque_can::protocol::node::TorqueNode;
//! use torque_can::protocol::transport::traits::delay_timer::EmbassyTimer;
//!
//! let node = TorqueNode::new(NodeConfig::DEFAULT, can_bus, adc, enable_pin, EmbassyTimer, NullSink);
//! // Only returns if the bus or the enable pin cannot be initialized.
//! let err = node.run().await;
//! ```
use core::convert::Infallible;

use embedded_hal::digital::{Error as _, OutputPin};

use crate::config::NodeConfig;
use crate::core::TorqueSample;
use crate::error::{SendTorqueError, SetupError};
use crate::protocol::diagnostics::{DiagnosticSink, NullSink};
use crate::protocol::sensor::TorqueSensor;
use crate::protocol::transmitter::{TorqueTransmitter, TransmitterState};
use crate::protocol::transport::can_frame::CanFrame;
use crate::protocol::transport::traits::{
    analog_input::AnalogInput, can_bus::CanBus, delay_timer::DelayTimer,
};

/// Firmware core of the torque sensor.
pub struct TorqueNode<C, A, P, T, D>
where
    C: CanBus,
    A: AnalogInput,
    P: OutputPin,
    T: DelayTimer,
    D: DiagnosticSink,
{
    config: NodeConfig,
    transmitter: TorqueTransmitter<C>,
    sensor: TorqueSensor<A>,
    /// Transceiver enable line, driven high during setup.
    enable_pin: P,
    timer: T,
    diagnostics: D,
}

impl<C, A, P, T, D> TorqueNode<C, A, P, T, D>
where
    C: CanBus,
    C::Error: core::fmt::Debug,
    A: AnalogInput,
    P: OutputPin,
    T: DelayTimer,
    D: DiagnosticSink,
{
    /// Assemble the node. No hardware is touched until [`setup`](Self::setup).
    pub fn new(
        config: NodeConfig,
        can_bus: C,
        adc: A,
        enable_pin: P,
        timer: T,
        diagnostics: D,
    ) -> Self {
        Self {
            transmitter: TorqueTransmitter::new(can_bus, config.frame_id),
            sensor: TorqueSensor::new(adc),
            config,
            enable_pin,
            timer,
            diagnostics,
        }
    }

    /// One-time initialization, in this order:
    /// 1. start the CAN peripheral at the configured bitrate;
    /// 2. wait for the transceiver to settle;
    /// 3. populate the static fields of the frame;
    /// 4. drive the transceiver enable line high;
    /// 5. set the ADC resolution.
    pub async fn setup(&mut self) -> Result<(), SetupError<C::Error>> {
        #[cfg(feature = "defmt")]
        defmt::info!("Starting CAN bus at {} bit/s", self.config.bitrate);

        self.transmitter
            .begin(self.config.bitrate)
            .await
            .map_err(SetupError::Bus)?;

        self.timer.delay_ms(self.config.settle_delay_ms).await;

        self.transmitter.prepare_frame(self.config.frame_id);

        self.enable_pin
            .set_high()
            .map_err(|err| SetupError::EnablePin(err.kind()))?;

        self.sensor.configure(self.config.adc_resolution_bits);

        #[cfg(feature = "defmt")]
        defmt::info!(
            "Torque node ready: frame id {}, period {} ms",
            self.config.frame_id.as_raw(),
            self.config.transmit_period_ms
        );

        Ok(())
    }

    /// One loop iteration: a single send attempt, then the transmit period.
    ///
    /// The wait happens whatever the outcome of the send.
    pub async fn tick(&mut self) -> Result<TorqueSample, SendTorqueError<C::Error>> {
        let result = if self.config.diagnostics {
            self.transmitter
                .send_torque(&mut self.sensor, &mut self.diagnostics)
                .await
        } else {
            self.transmitter
                .send_torque(&mut self.sensor, &mut NullSink)
                .await
        };

        self.timer.delay_ms(self.config.transmit_period_ms).await;

        result
    }

    /// Initialize then transmit forever.
    ///
    /// Send failures are already reported by the transmitter and do not stop
    /// the loop. Only a setup failure makes this function return.
    pub async fn run(mut self) -> Result<Infallible, SetupError<C::Error>> {
        self.setup().await?;

        loop {
            let _ = self.tick().await;
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    /// Frame last submitted to the bus.
    pub fn frame(&self) -> &CanFrame {
        self.transmitter.frame()
    }

    /// Transmission state of the node.
    pub fn state(&self) -> TransmitterState {
        self.transmitter.state()
    }

    /// Borrow the diagnostic sink.
    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// Borrow the transceiver enable pin.
    pub fn enable_pin(&self) -> &P {
        &self.enable_pin
    }

    /// Borrow the torque sensor.
    pub fn sensor(&self) -> &TorqueSensor<A> {
        &self.sensor
    }
}
