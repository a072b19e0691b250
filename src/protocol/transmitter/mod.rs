//! Torque frame transmitter: samples the sensor, stores the value in the
//! reusable frame, and submits it to the CAN bus once per call.
//!
//! A refused frame is reported on the diagnostic sink and returned to the
//! caller; nothing is retried and no failure state survives the call.
use embedded_can::StandardId;

use crate::core::TorqueSample;
use crate::error::{SendTorqueError, SerializationError};
use crate::infra::codec::traits::ToPayload;
use crate::protocol::diagnostics::{DiagnosticLine, DiagnosticSink};
use crate::protocol::sensor::TorqueSensor;
use crate::protocol::transport::can_frame::CanFrame;
use crate::protocol::transport::traits::{analog_input::AnalogInput, can_bus::CanBus};

/// Transmission state. `Transmitting` only lasts for one send attempt.
///
/// If the `send_torque` future is dropped while the bus is still busy, the
/// state stays `Transmitting` until the next call starts over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransmitterState {
    Idle,
    Transmitting,
}

/// Owner of the CAN bus and of the frame reused for every transmission.
pub struct TorqueTransmitter<C: CanBus> {
    /// CAN bus implementation used to send frames.
    can_bus: C,
    /// Frame mutated in place on every send; only the payload changes.
    frame: CanFrame,
    state: TransmitterState,
}

impl<C: CanBus> TorqueTransmitter<C>
where
    C::Error: core::fmt::Debug,
{
    /// Take ownership of the bus and pre-populate the frame header.
    pub fn new(can_bus: C, frame_id: StandardId) -> Self {
        Self {
            can_bus,
            frame: CanFrame::torque(frame_id),
            state: TransmitterState::Idle,
        }
    }

    /// Start the CAN peripheral.
    pub async fn begin(&mut self, bitrate: u32) -> Result<(), C::Error> {
        self.can_bus.begin(bitrate).await
    }

    /// Reset the static fields of the frame: identifier, standard format,
    /// data frame, DLC 2.
    pub fn prepare_frame(&mut self, frame_id: StandardId) {
        let payload = self.frame.data;
        self.frame = CanFrame::torque(frame_id);
        self.frame.data = payload;
    }

    /// Frame as it was last submitted (or prepared).
    pub fn frame(&self) -> &CanFrame {
        &self.frame
    }

    /// Current transmission state.
    pub fn state(&self) -> TransmitterState {
        self.state
    }

    /// Read the sensor once and transmit the value.
    ///
    /// Exactly one `send` is issued per call. On success the sample is written
    /// to `diagnostics` and returned; on failure the fixed error line is
    /// written instead and the bus error is returned.
    pub async fn send_torque<A: AnalogInput, D: DiagnosticSink>(
        &mut self,
        sensor: &mut TorqueSensor<A>,
        diagnostics: &mut D,
    ) -> Result<TorqueSample, SendTorqueError<C::Error>> {
        self.state = TransmitterState::Transmitting;

        let sample = sensor.read_torque();
        let result = match self.load(sample) {
            Ok(()) => self
                .can_bus
                .send(&self.frame)
                .await
                .map_err(SendTorqueError::Transmission),
            Err(err) => Err(err.into()),
        };

        self.state = TransmitterState::Idle;

        match result {
            Ok(()) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("Torque frame sent: {}", sample.get());
                diagnostics.emit(DiagnosticLine::Torque(sample));
                Ok(sample)
            }
            Err(err) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Torque frame refused by the bus (value {})", sample.get());
                diagnostics.emit(DiagnosticLine::SendError);
                Err(err)
            }
        }
    }

    /// Serialize the sample into the frame payload; the written length
    /// becomes the DLC.
    fn load(&mut self, sample: TorqueSample) -> Result<(), SerializationError> {
        self.frame.len = sample.to_payload(&mut self.frame.data)?;
        Ok(())
    }
}
