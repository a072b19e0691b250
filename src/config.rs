//! Runtime configuration of the torque node.
//!
//! The firmware runs with fixed values; they are gathered here so a board
//! crate can build the node from one `const` and tests can shorten the delays.
use crate::core::ADC_RESOLUTION_BITS;
use crate::protocol::transport::{
    TORQUE_BITRATE, TORQUE_FRAME_ID, TRANSCEIVER_SETTLE_DELAY_MS, TRANSMIT_PERIOD_MS,
};
use embedded_can::StandardId;

//==================================================================================NODE_CONFIG
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Parameters applied by [`TorqueNode`](crate::protocol::node::TorqueNode).
pub struct NodeConfig {
    /// Standard identifier stamped on every torque frame.
    pub frame_id: StandardId,
    /// CAN bitrate passed to the bus driver at startup (bit/s).
    pub bitrate: u32,
    /// One-time wait after starting the bus, before the transceiver is enabled (ms).
    pub settle_delay_ms: u32,
    /// Pause after every transmission attempt (ms).
    pub transmit_period_ms: u32,
    /// ADC resolution requested from the analog input (bits).
    pub adc_resolution_bits: u8,
    /// Whether sample values and send failures are written to the diagnostic sink.
    pub diagnostics: bool,
}

impl NodeConfig {
    /// Values used by the deployed torque sensor.
    pub const DEFAULT: Self = Self {
        frame_id: TORQUE_FRAME_ID,
        bitrate: TORQUE_BITRATE,
        settle_delay_ms: TRANSCEIVER_SETTLE_DELAY_MS,
        transmit_period_ms: TRANSMIT_PERIOD_MS,
        adc_resolution_bits: ADC_RESOLUTION_BITS,
        diagnostics: false,
    };

    /// Enable or disable the diagnostic output.
    pub const fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled;
        self
    }

    /// Override the one-time settle delay.
    pub const fn with_settle_delay_ms(mut self, millis: u32) -> Self {
        self.settle_delay_ms = millis;
        self
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
