//! Torque sensor reader: one ADC conversion of the potentiometer per call.
use crate::core::TorqueSample;
use crate::protocol::transport::traits::analog_input::AnalogInput;

/// Potentiometer wired to a single analog input.
pub struct TorqueSensor<A: AnalogInput> {
    adc: A,
}

impl<A: AnalogInput> TorqueSensor<A> {
    /// Wrap the analog line the potentiometer is attached to.
    pub fn new(adc: A) -> Self {
        Self { adc }
    }

    /// Apply the ADC resolution. Called once during node setup.
    pub fn configure(&mut self, resolution_bits: u8) {
        self.adc.set_resolution(resolution_bits);
    }

    /// Sample the potentiometer.
    ///
    /// A failed conversion cannot be told apart from a low reading. Codes above
    /// 4095 only appear when the driver ignored the resolution request; they
    /// are clamped so the frame layout stays valid.
    pub fn read_torque(&mut self) -> TorqueSample {
        let raw = self.adc.read();
        let sample = TorqueSample::saturating(raw);

        #[cfg(feature = "defmt")]
        if sample.get() != raw {
            defmt::warn!("ADC code {} exceeds 12 bits, clamped to {}", raw, sample.get());
        }

        sample
    }

    /// Borrow the underlying analog input.
    pub fn adc(&self) -> &A {
        &self.adc
    }

    /// Release the analog input.
    pub fn into_inner(self) -> A {
        self.adc
    }
}
