//! Blocking analog input abstraction: one pin, one conversion per call.

/// Single analog line read through the ADC of the board.
pub trait AnalogInput {
    /// Configure the conversion resolution in bits (12 on the torque node).
    fn set_resolution(&mut self, bits: u8);
    /// Perform one conversion and return the raw code.
    ///
    /// Conversion failures are not reported: drivers return whatever code the
    /// peripheral produced.
    fn read(&mut self) -> u16;
}
