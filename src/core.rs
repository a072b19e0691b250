//! Defines the data contract shared by the sensor reader, the payload codec,
//! and the frame decoder: a torque sample is a 12-bit ADC code and nothing else.
use crate::error::SampleError;
use core::fmt;

/// ADC resolution used for every conversion (12 bits = values from 0 to 4095).
pub const ADC_RESOLUTION_BITS: u8 = 12;

/// Largest code a 12-bit conversion can produce.
pub const MAX_TORQUE_SAMPLE: u16 = (1 << ADC_RESOLUTION_BITS) - 1;

/// Number of payload bytes carried by the torque frame (DLC).
pub const TORQUE_PAYLOAD_LEN: usize = 2;

/// One analog-to-digital conversion of the torque potentiometer.
///
/// The wrapped value is always within `0..=MAX_TORQUE_SAMPLE`, so encoding it
/// on two big-endian bytes never truncates and the upper nibble of the first
/// byte is always zero.
///
/// # Example
///
/// ```
/// use torque_can::core::TorqueSample;
///
/// let sample = TorqueSample::new(300).unwrap();
/// assert_eq!(sample.get(), 300);
/// assert!(TorqueSample::new(4096).is_err());
/// assert_eq!(TorqueSample::saturating(9000), TorqueSample::MAX);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TorqueSample(u16);

impl TorqueSample {
    /// Lowest possible reading.
    pub const MIN: Self = Self(0);
    /// Highest possible reading.
    pub const MAX: Self = Self(MAX_TORQUE_SAMPLE);

    /// Validate a raw ADC code. Values above 4095 are rejected.
    #[inline]
    pub const fn new(raw: u16) -> Result<Self, SampleError> {
        if raw > MAX_TORQUE_SAMPLE {
            Err(SampleError::OutOfRange { value: raw })
        } else {
            Ok(Self(raw))
        }
    }

    /// Build a sample, clamping anything above 4095 to the top of the range.
    #[inline]
    pub const fn saturating(raw: u16) -> Self {
        if raw > MAX_TORQUE_SAMPLE {
            Self::MAX
        } else {
            Self(raw)
        }
    }

    /// Return the raw 12-bit code.
    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for TorqueSample {
    type Error = SampleError;

    fn try_from(raw: u16) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<TorqueSample> for u16 {
    fn from(sample: TorqueSample) -> Self {
        sample.0
    }
}

impl fmt::Display for TorqueSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
