//! Analog sampling abstractions

/// Multiplexed analog input
pub trait AnalogInput {
    /// Error type for conversions
    type Error;

    /// Largest value a conversion can return
    const MAX: u16;

    /// Select `channel`, convert once and return the raw result
    fn sample(&mut self, channel: u8) -> Result<u16, Self::Error>;
}

/// ADC voltage reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcReference {
    /// External AREF pin
    External,
    /// AVcc with external capacitor on AREF
    AVcc,
    /// Internal 1.1 V bandgap
    Internal1v1,
}

impl AdcReference {
    /// REFS1:REFS0 field value
    pub const fn bits(self) -> u8 {
        match self {
            AdcReference::External => 0b00,
            AdcReference::AVcc => 0b01,
            AdcReference::Internal1v1 => 0b11,
        }
    }
}

/// ADC clock prescaler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcPrescaler {
    Div2,
    Div4,
    Div8,
    Div16,
    Div32,
    Div64,
    Div128,
}

impl AdcPrescaler {
    /// ADPS2:0 field value
    pub const fn bits(self) -> u8 {
        match self {
            AdcPrescaler::Div2 => 0b001,
            AdcPrescaler::Div4 => 0b010,
            AdcPrescaler::Div8 => 0b011,
            AdcPrescaler::Div16 => 0b100,
            AdcPrescaler::Div32 => 0b101,
            AdcPrescaler::Div64 => 0b110,
            AdcPrescaler::Div128 => 0b111,
        }
    }
}

/// ADC configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcConfig {
    /// Voltage reference
    pub reference: AdcReference,
    /// Clock prescaler (16 MHz / 128 = 125 kHz, inside the 50-200 kHz window)
    pub prescaler: AdcPrescaler,
}

impl Default for AdcConfig {
    fn default() -> Self {
        Self {
            reference: AdcReference::AVcc,
            prescaler: AdcPrescaler::Div128,
        }
    }
}
