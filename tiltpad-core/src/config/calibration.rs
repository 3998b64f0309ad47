//! Tilt calibration data types
//!
//! Stores measured thresholds that can be persisted to EEPROM and loaded
//! on boot in place of the compile-time defaults.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::TiltConfig;

/// Magic number to identify valid calibration data
pub const CALIBRATION_MAGIC: u32 = 0x544C_5443; // "TLTC"

/// Current calibration data version
pub const CALIBRATION_VERSION: u8 = 1;

/// Reasons stored calibration is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationError {
    /// Magic number mismatch (never written or overwritten)
    BadMagic,
    /// Written by an incompatible firmware
    UnsupportedVersion(u8),
    /// CRC mismatch
    Corrupted,
    /// Thresholds out of order
    InvalidThresholds,
    /// Serialization failed or the stored bytes do not decode
    Encoding,
}

/// Calibration record stored in EEPROM
///
/// This struct is serialized to EEPROM using postcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalibrationData {
    /// Magic number for validation
    pub magic: u32,
    /// Data format version
    pub version: u8,
    /// Measured thresholds
    pub tilt: TiltConfig,
    /// CRC32 checksum (calculated over magic..tilt)
    pub crc: u32,
}

impl CalibrationData {
    /// Sealed record for `tilt`
    pub fn new(tilt: TiltConfig) -> Self {
        let mut data = Self {
            magic: CALIBRATION_MAGIC,
            version: CALIBRATION_VERSION,
            tilt,
            crc: 0,
        };
        data.update_crc();
        data
    }

    /// Calculate CRC32 over every field except the CRC itself
    pub fn calculate_crc(&self) -> u32 {
        let mut crc: u32 = 0xFFFF_FFFF;

        crc = crc32_update(crc, &self.magic.to_le_bytes());
        crc = crc32_update(crc, &[self.version]);
        crc = crc32_update(crc, &self.tilt.x.low.to_le_bytes());
        crc = crc32_update(crc, &self.tilt.x.high.to_le_bytes());
        crc = crc32_update(crc, &self.tilt.y.low.to_le_bytes());
        crc = crc32_update(crc, &self.tilt.y.high.to_le_bytes());

        !crc
    }

    /// Update the CRC field
    pub fn update_crc(&mut self) {
        self.crc = self.calculate_crc();
    }

    /// Check header, CRC and threshold order, returning the thresholds
    pub fn validate(&self) -> Result<TiltConfig, CalibrationError> {
        if self.magic != CALIBRATION_MAGIC {
            return Err(CalibrationError::BadMagic);
        }
        if self.version != CALIBRATION_VERSION {
            return Err(CalibrationError::UnsupportedVersion(self.version));
        }
        if self.crc != self.calculate_crc() {
            return Err(CalibrationError::Corrupted);
        }
        if !self.tilt.is_valid() {
            return Err(CalibrationError::InvalidThresholds);
        }
        Ok(self.tilt)
    }
}

/// CRC32 update (IEEE 802.3 polynomial, reflected)
fn crc32_update(crc: u32, data: &[u8]) -> u32 {
    const POLY: u32 = 0xEDB8_8320;
    let mut crc = crc;

    for &byte in data {
        crc ^= byte as u32;
        for _ in 0..8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ POLY;
            } else {
                crc >>= 1;
            }
        }
    }

    crc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tilt::Thresholds;

    fn sample() -> TiltConfig {
        TiltConfig::new(Thresholds::new(7000, 9000), Thresholds::new(7500, 9500))
    }

    #[test]
    fn test_new_record_validates() {
        let data = CalibrationData::new(sample());
        assert_eq!(data.magic, CALIBRATION_MAGIC);
        assert_eq!(data.version, CALIBRATION_VERSION);
        assert_eq!(data.validate(), Ok(sample()));
    }

    #[test]
    fn test_crc_detects_tampering() {
        let mut data = CalibrationData::new(sample());
        data.tilt.y.high = 12_000;
        assert_eq!(data.validate(), Err(CalibrationError::Corrupted));

        data.update_crc();
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_header_checks() {
        let mut data = CalibrationData::new(sample());
        data.magic = 0xFFFF_FFFF;
        assert_eq!(data.validate(), Err(CalibrationError::BadMagic));

        let mut data = CalibrationData::new(sample());
        data.version = 9;
        assert_eq!(
            data.validate(),
            Err(CalibrationError::UnsupportedVersion(9))
        );
    }

    #[test]
    fn test_rejects_inverted_thresholds() {
        let data = CalibrationData::new(TiltConfig::new(
            Thresholds::new(9000, 7000),
            Thresholds::DEFAULT,
        ));
        assert_eq!(data.validate(), Err(CalibrationError::InvalidThresholds));
    }

    #[test]
    fn test_crc32_known_value() {
        // CRC-32 of "123456789"
        assert_eq!(!crc32_update(0xFFFF_FFFF, b"123456789"), 0xCBF4_3926);
    }
}
