//! Tilt calibration persistence
//!
//! Stores measured thresholds in byte storage as a length-prefixed
//! postcard record:
//!
//! ```text
//! base      base+1              base+1+len
//! ┌───────┬───────────────────────┐
//! │ len   │ CalibrationData bytes │
//! └───────┴───────────────────────┘
//! ```
//!
//! Erased EEPROM reads as 0xFF, which is never a valid length.

use tiltpad_core::config::{CalibrationData, CalibrationError, TiltConfig};
use tiltpad_hal::ByteStorage;

/// Largest encoded record
pub const MAX_RECORD_SIZE: usize = 32;

/// Calibration storage errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoreError<E> {
    /// The underlying storage failed
    Storage(E),
    /// The record is missing or invalid
    Calibration(CalibrationError),
}

impl<E> From<CalibrationError> for StoreError<E> {
    fn from(e: CalibrationError) -> Self {
        StoreError::Calibration(e)
    }
}

/// Calibration record at a fixed storage address
pub struct CalibrationStore<S> {
    storage: S,
    base: u16,
}

impl<S: ByteStorage> CalibrationStore<S> {
    /// Store whose record starts at `base`
    pub fn new(storage: S, base: u16) -> Self {
        Self { storage, base }
    }

    /// Load stored thresholds, or `defaults` when there are none
    pub fn load_or(&mut self, defaults: TiltConfig) -> TiltConfig {
        match self.load() {
            Ok(config) => {
                info!("loaded tilt calibration");
                config
            }
            Err(StoreError::Calibration(CalibrationError::BadMagic)) => {
                debug!("no tilt calibration stored, using defaults");
                defaults
            }
            Err(_) => {
                warn!("stored tilt calibration rejected, using defaults");
                defaults
            }
        }
    }

    /// Load and validate stored thresholds
    pub fn load(&mut self) -> Result<TiltConfig, StoreError<S::Error>> {
        let len = self.storage.read_byte(self.base).map_err(StoreError::Storage)? as usize;
        if len == 0 || len > MAX_RECORD_SIZE {
            return Err(CalibrationError::BadMagic.into());
        }

        let mut buffer = [0u8; MAX_RECORD_SIZE];
        self.storage
            .read_into(self.base.wrapping_add(1), &mut buffer[..len])
            .map_err(StoreError::Storage)?;

        let data: CalibrationData =
            postcard::from_bytes(&buffer[..len]).map_err(|_| CalibrationError::Encoding)?;
        Ok(data.validate()?)
    }

    /// Seal and write `config`
    pub fn store(&mut self, config: &TiltConfig) -> Result<(), StoreError<S::Error>> {
        if !config.is_valid() {
            return Err(CalibrationError::InvalidThresholds.into());
        }

        let data = CalibrationData::new(*config);
        let mut buffer = [0u8; MAX_RECORD_SIZE];
        let bytes =
            postcard::to_slice(&data, &mut buffer).map_err(|_| CalibrationError::Encoding)?;

        let end = self.base as usize + 1 + bytes.len();
        if end > self.storage.capacity() as usize {
            return Err(CalibrationError::Encoding.into());
        }

        self.storage
            .write_byte(self.base, bytes.len() as u8)
            .map_err(StoreError::Storage)?;
        self.storage
            .write_from(self.base.wrapping_add(1), bytes)
            .map_err(StoreError::Storage)?;

        debug!("stored {=usize} bytes of tilt calibration", bytes.len());
        Ok(())
    }

    /// Mark the record as absent
    pub fn erase(&mut self) -> Result<(), StoreError<S::Error>> {
        self.storage
            .write_byte(self.base, 0xFF)
            .map_err(StoreError::Storage)
    }

    pub fn release(self) -> S {
        self.storage
    }
}
