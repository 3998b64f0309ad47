//! On-chip EEPROM driver
//!
//! 512 bytes, one byte per operation. A write takes several milliseconds
//! to program; both reads and writes wait for any write in progress
//! before touching the address register.

use tiltpad_hal::{ByteStorage, Poll, RegisterIo};
use tiltpad_hal_atmega168::registers::eeprom::{EEARL, EECR, EEDR, EEMPE, EEPE, EERE, SIZE};

/// EEPROM errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EepromError<E> {
    /// Address past the end of the array
    AddressOutOfRange(u16),
    /// The previous write never finished
    Wait(E),
}

/// EEPROM driver
pub struct Eeprom<R, P> {
    regs: R,
    poll: P,
}

impl<R: RegisterIo, P: Poll> Eeprom<R, P> {
    pub fn new(regs: R, poll: P) -> Self {
        Self { regs, poll }
    }

    /// Program one byte
    pub fn write(&mut self, address: u16, byte: u8) -> Result<(), EepromError<P::Error>> {
        self.select(address)?;
        self.regs.write(EEDR, byte);
        // EEPE must follow EEMPE within four cycles, so no read-modify-write
        self.regs.write(EECR, 1 << EEMPE);
        self.regs.write(EECR, (1 << EEMPE) | (1 << EEPE));
        Ok(())
    }

    /// Read one byte
    pub fn read(&mut self, address: u16) -> Result<u8, EepromError<P::Error>> {
        self.select(address)?;
        self.regs.set_bit(EECR, EERE);
        Ok(self.regs.read(EEDR))
    }

    /// Wait out any write in progress, then latch `address`
    fn select(&mut self, address: u16) -> Result<(), EepromError<P::Error>> {
        if address >= SIZE {
            return Err(EepromError::AddressOutOfRange(address));
        }
        let regs = &mut self.regs;
        self.poll
            .wait_while(|| regs.test_bit(EECR, EEPE))
            .map_err(EepromError::Wait)?;
        self.regs.write_wide(EEARL, address);
        Ok(())
    }

    pub fn release(self) -> (R, P) {
        (self.regs, self.poll)
    }
}

impl<R: RegisterIo, P: Poll> ByteStorage for Eeprom<R, P> {
    type Error = EepromError<P::Error>;

    fn capacity(&self) -> u16 {
        SIZE
    }

    fn read_byte(&mut self, address: u16) -> Result<u8, Self::Error> {
        self.read(address)
    }

    fn write_byte(&mut self, address: u16, byte: u8) -> Result<(), Self::Error> {
        self.write(address, byte)
    }
}
