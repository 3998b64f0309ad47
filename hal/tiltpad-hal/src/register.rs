//! Memory-mapped register access
//!
//! Every peripheral on the target is controlled through byte-wide
//! registers at fixed data-space addresses. Drivers never touch an
//! address directly; they go through [`RegisterIo`], which the chip crate
//! implements with volatile accesses and the test suite implements with
//! a simulated register file.

/// A byte-wide hardware register at a fixed address
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Register(u16);

impl Register {
    /// Register at the given data-space address
    pub const fn at(address: u16) -> Self {
        Self(address)
    }

    /// Data-space address of this register
    pub const fn address(self) -> u16 {
        self.0
    }

    /// The register `count` bytes above this one
    ///
    /// Used for the high half of 16-bit register pairs.
    pub const fn offset(self, count: u16) -> Self {
        Self(self.0 + count)
    }
}

/// Single-bit mask for a bit index (0-7)
#[inline]
pub const fn bit_mask(bit: u8) -> u8 {
    1 << (bit & 0x07)
}

/// Byte and bit access to hardware registers
///
/// Each operation is a single non-blocking access. There are no error
/// conditions at this layer; the register address space is always mapped.
///
/// Reads take `&mut self` because reading some registers has side effects
/// (clearing flags, popping receive buffers) and a simulated register file
/// advances its model on every access.
pub trait RegisterIo {
    /// Read the current value of a register
    fn read(&mut self, reg: Register) -> u8;

    /// Write a value to a register
    fn write(&mut self, reg: Register, value: u8);

    /// Read-modify-write a register
    fn modify<F: FnOnce(u8) -> u8>(&mut self, reg: Register, f: F) {
        let value = self.read(reg);
        self.write(reg, f(value));
    }

    /// Set one bit, leaving the others untouched
    fn set_bit(&mut self, reg: Register, bit: u8) {
        self.modify(reg, |v| v | bit_mask(bit));
    }

    /// Clear one bit, leaving the others untouched
    fn clear_bit(&mut self, reg: Register, bit: u8) {
        self.modify(reg, |v| v & !bit_mask(bit));
    }

    /// Check whether a bit is currently set
    fn test_bit(&mut self, reg: Register, bit: u8) -> bool {
        self.read(reg) & bit_mask(bit) != 0
    }

    /// Write a 16-bit value to a low/high register pair
    ///
    /// The high byte goes first: the AVR latches the high byte into a
    /// temporary register and commits both on the low-byte write.
    fn write_wide(&mut self, low: Register, value: u16) {
        self.write(low.offset(1), (value >> 8) as u8);
        self.write(low, value as u8);
    }
}

impl<T: RegisterIo + ?Sized> RegisterIo for &mut T {
    fn read(&mut self, reg: Register) -> u8 {
        (**self).read(reg)
    }

    fn write(&mut self, reg: Register, value: u8) {
        (**self).write(reg, value)
    }
}
