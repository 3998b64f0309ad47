//! Volatile register file for the real chip

use tiltpad_hal::{Register, RegisterIo};

/// Direct access to the ATmega168 data-space registers
///
/// Zero-sized handle; every access is a volatile load or store at the
/// register's fixed address.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// Create a handle to the register file
    ///
    /// # Safety
    ///
    /// Only valid on the ATmega168 itself, where every address in the
    /// register map is a mapped I/O register. The caller is responsible
    /// for not letting two handles drive the same pins concurrently; with
    /// no interrupts in this design that means not interleaving driver
    /// calls mid-transaction.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl RegisterIo for Mmio {
    #[inline(always)]
    fn read(&mut self, reg: Register) -> u8 {
        // SAFETY: register addresses are fixed, mapped and byte-aligned on
        // the target, and the handle was created under that contract.
        unsafe { core::ptr::read_volatile(reg.address() as usize as *const u8) }
    }

    #[inline(always)]
    fn write(&mut self, reg: Register, value: u8) {
        // SAFETY: as for `read`.
        unsafe { core::ptr::write_volatile(reg.address() as usize as *mut u8, value) }
    }
}
