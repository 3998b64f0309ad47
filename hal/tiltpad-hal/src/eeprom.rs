//! Byte-addressed persistent storage
//!
//! The ATmega's EEPROM is a flat array of bytes with no wear leveling or
//! integrity checking. Anything stored here that needs validation carries
//! its own header and checksum.

/// Byte-addressed non-volatile storage
pub trait ByteStorage {
    /// Error type for storage operations
    type Error;

    /// Number of addressable bytes
    fn capacity(&self) -> u16;

    /// Read the byte at `address`
    fn read_byte(&mut self, address: u16) -> Result<u8, Self::Error>;

    /// Write `byte` at `address`
    fn write_byte(&mut self, address: u16, byte: u8) -> Result<(), Self::Error>;

    /// Read `buffer.len()` consecutive bytes starting at `address`
    fn read_into(&mut self, address: u16, buffer: &mut [u8]) -> Result<(), Self::Error> {
        for (offset, slot) in buffer.iter_mut().enumerate() {
            *slot = self.read_byte(address.wrapping_add(offset as u16))?;
        }
        Ok(())
    }

    /// Write `data` to consecutive bytes starting at `address`
    fn write_from(&mut self, address: u16, data: &[u8]) -> Result<(), Self::Error> {
        for (offset, &byte) in data.iter().enumerate() {
            self.write_byte(address.wrapping_add(offset as u16), byte)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockStorage {
        cells: [u8; 16],
    }

    impl ByteStorage for MockStorage {
        type Error = u16;

        fn capacity(&self) -> u16 {
            self.cells.len() as u16
        }

        fn read_byte(&mut self, address: u16) -> Result<u8, u16> {
            self.cells.get(address as usize).copied().ok_or(address)
        }

        fn write_byte(&mut self, address: u16, byte: u8) -> Result<(), u16> {
            let cell = self.cells.get_mut(address as usize).ok_or(address)?;
            *cell = byte;
            Ok(())
        }
    }

    #[test]
    fn test_block_roundtrip() {
        let mut storage = MockStorage { cells: [0xFF; 16] };

        storage.write_from(4, &[1, 2, 3]).unwrap();

        let mut buf = [0u8; 3];
        storage.read_into(4, &mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3]);
        assert_eq!(storage.cells[3], 0xFF);
        assert_eq!(storage.cells[7], 0xFF);
    }

    #[test]
    fn test_block_write_reports_first_bad_address() {
        let mut storage = MockStorage { cells: [0; 16] };

        assert_eq!(storage.write_from(14, &[1, 2, 3, 4]), Err(16));
        assert_eq!(storage.cells[14], 1);
        assert_eq!(storage.cells[15], 2);
    }
}
