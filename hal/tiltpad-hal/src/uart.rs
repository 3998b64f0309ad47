//! UART serial transmit abstractions
//!
//! Provides the byte-stream transmit trait and the frame configuration
//! shared by chip-specific USART drivers.

/// UART transmitter
///
/// Blocking: each call returns once the byte has been handed to the
/// transmit buffer, not once it has left the wire.
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Queue one byte for transmission
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Queue every byte of `data` in order
    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        for &byte in data {
            self.write_byte(byte)?;
        }
        Ok(())
    }
}

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// CPU clock feeding the baud generator, in Hz
    pub cpu_hz: u32,
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of stop bits
    pub stop_bits: StopBits,
    /// Enable the receiver as well as the transmitter
    pub receiver: bool,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            cpu_hz: 16_000_000,
            baudrate: 9600,
            stop_bits: StopBits::Two,
            receiver: true,
        }
    }
}

/// Largest value the 12-bit baud rate register holds
pub const UBRR_MAX: u16 = 0x0FFF;

impl UartConfig {
    /// Baud rate register value for normal-speed asynchronous mode
    ///
    /// `UBRR = f_cpu / 16 / baud - 1`, saturating at zero when the baud
    /// rate is too high for the clock and at [`UBRR_MAX`] when it is too
    /// low.
    pub const fn ubrr(&self) -> u16 {
        if self.baudrate == 0 {
            return 0;
        }
        let ubrr = (self.cpu_hz / 16 / self.baudrate).saturating_sub(1);
        if ubrr > UBRR_MAX as u32 {
            UBRR_MAX
        } else {
            ubrr as u16
        }
    }
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}
