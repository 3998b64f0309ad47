//! USART0 transmit driver
//!
//! Blocking, transmit-side only. Used as a debug console: raw bytes,
//! fixed-width decimal numbers and single-byte fault markers.

use core::fmt::Write as _;

use heapless::String;
use tiltpad_hal::uart::{StopBits, UartConfig};
use tiltpad_hal::{Poll, RegisterIo, UartTx};
use tiltpad_hal_atmega168::registers::usart::{
    RXEN0, TXEN0, UBRR0L, UCSR0A, UCSR0B, UCSR0C, UCSZ00, UDR0, UDRE0, USBS0,
};

/// Width of a [`Usart::print_number`] field
pub const NUMBER_FIELD: usize = 8;

/// Byte sent by [`Usart::report_fault`]
pub const FAULT_MARKER: u8 = b'.';

/// USART0 driver
pub struct Usart<R, P> {
    regs: R,
    poll: P,
}

impl<R: RegisterIo, P: Poll> Usart<R, P> {
    pub fn new(regs: R, poll: P) -> Self {
        Self { regs, poll }
    }

    /// Program the baud rate and frame format and enable the transmitter
    ///
    /// Frames are always 8 data bits, no parity.
    pub fn init(&mut self, config: &UartConfig) {
        self.regs.write_wide(UBRR0L, config.ubrr());

        let mut control = 1 << TXEN0;
        if config.receiver {
            control |= 1 << RXEN0;
        }
        self.regs.write(UCSR0B, control);

        let mut format = 0b11 << UCSZ00;
        if config.stop_bits == StopBits::Two {
            format |= 1 << USBS0;
        }
        self.regs.write(UCSR0C, format);

        debug!(
            "usart at {=u32} baud, ubrr {=u16}",
            config.baudrate,
            config.ubrr()
        );
    }

    /// Wait for room in the transmit buffer and queue `byte`
    pub fn transmit(&mut self, byte: u8) -> Result<(), P::Error> {
        let regs = &mut self.regs;
        self.poll.wait_until(|| regs.test_bit(UCSR0A, UDRE0))?;
        self.regs.write(UDR0, byte);
        Ok(())
    }

    /// Send `value` in decimal as a fixed 8-byte field
    ///
    /// The field starts as all `.`; the digits overwrite the front and are
    /// followed by a NUL byte when they leave room for one.
    pub fn print_number(&mut self, value: i16) -> Result<(), P::Error> {
        self.write_all(&number_field(value))
    }

    /// Emit a single fault marker and carry on
    pub fn report_fault(&mut self) -> Result<(), P::Error> {
        warn!("fault reported on usart");
        self.transmit(FAULT_MARKER)
    }

    pub fn release(self) -> (R, P) {
        (self.regs, self.poll)
    }
}

impl<R: RegisterIo, P: Poll> UartTx for Usart<R, P> {
    type Error = P::Error;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.transmit(byte)
    }
}

/// Decimal rendering of `value` padded into a [`NUMBER_FIELD`]-byte field
pub fn number_field(value: i16) -> [u8; NUMBER_FIELD] {
    let mut field = [b'.'; NUMBER_FIELD];
    let mut digits: String<NUMBER_FIELD> = String::new();
    // Cannot overflow: an i16 renders in at most 6 characters
    write!(digits, "{}", value).ok();

    let len = digits.len();
    field[..len].copy_from_slice(digits.as_bytes());
    if len < NUMBER_FIELD {
        field[len] = 0;
    }
    field
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiltpad_hal::{Bounded, Spin, Stalled};
    use tiltpad_hal_atmega168::registers::usart::UBRR0H;
    use tiltpad_hal_atmega168::sim::SimBoard;

    #[test]
    fn test_init_default_frame() {
        let mut board = SimBoard::new();
        Usart::new(&mut board, Spin).init(&UartConfig::default());

        assert_eq!(board.peek(UBRR0L), 103);
        assert_eq!(board.peek(UBRR0H), 0);
        assert_eq!(board.peek(UCSR0B), (1 << RXEN0) | (1 << TXEN0));
        assert_eq!(board.peek(UCSR0C), (1 << USBS0) | (0b11 << UCSZ00));
    }

    #[test]
    fn test_init_transmit_only_one_stop_bit() {
        let mut board = SimBoard::new();
        let config = UartConfig {
            baudrate: 1200,
            stop_bits: StopBits::One,
            receiver: false,
            ..UartConfig::default()
        };
        Usart::new(&mut board, Spin).init(&config);

        // 16 MHz / 16 / 1200 - 1 = 832
        assert_eq!(board.peek(UBRR0L), (832 & 0xFF) as u8);
        assert_eq!(board.peek(UBRR0H), (832 >> 8) as u8);
        assert_eq!(board.peek(UCSR0B), 1 << TXEN0);
        assert_eq!(board.peek(UCSR0C), 0b11 << UCSZ00);
    }

    #[test]
    fn test_transmit_bytes_in_order() {
        let mut board = SimBoard::new();
        let mut usart = Usart::new(&mut board, Spin);
        usart.write_all(b"ok\r\n").unwrap();

        assert_eq!(board.usart_output(), b"ok\r\n");
    }

    #[test]
    fn test_transmit_stalls_when_buffer_full() {
        let mut board = SimBoard::new();
        board.set_usart_stalled(true);

        let result = Usart::new(&mut board, Bounded::new(64)).transmit(b'x');
        assert_eq!(result, Err(Stalled { iterations: 64 }));
        assert!(board.usart_output().is_empty());
    }

    #[test]
    fn test_number_field_layout() {
        assert_eq!(&number_field(42), b"42\0.....");
        assert_eq!(&number_field(0), b"0\0......");
        assert_eq!(&number_field(-7), b"-7\0.....");
        assert_eq!(&number_field(i16::MIN), b"-32768\0.");
        assert_eq!(&number_field(32767), b"32767\0..");
    }

    #[test]
    fn test_print_number_sends_whole_field() {
        let mut board = SimBoard::new();
        Usart::new(&mut board, Spin).print_number(1234).unwrap();

        assert_eq!(board.usart_output(), b"1234\0...");
    }

    #[test]
    fn test_report_fault_sends_marker() {
        let mut board = SimBoard::new();
        let mut usart = Usart::new(&mut board, Spin);
        usart.report_fault().unwrap();
        usart.transmit(b'!').unwrap();

        assert_eq!(board.usart_output(), &[FAULT_MARKER, b'!']);
    }
}
