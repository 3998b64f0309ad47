//! ATmega168 register map
//!
//! Data-space addresses (I/O address + 0x20 for the low I/O range) and
//! bit positions for the peripherals this layer drives.

use tiltpad_hal::Register;

/// Port B input pins
pub const PINB: Register = Register::at(0x23);
/// Port B data direction
pub const DDRB: Register = Register::at(0x24);
/// Port B output latch
pub const PORTB: Register = Register::at(0x25);

/// Port D input pins
pub const PIND: Register = Register::at(0x29);
/// Port D data direction
pub const DDRD: Register = Register::at(0x2A);
/// Port D output latch
pub const PORTD: Register = Register::at(0x2B);

/// EEPROM registers
pub mod eeprom {
    use tiltpad_hal::Register;

    /// Control register
    pub const EECR: Register = Register::at(0x3F);
    /// Data register
    pub const EEDR: Register = Register::at(0x40);
    /// Address register, low byte (high byte at +1)
    pub const EEARL: Register = Register::at(0x41);
    /// Address register, high byte
    pub const EEARH: Register = Register::at(0x42);

    /// Read enable
    pub const EERE: u8 = 0;
    /// Write enable; stays set while a write is in progress
    pub const EEPE: u8 = 1;
    /// Master write enable; must precede EEPE
    pub const EEMPE: u8 = 2;

    /// Bytes of EEPROM on the ATmega168
    pub const SIZE: u16 = 512;
}

/// USART0 registers
pub mod usart {
    use tiltpad_hal::Register;

    /// Status register A
    pub const UCSR0A: Register = Register::at(0xC0);
    /// Control register B
    pub const UCSR0B: Register = Register::at(0xC1);
    /// Control register C
    pub const UCSR0C: Register = Register::at(0xC2);
    /// Baud rate, low byte
    pub const UBRR0L: Register = Register::at(0xC4);
    /// Baud rate, high byte
    pub const UBRR0H: Register = Register::at(0xC5);
    /// Data register
    pub const UDR0: Register = Register::at(0xC6);

    /// Data register empty (UCSR0A)
    pub const UDRE0: u8 = 5;
    /// Receiver enable (UCSR0B)
    pub const RXEN0: u8 = 4;
    /// Transmitter enable (UCSR0B)
    pub const TXEN0: u8 = 3;
    /// Stop bit select (UCSR0C)
    pub const USBS0: u8 = 3;
    /// Character size, low bit of a 2-bit field (UCSR0C)
    pub const UCSZ00: u8 = 1;
}

/// ADC registers
pub mod adc {
    use tiltpad_hal::Register;

    /// Result, low byte; must be read first
    pub const ADCL: Register = Register::at(0x78);
    /// Result, high byte
    pub const ADCH: Register = Register::at(0x79);
    /// Control and status A
    pub const ADCSRA: Register = Register::at(0x7A);
    /// Multiplexer selection
    pub const ADMUX: Register = Register::at(0x7C);

    /// ADC enable (ADCSRA)
    pub const ADEN: u8 = 7;
    /// Start conversion; clears when the conversion completes (ADCSRA)
    pub const ADSC: u8 = 6;
    /// Prescaler field shift (ADCSRA)
    pub const ADPS0: u8 = 0;
    /// Prescaler field mask (ADCSRA)
    pub const ADPS_MASK: u8 = 0b0000_0111;
    /// Reference field shift (ADMUX)
    pub const REFS0: u8 = 6;
    /// Reference field mask (ADMUX)
    pub const REFS_MASK: u8 = 0b1100_0000;
    /// Left-adjust result (ADMUX)
    pub const ADLAR: u8 = 5;
    /// Channel field mask (ADMUX)
    pub const MUX_MASK: u8 = 0b0000_0111;

    /// Largest 10-bit result
    pub const MAX: u16 = 0x3FF;
}
