//! Simulated ATmega168 register file
//!
//! Host-side stand-in for [`Mmio`](crate::Mmio) used by driver tests. It
//! models just enough of each peripheral for the drivers' busy-waits to
//! terminate:
//!
//! - Port B writes are decoded as the 3-wire LCD bus into [`SerialFrame`]s
//! - EEPROM reads and writes complete instantly against a 512-byte array
//! - ADC conversions complete instantly from per-channel input values
//! - USART transmit is always ready and captures every byte
//! - Input registers play back constant levels or square waves, advancing
//!   one tick per read
//!
//! Any peripheral can be forced to stay busy so "blocks forever" paths can
//! be exercised with a bounded wait strategy.

extern crate std;

use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use tiltpad_hal::register::bit_mask;
use tiltpad_hal::{Pin, Register, RegisterIo};
use tiltpad_protocol::{FrameAssembler, SerialFrame};

use crate::pins::{LCD_CS, LCD_DIO, LCD_SCK};
use crate::registers::{adc, eeprom, usart};

/// Square wave on an input pin, in read ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Waveform {
    /// Reads that return high each period
    pub high: u32,
    /// Reads that return low each period
    pub low: u32,
    phase: u32,
}

impl Waveform {
    /// Square wave starting at the beginning of its high segment
    pub const fn new(high: u32, low: u32) -> Self {
        Self {
            high,
            low,
            phase: 0,
        }
    }

    fn tick(&mut self) -> bool {
        let period = self.high + self.low;
        if period == 0 {
            return false;
        }
        let level = self.phase < self.high;
        self.phase = (self.phase + 1) % period;
        level
    }
}

#[derive(Debug, Clone, Copy)]
enum Line {
    Level(bool),
    Wave(Waveform),
}

#[derive(Debug, Clone, Copy)]
struct DrivenInput {
    register: Register,
    bit: u8,
    line: Line,
}

/// Decodes port writes into display frames
#[derive(Debug)]
struct BusDecoder {
    clock: Pin,
    data: Pin,
    select: Pin,
    assembler: FrameAssembler,
    frames: Vec<SerialFrame>,
    // Set on a falling CS edge, cleared on the next rising edge
    in_transaction: bool,
    clock_pulses: u32,
    transactions: u32,
    framing_errors: u32,
}

impl BusDecoder {
    fn new(clock: Pin, data: Pin, select: Pin) -> Self {
        Self {
            clock,
            data,
            select,
            assembler: FrameAssembler::new(),
            frames: Vec::new(),
            in_transaction: false,
            clock_pulses: 0,
            transactions: 0,
            framing_errors: 0,
        }
    }

    fn observe(&mut self, register: Register, old: u8, new: u8) {
        let level = |pin: Pin, value: u8| value & bit_mask(pin.bit) != 0;

        if register == self.select.output {
            let was_idle = level(self.select, old);
            let is_idle = level(self.select, new);
            if was_idle && !is_idle {
                self.in_transaction = true;
                self.assembler.reset();
            } else if !was_idle && is_idle {
                // Select starts low at power-up; only a full cycle counts
                if core::mem::take(&mut self.in_transaction) {
                    self.transactions += 1;
                }
                if self.assembler.pending_bits() != 0 {
                    self.framing_errors += 1;
                }
                self.assembler.reset();
            }
        }

        // Bits are latched on the rising clock edge while selected
        if register == self.clock.output && !level(self.select, new) {
            let rising = !level(self.clock, old) && level(self.clock, new);
            if rising {
                self.clock_pulses += 1;
                if let Some(frame) = self.assembler.push(level(self.data, new)) {
                    self.frames.push(frame);
                }
            }
        }
    }
}

/// Simulated register file
#[derive(Debug)]
pub struct SimBoard {
    mem: [u8; 0x100],
    eeprom: [u8; eeprom::SIZE as usize],
    eeprom_stuck: bool,
    adc_inputs: [u16; 8],
    adc_stuck: bool,
    conversions: u32,
    usart_tx: Vec<u8>,
    usart_stalled: bool,
    inputs: Vec<DrivenInput>,
    bus: BusDecoder,
    write_log: Option<Vec<(Register, u8)>>,
}

impl Default for SimBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl SimBoard {
    /// Board with the LCD bus on the reference pins and erased EEPROM
    pub fn new() -> Self {
        Self::with_bus(LCD_SCK, LCD_DIO, LCD_CS)
    }

    /// Board decoding the display bus on custom pins
    pub fn with_bus(clock: Pin, data: Pin, select: Pin) -> Self {
        Self {
            mem: [0; 0x100],
            eeprom: [0xFF; eeprom::SIZE as usize],
            eeprom_stuck: false,
            adc_inputs: [0; 8],
            adc_stuck: false,
            conversions: 0,
            usart_tx: Vec::new(),
            usart_stalled: false,
            inputs: Vec::new(),
            bus: BusDecoder::new(clock, data, select),
            write_log: None,
        }
    }

    /// Register value without read side effects
    pub fn peek(&self, reg: Register) -> u8 {
        self.mem[reg.address() as usize & 0xFF]
    }

    /// Set a register value without write side effects
    pub fn poke(&mut self, reg: Register, value: u8) {
        self.mem[reg.address() as usize & 0xFF] = value;
    }

    /// Whether `pin`'s output latch is high
    pub fn output_level(&self, pin: Pin) -> bool {
        self.peek(pin.output) & bit_mask(pin.bit) != 0
    }

    /// Whether `pin` is configured as an output
    pub fn is_output(&self, pin: Pin) -> bool {
        self.peek(pin.direction) & bit_mask(pin.bit) != 0
    }

    // Display bus

    /// Frames decoded so far
    pub fn frames(&self) -> &[SerialFrame] {
        &self.bus.frames
    }

    /// Take the decoded frames, leaving the log empty
    pub fn take_frames(&mut self) -> Vec<SerialFrame> {
        core::mem::take(&mut self.bus.frames)
    }

    /// Rising clock edges seen while chip select was active
    pub fn clock_pulses(&self) -> u32 {
        self.bus.clock_pulses
    }

    /// Completed chip-select cycles
    pub fn transactions(&self) -> u32 {
        self.bus.transactions
    }

    /// Transactions that ended mid-frame
    pub fn framing_errors(&self) -> u32 {
        self.bus.framing_errors
    }

    // Input pins

    /// Hold `pin` at a constant level
    pub fn drive_level(&mut self, pin: Pin, high: bool) {
        self.set_line(pin, Line::Level(high));
    }

    /// Play a square wave on `pin`
    pub fn drive_waveform(&mut self, pin: Pin, wave: Waveform) {
        self.set_line(pin, Line::Wave(wave));
    }

    fn set_line(&mut self, pin: Pin, line: Line) {
        self.inputs
            .retain(|d| !(d.register == pin.input && d.bit == pin.bit));
        self.inputs.push(DrivenInput {
            register: pin.input,
            bit: pin.bit,
            line,
        });
    }

    // EEPROM

    /// EEPROM contents
    pub fn eeprom(&self) -> &[u8] {
        &self.eeprom
    }

    /// Preload EEPROM contents starting at `address`
    pub fn load_eeprom(&mut self, address: u16, data: &[u8]) {
        let start = address as usize;
        self.eeprom[start..start + data.len()].copy_from_slice(data);
    }

    /// Make the next EEPROM write never complete, leaving EEPE set
    pub fn set_eeprom_stuck(&mut self, stuck: bool) {
        self.eeprom_stuck = stuck;
    }

    fn eeprom_address(&self) -> usize {
        let raw = u16::from_le_bytes([self.peek(eeprom::EEARL), self.peek(eeprom::EEARH)]);
        (raw % eeprom::SIZE) as usize
    }

    fn write_eecr(&mut self, old: u8, mut value: u8) -> u8 {
        if value & bit_mask(eeprom::EERE) != 0 {
            let byte = self.eeprom[self.eeprom_address()];
            self.poke(eeprom::EEDR, byte);
            value &= !bit_mask(eeprom::EERE);
        }

        let starting = value & bit_mask(eeprom::EEPE) != 0 && old & bit_mask(eeprom::EEPE) == 0;
        if starting {
            let armed = (old | value) & bit_mask(eeprom::EEMPE) != 0;
            if !armed {
                // EEPE without EEMPE is ignored by the hardware
                value &= !bit_mask(eeprom::EEPE);
            } else if !self.eeprom_stuck {
                let address = self.eeprom_address();
                self.eeprom[address] = self.peek(eeprom::EEDR);
                value &= !(bit_mask(eeprom::EEPE) | bit_mask(eeprom::EEMPE));
            }
        }
        value
    }

    // ADC

    /// Set the 10-bit value channel `channel` converts to
    pub fn set_adc_input(&mut self, channel: u8, value: u16) {
        self.adc_inputs[(channel & adc::MUX_MASK) as usize] = value & adc::MAX;
    }

    /// Make conversions never complete, leaving ADSC set
    pub fn set_adc_stuck(&mut self, stuck: bool) {
        self.adc_stuck = stuck;
    }

    /// Completed conversions
    pub fn conversions(&self) -> u32 {
        self.conversions
    }

    fn write_adcsra(&mut self, mut value: u8) -> u8 {
        let start = value & bit_mask(adc::ADSC) != 0;
        let enabled = value & bit_mask(adc::ADEN) != 0;
        if start && enabled && !self.adc_stuck {
            let channel = self.peek(adc::ADMUX) & adc::MUX_MASK;
            let result = self.adc_inputs[channel as usize];
            self.poke(adc::ADCL, result as u8);
            self.poke(adc::ADCH, (result >> 8) as u8);
            self.conversions += 1;
            value &= !bit_mask(adc::ADSC);
        }
        value
    }

    // USART

    /// Bytes written to the transmit buffer
    pub fn usart_output(&self) -> &[u8] {
        &self.usart_tx
    }

    /// Keep the transmit buffer full so UDRE0 never sets
    pub fn set_usart_stalled(&mut self, stalled: bool) {
        self.usart_stalled = stalled;
    }

    // Write log

    /// Start recording every register write
    pub fn record_writes(&mut self) {
        self.write_log = Some(Vec::new());
    }

    /// Writes recorded since [`record_writes`](Self::record_writes)
    pub fn writes(&self) -> &[(Register, u8)] {
        self.write_log.as_deref().unwrap_or(&[])
    }
}

impl RegisterIo for SimBoard {
    fn read(&mut self, reg: Register) -> u8 {
        let mut value = self.peek(reg);

        if reg == usart::UCSR0A {
            if self.usart_stalled {
                value &= !bit_mask(usart::UDRE0);
            } else {
                value |= bit_mask(usart::UDRE0);
            }
        }

        for input in self.inputs.iter_mut().filter(|d| d.register == reg) {
            let high = match &mut input.line {
                Line::Level(level) => *level,
                Line::Wave(wave) => wave.tick(),
            };
            if high {
                value |= bit_mask(input.bit);
            } else {
                value &= !bit_mask(input.bit);
            }
        }

        value
    }

    fn write(&mut self, reg: Register, value: u8) {
        if let Some(log) = self.write_log.as_mut() {
            log.push((reg, value));
        }

        let old = self.peek(reg);
        let stored = match reg {
            eeprom::EECR => self.write_eecr(old, value),
            adc::ADCSRA => self.write_adcsra(value),
            usart::UDR0 => {
                self.usart_tx.push(value);
                value
            }
            _ => value,
        };

        if reg == self.bus.clock.output || reg == self.bus.select.output {
            self.bus.observe(reg, old, stored);
        }

        self.poke(reg, stored);
    }
}

/// Delay provider that records requested delays instead of waiting
#[derive(Debug, Default)]
pub struct SimDelay {
    requests_ns: Vec<u64>,
}

impl SimDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Each requested delay, rounded down to whole milliseconds
    pub fn requests_ms(&self) -> Vec<u64> {
        self.requests_ns.iter().map(|ns| ns / 1_000_000).collect()
    }

    /// Sum of all requested delays in milliseconds
    pub fn total_ms(&self) -> u64 {
        self.requests_ns.iter().sum::<u64>() / 1_000_000
    }
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.requests_ns.push(ns as u64);
    }

    fn delay_us(&mut self, us: u32) {
        self.requests_ns.push(us as u64 * 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.requests_ns.push(ms as u64 * 1_000_000);
    }
}
