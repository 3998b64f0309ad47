//! Epson S1D15G10 command set
//!
//! The controller on the 131x131 colour LCD takes a command frame
//! followed by a fixed number of data frames per command.

use heapless::Vec;

/// S1D15G10 op-codes
pub mod op {
    /// Display control: clock division, duty, inverted lines
    pub const DISCTL: u8 = 0xCA;
    /// Common scan direction
    pub const COMSCN: u8 = 0xBB;
    /// Internal oscillator on
    pub const OSCON: u8 = 0xD1;
    /// Sleep out
    pub const SLPOUT: u8 = 0x94;
    /// Electronic volume (contrast)
    pub const VOLCTR: u8 = 0x81;
    /// Power control
    pub const PWRCTR: u8 = 0x20;
    /// Inverse display
    pub const DISINV: u8 = 0xA7;
    /// Data control: addressing direction, RGB order, colour depth
    pub const DATCTL: u8 = 0xBC;
    /// No operation
    pub const NOP: u8 = 0x25;
    /// Display on
    pub const DISON: u8 = 0xAF;
    /// Page (row) address window
    pub const PASET: u8 = 0x75;
    /// Column address window
    pub const CASET: u8 = 0x15;
    /// Memory write; following data frames are pixel data
    pub const RAMWR: u8 = 0x5C;
}

/// Most data frames any init command takes
pub const MAX_INIT_PARAMS: usize = 3;

/// Number of commands in the init sequence
pub const INIT_STEPS: usize = 10;

/// Electronic volume setting sent with `VOLCTR`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Contrast {
    /// Fine volume adjustment (0-63)
    pub volume: u8,
    /// Internal resistor ratio, coarse adjustment (0-7)
    pub resistor_ratio: u8,
}

impl Default for Contrast {
    fn default() -> Self {
        Self {
            volume: 40,
            resistor_ratio: 1,
        }
    }
}

/// One command of the init sequence with its data payload
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InitStep {
    /// Command op-code
    pub command: u8,
    /// Data frames that follow the command
    pub params: Vec<u8, MAX_INIT_PARAMS>,
}

impl InitStep {
    fn new(command: u8, params: &[u8]) -> Self {
        debug_assert!(params.len() <= MAX_INIT_PARAMS);
        let len = params.len().min(MAX_INIT_PARAMS);
        Self {
            command,
            // Cannot fail: length clamped to capacity
            params: Vec::from_slice(&params[..len]).unwrap_or_default(),
        }
    }
}

/// Power-up command sequence
///
/// Runs after the hardware reset pulse. Ends with the display switched
/// on in 12-bit colour mode.
pub fn init_sequence(contrast: Contrast) -> [InitStep; INIT_STEPS] {
    [
        // No clock division, 132/4 - 1 = 32 duty, no inversely highlighted lines
        InitStep::new(op::DISCTL, &[0x00, 0x20, 0x0A]),
        // 1->68, 132<-69 scan direction
        InitStep::new(op::COMSCN, &[0x00]),
        InitStep::new(op::OSCON, &[]),
        InitStep::new(op::SLPOUT, &[]),
        InitStep::new(
            op::VOLCTR,
            &[contrast.volume & 0x3F, contrast.resistor_ratio & 0x07],
        ),
        // Everything on, no external reference resistors
        InitStep::new(op::PWRCTR, &[0x0F]),
        InitStep::new(op::DISINV, &[]),
        // Normal page address, reversed column address, RGB order, 12-bit colour
        InitStep::new(op::DATCTL, &[0x00, 0x03, 0x02]),
        InitStep::new(op::NOP, &[]),
        InitStep::new(op::DISON, &[]),
    ]
}
