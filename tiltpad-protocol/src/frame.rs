//! 9-bit display bus frames.
//!
//! Frame format (transmitted MSB first):
//! - Bit 8: data/command flag (0 = command, 1 = data)
//! - Bits 7..0: payload byte
//!
//! Frames are built and consumed within a single bus transaction and
//! never stored on the target.

/// Number of bits clocked out per frame
pub const FRAME_BITS: u8 = 9;

/// Data/command flag position
pub const DATA_FLAG: u16 = 1 << 8;

/// Mask covering every bit of a frame
pub const FRAME_MASK: u16 = (1 << FRAME_BITS) - 1;

/// One 9-bit command or data frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SerialFrame(u16);

impl SerialFrame {
    /// Command frame carrying `opcode`
    pub const fn command(opcode: u8) -> Self {
        Self(opcode as u16)
    }

    /// Data frame carrying `byte`
    pub const fn data(byte: u8) -> Self {
        Self(DATA_FLAG | byte as u16)
    }

    /// Frame from a raw value; bits above bit 8 are discarded
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw & FRAME_MASK)
    }

    /// Raw 9-bit value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// True for data frames, false for commands
    pub const fn is_data(self) -> bool {
        self.0 & DATA_FLAG != 0
    }

    /// Payload byte
    pub const fn payload(self) -> u8 {
        self.0 as u8
    }

    /// Line levels in transmission order, bit 8 first
    pub fn bits(self) -> FrameBits {
        FrameBits {
            raw: self.0,
            remaining: FRAME_BITS,
        }
    }
}

/// Iterator over a frame's line levels, MSB first
#[derive(Debug, Clone)]
pub struct FrameBits {
    raw: u16,
    remaining: u8,
}

impl Iterator for FrameBits {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.raw & (1 << self.remaining) != 0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for FrameBits {}

/// Reassembles frames from sampled line levels
///
/// The inverse of [`SerialFrame::bits`]: feed one level per clock edge
/// and a frame pops out every ninth bit.
#[derive(Debug, Clone, Default)]
pub struct FrameAssembler {
    shift: u16,
    count: u8,
}

impl FrameAssembler {
    /// Create an empty assembler
    pub const fn new() -> Self {
        Self { shift: 0, count: 0 }
    }

    /// Shift in one bit
    ///
    /// Returns the completed frame after the ninth bit.
    pub fn push(&mut self, level: bool) -> Option<SerialFrame> {
        self.shift = (self.shift << 1) | level as u16;
        self.count += 1;
        if self.count == FRAME_BITS {
            let frame = SerialFrame::from_raw(self.shift);
            self.reset();
            Some(frame)
        } else {
            None
        }
    }

    /// Bits shifted in since the last complete frame
    pub const fn pending_bits(&self) -> u8 {
        self.count
    }

    /// Drop any partial frame
    pub fn reset(&mut self) {
        self.shift = 0;
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_command_frame() {
        let frame = SerialFrame::command(0xCA);
        assert_eq!(frame.raw(), 0x0CA);
        assert!(!frame.is_data());
        assert_eq!(frame.payload(), 0xCA);
    }

    #[test]
    fn test_data_frame() {
        let frame = SerialFrame::data(0x20);
        assert_eq!(frame.raw(), 0x120);
        assert!(frame.is_data());
        assert_eq!(frame.payload(), 0x20);
    }

    #[test]
    fn test_from_raw_masks_to_nine_bits() {
        let frame = SerialFrame::from_raw(0xFF06);
        assert_eq!(frame.raw(), 0x106);
        assert!(frame.is_data());
        assert_eq!(frame.payload(), 0x06);
    }

    #[test]
    fn test_bits_msb_first() {
        let levels: heapless::Vec<bool, 9> = SerialFrame::data(0x81).bits().collect();
        assert_eq!(
            levels.as_slice(),
            &[true, true, false, false, false, false, false, false, true]
        );
    }

    #[test]
    fn test_assembler_reports_partial_frames() {
        let mut asm = FrameAssembler::new();
        for level in SerialFrame::command(0xFF).bits().take(4) {
            assert!(asm.push(level).is_none());
        }
        assert_eq!(asm.pending_bits(), 4);

        asm.reset();
        assert_eq!(asm.pending_bits(), 0);
    }

    proptest! {
        #[test]
        fn prop_bits_reassemble(payload in any::<u8>(), is_data in any::<bool>()) {
            let frame = if is_data {
                SerialFrame::data(payload)
            } else {
                SerialFrame::command(payload)
            };

            let bits = frame.bits();
            prop_assert_eq!(bits.len(), 9);

            let mut asm = FrameAssembler::new();
            let mut out = None;
            for level in bits {
                out = asm.push(level);
            }
            prop_assert_eq!(out, Some(frame));
        }
    }
}
