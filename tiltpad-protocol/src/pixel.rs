//! 12-bit pixel packing
//!
//! In 12-bit colour mode the controller takes two pixels per three data
//! bytes:
//!
//! ```text
//! byte 0: R1 G1        (pixel 1 bits 11..4)
//! byte 1: B1 R2        (pixel 1 bits 3..0, pixel 2 bits 11..8)
//! byte 2: G2 B2        (pixel 2 bits 7..0)
//! ```

/// Mask for a packed 12-bit colour
pub const COLOR_MASK: u16 = 0x0FFF;

/// Pack two 12-bit colours into three data bytes
///
/// Bits above bit 11 of either colour are ignored.
pub const fn pack_pair(first: u16, second: u16) -> [u8; 3] {
    [
        (first >> 4) as u8,
        (((first & 0x0F) << 4) as u8) | (((second >> 8) & 0x0F) as u8),
        second as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_same_colour() {
        assert_eq!(pack_pair(0xFFF, 0xFFF), [0xFF, 0xFF, 0xFF]);
        assert_eq!(pack_pair(0x000, 0x000), [0x00, 0x00, 0x00]);
        assert_eq!(pack_pair(0xF00, 0xF00), [0xF0, 0x0F, 0x00]);
    }

    #[test]
    fn test_pack_distinct_colours() {
        // Red then blue
        assert_eq!(pack_pair(0xF00, 0x00F), [0xF0, 0x00, 0x0F]);
        assert_eq!(pack_pair(0x123, 0x456), [0x12, 0x34, 0x56]);
    }

    #[test]
    fn test_high_bits_ignored() {
        assert_eq!(pack_pair(0xF123, 0xA456), pack_pair(0x123, 0x456));
    }
}
