//! Busy-loop delay
//!
//! The AVR has no cycle counter, so delays are a counted spin. Accuracy is
//! approximate and depends on the compiled loop; it only needs to satisfy
//! the display's minimum reset and settle times.

use embedded_hal::delay::DelayNs;

/// Approximate CPU cycles per spin iteration
const CYCLES_PER_ITERATION: u32 = 4;

/// Delay provider that spins the CPU
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleDelay {
    cpu_hz: u32,
}

impl CycleDelay {
    /// Delay calibrated for a CPU clock of `cpu_hz`
    pub const fn new(cpu_hz: u32) -> Self {
        Self { cpu_hz }
    }

    /// Spin iterations needed for `ns` nanoseconds
    pub const fn iterations_for(&self, ns: u32) -> u32 {
        let cycles = (ns as u64 * self.cpu_hz as u64) / 1_000_000_000;
        (cycles / CYCLES_PER_ITERATION as u64) as u32
    }
}

impl DelayNs for CycleDelay {
    fn delay_ns(&mut self, ns: u32) {
        let mut remaining = self.iterations_for(ns);
        while remaining > 0 {
            remaining = core::hint::black_box(remaining) - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iterations_scale_with_clock() {
        let delay = CycleDelay::new(16_000_000);
        // 1 ms at 16 MHz = 16000 cycles = 4000 iterations
        assert_eq!(delay.iterations_for(1_000_000), 4000);

        let slow = CycleDelay::new(8_000_000);
        assert_eq!(slow.iterations_for(1_000_000), 2000);
    }

    #[test]
    fn test_short_delays_round_down() {
        let delay = CycleDelay::new(16_000_000);
        assert_eq!(delay.iterations_for(100), 0);
    }
}
