//! Busy-wait strategies
//!
//! Every peripheral in this system is synchronized by spinning on a
//! hardware flag. The spin itself is injected so the same driver code runs
//! with an unbounded loop on the target and with a bounded one in tests,
//! where a stuck flag becomes an observable [`Stalled`] instead of a hang.

use core::convert::Infallible;

/// A wait that ran out of iterations before its condition cleared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Stalled {
    /// Iterations spent before giving up
    pub iterations: u32,
}

/// Busy-wait strategy
pub trait Poll {
    /// Error returned when the strategy gives up
    type Error;

    /// Spin while `busy` returns true
    ///
    /// Returns the number of iterations that observed the busy condition.
    /// The count is a relative measure of time and saturates at `u32::MAX`.
    fn wait_while<F: FnMut() -> bool>(&mut self, busy: F) -> Result<u32, Self::Error>;

    /// Spin until `ready` returns true
    fn wait_until<F: FnMut() -> bool>(&mut self, mut ready: F) -> Result<u32, Self::Error> {
        self.wait_while(move || !ready())
    }
}

impl<P: Poll + ?Sized> Poll for &mut P {
    type Error = P::Error;

    fn wait_while<F: FnMut() -> bool>(&mut self, busy: F) -> Result<u32, Self::Error> {
        (**self).wait_while(busy)
    }
}

/// Unbounded spin used on the target
///
/// Never gives up. A peripheral that never becomes ready hangs the caller,
/// which is the accepted failure mode on hardware without a watchdog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Spin;

impl Poll for Spin {
    type Error = Infallible;

    #[inline]
    fn wait_while<F: FnMut() -> bool>(&mut self, mut busy: F) -> Result<u32, Infallible> {
        let mut iterations: u32 = 0;
        while busy() {
            iterations = iterations.saturating_add(1);
        }
        Ok(iterations)
    }
}

/// Spin that gives up after a fixed number of iterations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bounded {
    limit: u32,
}

impl Bounded {
    /// Give up once `limit` busy iterations have been observed
    pub const fn new(limit: u32) -> Self {
        Self { limit }
    }

    /// Iteration limit per wait
    pub const fn limit(&self) -> u32 {
        self.limit
    }
}

impl Poll for Bounded {
    type Error = Stalled;

    fn wait_while<F: FnMut() -> bool>(&mut self, mut busy: F) -> Result<u32, Stalled> {
        let mut iterations: u32 = 0;
        while busy() {
            iterations += 1;
            if iterations >= self.limit {
                return Err(Stalled { iterations });
            }
        }
        Ok(iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_counts_busy_iterations() {
        let mut remaining = 5;
        let count = Spin
            .wait_while(|| {
                if remaining > 0 {
                    remaining -= 1;
                    true
                } else {
                    false
                }
            })
            .unwrap();

        assert_eq!(count, 5);
    }

    #[test]
    fn test_ready_immediately() {
        assert_eq!(Spin.wait_while(|| false), Ok(0));
        assert_eq!(Bounded::new(10).wait_until(|| true), Ok(0));
    }

    #[test]
    fn test_bounded_reports_stall() {
        let mut poll = Bounded::new(1000);
        let result = poll.wait_while(|| true);

        assert_eq!(result, Err(Stalled { iterations: 1000 }));
    }

    #[test]
    fn test_bounded_completes_under_limit() {
        let mut polls = 0;
        let result = Bounded::new(100).wait_until(|| {
            polls += 1;
            polls == 10
        });

        assert_eq!(result, Ok(9));
    }

    #[test]
    fn test_strategy_through_mut_ref() {
        fn wait<P: Poll>(mut poll: P) -> Result<u32, P::Error> {
            poll.wait_while(|| true)
        }

        let mut bounded = Bounded::new(3);
        assert!(wait(&mut bounded).is_err());
    }
}
