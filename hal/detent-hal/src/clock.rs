//! Millisecond tick source
//!
//! The encoder only needs elapsed-time comparisons, so a free-running `u32`
//! millisecond counter is enough. Callers compare ticks with
//! `wrapping_sub`, which stays correct across the ~49 day wrap.

/// Monotonic millisecond clock
pub trait MillisClock {
    /// Current tick in milliseconds, wrapping at `u32::MAX`
    fn now_ms(&self) -> u32;

    /// Milliseconds elapsed since `start`, tolerating one tick wrap
    fn elapsed_since(&self, start: u32) -> u32 {
        self.now_ms().wrapping_sub(start)
    }
}

impl<T: MillisClock + ?Sized> MillisClock for &T {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// Clock backed by the embassy-time driver
///
/// Truncates the 64-bit embassy instant to `u32`, which gives exactly the
/// wrapping tick the encoder expects.
#[cfg(feature = "embassy-time")]
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EmbassyClock;

#[cfg(feature = "embassy-time")]
impl MillisClock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        embassy_time::Instant::now().as_millis() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedClock(u32);

    impl MillisClock for FixedClock {
        fn now_ms(&self) -> u32 {
            self.0
        }
    }

    #[test]
    fn test_elapsed_without_wrap() {
        let clock = FixedClock(1500);
        assert_eq!(clock.elapsed_since(1000), 500);
    }

    #[test]
    fn test_elapsed_across_wrap() {
        let clock = FixedClock(10);
        assert_eq!(clock.elapsed_since(u32::MAX - 9), 20);
    }

    #[test]
    fn test_borrowed_clock() {
        let clock = FixedClock(42);
        let shared = &clock;
        assert_eq!(shared.now_ms(), 42);
        assert_eq!(shared.elapsed_since(40), 2);
    }
}
