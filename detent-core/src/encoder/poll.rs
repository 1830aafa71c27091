//! Direction polling
//!
//! Each poll compares the count register against the previous snapshot.
//! The numeric difference alone cannot tell a decrement near zero from an
//! increment across the wrap, so the hardware direction flag decides the
//! direction and the magnitude is taken as the wrapping distance that way.
//!
//! Polls must come often enough that the counter cannot travel more than
//! one full wrap in between; beyond that no poller can recover the motion.

use detent_hal::{EncoderCounter, MillisClock};

use super::Encoder;
use crate::direction::Direction;

impl<C, K> Encoder<C, K>
where
    C: EncoderCounter,
    K: MillisClock,
{
    /// Classify motion since the previous poll
    ///
    /// On motion this restarts the direction timeout and records the step
    /// count, readable through [`read_last_delta`](Self::read_last_delta)
    /// as a non-negative magnitude. The stored direction is left alone;
    /// use [`latch_direction`](Self::latch_direction) to store the result.
    pub fn poll_direction(&mut self) -> Direction {
        self.count_prev = self.count;
        self.count = self.counter.count();

        if self.count == self.count_prev {
            return Direction::Static;
        }

        self.timeout_start_ms = self.clock.now_ms();

        let direction = self
            .config
            .polarity
            .classify(self.counter.is_counting_down());
        let distance = match direction {
            Direction::Down => self.count_prev.wrapping_sub(self.count),
            _ => self.count.wrapping_sub(self.count_prev),
        };
        self.delta = i32::from(distance);

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "encoder {} by {} ({} -> {})",
            direction,
            self.delta,
            self.count_prev,
            self.count
        );

        direction
    }

    /// Poll and store the result as the current direction
    pub fn latch_direction(&mut self) -> Direction {
        self.direction = self.poll_direction();
        self.direction
    }

    /// Adopt the live counter value as the polling baseline
    ///
    /// Neither direction nor delta changes. Useful right after construction
    /// so the first poll does not report the distance from zero.
    pub fn sync_baseline(&mut self) {
        let count = self.counter.count();
        self.count = count;
        self.count_prev = count;
    }
}
