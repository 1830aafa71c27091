//! Bounded value adjustment
//!
//! Meant to be called repeatedly while a menu page or similar is editing a
//! number. Each call moves the value by at most one unit, whatever the size
//! of the underlying counter motion: a fast spin between two calls becomes
//! a single step. Callers that need exact step counts should read
//! [`read_last_delta`](Encoder::read_last_delta) instead.

use detent_hal::{EncoderCounter, MillisClock};

use super::Encoder;
use crate::adjust::{AdjustRange, CycleMode};

impl<C, K> Encoder<C, K>
where
    C: EncoderCounter,
    K: MillisClock,
{
    /// Step `value` within `[min, max]` according to encoder motion
    ///
    /// `min <= max` and `min <= value <= max` are the caller's
    /// responsibility. Other inputs still produce a deterministic result
    /// but are not checked; build an [`AdjustRange`] for validation.
    pub fn adjust(&mut self, value: u32, min: u32, max: u32, cycle: CycleMode) -> u32 {
        self.adjust_in(value, &AdjustRange::unchecked(min, max, cycle))
    }

    /// Step `value` within a prepared range
    ///
    /// The timeout check runs before the poll; polling first would restart
    /// the timeout and hide an expired direction.
    pub fn adjust_in(&mut self, value: u32, range: &AdjustRange) -> u32 {
        self.apply_timeout();
        self.latch_direction();

        let (next, direction) = self.direction.step(value, range);
        self.direction = direction;
        next
    }
}
