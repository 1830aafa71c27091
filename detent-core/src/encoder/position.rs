//! Absolute position access
//!
//! The hardware counter always knows where the encoder is; these methods
//! read or reload it without involving the direction state machine.

use detent_hal::{EncoderCounter, MillisClock};

use super::Encoder;

impl<C, K> Encoder<C, K>
where
    C: EncoderCounter,
    K: MillisClock,
{
    /// Load the counter with a new position (e.g. a reference point)
    ///
    /// The polling snapshots move to `value` as well, so the next poll
    /// measures motion from the new baseline instead of reporting the jump.
    pub fn set_position(&mut self, value: u16) {
        self.counter.set_count(value);
        self.count = value;
        self.count_prev = value;
    }

    /// Read the live counter value
    pub fn read_position(&self) -> u16 {
        self.counter.count()
    }

    /// Magnitude of the motion seen by the most recent non-static poll
    ///
    /// Never triggers a poll. The value is not cleared by static polls, so
    /// it keeps describing the last real motion until a new one replaces it.
    pub fn read_last_delta(&self) -> i32 {
        self.delta
    }
}
