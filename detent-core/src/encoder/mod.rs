//! Encoder state
//!
//! One [`Encoder`] exists per physical encoder for the lifetime of the
//! firmware. It owns (or exclusively borrows) the counter peripheral and a
//! clock, and carries the polling snapshots between calls.
//!
//! The operations are split by concern:
//!
//! - [`position`] - absolute count access
//! - [`poll`] - direction polling against the previous snapshot
//! - [`timeout`] - inactivity retirement of the stored direction
//! - [`adjust`] - bounded single-step value adjustment
//!
//! # Concurrency
//!
//! Nothing here locks. An encoder shared between an interrupt handler and a
//! task needs external mutual exclusion (e.g. a critical-section mutex).

use detent_hal::{EncoderCounter, MillisClock};

use crate::config::EncoderConfig;
use crate::direction::Direction;

pub mod adjust;
pub mod poll;
pub mod position;
pub mod timeout;

/// Quadrature encoder on top of a hardware counter
#[derive(Debug)]
pub struct Encoder<C, K> {
    counter: C,
    clock: K,
    config: EncoderConfig,
    /// Tick of the last detected motion (ms)
    timeout_start_ms: u32,
    /// Stored direction, written by the adjustment engine
    direction: Direction,
    /// Count register at the last poll
    count: u16,
    /// Count register at the poll before that
    count_prev: u16,
    /// Magnitude of the last detected motion
    delta: i32,
}

impl<C, K> Encoder<C, K>
where
    C: EncoderCounter,
    K: MillisClock,
{
    /// Create an encoder with the given direction timeout
    ///
    /// Only stores its arguments; the peripheral is not touched. Call
    /// [`sync_baseline`](Self::sync_baseline) if the counter may already be
    /// away from zero.
    pub fn new(counter: C, clock: K, dir_timeout_ms: u32) -> Self {
        Self::with_config(counter, clock, EncoderConfig::new(dir_timeout_ms))
    }

    /// Create an encoder from a full configuration
    pub fn with_config(counter: C, clock: K, config: EncoderConfig) -> Self {
        Self {
            counter,
            clock,
            config,
            timeout_start_ms: 0,
            direction: Direction::Static,
            count: 0,
            count_prev: 0,
            delta: 0,
        }
    }
}

impl<C, K> Encoder<C, K> {
    /// Get the configuration
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Get the stored direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Count register value captured by the last poll
    pub fn last_count(&self) -> u16 {
        self.count
    }

    /// Give back the counter and clock
    pub fn release(self) -> (C, K) {
        (self.counter, self.clock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DirectionPolarity;
    use crate::mock::{FakeClock, FakeCounter};

    #[test]
    fn test_new_does_not_touch_hardware() {
        let counter = FakeCounter::new(1234);
        let clock = FakeClock::new(0);
        let encoder = Encoder::new(&counter, &clock, 150);

        assert_eq!(counter.raw(), 1234);
        assert_eq!(encoder.last_count(), 0);
        assert_eq!(encoder.direction(), Direction::Static);
        assert_eq!(encoder.read_last_delta(), 0);
        assert_eq!(encoder.config().dir_timeout_ms, 150);
    }

    #[test]
    fn test_with_config() {
        let counter = FakeCounter::new(0);
        let clock = FakeClock::new(0);
        let config = EncoderConfig::new(80).with_polarity(DirectionPolarity::Inverted);
        let encoder = Encoder::with_config(&counter, &clock, config);
        assert_eq!(*encoder.config(), config);
    }

    #[test]
    fn test_release_returns_parts() {
        let counter = FakeCounter::new(9);
        let clock = FakeClock::new(5);
        let encoder = Encoder::new(&counter, &clock, 100);
        let (c, k) = encoder.release();
        assert_eq!(c.count(), 9);
        assert_eq!(k.now_ms(), 5);
    }
}
