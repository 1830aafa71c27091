//! Test doubles for the hardware traits
//!
//! Both fakes use interior mutability so a test can keep turning the "knob"
//! and advancing time while an [`Encoder`](crate::Encoder) borrows them.

use core::cell::Cell;

use detent_hal::{EncoderCounter, MillisClock};

/// Fake timer in encoder mode
///
/// Mimics a 16-bit count register that wraps, plus a DIR flag that follows
/// the most recent step.
#[derive(Debug, Default)]
pub struct FakeCounter {
    cnt: Cell<u16>,
    down: Cell<bool>,
}

impl FakeCounter {
    pub fn new(cnt: u16) -> Self {
        Self {
            cnt: Cell::new(cnt),
            down: Cell::new(false),
        }
    }

    /// Rotate forward by `steps` counts
    pub fn turn_up(&self, steps: u16) {
        self.cnt.set(self.cnt.get().wrapping_add(steps));
        self.down.set(false);
    }

    /// Rotate backward by `steps` counts
    pub fn turn_down(&self, steps: u16) {
        self.cnt.set(self.cnt.get().wrapping_sub(steps));
        self.down.set(true);
    }

    /// Force raw register contents
    pub fn set_raw(&self, cnt: u16, down: bool) {
        self.cnt.set(cnt);
        self.down.set(down);
    }

    pub fn raw(&self) -> u16 {
        self.cnt.get()
    }
}

impl EncoderCounter for &FakeCounter {
    fn count(&self) -> u16 {
        self.cnt.get()
    }

    fn set_count(&mut self, value: u16) {
        self.cnt.set(value);
    }

    fn is_counting_down(&self) -> bool {
        self.down.get()
    }
}

/// Manually advanced millisecond clock
#[derive(Debug, Default)]
pub struct FakeClock {
    now: Cell<u32>,
}

impl FakeClock {
    pub fn new(now: u32) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl MillisClock for FakeClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}
