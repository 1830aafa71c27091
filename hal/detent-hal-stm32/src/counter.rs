//! Timer encoder-mode counter for STM32
//!
//! `Qei` from embassy-stm32 configures the timer (SMS encoder mode, input
//! capture on CH1/CH2) and reads it. It has no way to load `CNT`, so
//! writes go straight to the timer's register block.

use detent_hal::EncoderCounter;
use embassy_stm32::pac::timer::TimGp16;
use embassy_stm32::timer::qei::{Direction, Qei};
use embassy_stm32::timer::GeneralInstance4Channel;

/// Encoder-mode timer exposed as an [`EncoderCounter`]
///
/// `regs` must be the register block of the same timer the `Qei` was built
/// from (e.g. `pac::TIM3` together with `p.TIM3`).
pub struct TimerEncoder<'d, T: GeneralInstance4Channel> {
    qei: Qei<'d, T>,
    regs: TimGp16,
}

impl<'d, T: GeneralInstance4Channel> TimerEncoder<'d, T> {
    /// Wrap a configured `Qei` driver
    pub fn new(qei: Qei<'d, T>, regs: TimGp16) -> Self {
        Self { qei, regs }
    }

    /// Give back the underlying driver
    pub fn free(self) -> Qei<'d, T> {
        self.qei
    }
}

impl<'d, T: GeneralInstance4Channel> EncoderCounter for TimerEncoder<'d, T> {
    fn count(&self) -> u16 {
        self.qei.count()
    }

    fn set_count(&mut self, value: u16) {
        self.regs.cnt().write(|w| w.set_cnt(value));
    }

    fn is_counting_down(&self) -> bool {
        // CR1.DIR: 0 = upcounting, 1 = downcounting
        matches!(self.qei.read_direction(), Direction::Downcounting)
    }
}
