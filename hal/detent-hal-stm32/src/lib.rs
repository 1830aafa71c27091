//! STM32-specific HAL for detent
//!
//! This crate implements the `detent-hal` traits for STM32 general-purpose
//! timers running in encoder mode. Supported chip families are those
//! embassy-stm32 exposes a `Qei` driver for.
//!
//! # Features
//!
//! - `stm32f411ce` - STM32F411CEU6 (Black Pill)
//! - `stm32f401cc` - STM32F401CCU6
//! - `stm32f103c8` - STM32F103C8T6 (Blue Pill)
//! - `defmt` - Enable debug formatting support
//!
//! # Usage
//!
//! ```ignore
//! let qei = Qei::new(p.TIM3, QeiPin::new_ch1(p.PA6), QeiPin::new_ch2(p.PA7));
//! let counter = TimerEncoder::new(qei, embassy_stm32::pac::TIM3);
//! let encoder = Encoder::new(counter, EmbassyClock, 200);
//! ```

#![no_std]

pub mod counter;

pub use counter::TimerEncoder;
// Re-export the clock so firmware only needs this crate
pub use detent_hal::EmbassyClock;
