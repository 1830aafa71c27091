//! Board-agnostic encoder logic
//!
//! This crate turns a hardware counter running in encoder mode into
//! something firmware can use directly:
//!
//! - Absolute position tracking from the free-running count register
//! - Direction-of-motion polling that stays correct across counter wrap
//! - Inactivity timeout that retires a stale direction
//! - Single-step adjustment of a bounded value (menu settings and the like)
//!
//! Hardware access goes through the [`detent_hal`] traits, so the same code
//! runs against a real timer peripheral or a test fake.
//!
//! # Example
//!
//! ```ignore
//! let mut encoder = Encoder::new(timer_encoder, EmbassyClock, 200);
//! encoder.sync_baseline();
//!
//! // In the menu loop:
//! brightness = encoder.adjust(brightness, 0, 10, CycleMode::Off);
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod adjust;
pub mod config;
pub mod direction;
pub mod encoder;

#[cfg(test)]
mod mock;

// Re-export the HAL traits so callers can name encoder bounds
pub use detent_hal;

pub use adjust::{AdjustRange, CycleMode, RangeError};
pub use config::{DirectionPolarity, EncoderConfig, DEFAULT_DIR_TIMEOUT_MS};
pub use direction::Direction;
pub use encoder::Encoder;
