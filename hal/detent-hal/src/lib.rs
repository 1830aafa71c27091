//! Detent Hardware Abstraction Layer
//!
//! This crate defines the capability traits an encoder interface needs from
//! the hardware. Chip-specific crates implement them for real peripherals,
//! tests implement them with fakes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (menu loop, firmware)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  detent-core (encoder state machine)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  detent-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ detent-hal-   │       │  test fakes   │
//! │    stm32      │       │               │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`counter::EncoderCounter`] - Count register and direction flag
//! - [`clock::MillisClock`] - Monotonic millisecond tick

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod counter;

// Re-export key traits at crate root for convenience
#[cfg(feature = "embassy-time")]
pub use clock::EmbassyClock;
pub use clock::MillisClock;
pub use counter::EncoderCounter;
