//! Encoder configuration
//!
//! Configuration is fixed when an encoder is constructed and never changes
//! afterwards.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// Default inactivity period after which a direction is retired (ms)
pub const DEFAULT_DIR_TIMEOUT_MS: u32 = 200;

/// Mapping from the hardware direction flag to a [`Direction`]
///
/// STM32 timers document DIR = 0 as upcounting. Boards where the flag reads
/// the other way round (confirm on the target) use `Inverted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DirectionPolarity {
    /// Flag clear means counting up
    #[default]
    Normal,
    /// Flag set means counting up
    Inverted,
}

impl DirectionPolarity {
    /// Classify a change in count from the direction flag
    pub fn classify(self, counting_down: bool) -> Direction {
        match (self, counting_down) {
            (DirectionPolarity::Normal, false) | (DirectionPolarity::Inverted, true) => {
                Direction::Up
            }
            _ => Direction::Down,
        }
    }
}

/// Per-encoder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EncoderConfig {
    /// Idle time (ms) after the last detected motion before the stored
    /// direction goes back to `Static`
    pub dir_timeout_ms: u32,
    /// Direction flag interpretation
    pub polarity: DirectionPolarity,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            dir_timeout_ms: DEFAULT_DIR_TIMEOUT_MS,
            polarity: DirectionPolarity::Normal,
        }
    }
}

impl EncoderConfig {
    /// Create a config with the given direction timeout
    pub const fn new(dir_timeout_ms: u32) -> Self {
        Self {
            dir_timeout_ms,
            polarity: DirectionPolarity::Normal,
        }
    }

    /// Use a different direction flag polarity
    pub const fn with_polarity(self, polarity: DirectionPolarity) -> Self {
        Self { polarity, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EncoderConfig::default();
        assert_eq!(config.dir_timeout_ms, DEFAULT_DIR_TIMEOUT_MS);
        assert_eq!(config.polarity, DirectionPolarity::Normal);
    }

    #[test]
    fn test_builder() {
        let config = EncoderConfig::new(50).with_polarity(DirectionPolarity::Inverted);
        assert_eq!(config.dir_timeout_ms, 50);
        assert_eq!(config.polarity, DirectionPolarity::Inverted);
    }

    #[test]
    fn test_polarity_mapping() {
        assert_eq!(DirectionPolarity::Normal.classify(false), Direction::Up);
        assert_eq!(DirectionPolarity::Normal.classify(true), Direction::Down);
        assert_eq!(DirectionPolarity::Inverted.classify(false), Direction::Down);
        assert_eq!(DirectionPolarity::Inverted.classify(true), Direction::Up);
    }
}
