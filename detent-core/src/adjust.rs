//! Bounds policy for adjusted values
//!
//! An [`AdjustRange`] describes the inclusive `[min, max]` window a value
//! may take and what happens when a step would leave it.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Behaviour at the bounds of an [`AdjustRange`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CycleMode {
    /// Clamp at `min`/`max`
    #[default]
    Off,
    /// Wrap to the opposite bound (`max -> min` going up, `min -> max` going down)
    On,
}

impl From<bool> for CycleMode {
    fn from(cycle: bool) -> Self {
        if cycle {
            CycleMode::On
        } else {
            CycleMode::Off
        }
    }
}

/// Error from building an [`AdjustRange`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RangeError {
    /// Lower bound is above the upper bound
    Inverted { min: u32, max: u32 },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RangeError::Inverted { min, max } => {
                write!(f, "range minimum {} is above maximum {}", min, max)
            }
        }
    }
}

/// Inclusive value window with a cycle policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdjustRange {
    min: u32,
    max: u32,
    cycle: CycleMode,
}

impl AdjustRange {
    /// Create a validated range
    ///
    /// # Errors
    /// * [`RangeError::Inverted`] if `min > max`
    pub fn new(min: u32, max: u32, cycle: CycleMode) -> Result<Self, RangeError> {
        if min > max {
            return Err(RangeError::Inverted { min, max });
        }
        Ok(Self { min, max, cycle })
    }

    /// Build a range without checking `min <= max`
    ///
    /// Inverted ranges still step deterministically, they just do not
    /// describe a meaningful window.
    pub(crate) const fn unchecked(min: u32, max: u32, cycle: CycleMode) -> Self {
        Self { min, max, cycle }
    }

    /// Lower bound (inclusive)
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Upper bound (inclusive)
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Bound policy
    pub fn cycle(&self) -> CycleMode {
        self.cycle
    }

    /// Check if `value` lies inside the window
    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }

    /// One step up, clamping or wrapping at `max`
    pub fn increment(&self, value: u32) -> u32 {
        if value < self.max {
            value + 1
        } else {
            match self.cycle {
                CycleMode::On => self.min,
                CycleMode::Off => self.max,
            }
        }
    }

    /// One step down, clamping or wrapping at `min`
    pub fn decrement(&self, value: u32) -> u32 {
        if value > self.min {
            value - 1
        } else {
            match self.cycle {
                CycleMode::On => self.max,
                CycleMode::Off => self.min,
            }
        }
    }
}
