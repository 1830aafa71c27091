//! Direction state and its transitions
//!
//! Every change to an encoder's stored direction is a function of the
//! current direction and an input: elapsed time, or a value being stepped.
//! The functions here return the next state and never touch hardware.

use crate::adjust::AdjustRange;

/// Direction of motion seen by the most recent poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// No motion detected (or the last motion has timed out)
    #[default]
    Static,
    /// Counter increased
    Up,
    /// Counter decreased
    Down,
}

impl Direction {
    /// Check if no motion is recorded
    pub fn is_static(&self) -> bool {
        matches!(self, Direction::Static)
    }

    /// Check if motion in either direction is recorded
    pub fn is_moving(&self) -> bool {
        !self.is_static()
    }

    /// Retire a moving direction once it has been idle for `period_ms`
    ///
    /// `elapsed_ms` is the time since the last detected motion, not since
    /// the last call.
    pub fn after_timeout(self, elapsed_ms: u32, period_ms: u32) -> Self {
        match self {
            Direction::Static => Direction::Static,
            _ if elapsed_ms >= period_ms => Direction::Static,
            moving => moving,
        }
    }

    /// Apply at most one step to `value` within `range`
    ///
    /// Returns the new value and the direction to store afterwards. Motion
    /// is consumed: `Up` and `Down` both transition to `Static`, however
    /// many counter ticks produced them.
    pub fn step(self, value: u32, range: &AdjustRange) -> (u32, Self) {
        match self {
            Direction::Static => (value, Direction::Static),
            Direction::Up => (range.increment(value), Direction::Static),
            Direction::Down => (range.decrement(value), Direction::Static),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjust::CycleMode;

    fn range(cycle: CycleMode) -> AdjustRange {
        AdjustRange::new(0, 10, cycle).unwrap()
    }

    #[test]
    fn test_static_never_times_out_into_motion() {
        assert_eq!(Direction::Static.after_timeout(0, 100), Direction::Static);
        assert_eq!(
            Direction::Static.after_timeout(u32::MAX, 100),
            Direction::Static
        );
    }

    #[test]
    fn test_timeout_boundary() {
        assert_eq!(Direction::Up.after_timeout(99, 100), Direction::Up);
        assert_eq!(Direction::Up.after_timeout(100, 100), Direction::Static);
        assert_eq!(Direction::Down.after_timeout(99, 100), Direction::Down);
        assert_eq!(Direction::Down.after_timeout(250, 100), Direction::Static);
    }

    #[test]
    fn test_zero_period_retires_immediately() {
        assert_eq!(Direction::Up.after_timeout(0, 0), Direction::Static);
    }

    #[test]
    fn test_step_static_keeps_value() {
        let r = range(CycleMode::On);
        assert_eq!(Direction::Static.step(5, &r), (5, Direction::Static));
    }

    #[test]
    fn test_step_consumes_motion() {
        let r = range(CycleMode::Off);
        assert_eq!(Direction::Up.step(5, &r), (6, Direction::Static));
        assert_eq!(Direction::Down.step(5, &r), (4, Direction::Static));
    }

    #[test]
    fn test_step_at_bounds() {
        let clamp = range(CycleMode::Off);
        assert_eq!(Direction::Up.step(10, &clamp).0, 10);
        assert_eq!(Direction::Down.step(0, &clamp).0, 0);

        let wrap = range(CycleMode::On);
        assert_eq!(Direction::Up.step(10, &wrap).0, 0);
        assert_eq!(Direction::Down.step(0, &wrap).0, 10);
    }

    #[test]
    fn test_moving_helpers() {
        assert!(Direction::Static.is_static());
        assert!(Direction::Up.is_moving());
        assert!(Direction::Down.is_moving());
    }
}
