//! Encoder counter abstractions
//!
//! A timer peripheral running in encoder (quadrature decode) mode exposes a
//! free-running count register and a direction flag. Decoding happens in
//! hardware; this trait only gives access to the results.

/// Counter peripheral configured in encoder mode
///
/// Implementations should handle the actual register access for the
/// specific chip. All methods are expected to complete in a few cycles and
/// never block.
pub trait EncoderCounter {
    /// Read the current value of the count register
    fn count(&self) -> u16;

    /// Load the count register with a new value
    ///
    /// The register's own width is the only constraint on `value`.
    fn set_count(&mut self, value: u16);

    /// Check the hardware direction flag
    ///
    /// Returns `true` when the peripheral most recently counted down
    /// (DIR bit set), `false` when it most recently counted up.
    fn is_counting_down(&self) -> bool;

    /// Check if the peripheral most recently counted up
    fn is_counting_up(&self) -> bool {
        !self.is_counting_down()
    }
}

// Exclusive borrows of a counter are counters too, so an encoder can either
// own its peripheral or hold it for a limited scope.
impl<T: EncoderCounter + ?Sized> EncoderCounter for &mut T {
    fn count(&self) -> u16 {
        (**self).count()
    }

    fn set_count(&mut self, value: u16) {
        (**self).set_count(value)
    }

    fn is_counting_down(&self) -> bool {
        (**self).is_counting_down()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RegisterCounter {
        cnt: u16,
        dir: bool,
    }

    impl EncoderCounter for RegisterCounter {
        fn count(&self) -> u16 {
            self.cnt
        }

        fn set_count(&mut self, value: u16) {
            self.cnt = value;
        }

        fn is_counting_down(&self) -> bool {
            self.dir
        }
    }

    fn load<C: EncoderCounter>(mut counter: C, value: u16) -> u16 {
        counter.set_count(value);
        counter.count()
    }

    #[test]
    fn test_borrowed_counter_writes_through() {
        let mut counter = RegisterCounter { cnt: 0, dir: false };
        assert_eq!(load(&mut counter, 1234), 1234);
        assert_eq!(counter.count(), 1234);
        assert!(counter.is_counting_up());
    }

    #[test]
    fn test_direction_helpers() {
        let counter = RegisterCounter { cnt: 0, dir: true };
        assert!(counter.is_counting_down());
        assert!(!counter.is_counting_up());
    }
}
