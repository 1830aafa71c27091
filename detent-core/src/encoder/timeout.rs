//! Direction timeout
//!
//! A stored `Up`/`Down` only goes away when something retires it. This
//! must run on a steady cadence (every task tick), independent of whether
//! the encoder moves. The period counts from the last detected motion.

use detent_hal::{EncoderCounter, MillisClock};

use super::Encoder;

impl<C, K> Encoder<C, K>
where
    C: EncoderCounter,
    K: MillisClock,
{
    /// Reset the stored direction to `Static` after the idle period
    ///
    /// Tick arithmetic wraps, so the comparison stays valid across the
    /// clock rollover.
    pub fn apply_timeout(&mut self) {
        if self.direction.is_static() {
            return;
        }

        let elapsed = self.clock.elapsed_since(self.timeout_start_ms);
        self.direction = self
            .direction
            .after_timeout(elapsed, self.config.dir_timeout_ms);

        #[cfg(feature = "defmt")]
        if self.direction.is_static() {
            defmt::debug!("encoder idle for {} ms, direction cleared", elapsed);
        }
    }
}
