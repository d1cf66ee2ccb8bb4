//! Injectable "now" sources.

use anchor_lang::prelude::*;

use crate::constants::TICK_SECONDS;
use crate::error::VestooorError;

/// Supplies the evaluation instant (Unix seconds).
pub trait NowSource {
    fn now(&self) -> std::result::Result<i64, VestooorError>;
}

/// Cluster time from the `Clock` sysvar.
#[derive(Clone, Copy, Debug, Default)]
pub struct SysvarClock;

impl NowSource for SysvarClock {
    fn now(&self) -> std::result::Result<i64, VestooorError> {
        Clock::get()
            .map(|c| c.unix_timestamp)
            .map_err(|_| VestooorError::InvalidTimestamp)
    }
}

/// Always reports the same instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl NowSource for FixedClock {
    fn now(&self) -> std::result::Result<i64, VestooorError> {
        Ok(self.0)
    }
}

/// Seeded from an observed block timestamp, then advanced one tick at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickingClock {
    current: i64,
}

impl TickingClock {
    pub fn new(seed_ts: i64) -> Self {
        Self { current: seed_ts }
    }

    /// Advances by `TICK_SECONDS` and returns the new instant.
    pub fn tick(&mut self) -> std::result::Result<i64, VestooorError> {
        self.current = self
            .current
            .checked_add(TICK_SECONDS)
            .ok_or(VestooorError::MathOverflow)?;
        Ok(self.current)
    }

    /// Re-seeds from a fresher block timestamp.
    pub fn resync(&mut self, block_ts: i64) {
        self.current = block_ts;
    }
}

impl NowSource for TickingClock {
    fn now(&self) -> std::result::Result<i64, VestooorError> {
        Ok(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_is_fixed() {
        let clock = FixedClock(1_700_000_000);
        assert_eq!(clock.now().unwrap(), 1_700_000_000);
        assert_eq!(clock.now().unwrap(), 1_700_000_000);
    }

    #[test]
    fn ticking_clock_advances_and_resyncs() {
        let mut clock = TickingClock::new(100);
        assert_eq!(clock.now().unwrap(), 100);
        assert_eq!(clock.tick().unwrap(), 101);
        assert_eq!(clock.tick().unwrap(), 102);
        clock.resync(50);
        assert_eq!(clock.now().unwrap(), 50);
    }

    #[test]
    fn ticking_clock_overflow_is_an_error() {
        let mut clock = TickingClock::new(i64::MAX);
        assert!(matches!(clock.tick(), Err(VestooorError::MathOverflow)));
        assert_eq!(clock.now().unwrap(), i64::MAX);
    }
}
