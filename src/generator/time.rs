//! Wall-clock source for snowflake generation

use chrono::{DateTime, Utc};

use crate::config::EPOCH_MS;

/// Source of the current instant
pub trait Clock: Send + Sync {
    /// Returns the current time of the clock
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the operating system's wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Milliseconds elapsed between the epoch and `now`
///
/// An instant before the epoch wraps around instead of panicking.
#[inline(always)]
pub fn millis_since_epoch(now: DateTime<Utc>) -> u64 {
    (now.timestamp_millis() as u64).wrapping_sub(EPOCH_MS)
}
