//! Snowflake generator
//!
//! Split into modules for testability:
//! - `sequence` - Cycling per-generator counter
//! - `time` - Wall-clock source
//! - `generate` - Bit packing and ID generation

pub(crate) mod generate;
pub(crate) mod sequence;
pub(crate) mod time;

use sequence::Sequence;
use time::{Clock, SystemClock};

/// Snowflake generator with worker ID 1 and process ID 0
///
/// Each instance owns its own sequence counter. The crate-level
/// [`generate`](crate::generate) function uses one shared instance.
#[derive(Debug, Default)]
pub struct Snowflake<C: Clock = SystemClock> {
    pub(crate) sequence: Sequence,
    pub(crate) clock: C,
}

impl Snowflake<SystemClock> {
    /// Create a generator backed by the system clock
    pub const fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> Snowflake<C> {
    /// Create a generator reading time from `clock`
    pub const fn with_clock(clock: C) -> Self {
        Self {
            sequence: Sequence::new(),
            clock,
        }
    }

    /// Sequence counter of this generator
    #[inline]
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Clock of this generator
    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
