//! Cycling sequence counter
//!
//! Counts 0..=4094 and wraps to 0 once the stored value reaches `SEQUENCE_MAX`.

use std::sync::atomic::{AtomicU16, Ordering};

use tracing::trace;

use crate::config::SEQUENCE_MAX;

/// Per-generator sequence counter
///
/// Read, wrap and increment happen in a single atomic update, so concurrent
/// callers never observe the same value between two wraparounds.
#[derive(Debug, Default)]
pub struct Sequence {
    counter: AtomicU16,
}

impl Sequence {
    /// Create a counter starting at 0
    pub const fn new() -> Self {
        Self {
            counter: AtomicU16::new(0),
        }
    }

    /// Claim the next sequence value
    ///
    /// Returns the value to pack into the identifier and stores its successor.
    #[inline]
    pub fn advance(&self) -> u16 {
        let previous = match self.counter.fetch_update(
            Ordering::AcqRel,
            Ordering::Acquire,
            |current| Some(Self::wrap(current) + 1),
        ) {
            Ok(previous) | Err(previous) => previous,
        };

        if previous >= SEQUENCE_MAX {
            trace!(previous = previous, "sequence wrapped to 0");
        }
        Self::wrap(previous)
    }

    /// Value the next call to [`Sequence::advance`] will start from
    #[inline]
    pub fn current(&self) -> u16 {
        self.counter.load(Ordering::Acquire)
    }

    /// Put the counter back to 0
    pub fn reset(&self) {
        self.set(0);
    }

    /// Overwrite the stored counter value
    ///
    /// Values at or above `SEQUENCE_MAX` wrap to 0 on the next advance.
    pub fn set(&self, value: u16) {
        self.counter.store(value, Ordering::Release);
    }

    #[inline(always)]
    const fn wrap(value: u16) -> u16 {
        if value >= SEQUENCE_MAX {
            0
        } else {
            value
        }
    }
}
