//! ID generation logic

use crate::config::{
    PROCESS_ID, PROCESS_MASK, PROCESS_SHIFT, SEQUENCE_MASK, TIMESTAMP_MASK, TIMESTAMP_SHIFT,
    WORKER_ID, WORKER_MASK, WORKER_SHIFT,
};

use super::time::{millis_since_epoch, Clock};
use super::Snowflake;

/// Fixed worker and process bits shared by every generated identifier
const NODE_PREFIX: u64 = ((WORKER_ID as u64 & WORKER_MASK) << WORKER_SHIFT)
    | ((PROCESS_ID as u64 & PROCESS_MASK) << PROCESS_SHIFT);

impl<C: Clock> Snowflake<C> {
    /// Generate a new snowflake in its decimal string form
    pub fn generate(&self) -> String {
        self.generate_raw().to_string()
    }

    /// Generate a new snowflake as a raw `u64`
    ///
    /// Never waits: once 4095 identifiers have been taken the sequence
    /// restarts at 0, even inside the same millisecond.
    #[inline]
    pub fn generate_raw(&self) -> u64 {
        let timestamp = millis_since_epoch(self.clock.now());
        let sequence = self.sequence.advance();
        assemble(timestamp, sequence)
    }
}

/// Pack a millisecond offset and a sequence value with the fixed node bits
#[inline(always)]
pub(crate) const fn assemble(timestamp: u64, sequence: u16) -> u64 {
    ((timestamp & TIMESTAMP_MASK) << TIMESTAMP_SHIFT)
        | NODE_PREFIX
        | (sequence as u64 & SEQUENCE_MASK)
}
