use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use tracing::debug;

use crate::binary::to_binary64;
use crate::config::{
    EPOCH_MS, PROCESS_MASK, PROCESS_SHIFT, SEQUENCE_MASK, TIMESTAMP_MASK, TIMESTAMP_SHIFT,
    WORKER_MASK, WORKER_SHIFT,
};
use crate::error::SnowflakeError;

const TIMESTAMP_END: usize = 42;
const WORKER_END: usize = 47;
const PROCESS_END: usize = 52;

/// Fields recovered from a snowflake
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeconstructedSnowflake {
    /// Instant encoded in the timestamp field
    pub date: DateTime<Utc>,
    pub worker_id: u8,
    pub process_id: u8,
    /// Sequence value
    pub increment: u16,
    /// All 64 bits, zero-padded
    pub binary: String,
}

impl DeconstructedSnowflake {
    /// Decompose a raw identifier
    ///
    /// Every `u64` decomposes; field values are taken as their bits encode them.
    pub fn from_id(id: u64) -> Self {
        // At most 2^42 - 1 + EPOCH_MS, well inside the i64 and chrono ranges
        let millis = ((id >> TIMESTAMP_SHIFT) & TIMESTAMP_MASK) + EPOCH_MS;
        let date = DateTime::<Utc>::UNIX_EPOCH + TimeDelta::milliseconds(millis as i64);

        Self {
            date,
            worker_id: ((id >> WORKER_SHIFT) & WORKER_MASK) as u8,
            process_id: ((id >> PROCESS_SHIFT) & PROCESS_MASK) as u8,
            increment: (id & SEQUENCE_MASK) as u16,
            binary: to_binary64(id),
        }
    }

    /// Absolute timestamp in Unix milliseconds
    #[inline]
    pub fn timestamp(&self) -> i64 {
        self.date.timestamp_millis()
    }

    /// Bits 63–22: milliseconds since the epoch
    pub fn timestamp_bits(&self) -> &str {
        &self.binary[..TIMESTAMP_END]
    }

    /// Bits 21–17
    pub fn worker_bits(&self) -> &str {
        &self.binary[TIMESTAMP_END..WORKER_END]
    }

    /// Bits 16–12
    pub fn process_bits(&self) -> &str {
        &self.binary[WORKER_END..PROCESS_END]
    }

    /// Bits 11–0
    pub fn increment_bits(&self) -> &str {
        &self.binary[PROCESS_END..]
    }
}

impl FromStr for DeconstructedSnowflake {
    type Err = SnowflakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.parse::<u64>().map_err(|source| {
            debug!(input = s, error = %source, "rejected snowflake");
            SnowflakeError::Parse {
                input: s.to_string(),
                source,
            }
        })?;
        Ok(Self::from_id(id))
    }
}

impl fmt::Display for DeconstructedSnowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} worker={} process={} increment={}",
            self.date.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.worker_id,
            self.process_id,
            self.increment
        )
    }
}

/// Parse a decimal snowflake and decompose it
pub fn deconstruct(snowflake: &str) -> Result<DeconstructedSnowflake, SnowflakeError> {
    snowflake.parse()
}
