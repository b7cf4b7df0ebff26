//! Fixed bit layout of a snowflake
//!
//! ```text
//! 64                                          22     17     12          0
//!  000000111011000111100001101001000101000000  00001  00000  000000000000
//!       number of ms since the epoch          worker  pid    increment
//! ```

/// 2015-01-01T00:00:00.000Z in Unix milliseconds
pub const EPOCH_MS: u64 = 1420070400000;

pub const WORKER_ID: u8 = 1;
pub const PROCESS_ID: u8 = 0;

/// Counter value at which the sequence wraps back to 0
pub const SEQUENCE_MAX: u16 = 4095;

pub const TOTAL_BITS: u32 = 64;
pub const TIMESTAMP_BITS: u32 = 42;
pub const WORKER_BITS: u32 = 5;
pub const PROCESS_BITS: u32 = 5;
pub const SEQUENCE_BITS: u32 = 12;

pub const PROCESS_SHIFT: u32 = SEQUENCE_BITS;
pub const WORKER_SHIFT: u32 = PROCESS_SHIFT + PROCESS_BITS;
pub const TIMESTAMP_SHIFT: u32 = WORKER_SHIFT + WORKER_BITS;

pub const TIMESTAMP_MASK: u64 = (1u64 << TIMESTAMP_BITS) - 1;
pub const WORKER_MASK: u64 = (1u64 << WORKER_BITS) - 1;
pub const PROCESS_MASK: u64 = (1u64 << PROCESS_BITS) - 1;
pub const SEQUENCE_MASK: u64 = (1u64 << SEQUENCE_BITS) - 1;
