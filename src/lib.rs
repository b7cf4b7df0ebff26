//! # snowflake-codec
//!
//! Generate and deconstruct Discord-style snowflakes: 64-bit identifiers
//! made of a 42-bit millisecond timestamp since 2015-01-01T00:00:00.000Z,
//! a 5-bit worker ID (always 1), a 5-bit process ID (always 0) and a
//! 12-bit cycling sequence.
//!
//! ```
//! let id = snowflake_codec::generate();
//! let parts = snowflake_codec::deconstruct(&id).unwrap();
//! assert_eq!(parts.worker_id, 1);
//! assert_eq!(parts.process_id, 0);
//! assert_eq!(parts.binary.len(), 64);
//! ```

#![forbid(unsafe_code)]

pub mod binary;
pub mod config;
mod deconstructed;
mod error;
mod generator;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{EPOCH_MS, PROCESS_ID, SEQUENCE_MAX, WORKER_ID};
pub use deconstructed::{deconstruct, DeconstructedSnowflake};
pub use error::SnowflakeError;
pub use generator::sequence::Sequence;
pub use generator::time::{Clock, SystemClock};
pub use generator::Snowflake;

/// Process-wide generator behind [`generate`]
static GENERATOR: Snowflake = Snowflake::new();

/// Generate a snowflake from the process-wide generator
pub fn generate() -> String {
    GENERATOR.generate()
}

/// Sequence value the process-wide generator will start from next
///
/// Read-only: the shared counter cannot be reset from outside the crate.
pub fn current_sequence() -> u16 {
    GENERATOR.sequence().current()
}
