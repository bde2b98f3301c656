//! Error taxonomy for signal construction and positional access.
//!
//! Every fallible operation in this crate returns [`SignalError`]. Errors are
//! raised synchronously at the point of violation and propagate to the
//! immediate caller; nothing in the core retries or recovers. A caller either
//! validates preconditions up front or matches on the variant it cares about.

use std::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SignalError>;

/// Error type for all signal operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    /// A level other than 0 or 1 was supplied.
    InvalidLevel { found: u8 },
    /// A pattern did not start with a binary digit (includes the empty string).
    EmptyPattern,
    /// A single-run pattern contained a character after its leading run.
    /// Only [`crate::Run::leading`] raises this; the sequence parser is
    /// deliberately lenient about trailing characters.
    MixedRun { found: char },
    /// A bit position outside `[0, len)`.
    OutOfRange { position: u64, len: u64 },
    /// Arithmetic exceeded the integer range (duration growth, repetition,
    /// or capacity scaling).
    Overflow,
    /// A duration decrease larger than the current duration.
    Underflow { duration: u64, delta: u64 },
    /// A run store was constructed with zero capacity.
    ZeroCapacity,
    /// A run store was asked to reserve zero additional slots.
    ZeroReserve,
}

impl fmt::Display for SignalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalError::InvalidLevel { found } => {
                write!(f, "Level must be either 0 or 1 (got {})", found)
            }
            SignalError::EmptyPattern => {
                write!(f, "pattern has no leading binary digit")
            }
            SignalError::MixedRun { found } => {
                write!(f, "single-run pattern continues past its leading run ('{}')", found)
            }
            SignalError::OutOfRange { position, len } => {
                write!(f, "position {} outside [0, {})", position, len)
            }
            SignalError::Overflow => write!(f, "value exceeds the integer range"),
            SignalError::Underflow { duration, delta } => {
                write!(f, "cannot shrink a run of duration {} by {}", duration, delta)
            }
            SignalError::ZeroCapacity => write!(f, "initial capacity must be positive"),
            SignalError::ZeroReserve => write!(f, "reserve request must be positive"),
        }
    }
}

impl std::error::Error for SignalError {}
