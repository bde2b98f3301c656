//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::signal::Signal;
use crate::types::{Level, Run};

/// Parse a known-good bit pattern into a signal.
///
/// This is the canonical implementation used across all tests.
pub fn make_signal(pattern: &str) -> Signal {
    Signal::parse(pattern).expect("test pattern must have a leading binary prefix")
}

/// A run with a raw level value, validated.
pub fn make_run(level: u8, duration: u64) -> Run {
    Run::from_parts(level, duration).expect("test level must be 0 or 1")
}

/// A single-run signal.
pub fn make_pulse(level: u8, duration: u64) -> Signal {
    Signal::single(level, duration).expect("test level must be 0 or 1")
}

/// Read every bit position back out of a signal.
///
/// Panics on out-of-range access, so only call it with `0..total_len()`
/// positions in well-formed sequences.
pub fn read_bits(signal: &Signal) -> String {
    (0..signal.total_len())
        .map(|position| {
            let level = signal
                .level_at(position)
                .expect("position within total_len must be readable");
            if level == Level::HIGH { '1' } else { '0' }
        })
        .collect()
}
