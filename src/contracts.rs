//! Runtime contracts for the run-sequence invariants.
//!
//! Two layers, both cheap:
//!
//! 1. `check_*` functions use `debug_assert!` — early failure during
//!    development, zero cost in release builds. They guard the invariants
//!    every positional operation leans on.
//! 2. [`verify_well_formed`] is always-on and returns a structured
//!    [`WaveformViolation`] instead of panicking, for callers (and tests)
//!    that need to interrogate a sequence of unknown provenance — e.g. one
//!    produced by `repeat(0)`.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Check                  | Property                                        |
//! |------------------------|-------------------------------------------------|
//! | `check_monotone`       | cumulative end times strictly increase          |
//! | `check_store_bounds`   | `len <= capacity` after every reserve           |
//! | `verify_well_formed`   | both of the above plus duration accounting      |

use crate::signal::Signal;
use crate::types::TimedRun;
use std::fmt;

/// A well-formedness violation found by [`verify_well_formed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaveformViolation {
    /// `runs[index].end` does not exceed its predecessor's end time.
    NonMonotonicTime { index: usize, end: u64, previous: u64 },
    /// `runs[index]`'s duration does not match the gap between its end time
    /// and its predecessor's.
    DurationMismatch { index: usize, duration: u64, accounted: u64 },
}

impl fmt::Display for WaveformViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaveformViolation::NonMonotonicTime { index, end, previous } => {
                write!(f, "runs[{}].end {} <= runs[{}].end {}", index, end, index.wrapping_sub(1), previous)
            }
            WaveformViolation::DurationMismatch { index, duration, accounted } => {
                write!(f, "runs[{}] duration {} but end times account for {}", index, duration, accounted)
            }
        }
    }
}

impl std::error::Error for WaveformViolation {}

/// Check that cumulative end times strictly increase.
///
/// # Panics (debug builds only)
///
/// Panics on the first adjacent pair with `end[i] >= end[i+1]`, or a first
/// run whose end time is zero.
#[inline]
pub fn check_monotone(runs: &[TimedRun]) {
    if let Some(first) = runs.first() {
        debug_assert!(first.end > 0, "contract violation: runs[0].end == 0");
    }
    for pair in runs.windows(2) {
        debug_assert!(
            pair[0].end < pair[1].end,
            "contract violation: end times not strictly increasing ({} >= {})",
            pair[0].end,
            pair[1].end
        );
    }
}

/// Check the store bounds invariant after a capacity change.
#[inline]
pub fn check_store_bounds(len: usize, capacity: usize) {
    debug_assert!(
        len <= capacity,
        "contract violation: len {} > capacity {}",
        len,
        capacity
    );
}

/// Verify a sequence's invariants, reporting the first violation found.
///
/// Checks, in order along the sequence:
/// - strict monotonicity of cumulative end times (a zero-duration run
///   anywhere trips this, including the `repeat(0)` state);
/// - duration accounting: each run's duration equals the distance between
///   its end time and its predecessor's.
///
/// An empty sequence is trivially well-formed.
pub fn verify_well_formed(signal: &Signal) -> Result<(), WaveformViolation> {
    let runs = signal.runs();
    let mut previous: u64 = 0;
    for (index, timed) in runs.iter().enumerate() {
        if timed.end <= previous {
            return Err(WaveformViolation::NonMonotonicTime {
                index,
                end: timed.end,
                previous,
            });
        }
        let accounted = timed.end - previous;
        if timed.run.duration() != accounted {
            return Err(WaveformViolation::DurationMismatch {
                index,
                duration: timed.run.duration(),
                accounted,
            });
        }
        previous = timed.end;
    }
    Ok(())
}
