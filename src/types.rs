//! The building blocks of a run-length encoded signal.
//!
//! A waveform is stored as runs, not bits: each [`Run`] is a maximal span of
//! one constant [`Level`] with a duration in bit positions, and a [`TimedRun`]
//! annotates a run with the cumulative time at which it ends. The cumulative
//! times are what every positional operation binary-searches.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Level**: always 0 or 1. `Level` makes other values unrepresentable;
//!   fallible entry points are `Level::new` and the serde `TryFrom`.
//!
//! - **TimedRun**: `end` is the 1-indexed bit position of the run's last bit,
//!   so across a well-formed sequence `runs[i].end < runs[i+1].end`. A run of
//!   duration 0 breaks this strict ordering and with it binary search —
//!   see `contracts::verify_well_formed` for the checked form.

use crate::error::{Result, SignalError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Glyph drawn for each bit of a level-1 run.
pub const HIGH_GLYPH: char = '‾';
/// Glyph drawn for each bit of a level-0 run.
pub const LOW_GLYPH: char = '_';
/// Transition marker emitted when leaving a level-0 run.
pub const RISING_GLYPH: char = '/';
/// Transition marker emitted when leaving a level-1 run.
pub const FALLING_GLYPH: char = '\\';

/// A validated binary level.
///
/// Prevents accidentally treating an arbitrary integer as a signal level.
/// Use [`Level::new`] for runtime-validated construction; the constants
/// [`Level::LOW`] and [`Level::HIGH`] cover the common literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(transparent)]
pub struct Level(u8);

impl Level {
    /// Level 0.
    pub const LOW: Level = Level(0);
    /// Level 1.
    pub const HIGH: Level = Level(1);

    /// Create a level, validating it is 0 or 1.
    #[inline]
    pub fn new(value: u8) -> Result<Self> {
        match value {
            0 | 1 => Ok(Level(value)),
            found => Err(SignalError::InvalidLevel { found }),
        }
    }

    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// The opposite level (XOR with 1). Applying twice is the identity.
    #[inline]
    pub fn inverted(self) -> Self {
        Level(self.0 ^ 1)
    }

    /// Glyph drawn for each bit held at this level.
    #[inline]
    pub fn glyph(self) -> char {
        if self.0 == 1 { HIGH_GLYPH } else { LOW_GLYPH }
    }

    /// Transition marker drawn when a waveform leaves this level:
    /// rising edge out of 0, falling edge out of 1.
    #[inline]
    pub fn edge_glyph(self) -> char {
        if self.0 == 1 { FALLING_GLYPH } else { RISING_GLYPH }
    }

    /// The digit character for bit-string expansion.
    #[inline]
    pub fn digit(self) -> char {
        if self.0 == 1 { '1' } else { '0' }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> u8 {
        level.0
    }
}

impl TryFrom<u8> for Level {
    type Error = SignalError;

    fn try_from(value: u8) -> Result<Self> {
        Level::new(value)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single run: one constant level held for `duration` bit positions.
///
/// Duration 0 is accepted at construction (repetition by zero produces such
/// runs) but violates the strict ordering a sequence relies on; positional
/// operations treat it as a precondition violation, not a checked error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    level: Level,
    duration: u64,
}

impl Run {
    /// Create a run from an already-validated level.
    #[inline]
    pub fn new(level: Level, duration: u64) -> Self {
        Run { level, duration }
    }

    /// Create a run from a raw level value, validating it.
    pub fn from_parts(level: u8, duration: u64) -> Result<Self> {
        Ok(Run::new(Level::new(level)?, duration))
    }

    /// Parse a pattern that is exactly one run: a maximal span of identical
    /// `0`/`1` characters with nothing after it.
    ///
    /// This is the strict counterpart of the lenient sequence parser
    /// ([`crate::Signal::parse`]): where the sequence parser ignores trailing
    /// characters after the leading binary prefix, this constructor rejects
    /// the whole string as soon as anything follows the leading run. The
    /// asymmetry is intentional and both behaviors are pinned by tests.
    pub fn leading(pattern: &str) -> Result<Self> {
        let mut chars = pattern.chars();
        let first = match chars.next() {
            Some(c @ ('0' | '1')) => c,
            _ => return Err(SignalError::EmptyPattern),
        };
        let mut duration: u64 = 1;
        for c in chars {
            if c == first {
                duration += 1;
            } else {
                return Err(SignalError::MixedRun { found: c });
            }
        }
        let level = if first == '1' { Level::HIGH } else { Level::LOW };
        Ok(Run::new(level, duration))
    }

    /// The level held throughout this run.
    #[inline]
    pub fn level(&self) -> Level {
        self.level
    }

    /// The run length in bit positions.
    #[inline]
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Flip the level in place.
    #[inline]
    pub fn invert(&mut self) {
        self.level = self.level.inverted();
    }

    /// Lengthen the run by `delta` bit positions.
    pub fn grow(&mut self, delta: u64) -> Result<()> {
        self.duration = self.duration.checked_add(delta).ok_or(SignalError::Overflow)?;
        Ok(())
    }

    /// Shorten the run by `delta` bit positions.
    pub fn shrink(&mut self, delta: u64) -> Result<()> {
        if delta > self.duration {
            return Err(SignalError::Underflow { duration: self.duration, delta });
        }
        self.duration -= delta;
        Ok(())
    }
}

impl fmt::Display for Run {
    /// `duration` copies of the level glyph, no separator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = self.level.glyph();
        for _ in 0..self.duration {
            fmt::Write::write_char(f, glyph)?;
        }
        Ok(())
    }
}

/// A run annotated with the cumulative time at which it ends.
///
/// `end` equals the sum of this run's duration and all preceding durations in
/// the owning sequence — the 1-indexed bit position of the run's last bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedRun {
    /// The run itself.
    pub run: Run,
    /// Cumulative end time, strictly increasing across a well-formed sequence.
    pub end: u64,
}

impl TimedRun {
    /// Bit position of this run's first bit (0-indexed).
    #[inline]
    pub fn start(&self) -> u64 {
        self.end - self.run.duration()
    }
}
