//! Run sequences: the public waveform abstraction.
//!
//! A [`Signal`] owns an ordered [`RunStore`] of timed runs and answers every
//! positional question by binary-searching the cumulative end times. That
//! lower-bound search is the primitive everything else builds on: reads,
//! splitting, insertion.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **MONOTONE**: `runs[i].end < runs[i+1].end` for every adjacent pair.
//!    Zero-duration runs (reachable through `repeat(0)`) break this; they are
//!    a documented precondition violation for positional operations, caught
//!    by `contracts::verify_well_formed`.
//! 2. **ACCOUNTED**: `runs[i].end - runs[i].start()` equals the run's
//!    duration; the sequence's total bit length is the last run's `end`.
//! 3. **ALTERNATION IS NOT ENFORCED**: after `insert` or concatenation,
//!    adjacent runs may share a level. Accepted behavior, not a bug.

use crate::contracts;
use crate::error::{Result, SignalError};
use crate::store::RunStore;
use crate::types::{Level, Run, TimedRun};
use std::fmt;
use std::ops::{AddAssign, Mul, Not};
use std::str::FromStr;

/// A binary waveform stored as run-length encoded pulses.
#[derive(Debug, Clone, Default)]
pub struct Signal {
    runs: RunStore,
}

impl Signal {
    /// An empty sequence: no runs, total length 0.
    pub fn new() -> Self {
        Signal { runs: RunStore::new() }
    }

    /// A sequence holding a single run, with the level validated.
    pub fn single(level: u8, duration: u64) -> Result<Self> {
        let run = Run::from_parts(level, duration)?;
        let mut runs = RunStore::new();
        runs.reserve(1)?;
        runs.push(TimedRun { run, end: run.duration() });
        Ok(Signal { runs })
    }

    /// Parse the leading maximal `[01]` prefix of `pattern` into runs.
    ///
    /// Lenient by design: everything after the first non-binary character is
    /// ignored. A pattern with no leading `0`/`1` at all fails with
    /// [`SignalError::EmptyPattern`] — the same rejection the strict
    /// single-run parser [`Run::leading`] gives an empty string.
    pub fn parse(pattern: &str) -> Result<Self> {
        let prefix: &str = pattern
            .char_indices()
            .find(|&(_, c)| c != '0' && c != '1')
            .map_or(pattern, |(i, _)| &pattern[..i]);
        if prefix.is_empty() {
            return Err(SignalError::EmptyPattern);
        }

        let bytes = prefix.as_bytes();
        let run_count = 1 + bytes.windows(2).filter(|w| w[0] != w[1]).count();

        let mut runs = RunStore::with_capacity(run_count)?;
        let mut end: u64 = 0;
        let mut i = 0;
        while i < bytes.len() {
            let digit = bytes[i];
            let mut j = i + 1;
            while j < bytes.len() && bytes[j] == digit {
                j += 1;
            }
            let duration = (j - i) as u64;
            let level = if digit == b'1' { Level::HIGH } else { Level::LOW };
            end += duration;
            runs.push(TimedRun { run: Run::new(level, duration), end });
            i = j;
        }

        contracts::check_monotone(runs.as_slice());
        Ok(Signal { runs })
    }

    /// Number of runs.
    #[inline]
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Whether the sequence holds no runs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Total bit length: the last run's cumulative end time, 0 if empty.
    #[inline]
    pub fn total_len(&self) -> u64 {
        self.runs.last().map_or(0, |timed| timed.end)
    }

    /// The timed runs as a slice.
    #[inline]
    pub fn runs(&self) -> &[TimedRun] {
        self.runs.as_slice()
    }

    /// Smallest index whose cumulative end time is `>= target`.
    ///
    /// Classic lower-bound halving; `target` must be within
    /// `1..=total_len()` for the result to name a real run.
    fn lower_bound(&self, target: u64) -> usize {
        let mut lo = 0usize;
        let mut hi = self.runs.len();
        while lo < hi {
            let mid = (lo + hi) / 2;
            if self.runs[mid].end < target {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        lo
    }

    /// The level at a 0-indexed bit position.
    ///
    /// Fails with [`SignalError::OutOfRange`] on an empty sequence or a
    /// position at or past `total_len()`.
    pub fn level_at(&self, position: u64) -> Result<Level> {
        let len = self.total_len();
        if position >= len {
            return Err(SignalError::OutOfRange { position, len });
        }
        let index = self.lower_bound(position + 1);
        Ok(self.runs[index].run.level())
    }

    /// Flip every run's level in place.
    pub fn invert(&mut self) {
        for i in 0..self.runs.len() {
            self.runs[i].run.invert();
        }
    }

    /// A copy with every duration and cumulative time scaled by `multiplier`.
    ///
    /// `multiplier == 0` does NOT produce an empty sequence: the run count is
    /// preserved and every duration and end time becomes zero. Such a
    /// sequence fails `contracts::verify_well_formed` and must not be fed to
    /// positional operations; the behavior is kept because callers rely on
    /// the run structure surviving the scale.
    pub fn repeat(&self, multiplier: u64) -> Result<Self> {
        let mut scaled = self.runs.clone();
        for i in 0..scaled.len() {
            let timed = scaled[i];
            let duration = timed
                .run
                .duration()
                .checked_mul(multiplier)
                .ok_or(SignalError::Overflow)?;
            let end = timed.end.checked_mul(multiplier).ok_or(SignalError::Overflow)?;
            scaled[i] = TimedRun { run: Run::new(timed.run.level(), duration), end };
        }
        Ok(Signal { runs: scaled })
    }

    /// Append `other`, shifting its cumulative times past this sequence.
    ///
    /// Builds a fresh store sized for both sequences, moves this sequence's
    /// runs in unchanged, then copies `other`'s runs with their end times
    /// shifted by this sequence's total length. Boundary runs sharing a
    /// level stay separate runs.
    pub fn concat(&mut self, other: &Signal) -> Result<()> {
        if other.is_empty() {
            return Ok(());
        }
        let base = self.total_len();
        let mut merged = RunStore::with_capacity(self.runs.len() + other.runs.len())?;
        for timed in &self.runs {
            merged.push(*timed);
        }
        for timed in &other.runs {
            let end = timed.end.checked_add(base).ok_or(SignalError::Overflow)?;
            merged.push(TimedRun { run: timed.run, end });
        }
        contracts::check_monotone(merged.as_slice());
        self.runs = merged;
        Ok(())
    }

    /// Splice `other` into this sequence at a 0-indexed bit position.
    ///
    /// Two phases, deliberately separate so the cumulative-time repair stays
    /// verifiable on its own:
    ///
    /// 1. [`Self::split`] cuts the run containing the position (or merely
    ///    opens a gap when the position already sits on a run boundary).
    /// 2. The gap is filled with `other`'s runs shifted to the insertion
    ///    point, then every run after the inserted block — the split's tail
    ///    fragment included — has the inserted duration added to its end.
    ///
    /// Inserting an empty sequence is a no-op; the position is not checked
    /// in that case because nothing would change either way.
    pub fn insert(&mut self, other: &Signal, position: u64) -> Result<()> {
        let count = other.run_count();
        if count == 0 {
            return Ok(());
        }
        let len = self.total_len();
        if position >= len {
            return Err(SignalError::OutOfRange { position, len });
        }

        let index = self.lower_bound(position + 1);
        let did_split = self.split(index, position, count)?;
        let at = if did_split { index + 1 } else { index };

        for (offset, timed) in other.runs().iter().enumerate() {
            self.runs[at + offset] = TimedRun { run: timed.run, end: timed.end + position };
        }

        let inserted = other.total_len();
        for i in (at + count)..self.runs.len() {
            self.runs[i].end += inserted;
        }

        contracts::check_monotone(self.runs.as_slice());
        Ok(())
    }

    /// Cut `runs[index]` at bit `position` to make room for `count` runs.
    ///
    /// If `position` is exactly the run's start boundary, no cut is needed:
    /// a gap of `count` slots opens at `index` and `false` comes back.
    /// Otherwise the run is shortened to the bits before the position
    /// (`remains`), a tail fragment holding the bits after it (`shift`) lands
    /// at `index + count + 1`, the gap between them has `count` slots, and
    /// `true` comes back. The fragment keeps the pre-insertion end time; the
    /// caller's repair pass shifts it together with the rest of the tail.
    fn split(&mut self, index: usize, position: u64, count: usize) -> Result<bool> {
        let start = if index == 0 { 0 } else { self.runs[index - 1].end };
        if position == start {
            self.runs.open_gap(index, count)?;
            return Ok(false);
        }

        let remains = position - start;
        let shift = self.runs[index].run.duration() - remains;
        let level = self.runs[index].run.level();
        let old_end = self.runs[index].end;

        self.runs.open_gap(index + 1, count + 1)?;
        self.runs[index] = TimedRun { run: Run::new(level, remains), end: position };
        self.runs[index + count + 1] = TimedRun { run: Run::new(level, shift), end: old_end };
        Ok(true)
    }

    /// Expand back to a plain `0`/`1` string.
    ///
    /// `Signal::parse(s.to_bit_string())` reproduces the same level/duration
    /// structure for any well-formed sequence built from a bit string.
    pub fn to_bit_string(&self) -> String {
        let mut out = String::with_capacity(self.total_len() as usize);
        for timed in &self.runs {
            let digit = timed.run.level().digit();
            for _ in 0..timed.run.duration() {
                out.push(digit);
            }
        }
        out
    }
}

impl FromStr for Signal {
    type Err = SignalError;

    fn from_str(s: &str) -> Result<Self> {
        Signal::parse(s)
    }
}

impl fmt::Display for Signal {
    /// Glyph waveform: each run as its level glyphs, with a transition
    /// marker between consecutive runs chosen by the level being *left* —
    /// `/` leaving level 0, `\` leaving level 1. No trailing marker.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut previous: Option<Level> = None;
        for timed in &self.runs {
            if let Some(level) = previous {
                fmt::Write::write_char(f, level.edge_glyph())?;
            }
            write!(f, "{}", timed.run)?;
            previous = Some(timed.run.level());
        }
        Ok(())
    }
}

impl AddAssign<&Signal> for Signal {
    /// Concatenation. Delegates to [`Signal::concat`].
    ///
    /// # Panics
    ///
    /// Panics if the shifted cumulative times overflow `u64`; use
    /// [`Signal::concat`] to handle that case as an error.
    fn add_assign(&mut self, other: &Signal) {
        if let Err(err) = self.concat(other) {
            panic!("signal concatenation failed: {}", err);
        }
    }
}

impl Mul<u64> for &Signal {
    type Output = Signal;

    /// Repetition scaling. Delegates to [`Signal::repeat`].
    ///
    /// # Panics
    ///
    /// Panics if a scaled duration or end time overflows `u64`; use
    /// [`Signal::repeat`] to handle that case as an error.
    fn mul(self, multiplier: u64) -> Signal {
        match self.repeat(multiplier) {
            Ok(scaled) => scaled,
            Err(err) => panic!("signal repetition failed: {}", err),
        }
    }
}

impl Not for Signal {
    type Output = Signal;

    /// The inverted waveform (every run's level flipped).
    fn not(mut self) -> Signal {
        self.invert();
        self
    }
}
