//! Backing storage for run sequences.
//!
//! [`RunStore`] is a contiguous buffer of [`TimedRun`] with a *logical*
//! capacity it manages itself, independent of whatever slack the backing
//! `Vec` happens to hold. All growth goes through one multiplicative policy:
//!
//! - capacity 0 grows to exactly the requested amount;
//! - otherwise the capacity is scaled by `ceil((requested + len) / capacity)`,
//!   so repeated appends reallocate O(log n) times rather than O(n).
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **BOUNDS**: `len() <= capacity()` at every public-method boundary.
//! 2. **POLICY**: capacity changes only in `reserve`, only per the formula
//!    above, and never shrinks.
//! 3. **LIVE PREFIX**: elements `0..len()` are always initialized; `Clone`
//!    copies exactly the live prefix while preserving logical capacity.

use crate::contracts;
use crate::error::{Result, SignalError};
use crate::types::{Level, Run, TimedRun};
use std::ops::{Index, IndexMut};

/// Growable contiguous storage of timed runs with an explicit growth policy.
#[derive(Debug)]
pub struct RunStore {
    items: Vec<TimedRun>,
    cap: usize,
}

impl RunStore {
    /// An empty store with zero capacity. The first `reserve` sizes it
    /// exactly to the request.
    pub fn new() -> Self {
        RunStore { items: Vec::new(), cap: 0 }
    }

    /// A store pre-sized to exactly `initial` slots.
    ///
    /// Zero is rejected: an intentionally empty store is [`RunStore::new`].
    pub fn with_capacity(initial: usize) -> Result<Self> {
        if initial == 0 {
            return Err(SignalError::ZeroCapacity);
        }
        Ok(RunStore { items: Vec::with_capacity(initial), cap: initial })
    }

    /// Number of runs in use.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no runs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Logical capacity in slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// The live runs as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[TimedRun] {
        &self.items
    }

    /// The last live run, if any.
    #[inline]
    pub fn last(&self) -> Option<&TimedRun> {
        self.items.last()
    }

    /// Iterate over the live runs.
    pub fn iter(&self) -> std::slice::Iter<'_, TimedRun> {
        self.items.iter()
    }

    /// Ensure room for `n` more runs beyond the current length.
    ///
    /// `n == 0` is rejected; callers that may legitimately have nothing to
    /// append are expected to skip the call (see `Signal::insert`).
    ///
    /// With capacity `c > 0` and length `s`, the new capacity is `c * m`
    /// where `m = ceil((n + s) / c)`; `m == 1` means the current allocation
    /// already suffices and nothing happens. With capacity 0 the new
    /// capacity is exactly `n`. Fails with [`SignalError::Overflow`] if the
    /// scaled capacity would not fit in `usize`.
    pub fn reserve(&mut self, n: usize) -> Result<()> {
        if n == 0 {
            return Err(SignalError::ZeroReserve);
        }
        if self.cap == 0 {
            self.cap = n;
            self.items.reserve_exact(n);
            return Ok(());
        }
        let needed = n.checked_add(self.items.len()).ok_or(SignalError::Overflow)?;
        let multiplier = needed.div_ceil(self.cap);
        if multiplier > 1 {
            self.cap = self.cap.checked_mul(multiplier).ok_or(SignalError::Overflow)?;
            self.items.reserve_exact(self.cap - self.items.len());
        }
        contracts::check_store_bounds(self.items.len(), self.cap);
        Ok(())
    }

    /// Append a run. Capacity must have been reserved beforehand.
    #[inline]
    pub fn push(&mut self, timed: TimedRun) {
        debug_assert!(
            self.items.len() < self.cap,
            "push past reserved capacity: len {} cap {}",
            self.items.len(),
            self.cap
        );
        self.items.push(timed);
    }

    /// Open a gap of `count` uninitialized-in-spirit slots at `at`, shifting
    /// everything from `at` onward to the right. The caller must overwrite
    /// every slot in the gap before the store is read again.
    pub fn open_gap(&mut self, at: usize, count: usize) -> Result<()> {
        debug_assert!(at <= self.items.len(), "gap start {} past len {}", at, self.items.len());
        self.reserve(count)?;
        let fill = TimedRun { run: Run::new(Level::LOW, 0), end: 0 };
        self.items.splice(at..at, std::iter::repeat(fill).take(count));
        Ok(())
    }
}

impl Default for RunStore {
    fn default() -> Self {
        RunStore::new()
    }
}

impl Clone for RunStore {
    /// Deep copy of the live prefix into a fresh buffer of the same logical
    /// capacity.
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.cap.max(self.items.len()));
        items.extend_from_slice(&self.items);
        RunStore { items, cap: self.cap }
    }
}

impl Index<usize> for RunStore {
    type Output = TimedRun;

    fn index(&self, index: usize) -> &TimedRun {
        &self.items[index]
    }
}

impl IndexMut<usize> for RunStore {
    fn index_mut(&mut self, index: usize) -> &mut TimedRun {
        &mut self.items[index]
    }
}

impl<'a> IntoIterator for &'a RunStore {
    type Item = &'a TimedRun;
    type IntoIter = std::slice::Iter<'a, TimedRun>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
