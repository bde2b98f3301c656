//! Run-length encoded binary signal sequences with positional indexing.
//!
//! This crate models a binary waveform as alternating runs of 0s and 1s and
//! answers positional questions (what level is bit `p`?) in O(log n) by
//! binary-searching cumulative end times, rather than expanding the bits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  types.rs   │────▶│   store.rs   │────▶│  signal.rs   │
//! │ (Level, Run,│     │  (RunStore,  │     │ (Signal:     │
//! │  TimedRun)  │     │growth policy)│     │ parse, probe,│
//! └─────────────┘     └──────────────┘     │split, insert)│
//!        │                   │             └──────────────┘
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                    contracts.rs                      │
//! │   (debug-mode invariant checks, verify_well_formed)  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use sigrun::Signal;
//!
//! let mut signal = Signal::parse("001110")?;
//! assert_eq!(signal.level_at(3)?.get(), 1);
//!
//! let patch = Signal::parse("10")?;
//! signal.insert(&patch, 2)?;
//! assert_eq!(signal.to_bit_string(), "00101110");
//! # Ok::<(), sigrun::SignalError>(())
//! ```
//!
//! # Invariants
//!
//! A well-formed sequence has strictly increasing cumulative end times —
//! that ordering is what makes the binary search sound. The one reachable
//! exception is documented on [`Signal::repeat`]: scaling by zero keeps the
//! run structure with zero durations. Use [`contracts::verify_well_formed`]
//! before positional operations when the provenance of a sequence is not
//! yours.

// Module declarations
pub mod contracts;
mod error;
mod signal;
mod store;
pub mod testing;
mod types;

// Re-exports for public API
pub use contracts::{verify_well_formed, WaveformViolation};
pub use error::{Result, SignalError};
pub use signal::Signal;
pub use store::RunStore;
pub use types::{Level, Run, TimedRun};
pub use types::{FALLING_GLYPH, HIGH_GLYPH, LOW_GLYPH, RISING_GLYPH};
