//! Positional reads, inversion, concatenation, repetition, and rendering.

use crate::common::{make_pulse, make_signal, read_bits, PINNED_PATTERNS};
use sigrun::{verify_well_formed, Level, Signal, SignalError};

#[test]
fn every_pinned_pattern_reads_back_bit_for_bit() {
    for pattern in PINNED_PATTERNS {
        let signal = make_signal(pattern);
        assert_eq!(read_bits(&signal), *pattern, "pattern {:?}", pattern);
    }
}

#[test]
fn reads_past_the_end_are_out_of_range() {
    let signal = make_signal("001110");
    assert_eq!(
        signal.level_at(6),
        Err(SignalError::OutOfRange { position: 6, len: 6 })
    );
    assert_eq!(
        signal.level_at(u64::MAX),
        Err(SignalError::OutOfRange { position: u64::MAX, len: 6 })
    );
}

#[test]
fn a_ten_bit_pulse_reads_high_across_its_span() {
    let signal = make_pulse(1, 10);
    assert_eq!(signal.level_at(0).unwrap(), Level::HIGH);
    assert_eq!(signal.level_at(9).unwrap(), Level::HIGH);
    assert_eq!(
        signal.level_at(10),
        Err(SignalError::OutOfRange { position: 10, len: 10 })
    );
}

#[test]
fn single_rejects_levels_other_than_zero_and_one() {
    assert_eq!(
        Signal::single(2, 5).unwrap_err(),
        SignalError::InvalidLevel { found: 2 }
    );
}

#[test]
fn concatenation_length_is_additive() {
    let mut left = make_signal("0011");
    let right = make_signal("1100");
    let before = left.total_len() + right.total_len();
    left += &right;
    assert_eq!(left.total_len(), before);
    assert_eq!(read_bits(&left), "00111100");
}

#[test]
fn concatenating_onto_an_empty_signal_copies_the_other() {
    let mut empty = Signal::new();
    let other = make_signal("101");
    empty.concat(&other).unwrap();
    assert_eq!(empty.to_bit_string(), "101");
}

#[test]
fn concatenating_an_empty_signal_is_a_noop() {
    let mut signal = make_signal("110");
    signal.concat(&Signal::new()).unwrap();
    assert_eq!(signal.to_bit_string(), "110");
}

#[test]
fn double_inversion_is_the_identity_at_every_position() {
    for pattern in PINNED_PATTERNS {
        let mut signal = make_signal(pattern);
        signal.invert();
        signal.invert();
        assert_eq!(read_bits(&signal), *pattern, "pattern {:?}", pattern);
    }
}

#[test]
fn repetition_scales_durations_and_end_times() {
    let signal = make_signal("0110");
    let tripled = signal.repeat(3).unwrap();
    assert_eq!(tripled.run_count(), 3);
    assert_eq!(tripled.total_len(), 12);
    assert_eq!(tripled.to_bit_string(), "000111111000");
    assert_eq!(verify_well_formed(&tripled), Ok(()));

    // The operator form is the same scaling.
    let doubled = &signal * 2;
    assert_eq!(doubled.to_bit_string(), "00111100");
}

#[test]
fn repetition_by_zero_keeps_zero_duration_runs() {
    // Known quirk, asserted on purpose: scaling by zero does not empty the
    // sequence, it zeroes every duration while keeping the run structure.
    let zeroed = make_signal("0110").repeat(0).unwrap();
    assert_eq!(zeroed.run_count(), 3);
    assert_eq!(zeroed.total_len(), 0);
    for timed in zeroed.runs() {
        assert_eq!(timed.run.duration(), 0);
        assert_eq!(timed.end, 0);
    }
    // The zeroed state is detectable before any positional use.
    assert!(verify_well_formed(&zeroed).is_err());
    // And positional reads refuse it outright (total length is zero).
    assert_eq!(
        zeroed.level_at(0),
        Err(SignalError::OutOfRange { position: 0, len: 0 })
    );
}

#[test]
fn repetition_overflow_is_an_error() {
    let signal = make_pulse(1, u64::MAX / 2 + 1);
    assert_eq!(signal.repeat(2).unwrap_err(), SignalError::Overflow);
}

#[test]
fn rendering_uses_edge_markers_between_runs_only() {
    assert_eq!(make_signal("000111").to_string(), "___/‾‾‾");
    assert_eq!(make_signal("111000").to_string(), "‾‾‾\\___");
    assert_eq!(make_signal("0101").to_string(), "_/‾\\_/‾");
    // Single run: no marker at either end.
    assert_eq!(make_signal("1111").to_string(), "‾‾‾‾");
}
