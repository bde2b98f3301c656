//! Split-and-insert behavior, including the cumulative-time repair.

use crate::common::{make_signal, read_bits};
use sigrun::{verify_well_formed, Signal, SignalError};

/// Oracle: splice at the bit-string level, then compare structures position
/// by position.
fn expected(base: &str, patch: &str, position: usize) -> String {
    format!("{}{}{}", &base[..position], patch, &base[position..])
}

#[test]
fn insert_mid_run_splits_the_containing_run() {
    let mut base = make_signal("001110");
    let patch = make_signal("00");
    base.insert(&patch, 3).unwrap();

    assert_eq!(read_bits(&base), expected("001110", "00", 3));
    // The level-1 run was cut in two around the insertion; nothing merged.
    assert_eq!(base.run_count(), 5);
    assert_eq!(verify_well_formed(&base), Ok(()));
}

#[test]
fn insert_on_a_run_boundary_does_not_split() {
    let mut base = make_signal("001110");
    let patch = make_signal("1");
    base.insert(&patch, 2).unwrap();

    assert_eq!(read_bits(&base), "0011110");
    // Gap insertion only: 3 original runs plus the 1 inserted.
    assert_eq!(base.run_count(), 4);
}

#[test]
fn insert_at_position_zero_prepends() {
    let mut base = make_signal("1110");
    let patch = make_signal("00");
    base.insert(&patch, 0).unwrap();
    assert_eq!(read_bits(&base), "001110");
}

#[test]
fn insert_into_the_last_position_splits_the_final_run() {
    let mut base = make_signal("0011");
    let patch = make_signal("0");
    base.insert(&patch, 3).unwrap();
    assert_eq!(read_bits(&base), "00101");
}

#[test]
fn tail_runs_shift_by_exactly_the_inserted_length() {
    let mut base = make_signal("0101010");
    let patch = make_signal("1100");
    base.insert(&patch, 1).unwrap();

    assert_eq!(base.total_len(), 11);
    assert_eq!(read_bits(&base), expected("0101010", "1100", 1));
    // The tail fragment created by the split must not be shifted twice.
    assert_eq!(verify_well_formed(&base), Ok(()));
}

#[test]
fn insert_of_a_multi_run_patch_keeps_the_patch_order() {
    let mut base = make_signal("000000");
    let patch = make_signal("1011");
    base.insert(&patch, 4).unwrap();
    assert_eq!(read_bits(&base), "0000101100");
}

#[test]
fn insert_past_the_end_is_out_of_range() {
    let mut base = make_signal("0011");
    let patch = make_signal("1");
    assert_eq!(
        base.insert(&patch, 4),
        Err(SignalError::OutOfRange { position: 4, len: 4 })
    );
    // Same for an empty receiver (total length 0).
    let mut empty = Signal::new();
    assert_eq!(
        empty.insert(&patch, 0),
        Err(SignalError::OutOfRange { position: 0, len: 0 })
    );
}

#[test]
fn inserting_an_empty_patch_is_a_noop() {
    // Guards the internal reserve-zero path: nothing to insert, nothing
    // changes, no error.
    let mut base = make_signal("0011");
    base.insert(&Signal::new(), 2).unwrap();
    assert_eq!(base.to_bit_string(), "0011");
    assert_eq!(base.run_count(), 2);
}

#[test]
fn insert_may_leave_adjacent_same_level_runs() {
    // Inserting 1s into a 1-run: accepted behavior, runs stay unmerged.
    let mut base = make_signal("0110");
    let patch = make_signal("11");
    base.insert(&patch, 2).unwrap();
    assert_eq!(read_bits(&base), "011110");
    // Split head, inserted run, tail fragment: three level-1 runs in a row.
    assert_eq!(base.run_count(), 5);
    assert_eq!(verify_well_formed(&base), Ok(()));
}
