//! Sort Projection
//!
//! Chronological view over the shift log. The log itself is never reordered.

use shared::models::ShiftRecord;

/// Indices of `records` ordered by date, ties kept in insertion order
pub fn chronological_order(records: &[ShiftRecord]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..records.len()).collect();
    // sort_by_key is stable
    order.sort_by_key(|&i| records[i].date);
    order
}

/// Records ordered by date, ties kept in insertion order
pub fn chronological(records: &[ShiftRecord]) -> Vec<&ShiftRecord> {
    chronological_order(records)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}
