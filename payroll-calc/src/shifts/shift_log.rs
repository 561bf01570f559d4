//! Shift Log
//!
//! Ordered, append-only record list. Records are added and removed
//! wholesale; there is no in-place edit.

use chrono::NaiveDate;
use shared::models::{ShiftId, ShiftRecord, ShiftType};
use shared::util::snowflake_id;

/// Shifts entered for the current pay period, in insertion order
#[derive(Debug, Clone, Default)]
pub struct ShiftLog {
    records: Vec<ShiftRecord>,
    /// Highest id handed out so far (survives removals)
    last_id: Option<ShiftId>,
}

impl ShiftLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creation-time id, bumped past the previous one on collision
    fn next_id(&mut self) -> ShiftId {
        let candidate = snowflake_id();
        let id = match self.last_id {
            Some(last) if candidate <= last => last + 1,
            _ => candidate,
        };
        self.last_id = Some(id);
        id
    }

    /// Append a new record with a fresh id
    pub fn append(
        &mut self,
        date: NaiveDate,
        hours: impl Into<String>,
        shift_type: ShiftType,
    ) -> &ShiftRecord {
        let record = ShiftRecord {
            id: self.next_id(),
            date,
            hours: hours.into(),
            shift_type,
        };
        tracing::debug!(
            id = record.id,
            date = %record.date,
            hours = %record.hours,
            shift_type = %record.shift_type,
            "Shift appended"
        );
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// Remove the record with the given id; unknown ids are ignored
    pub fn remove(&mut self, id: ShiftId) -> Option<ShiftRecord> {
        let index = self.records.iter().position(|r| r.id == id)?;
        let removed = self.records.remove(index);
        tracing::debug!(id, "Shift removed");
        Some(removed)
    }

    pub fn get(&self, id: ShiftId) -> Option<&ShiftRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records in insertion order
    pub fn records(&self) -> &[ShiftRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShiftRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a ShiftLog {
    type Item = &'a ShiftRecord;
    type IntoIter = std::slice::Iter<'a, ShiftRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut log = ShiftLog::new();
        log.append(date("2024-01-12"), "10", ShiftType::NightB);
        log.append(date("2024-01-10"), "8", ShiftType::Day);

        assert_eq!(log.len(), 2);
        assert_eq!(log.records()[0].date, date("2024-01-12"));
        assert_eq!(log.records()[1].hours, "8");
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut log = ShiftLog::new();
        let ids: Vec<ShiftId> = (0..500)
            .map(|_| log.append(date("2024-01-10"), "8", ShiftType::Day).id)
            .collect();

        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_remove_by_id() {
        let mut log = ShiftLog::new();
        let first = log.append(date("2024-01-10"), "8", ShiftType::Day).id;
        let second = log.append(date("2024-01-11"), "6", ShiftType::NightA).id;

        let removed = log.remove(first).unwrap();
        assert_eq!(removed.id, first);
        assert_eq!(log.len(), 1);
        assert!(log.get(first).is_none());
        assert!(log.get(second).is_some());
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut log = ShiftLog::new();
        let id = log.append(date("2024-01-10"), "8", ShiftType::Day).id;

        assert!(log.remove(id + 12345).is_none());
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut log = ShiftLog::new();
        let a = log.append(date("2024-01-10"), "8", ShiftType::Day).id;
        log.remove(a);
        let b = log.append(date("2024-01-10"), "8", ShiftType::Day).id;
        assert!(b > a);
    }
}
