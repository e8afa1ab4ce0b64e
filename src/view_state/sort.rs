//! Stable sorting and adjacent-row navigation.

use super::cell::CellValue;
use super::record::TableRecord;

/// Sort direction for the active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Flip the direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Stable-sort `records` by one column.
///
/// Ascending order puts missing values last; descending is the exact
/// comparator reversal, so missing values lead. Records with equal keys
/// keep their relative input order either way.
pub fn apply_sort<R: TableRecord>(
    records: &[R],
    column: R::Column,
    direction: SortDirection,
) -> Vec<R> {
    let mut sorted: Vec<R> = records.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = a.cell(column).compare(&b.cell(column));
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

/// Which neighbor of the current record to move to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Previous,
    Next,
}

/// The record before or after `current_id` in an already filtered and
/// sorted sequence.
///
/// Returns `None` at either boundary, and when `current_id` is not in the
/// sequence (it may have just been filtered out).
pub fn navigate_adjacent<R: TableRecord>(
    ordered: &[R],
    current_id: u64,
    direction: NavDirection,
) -> Option<&R> {
    let position = ordered
        .iter()
        .position(|record| record.record_id() == current_id)?;
    match direction {
        NavDirection::Previous => position.checked_sub(1).map(|i| &ordered[i]),
        NavDirection::Next => ordered.get(position + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_state::filter::MatchPolicy;
    use crate::view_state::record::Column;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum ProbeColumn {
        Label,
        Score,
    }

    impl Column for ProbeColumn {
        fn match_policy(self) -> MatchPolicy {
            match self {
                ProbeColumn::Label => MatchPolicy::Exact,
                ProbeColumn::Score => MatchPolicy::AmountBand,
            }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Probe {
        id: u64,
        label: Option<&'static str>,
        score: f64,
    }

    impl TableRecord for Probe {
        type Column = ProbeColumn;

        fn record_id(&self) -> u64 {
            self.id
        }

        fn cell(&self, column: ProbeColumn) -> CellValue {
            match column {
                ProbeColumn::Label => self
                    .label
                    .map(|l| CellValue::Text(l.to_string()))
                    .unwrap_or(CellValue::Missing),
                ProbeColumn::Score => CellValue::from_number(self.score),
            }
        }
    }

    fn probe(id: u64, label: Option<&'static str>, score: f64) -> Probe {
        Probe { id, label, score }
    }

    fn ids(records: &[Probe]) -> Vec<u64> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_sort_ascending_by_label() {
        let records = vec![
            probe(1, Some("Pending"), 0.0),
            probe(2, Some("Active"), 0.0),
            probe(3, Some("Inactive"), 0.0),
        ];
        let sorted = apply_sort(&records, ProbeColumn::Label, SortDirection::Ascending);
        assert_eq!(ids(&sorted), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_descending_reverses_distinct_keys() {
        let records = vec![
            probe(1, Some("Pending"), 0.0),
            probe(2, Some("Active"), 0.0),
            probe(3, Some("Inactive"), 0.0),
        ];
        let sorted = apply_sort(&records, ProbeColumn::Label, SortDirection::Descending);
        assert_eq!(ids(&sorted), vec![1, 3, 2]);
    }

    #[test]
    fn test_sort_is_stable_for_tied_keys() {
        let records = vec![
            probe(10, Some("Same"), 1.0),
            probe(20, Some("Same"), 2.0),
            probe(30, Some("Same"), 3.0),
        ];
        let ascending = apply_sort(&records, ProbeColumn::Label, SortDirection::Ascending);
        assert_eq!(ids(&ascending), vec![10, 20, 30]);
        // Tied keys keep input order under either direction.
        let descending = apply_sort(&records, ProbeColumn::Label, SortDirection::Descending);
        assert_eq!(ids(&descending), vec![10, 20, 30]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let records = vec![
            probe(1, Some("b"), 0.0),
            probe(2, Some("a"), 0.0),
            probe(3, Some("c"), 0.0),
        ];
        let once = apply_sort(&records, ProbeColumn::Label, SortDirection::Ascending);
        let twice = apply_sort(&once, ProbeColumn::Label, SortDirection::Ascending);
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn test_missing_values_sort_last_ascending_first_descending() {
        let records = vec![
            probe(1, None, 0.0),
            probe(2, Some("Alpha"), 0.0),
            probe(3, Some("Beta"), 0.0),
        ];
        let ascending = apply_sort(&records, ProbeColumn::Label, SortDirection::Ascending);
        assert_eq!(ids(&ascending), vec![2, 3, 1]);
        let descending = apply_sort(&records, ProbeColumn::Label, SortDirection::Descending);
        assert_eq!(ids(&descending), vec![1, 3, 2]);
    }

    #[test]
    fn test_numeric_sort() {
        let records = vec![
            probe(1, None, 500.0),
            probe(2, None, 20000.0),
            probe(3, None, 5000.0),
        ];
        let sorted = apply_sort(&records, ProbeColumn::Score, SortDirection::Ascending);
        assert_eq!(ids(&sorted), vec![1, 3, 2]);
    }

    #[test]
    fn test_navigate_adjacent_interior() {
        let records = vec![
            probe(1, Some("a"), 0.0),
            probe(2, Some("b"), 0.0),
            probe(3, Some("c"), 0.0),
        ];
        let previous = navigate_adjacent(&records, 2, NavDirection::Previous).unwrap();
        assert_eq!(previous.id, 1);
        let next = navigate_adjacent(&records, 2, NavDirection::Next).unwrap();
        assert_eq!(next.id, 3);
    }

    #[test]
    fn test_navigate_adjacent_boundaries() {
        let records = vec![probe(1, Some("a"), 0.0), probe(2, Some("b"), 0.0)];
        assert!(navigate_adjacent(&records, 1, NavDirection::Previous).is_none());
        assert!(navigate_adjacent(&records, 2, NavDirection::Next).is_none());
    }

    #[test]
    fn test_navigate_adjacent_unknown_id() {
        let records = vec![probe(1, Some("a"), 0.0)];
        assert!(navigate_adjacent(&records, 99, NavDirection::Next).is_none());
        let empty: Vec<Probe> = Vec::new();
        assert!(navigate_adjacent(&empty, 1, NavDirection::Previous).is_none());
    }
}
